//! Command line configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{commands::CartCommand, config::logging::LoggingConfig};

pub mod logging;

/// Storefront configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart", long_about = None)]
pub struct Config {
    /// YAML catalog fixture; the built-in storefront catalog is used when omitted
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Storefront subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalog
    Products,

    /// Apply cart commands in order and print the resulting cart
    Cart {
        /// Commands such as `add:1`, `remove:2` or `qty:1=3`
        #[arg(allow_hyphen_values = true)]
        ops: Vec<CartCommand>,
    },
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{config::logging::LogFormat, products::ProductId};

    use super::*;

    #[test]
    fn parses_cart_commands() -> TestResult {
        let config = Config::try_parse_from(["storefront", "cart", "add:1", "qty:1=-2"])?;

        match config.command {
            Command::Cart { ops } => assert_eq!(
                ops,
                vec![
                    CartCommand::Add(ProductId::new(1)),
                    CartCommand::Quantity(ProductId::new(1), -2),
                ]
            ),
            Command::Products => panic!("expected cart command"),
        }

        Ok(())
    }

    #[test]
    fn parses_global_options() -> TestResult {
        let config = Config::try_parse_from([
            "storefront",
            "--catalog",
            "fixtures/storefront.yaml",
            "--log-format",
            "json",
            "products",
        ])?;

        assert_eq!(config.catalog, Some(PathBuf::from("fixtures/storefront.yaml")));
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(matches!(config.command, Command::Products));

        Ok(())
    }

    #[test]
    fn rejects_bad_cart_command() {
        let result = Config::try_parse_from(["storefront", "cart", "buy:1"]);

        assert!(result.is_err());
    }
}
