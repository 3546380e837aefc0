//! Storefront CLI

use std::io;

use anyhow::Result;
use tracing::info;

use storefront::{
    cart::Cart,
    catalog::Catalog,
    config::{Command, Config},
    logging,
    receipt::{Receipt, write_catalog},
};

/// Storefront CLI entry point
pub fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    logging::init(&config.logging)?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::storefront()?,
    };

    info!(products = catalog.len(), currency = catalog.currency().iso_alpha_code, "loaded catalog");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match config.command {
        Command::Products => write_catalog(&mut handle, &catalog)?,
        Command::Cart { ops } => {
            let mut cart = Cart::new(catalog.currency());

            for op in ops {
                op.apply(&mut cart, &catalog)?;
            }

            Receipt::from_cart(&cart)?.write_to(&mut handle)?;
        }
    }

    Ok(())
}
