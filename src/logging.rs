//! Logging subscriber initialisation.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::logging::{LogFormat, LoggingConfig};

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured log level is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global tracing subscriber. Logs go to stderr so they never mix
/// with rendered tables on stdout.
///
/// # Errors
///
/// Returns a [`LoggingError`] if the log level does not parse or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    match config.log_format {
        LogFormat::Compact => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(true),
        ),
        LogFormat::Json => init_with_layer(
            config,
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true),
        ),
    }
}

/// `--log-level` already falls back to `RUST_LOG`, so the filter reads only the config.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(&config.log_level)?)
}

fn init_with_layer<L>(config: &LoggingConfig, fmt_layer: L) -> Result<(), LoggingError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(config)?)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::*;

    fn logging_config(log_level: &str) -> LoggingConfig {
        LoggingConfig {
            log_level: log_level.to_string(),
            log_format: LogFormat::Compact,
        }
    }

    #[test]
    fn filter_uses_configured_level() -> Result<(), LoggingError> {
        let filter = build_env_filter(&logging_config("error"))?;

        assert_eq!(
            <EnvFilter as Layer<Registry>>::max_level_hint(&filter),
            Some(LevelFilter::ERROR)
        );

        Ok(())
    }

    #[test]
    fn second_init_fails() {
        let config = logging_config("debug");

        let first = init(&config);
        let second = init(&config);

        assert!(first.is_ok(), "first init should install the subscriber");
        assert!(matches!(second, Err(LoggingError::TracingSubscriber(_))));
    }
}
