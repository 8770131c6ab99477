//! Structured logging setup

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install the global JSON tracing subscriber.
///
/// `service.log_level` accepts a plain level or any `EnvFilter` directive
/// (`info,bookstore_service=debug`). An unparsable value falls back to `info`.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| {
        eprintln!(
            "invalid log level {:?}, falling back to info",
            config.service.log_level
        );
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Tracing(e.to_string()))?;

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        "Tracing initialized"
    );

    Ok(())
}

/// Flush and stop tracing
pub fn shutdown_tracing() {
    tracing::info!("Tracing shutdown complete");
}
