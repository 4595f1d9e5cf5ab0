// External Crate Imports
use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use tracing_subscriber::EnvFilter;

// Public API ==========================================================================================================

/// Installs the global log subscriber. `RUST_LOG` takes precedence over the configured `log_level`
pub fn init(log_level: &str) -> Result<()> {
    let env_filter = filter(log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| eyre!("failed to install the log subscriber: {error}"))
}

// Private Helper Code =================================================================================================

fn filter(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(log_level)
            .wrap_err_with(|| format!("`{log_level}` isn't a valid log level or filter"))
    })
}

// Unit Tests ==========================================================================================================
