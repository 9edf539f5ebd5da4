use tracing_subscriber::EnvFilter;

use crate::error::ApplicationError;

/// Installs the global subscriber; `RUST_LOG` overrides the `info` default.
pub fn init(json: bool) -> Result<(), ApplicationError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
    .map_err(|e| ApplicationError::LoggingError(e.to_string()))
}
