use thiserror::Error;

use crate::adapter::init::AppInitializerError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to initialize database: {0}")]
    DatabaseInitError(String),
    #[error("Failed to initialize application state: {0}")]
    InitializationError(String),
    #[error("Failed to start server: {0}")]
    ServerError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Failed to install log subscriber: {0}")]
    LoggingError(String),
}

impl From<AppInitializerError> for ApplicationError {
    fn from(error: AppInitializerError) -> Self {
        match error {
            AppInitializerError::DatabaseInitError(e) => ApplicationError::DatabaseInitError(e),
            e => ApplicationError::InitializationError(e.to_string()),
        }
    }
}
