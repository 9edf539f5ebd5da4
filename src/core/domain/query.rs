use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Failed to fetch {entity_type}: {details}")]
    FetchError { entity_type: String, details: String },
}

impl QueryError {
    pub fn app_user_fetch(details: impl Into<String>) -> Self {
        QueryError::FetchError {
            entity_type: "AppUser".to_string(),
            details: details.into(),
        }
    }
}
