use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Entity already exists: {entity_type} - {details}")]
    AlreadyExists {
        entity_type: String,
        details: String,
    },

    #[error("Entity not found: {entity_type} - {details}")]
    NotFound {
        entity_type: String,
        details: String,
    },

    #[error("Concurrent modification detected: {entity_type}")]
    ConcurrencyError { entity_type: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl CommandError {
    pub fn app_user_not_found(id: &str) -> Self {
        CommandError::NotFound {
            entity_type: "AppUser".to_string(),
            details: format!("id: {}", id),
        }
    }

    pub fn app_user_already_exists(id: &str) -> Self {
        CommandError::AlreadyExists {
            entity_type: "AppUser".to_string(),
            details: format!("id: {}", id),
        }
    }
}
