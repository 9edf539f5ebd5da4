use thiserror::Error;

use crate::core::domain::command::CommandError;
use crate::core::domain::query::QueryError;
use crate::core::domain::transaction_manager::TransactionManagerError;
use crate::core::domain::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppUserError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error("AppUser not found: {id}")]
    NotFound { id: String },

    #[error("AppUser: {id} already exists")]
    Conflict { id: String },

    #[error(transparent)]
    CommandError(#[from] CommandError),

    #[error(transparent)]
    QueryError(#[from] QueryError),

    #[error(transparent)]
    TransactionError(#[from] TransactionManagerError),
}

impl AppUserError {
    /// Lifts the expected command outcomes of a write on `id` out of the
    /// transaction error chain.
    pub fn from_write(error: TransactionManagerError, id: &str) -> Self {
        let command_error = match &error {
            TransactionManagerError::OperationError(e) => e.command_error(),
            _ => None,
        };
        match command_error {
            Some(CommandError::AlreadyExists { .. }) => AppUserError::Conflict {
                id: id.to_string(),
            },
            Some(CommandError::NotFound { .. }) => AppUserError::NotFound { id: id.to_string() },
            _ => AppUserError::TransactionError(error),
        }
    }
}
