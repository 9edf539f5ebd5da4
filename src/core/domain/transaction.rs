use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait TransactionWrapper: Send + Sync {
    /// Runs a statement and returns the number of affected rows.
    async fn execute(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<u64, TransactionError>;
    async fn rollback(self: Box<Self>) -> Result<(), TransactionError>;
    async fn commit(self: Box<Self>) -> Result<(), TransactionError>;
}

pub trait ToSql: Send + Sync + std::fmt::Debug {
    fn as_i32(&self) -> Option<i32> {
        None
    }
    fn as_string(&self) -> Option<String> {
        None
    }
    // Outer None means "not a nullable text parameter".
    fn as_nullable_string(&self) -> Option<Option<String>> {
        None
    }
}

impl ToSql for i32 {
    fn as_i32(&self) -> Option<i32> {
        Some(*self)
    }
}

impl ToSql for String {
    fn as_string(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ToSql for Option<String> {
    fn as_nullable_string(&self) -> Option<Option<String>> {
        Some(self.clone())
    }
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Failed to execute query: {0}")]
    ExecutionError(String),
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("Concurrent transaction conflict: {0}")]
    ConcurrencyConflict(String),
    #[error("Failed to commit transaction: {0}")]
    CommitError(String),
    #[error("Failed to rollback transaction: {0}")]
    RollbackError(String),
    #[error("Parameter binding error: {0}")]
    BindError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_expose_only_their_own_kind() {
        let age: Box<dyn ToSql> = Box::new(30);
        assert_eq!(age.as_i32(), Some(30));
        assert_eq!(age.as_string(), None);

        let middle: Box<dyn ToSql> = Box::new(None::<String>);
        assert_eq!(middle.as_nullable_string(), Some(None));
        assert_eq!(middle.as_string(), None);
    }
}
