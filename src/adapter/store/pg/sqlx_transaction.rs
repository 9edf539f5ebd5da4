use crate::core::domain::transaction::{ToSql, TransactionError, TransactionWrapper};
use async_trait::async_trait;
use sqlx::{Postgres, Transaction};

// SQLSTATE deadlock_detected and serialization_failure.
const CONCURRENCY_CODES: [&str; 2] = ["40P01", "40001"];

fn is_concurrency_conflict(code: Option<&str>) -> bool {
    code.is_some_and(|code| CONCURRENCY_CODES.contains(&code))
}

pub struct SqlxTransaction<'t> {
    transaction: Transaction<'t, Postgres>,
}

impl<'a> SqlxTransaction<'a> {
    pub fn new(transaction: Transaction<'a, Postgres>) -> Self {
        Self { transaction }
    }
}

#[async_trait]
impl<'t> TransactionWrapper for SqlxTransaction<'t> {
    async fn execute(
        &mut self,
        query: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> Result<u64, TransactionError> {
        let mut sqlx_query = sqlx::query(query);

        for param in params {
            if let Some(value) = param.as_i32() {
                sqlx_query = sqlx_query.bind(value);
            } else if let Some(value) = param.as_string() {
                sqlx_query = sqlx_query.bind(value);
            } else if let Some(value) = param.as_nullable_string() {
                sqlx_query = sqlx_query.bind(value);
            } else {
                return Err(TransactionError::BindError(format!(
                    "Unsupported parameter type: {:?}",
                    param
                )));
            }
        }

        let result = sqlx_query
            .execute(&mut *self.transaction)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => {
                    TransactionError::UniqueViolation(db.message().to_string())
                }
                Some(db) if is_concurrency_conflict(db.code().as_deref()) => {
                    TransactionError::ConcurrencyConflict(db.message().to_string())
                }
                _ => TransactionError::ExecutionError(format!(
                    "Failed to execute query: {:?}, error: {:?}",
                    query, e
                )),
            })?;
        Ok(result.rows_affected())
    }

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError> {
        self.transaction
            .rollback()
            .await
            .map_err(|e| TransactionError::RollbackError(e.to_string()))
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        self.transaction.commit().await.map_err(|e| {
            TransactionError::CommitError(format!("Failed to commit transaction: {:?}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_deadlock_and_serialization_codes_are_conflicts() {
        assert!(is_concurrency_conflict(Some("40P01")));
        assert!(is_concurrency_conflict(Some("40001")));
        assert!(!is_concurrency_conflict(Some("23505")));
        assert!(!is_concurrency_conflict(None));
    }
}
