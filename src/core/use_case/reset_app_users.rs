use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::core::domain::entity::app_user::AppUserCommand;
use crate::core::domain::transaction::TransactionWrapper;
use crate::core::domain::transaction_manager::TransactionManager;
use crate::core::domain::transaction_operation::{
    BoxedTransactionOperation, TransactionOperationError,
};
use crate::core::port::error::AppUserError;
use crate::core::port::reset_app_users::ResetAppUsersInputBoundary;

pub struct DeleteAllAppUsersOperation {
    repository: Arc<dyn AppUserCommand>,
}

#[async_trait]
impl BoxedTransactionOperation for DeleteAllAppUsersOperation {
    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<(), TransactionOperationError> {
        let deleted = self.repository.delete_all(transaction).await?;
        info!(deleted, "Deleted all AppUsers");
        Ok(())
    }
}

/// Wipes the table. Only wired to the reset-on-start switch.
pub struct ResetAppUsersUseCase {
    repository: Arc<dyn AppUserCommand>,
    transaction_manager: Arc<dyn TransactionManager>,
}

impl ResetAppUsersUseCase {
    pub fn new(
        repository: Arc<dyn AppUserCommand>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            repository,
            transaction_manager,
        }
    }
}

#[async_trait]
impl ResetAppUsersInputBoundary for ResetAppUsersUseCase {
    async fn execute(&self) -> Result<(), AppUserError> {
        let operation = Box::new(DeleteAllAppUsersOperation {
            repository: self.repository.clone(),
        });
        self.transaction_manager.execute(operation).await?;
        Ok(())
    }
}
