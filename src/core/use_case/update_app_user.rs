use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::core::domain::entity::app_user::{AppUser, AppUserCommand, AppUserQuery};
use crate::core::domain::transaction::TransactionWrapper;
use crate::core::domain::transaction_manager::TransactionManager;
use crate::core::domain::transaction_operation::{
    BoxedTransactionOperation, TransactionOperationError,
};
use crate::core::domain::validation::{validate_async, NoExtraCheck};
use crate::core::port::error::AppUserError;
use crate::core::port::update_app_user::{UpdateAppUserInput, UpdateAppUserInputBoundary};

pub struct UpdateAppUserOperation {
    app_user: AppUser,
    repository: Arc<dyn AppUserCommand>,
}

impl UpdateAppUserOperation {
    pub fn new(app_user: AppUser, repository: Arc<dyn AppUserCommand>) -> Self {
        Self {
            app_user,
            repository,
        }
    }
}

#[async_trait]
impl BoxedTransactionOperation for UpdateAppUserOperation {
    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<(), TransactionOperationError> {
        self.repository
            .update(transaction, self.app_user.clone())
            .await?;
        Ok(())
    }
}

pub struct UpdateAppUserUseCase {
    repository: Arc<dyn AppUserCommand>,
    query: Arc<dyn AppUserQuery>,
    transaction_manager: Arc<dyn TransactionManager>,
}

impl UpdateAppUserUseCase {
    pub fn new(
        repository: Arc<dyn AppUserCommand>,
        query: Arc<dyn AppUserQuery>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            repository,
            query,
            transaction_manager,
        }
    }
}

#[async_trait]
impl UpdateAppUserInputBoundary for UpdateAppUserUseCase {
    async fn execute(&self, input: UpdateAppUserInput) -> Result<(), AppUserError> {
        let UpdateAppUserInput { id, body } = input;
        if !self.query.exists(&id).await? {
            return Err(AppUserError::NotFound { id });
        }

        // The id in the path wins over the one in the body.
        let mut candidate = body?;
        candidate.id = Some(id.clone());
        let candidate = validate_async(candidate, &NoExtraCheck).await?;
        let app_user = AppUser::try_from(candidate)?;

        let operation = Box::new(UpdateAppUserOperation::new(
            app_user,
            self.repository.clone(),
        ));
        self.transaction_manager
            .execute(operation)
            .await
            .map_err(|e| AppUserError::from_write(e, &id))?;

        info!(id = %id, "AppUser updated");
        Ok(())
    }
}
