use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::domain::entity::app_user::{AppUser, AppUserCommand, AppUserQuery};
use crate::core::domain::transaction::TransactionWrapper;
use crate::core::domain::transaction_manager::TransactionManager;
use crate::core::domain::transaction_operation::{
    BoxedTransactionOperation, TransactionOperationError,
};
use crate::core::domain::validation::{validate_async, ExtraCheck, ValidationResult};
use crate::core::port::create_app_user::CreateAppUserInputBoundary;
use crate::core::port::error::AppUserError;

pub struct InsertAppUserOperation {
    app_user: AppUser,
    repository: Arc<dyn AppUserCommand>,
}

impl InsertAppUserOperation {
    pub fn new(app_user: AppUser, repository: Arc<dyn AppUserCommand>) -> Self {
        Self {
            app_user,
            repository,
        }
    }
}

#[async_trait]
impl BoxedTransactionOperation for InsertAppUserOperation {
    async fn execute(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<(), TransactionOperationError> {
        self.repository
            .insert(transaction, self.app_user.clone())
            .await?;
        Ok(())
    }
}

/// Rejects a candidate whose id is already stored.
pub struct IdNotTaken<'a>(pub &'a dyn AppUserQuery);

#[async_trait]
impl<'a> ExtraCheck<UnvalidatedAppUser> for IdNotTaken<'a> {
    type Error = AppUserError;

    async fn check(
        &self,
        candidate: &UnvalidatedAppUser,
        result: &mut ValidationResult,
    ) -> Result<(), AppUserError> {
        let Some(id) = candidate.id.as_deref().filter(|id| !id.is_empty()) else {
            return Ok(());
        };
        if self.0.exists(id).await? {
            debug!(id, "AppUser id already taken");
            result.reject(format!("AppUser: {} already exists", id));
        }
        Ok(())
    }
}

pub struct CreateAppUserUseCase {
    repository: Arc<dyn AppUserCommand>,
    query: Arc<dyn AppUserQuery>,
    transaction_manager: Arc<dyn TransactionManager>,
}

impl CreateAppUserUseCase {
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
impl CreateAppUserInputBoundary for CreateAppUserUseCase {
    async fn execute(&self, input: UnvalidatedAppUser) -> Result<(), AppUserError> {
        let candidate = validate_async(input, &IdNotTaken(self.query.as_ref())).await?;
        let app_user = AppUser::try_from(candidate)?;
        let id = app_user.id.clone();

        let operation = Box::new(InsertAppUserOperation::new(
            app_user,
            self.repository.clone(),
        ));
        self.transaction_manager
            .execute(operation)
            .await
            .map_err(|e| AppUserError::from_write(e, &id))?;

        info!(id = %id, "AppUser created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::store::memory::{InMemoryAppUserStore, InMemoryTransactionManager};
    use crate::core::domain::entity::app_user::input::tests::jane;
    use crate::core::domain::filter::AppUserSearch;
    use crate::core::domain::query::QueryError;

    fn use_case(store: &InMemoryAppUserStore) -> CreateAppUserUseCase {
        CreateAppUserUseCase::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(InMemoryTransactionManager),
        )
    }

    #[tokio::test]
    async fn stores_valid_candidate() {
        let store = InMemoryAppUserStore::default();

        use_case(&store).execute(jane()).await.unwrap();

        let stored = store.find_by_id("user001").await.unwrap().unwrap();
        assert_eq!(stored, AppUser::try_from(jane()).unwrap());
    }

    #[tokio::test]
    async fn existing_id_is_a_global_violation() {
        let store = InMemoryAppUserStore::default();
        let use_case = use_case(&store);
        use_case.execute(jane()).await.unwrap();

        let error = use_case.execute(jane()).await.unwrap_err();

        let error = match error {
            AppUserError::ValidationError(e) => e,
            other => panic!("expected validation error, got {:?}", other),
        };
        assert_eq!(
            error.result().global_errors(),
            ["AppUser: user001 already exists"]
        );
        assert!(!error.result().has_field_errors());
    }

    #[tokio::test]
    async fn field_and_existence_failures_are_reported_together() {
        let store = InMemoryAppUserStore::default();
        let use_case = use_case(&store);
        use_case.execute(jane()).await.unwrap();

        let mut candidate = jane();
        candidate.age = Some(200);
        let error = use_case.execute(candidate).await.unwrap_err();

        let error = match error {
            AppUserError::ValidationError(e) => e,
            other => panic!("expected validation error, got {:?}", other),
        };
        assert!(error.result().field_errors().contains_key("age"));
        assert_eq!(error.result().global_errors().len(), 1);
    }

    /// Reports every id as free, like a lookup that lost the race with a concurrent insert.
    struct StaleQuery;

    #[async_trait]
    impl AppUserQuery for StaleQuery {
        async fn find_by_id(&self, _: &str) -> Result<Option<AppUser>, QueryError> {
            Ok(None)
        }

        async fn exists(&self, _: &str) -> Result<bool, QueryError> {
            Ok(false)
        }

        async fn find(&self, _: &AppUserSearch) -> Result<Vec<AppUser>, QueryError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn store_level_duplicate_is_a_conflict() {
        let store = InMemoryAppUserStore::default();
        store.put(AppUser::try_from(jane()).unwrap()).await;
        let use_case = CreateAppUserUseCase::new(
            Arc::new(store.clone()),
            Arc::new(StaleQuery),
            Arc::new(InMemoryTransactionManager),
        );

        let error = use_case.execute(jane()).await.unwrap_err();

        assert!(matches!(error, AppUserError::Conflict { id } if id == "user001"));
    }
}
