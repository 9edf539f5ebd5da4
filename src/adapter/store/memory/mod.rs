//! In-memory doubles of the store ports, used by the test suites.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::app_user::{AppUser, AppUserCommand, AppUserQuery};
use crate::core::domain::filter::AppUserSearch;
use crate::core::domain::query::QueryError;
use crate::core::domain::transaction::{ToSql, TransactionError, TransactionWrapper};
use crate::core::domain::transaction_manager::{TransactionManager, TransactionManagerError};
use crate::core::domain::transaction_operation::BoxedTransactionOperation;

/// Rows keyed by id, so iteration order matches `ORDER BY id`.
#[derive(Clone, Default)]
pub struct InMemoryAppUserStore {
    rows: Arc<RwLock<BTreeMap<String, AppUser>>>,
}

impl InMemoryAppUserStore {
    pub async fn put(&self, app_user: AppUser) {
        self.rows.write().await.insert(app_user.id.clone(), app_user);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl AppUserCommand for InMemoryAppUserStore {
    async fn insert(
        &self,
        _: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&app_user.id) {
            return Err(CommandError::app_user_already_exists(&app_user.id));
        }
        rows.insert(app_user.id.clone(), app_user);
        Ok(())
    }

    async fn update(
        &self,
        _: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&app_user.id) {
            Some(row) => {
                *row = app_user;
                Ok(())
            }
            None => Err(CommandError::app_user_not_found(&app_user.id)),
        }
    }

    async fn delete_all(&self, _: &mut Box<dyn TransactionWrapper>) -> Result<u64, CommandError> {
        let mut rows = self.rows.write().await;
        let deleted = rows.len() as u64;
        rows.clear();
        Ok(deleted)
    }
}

#[async_trait]
impl AppUserQuery for InMemoryAppUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, QueryError> {
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &str) -> Result<bool, QueryError> {
        Ok(self.rows.read().await.contains_key(id))
    }

    async fn find(&self, search: &AppUserSearch) -> Result<Vec<AppUser>, QueryError> {
        let offset = usize::try_from(search.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(search.page.limit()).unwrap_or(usize::MAX);
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|u| search.filter.matches(u))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

struct NoopTransaction;

#[async_trait]
impl TransactionWrapper for NoopTransaction {
    async fn execute(&mut self, _: &str, _: Vec<Box<dyn ToSql>>) -> Result<u64, TransactionError> {
        Ok(0)
    }

    async fn rollback(self: Box<Self>) -> Result<(), TransactionError> {
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        Ok(())
    }
}

pub struct InMemoryTransactionManager;

#[async_trait]
impl TransactionManager for InMemoryTransactionManager {
    async fn execute(
        &self,
        operation: Box<dyn BoxedTransactionOperation>,
    ) -> Result<(), TransactionManagerError> {
        let mut transaction: Box<dyn TransactionWrapper> = Box::new(NoopTransaction);
        operation.execute(&mut transaction).await?;
        transaction.commit().await?;
        Ok(())
    }
}
