pub mod input;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::domain::command::CommandError;
use crate::core::domain::filter::AppUserSearch;
use crate::core::domain::query::QueryError;
use crate::core::domain::transaction::TransactionWrapper;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub gender: String,
    pub age: i32,
    pub province: String,
    pub city: String,
}

#[async_trait]
pub trait AppUserCommand: Send + Sync {
    async fn insert(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError>;

    /// Replaces every column of the row with the same id.
    async fn update(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
        app_user: AppUser,
    ) -> Result<(), CommandError>;

    async fn delete_all(
        &self,
        transaction: &mut Box<dyn TransactionWrapper>,
    ) -> Result<u64, CommandError>;
}

#[async_trait]
pub trait AppUserQuery: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<AppUser>, QueryError>;

    async fn exists(&self, id: &str) -> Result<bool, QueryError>;

    async fn find(&self, search: &AppUserSearch) -> Result<Vec<AppUser>, QueryError>;
}
