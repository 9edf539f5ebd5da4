use async_trait::async_trait;

use crate::core::domain::entity::app_user::AppUser;
use crate::core::domain::page::UnvalidatedPageRequest;
use crate::core::port::error::AppUserError;

#[derive(Debug, Clone, Default)]
pub struct FindAppUsersInput {
    pub province: Option<String>,
    pub city: Option<String>,
    pub age: Option<String>,
    pub page: UnvalidatedPageRequest,
}

#[async_trait]
pub trait FindAppUsersInputBoundary: Send + Sync {
    async fn execute(&self, input: FindAppUsersInput) -> Result<Vec<AppUser>, AppUserError>;
}
