use async_trait::async_trait;

use crate::core::domain::entity::app_user::AppUser;
use crate::core::port::error::AppUserError;

#[async_trait]
pub trait FindAppUserInputBoundary: Send + Sync {
    async fn execute(&self, id: &str) -> Result<AppUser, AppUserError>;
}
