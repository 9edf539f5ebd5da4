use async_trait::async_trait;

use crate::core::port::error::AppUserError;

#[async_trait]
pub trait ResetAppUsersInputBoundary: Send + Sync {
    async fn execute(&self) -> Result<(), AppUserError>;
}
