use async_trait::async_trait;

use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::port::error::AppUserError;

#[async_trait]
pub trait CreateAppUserInputBoundary: Send + Sync {
    async fn execute(&self, input: UnvalidatedAppUser) -> Result<(), AppUserError>;
}
