use async_trait::async_trait;

use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::domain::validation::ValidationError;
use crate::core::port::error::AppUserError;

pub struct UpdateAppUserInput {
    pub id: String,
    /// A body that could not be decoded is only reported once the id is known to exist.
    pub body: Result<UnvalidatedAppUser, ValidationError>,
}

#[async_trait]
pub trait UpdateAppUserInputBoundary: Send + Sync {
    async fn execute(&self, input: UpdateAppUserInput) -> Result<(), AppUserError>;
}
