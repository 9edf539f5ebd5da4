use axum::response::Response;
use std::sync::Arc;

use crate::adapter::web::presenter::app_user::AppUserPresenter;
use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::domain::validation::ValidationError;
use crate::core::port::update_app_user::{UpdateAppUserInput, UpdateAppUserInputBoundary};

pub struct UpdateAppUserHandler {
    use_case: Arc<dyn UpdateAppUserInputBoundary>,
}

impl UpdateAppUserHandler {
    pub fn new(use_case: Arc<dyn UpdateAppUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn update_app_user(
        &self,
        id: String,
        body: Result<UnvalidatedAppUser, ValidationError>,
    ) -> Response {
        match self.use_case.execute(UpdateAppUserInput { id, body }).await {
            Ok(()) => AppUserPresenter::success(),
            Err(error) => AppUserPresenter::failure(error, "Failed to update AppUser"),
        }
    }
}
