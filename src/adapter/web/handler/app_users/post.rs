use axum::response::Response;
use std::sync::Arc;

use crate::core::port::create_app_user::CreateAppUserInputBoundary;

use crate::adapter::web::presenter::app_user::AppUserPresenter;
use crate::core::domain::entity::app_user::input::UnvalidatedAppUser;
use crate::core::domain::validation::ValidationError;

pub struct CreateAppUserHandler {
    use_case: Arc<dyn CreateAppUserInputBoundary>,
}

impl CreateAppUserHandler {
    pub fn new(use_case: Arc<dyn CreateAppUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn create_app_user(
        &self,
        body: Result<UnvalidatedAppUser, ValidationError>,
    ) -> Response {
        let result = match body {
            Ok(input) => self.use_case.execute(input).await,
            Err(error) => Err(error.into()),
        };
        match result {
            Ok(()) => AppUserPresenter::success(),
            Err(error) => AppUserPresenter::failure(error, "Failed to create AppUser"),
        }
    }
}
