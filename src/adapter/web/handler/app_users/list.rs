use axum::response::Response;
use std::sync::Arc;

use crate::adapter::web::presenter::app_user::AppUserPresenter;
use crate::core::domain::validation::ValidationError;
use crate::core::port::find_app_users::{FindAppUsersInput, FindAppUsersInputBoundary};

pub struct FindAppUsersHandler {
    use_case: Arc<dyn FindAppUsersInputBoundary>,
}

impl FindAppUsersHandler {
    pub fn new(use_case: Arc<dyn FindAppUsersInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn find_app_users(
        &self,
        query: Result<FindAppUsersInput, ValidationError>,
    ) -> Response {
        let result = match query {
            Ok(input) => self.use_case.execute(input).await,
            Err(error) => Err(error.into()),
        };
        match result {
            Ok(app_users) => AppUserPresenter::found(app_users),
            Err(error) => AppUserPresenter::failure(error, "Failed to find AppUsers"),
        }
    }
}
