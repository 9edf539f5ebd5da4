use axum::response::Response;
use std::sync::Arc;

use crate::adapter::web::presenter::app_user::AppUserPresenter;
use crate::core::port::find_app_user::FindAppUserInputBoundary;

pub struct FindAppUserHandler {
    use_case: Arc<dyn FindAppUserInputBoundary>,
}

impl FindAppUserHandler {
    pub fn new(use_case: Arc<dyn FindAppUserInputBoundary>) -> Self {
        Self { use_case }
    }

    pub async fn find_app_user(&self, id: String) -> Response {
        match self.use_case.execute(&id).await {
            Ok(app_user) => AppUserPresenter::found(app_user),
            Err(error) => {
                AppUserPresenter::failure(error, &format!("Failed to find AppUser: {}", id))
            }
        }
    }
}
