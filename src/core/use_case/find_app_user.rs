use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::app_user::{AppUser, AppUserQuery};
use crate::core::port::error::AppUserError;
use crate::core::port::find_app_user::FindAppUserInputBoundary;

pub struct FindAppUserUseCase {
    query: Arc<dyn AppUserQuery>,
}

impl FindAppUserUseCase {
    pub fn new(query: Arc<dyn AppUserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FindAppUserInputBoundary for FindAppUserUseCase {
    async fn execute(&self, id: &str) -> Result<AppUser, AppUserError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppUserError::NotFound { id: id.to_string() })
    }
}
