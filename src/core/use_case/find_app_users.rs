use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::core::domain::entity::app_user::{AppUser, AppUserQuery};
use crate::core::domain::filter::build_filter;
use crate::core::domain::page::PageRequest;
use crate::core::port::error::AppUserError;
use crate::core::port::find_app_users::{FindAppUsersInput, FindAppUsersInputBoundary};

pub struct FindAppUsersUseCase {
    query: Arc<dyn AppUserQuery>,
}

impl FindAppUsersUseCase {
    pub fn new(query: Arc<dyn AppUserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl FindAppUsersInputBoundary for FindAppUsersUseCase {
    async fn execute(&self, input: FindAppUsersInput) -> Result<Vec<AppUser>, AppUserError> {
        let page = PageRequest::try_from(input.page)?;
        let filter = build_filter(
            input.province.as_deref(),
            input.city.as_deref(),
            input.age.as_deref(),
        );
        debug!(
            predicates = filter.predicates().len(),
            page = page.page(),
            size = page.size(),
            "finding AppUsers"
        );

        Ok(self.query.find(&filter.paginate(page)).await?)
    }
}
