use std::sync::Arc;

use crate::core::port::create_app_user::CreateAppUserInputBoundary;
use crate::core::port::find_app_user::FindAppUserInputBoundary;
use crate::core::port::find_app_users::FindAppUsersInputBoundary;
use crate::core::port::update_app_user::UpdateAppUserInputBoundary;

pub struct AppState {
    pub create_app_user_use_case: Arc<dyn CreateAppUserInputBoundary>,
    pub update_app_user_use_case: Arc<dyn UpdateAppUserInputBoundary>,
    pub find_app_user_use_case: Arc<dyn FindAppUserInputBoundary>,
    pub find_app_users_use_case: Arc<dyn FindAppUsersInputBoundary>,
}
