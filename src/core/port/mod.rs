pub mod create_app_user;
pub mod error;
pub mod find_app_user;
pub mod find_app_users;
pub mod reset_app_users;
pub mod update_app_user;
