pub mod app_user_web_input;
pub mod find_app_users_web_query;
