pub mod app_users;
