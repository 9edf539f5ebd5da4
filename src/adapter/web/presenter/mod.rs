pub mod app_user;
