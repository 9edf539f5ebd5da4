pub mod get;
pub mod list;
pub mod post;
pub mod put;
