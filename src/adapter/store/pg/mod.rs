pub mod command;
pub mod query;
pub mod sqlx_transaction;
pub mod transaction_manager;
