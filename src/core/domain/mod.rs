pub mod command;
pub mod entity;
pub mod filter;
pub mod page;
pub mod query;
pub mod transaction;
pub mod transaction_manager;
pub mod transaction_operation;
pub mod validation;
