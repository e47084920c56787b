pub mod config;
pub mod logging;

pub mod activity_log;
pub mod catalog;
pub mod category;
pub mod error;
pub mod fields;
pub mod filter;
pub mod health;
pub mod recommend;
pub mod schema;
pub mod search;
