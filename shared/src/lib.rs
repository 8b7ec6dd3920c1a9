pub mod config;
pub mod database;
pub mod entity;
pub mod time;

pub use config::Config;
pub use database::{close_db_connection, get_db_connection};
