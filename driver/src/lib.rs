pub mod database;
pub mod env;
mod error;
