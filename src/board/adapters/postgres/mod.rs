//! `PostgreSQL` adapters for board persistence ports.

mod models;
mod repository;
mod schema;

pub use repository::{BoardPgPool, PostgresProjectRepository, PostgresTaskRepository};
