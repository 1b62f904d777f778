//! `PostgreSQL` adapters for user directory persistence.

mod models;
mod repository;
mod schema;

pub use repository::{DirectoryPgPool, PostgresUserRepository};
