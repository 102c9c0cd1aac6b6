// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_account;
mod postgres_changelog;
mod postgres_content_type;
mod sql;

pub use error::map_sqlx;
pub use memory::{
    InMemoryAccountDirectory, InMemoryChangeRecordRepository, InMemoryContentTypeRepository,
};
pub use postgres_account::PostgresAccountDirectory;
pub use postgres_changelog::PostgresChangeRecordRepository;
pub use postgres_content_type::PostgresContentTypeRepository;
