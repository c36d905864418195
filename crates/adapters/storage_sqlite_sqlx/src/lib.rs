//! # minibank-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `minibank-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `minibank-app` (for port traits) and `minibank-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod account_repo;
pub mod error;
pub mod pool;

pub use account_repo::SqliteAccountRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
