//! # nzwalks-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `nzwalks-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations, difficulties seeded)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `nzwalks-app` (for port traits) and `nzwalks-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod difficulty_repo;
mod error;
mod pool;
mod region_repo;
mod walk_repo;

pub use difficulty_repo::SqliteDifficultyRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use region_repo::SqliteRegionRepository;
pub use walk_repo::SqliteWalkRepository;
