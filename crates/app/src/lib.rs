//! # nzwalks-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RegionRepository`: CRUD for regions
//!   - `WalkRepository`: CRUD for walks
//!   - `DifficultyRepository`: read access to seeded difficulties
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RegionService`, `WalkService`: list, get, create, update, delete
//!   - `DifficultyService`: list, get
//! - Turn "no such record" answers from repositories into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `nzwalks-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
