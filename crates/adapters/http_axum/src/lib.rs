//! # nzwalks-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/api` (`/api/regions`, `/api/walks`,
//!   `/api/difficulties`) plus a `/health` check
//! - Map request bodies into domain values and domain values into response
//!   bodies (the [`dto`] module is the only place that knows both shapes)
//! - Map application errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `nzwalks-app` (for port traits and services) and `nzwalks-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dto;
pub mod error;
pub mod router;
pub mod state;
