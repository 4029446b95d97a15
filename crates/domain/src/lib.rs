//! # nzwalks-domain
//!
//! Pure domain model for the nzwalks API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Regions** (named areas of the country, identified by a short code)
//! - Define **Walks** (tracks that belong to a region and carry a difficulty)
//! - Define **Difficulties** (reference data attached to walks)
//! - Contain all invariant enforcement for the fields above
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod difficulty;
pub mod region;
pub mod walk;
