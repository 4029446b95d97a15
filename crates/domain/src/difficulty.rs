//! Difficulty: reference data describing how demanding a walk is.

use serde::{Deserialize, Serialize};

use crate::id::DifficultyId;

/// A difficulty grade such as `Easy` or `Hard`.
///
/// Difficulties are seeded by the store and never created through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub id: DifficultyId,
    pub name: String,
}
