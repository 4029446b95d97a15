//! Walk: a track in a region, graded by difficulty.

use serde::{Deserialize, Serialize};

use crate::error::{NzWalksError, ValidationError, check_text};
use crate::id::{DifficultyId, RegionId, WalkId};

/// Maximum length of a walk name.
pub const NAME_MAX: usize = 100;
/// Maximum length of a walk description.
pub const DESCRIPTION_MAX: usize = 1000;
/// Longest walk accepted, in kilometres.
pub const LENGTH_MAX_KM: f64 = 50.0;

/// A walking track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    pub id: WalkId,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub image_url: Option<String>,
    pub difficulty_id: DifficultyId,
    pub region_id: RegionId,
}

impl Walk {
    /// Create a builder for constructing a [`Walk`].
    #[must_use]
    pub fn builder() -> WalkBuilder {
        WalkBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// Whether `difficulty_id` and `region_id` point at existing records is
    /// left to the store.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] on the first violated field.
    pub fn validate(&self) -> Result<(), NzWalksError> {
        validate_fields(&self.name, &self.description, self.length_in_km)
    }
}

/// Full replacement of a walk's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkChanges {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub image_url: Option<String>,
    pub difficulty_id: DifficultyId,
    pub region_id: RegionId,
}

impl WalkChanges {
    /// Check the same invariants a [`Walk`] enforces.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] on the first violated field.
    pub fn validate(&self) -> Result<(), NzWalksError> {
        validate_fields(&self.name, &self.description, self.length_in_km)
    }
}

fn validate_fields(name: &str, description: &str, length_in_km: f64) -> Result<(), NzWalksError> {
    check_text("name", name, NAME_MAX)?;
    check_text("description", description, DESCRIPTION_MAX)?;
    if !(0.0..=LENGTH_MAX_KM).contains(&length_in_km) {
        return Err(ValidationError::OutOfRange {
            field: "lengthInKm",
            min: 0.0,
            max: LENGTH_MAX_KM,
        }
        .into());
    }
    Ok(())
}

/// Step-by-step builder for [`Walk`].
#[derive(Debug, Default)]
pub struct WalkBuilder {
    id: Option<WalkId>,
    name: Option<String>,
    description: Option<String>,
    length_in_km: Option<f64>,
    image_url: Option<String>,
    difficulty_id: Option<DifficultyId>,
    region_id: Option<RegionId>,
}

impl WalkBuilder {
    #[must_use]
    pub fn id(mut self, id: WalkId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn length_in_km(mut self, length_in_km: f64) -> Self {
        self.length_in_km = Some(length_in_km);
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    #[must_use]
    pub fn difficulty_id(mut self, difficulty_id: DifficultyId) -> Self {
        self.difficulty_id = Some(difficulty_id);
        self
    }

    #[must_use]
    pub fn region_id(mut self, region_id: RegionId) -> Self {
        self.region_id = Some(region_id);
        self
    }

    /// Consume the builder, validate, and return a [`Walk`].
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if a text field or the length is
    /// invalid, or [`ValidationError::UnknownReference`] when the difficulty
    /// or region was never set.
    pub fn build(self) -> Result<Walk, NzWalksError> {
        let (Some(difficulty_id), Some(region_id)) = (self.difficulty_id, self.region_id) else {
            return Err(ValidationError::UnknownReference.into());
        };
        let walk = Walk {
            id: self.id.unwrap_or_else(WalkId::generate),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            length_in_km: self.length_in_km.unwrap_or_default(),
            image_url: self.image_url,
            difficulty_id,
            region_id,
        };
        walk.validate()?;
        Ok(walk)
    }
}
