//! Transfer models exposed at the API boundary and their mapping to and from
//! domain values.
//!
//! Read models (`*Dto`) always carry the identifier. Creation payloads never
//! do: the identifier is generated when the domain value is built. Update
//! payloads take the identifier from the route, so they map into the
//! `*Changes` types instead of full records.

use serde::{Deserialize, Serialize};

use nzwalks_domain::difficulty::Difficulty;
use nzwalks_domain::error::NzWalksError;
use nzwalks_domain::id::{DifficultyId, RegionId, WalkId};
use nzwalks_domain::region::{Region, RegionChanges};
use nzwalks_domain::walk::{Walk, WalkChanges};

/// Read model for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: RegionId,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            image_url: region.image_url,
        }
    }
}

/// Body of `POST /api/regions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AddRegionRequest {
    /// Build a new [`Region`] with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] when a field is invalid.
    pub fn into_region(self) -> Result<Region, NzWalksError> {
        Region::builder()
            .code(self.code)
            .name(self.name)
            .image_url(self.image_url)
            .build()
    }
}

/// Body of `PUT /api/regions/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<UpdateRegionRequest> for RegionChanges {
    fn from(req: UpdateRegionRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            image_url: req.image_url,
        }
    }
}

/// Read model for a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: WalkId,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub image_url: Option<String>,
    pub difficulty_id: DifficultyId,
    pub region_id: RegionId,
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            description: walk.description,
            length_in_km: walk.length_in_km,
            image_url: walk.image_url,
            difficulty_id: walk.difficulty_id,
            region_id: walk.region_id,
        }
    }
}

/// Body of `POST /api/walks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub difficulty_id: DifficultyId,
    pub region_id: RegionId,
}

impl AddWalkRequest {
    /// Build a new [`Walk`] with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] when a field is invalid.
    pub fn into_walk(self) -> Result<Walk, NzWalksError> {
        Walk::builder()
            .name(self.name)
            .description(self.description)
            .length_in_km(self.length_in_km)
            .image_url(self.image_url)
            .difficulty_id(self.difficulty_id)
            .region_id(self.region_id)
            .build()
    }
}

/// Body of `PUT /api/walks/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub difficulty_id: DifficultyId,
    pub region_id: RegionId,
}

impl From<UpdateWalkRequest> for WalkChanges {
    fn from(req: UpdateWalkRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            length_in_km: req.length_in_km,
            image_url: req.image_url,
            difficulty_id: req.difficulty_id,
            region_id: req.region_id,
        }
    }
}

/// Read model for a difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDto {
    pub id: DifficultyId,
    pub name: String,
}

impl From<Difficulty> for DifficultyDto {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            id: difficulty.id,
            name: difficulty.name,
        }
    }
}
