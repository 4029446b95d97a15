//! Storage port: repository traits for persistence.
//!
//! A repository is the only component allowed to talk to the store for its
//! record type. `update` and `delete` answer `None` when no record matches and
//! leave the store untouched in that case.

use std::future::Future;

use nzwalks_domain::difficulty::Difficulty;
use nzwalks_domain::error::NzWalksError;
use nzwalks_domain::id::{DifficultyId, RegionId, WalkId};
use nzwalks_domain::region::{Region, RegionChanges};
use nzwalks_domain::walk::{Walk, WalkChanges};

/// Repository for persisting and querying [`Region`]s.
pub trait RegionRepository {
    /// Insert a new region and return it as stored.
    fn create(&self, region: Region) -> impl Future<Output = Result<Region, NzWalksError>> + Send;

    /// Get a region by its unique identifier.
    fn get_by_id(
        &self,
        id: RegionId,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send;

    /// Get all regions.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Region>, NzWalksError>> + Send;

    /// Replace the mutable fields of region `id`.
    fn update(
        &self,
        id: RegionId,
        changes: RegionChanges,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send;

    /// Remove region `id`, returning what was removed.
    fn delete(
        &self,
        id: RegionId,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send;
}

/// Repository for persisting and querying [`Walk`]s.
pub trait WalkRepository {
    /// Insert a new walk and return it as stored.
    fn create(&self, walk: Walk) -> impl Future<Output = Result<Walk, NzWalksError>> + Send;

    /// Get a walk by its unique identifier.
    fn get_by_id(
        &self,
        id: WalkId,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send;

    /// Get all walks.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Walk>, NzWalksError>> + Send;

    /// Replace the mutable fields of walk `id`.
    fn update(
        &self,
        id: WalkId,
        changes: WalkChanges,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send;

    /// Remove walk `id`, returning what was removed.
    fn delete(
        &self,
        id: WalkId,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send;
}

/// Read-only access to the seeded [`Difficulty`] grades.
pub trait DifficultyRepository {
    /// Get a difficulty by its unique identifier.
    fn get_by_id(
        &self,
        id: DifficultyId,
    ) -> impl Future<Output = Result<Option<Difficulty>, NzWalksError>> + Send;

    /// Get all difficulties.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Difficulty>, NzWalksError>> + Send;
}
