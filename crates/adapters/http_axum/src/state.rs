//! Shared application state for axum handlers.

use std::sync::Arc;

use nzwalks_app::ports::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_app::services::difficulty_service::DifficultyService;
use nzwalks_app::services::region_service::RegionService;
use nzwalks_app::services::walk_service::WalkService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<RR, WR, DR> {
    /// Region CRUD service.
    pub region_service: Arc<RegionService<RR>>,
    /// Walk CRUD service.
    pub walk_service: Arc<WalkService<WR>>,
    /// Difficulty lookups.
    pub difficulty_service: Arc<DifficultyService<DR>>,
}

impl<RR, WR, DR> Clone for AppState<RR, WR, DR> {
    fn clone(&self) -> Self {
        Self {
            region_service: Arc::clone(&self.region_service),
            walk_service: Arc::clone(&self.walk_service),
            difficulty_service: Arc::clone(&self.difficulty_service),
        }
    }
}

impl<RR, WR, DR> AppState<RR, WR, DR>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        region_service: RegionService<RR>,
        walk_service: WalkService<WR>,
        difficulty_service: DifficultyService<DR>,
    ) -> Self {
        Self {
            region_service: Arc::new(region_service),
            walk_service: Arc::new(walk_service),
            difficulty_service: Arc::new(difficulty_service),
        }
    }
}
