//! JSON REST handlers for the read-only difficulty grades.

use axum::Json;
use axum::extract::{Path, State};

use nzwalks_app::ports::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_domain::id::DifficultyId;

use super::parse_id;
use crate::dto::DifficultyDto;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/difficulties`
pub async fn list<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
) -> Result<Json<Vec<DifficultyDto>>, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let difficulties = state.difficulty_service.list_difficulties().await?;
    Ok(Json(difficulties.into_iter().map(DifficultyDto::from).collect()))
}

/// `GET /api/difficulties/{id}`
pub async fn get<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
) -> Result<Json<DifficultyDto>, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let difficulty_id: DifficultyId = parse_id("Difficulty", &id)?;
    let difficulty = state.difficulty_service.get_difficulty(difficulty_id).await?;
    Ok(Json(difficulty.into()))
}
