//! JSON REST handlers for walks.
//!
//! Referenced regions and difficulties are checked by the store only.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use nzwalks_app::ports::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_domain::id::WalkId;

use super::parse_id;
use crate::dto::{AddWalkRequest, UpdateWalkRequest, WalkDto};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<WalkDto>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, update and delete endpoints.
pub enum ItemResponse {
    Ok(Json<WalkDto>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<WalkDto>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/api/walks/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// `GET /api/walks`
pub async fn list<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let walks = state.walk_service.list_walks().await?;
    Ok(ListResponse::Ok(Json(walks.into_iter().map(WalkDto::from).collect())))
}

/// `GET /api/walks/{id}`
pub async fn get<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let walk_id: WalkId = parse_id("Walk", &id)?;
    let walk = state.walk_service.get_walk(walk_id).await?;
    Ok(ItemResponse::Ok(Json(walk.into())))
}

/// `POST /api/walks`
pub async fn create<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Json(req): Json<AddWalkRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let walk = req.into_walk()?;
    let created = state.walk_service.create_walk(walk).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /api/walks/{id}`
pub async fn update<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateWalkRequest>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let walk_id: WalkId = parse_id("Walk", &id)?;
    let updated = state.walk_service.update_walk(walk_id, req.into()).await?;
    Ok(ItemResponse::Ok(Json(updated.into())))
}

/// `DELETE /api/walks/{id}`, answering with the removed walk.
pub async fn delete<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let walk_id: WalkId = parse_id("Walk", &id)?;
    let deleted = state.walk_service.delete_walk(walk_id).await?;
    Ok(ItemResponse::Ok(Json(deleted.into())))
}
