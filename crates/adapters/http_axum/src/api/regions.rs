//! JSON REST handlers for regions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use nzwalks_app::ports::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_domain::id::RegionId;

use super::parse_id;
use crate::dto::{AddRegionRequest, RegionDto, UpdateRegionRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RegionDto>>),
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
    Ok(Json<RegionDto>),
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
    Created(Json<RegionDto>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = format!("/api/regions/{}", json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// `GET /api/regions`
pub async fn list<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
) -> Result<ListResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let regions = state.region_service.list_regions().await?;
    Ok(ListResponse::Ok(Json(regions.into_iter().map(RegionDto::from).collect())))
}

/// `GET /api/regions/{id}`
pub async fn get<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let region_id: RegionId = parse_id("Region", &id)?;
    let region = state.region_service.get_region(region_id).await?;
    Ok(ItemResponse::Ok(Json(region.into())))
}

/// `POST /api/regions`
pub async fn create<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Json(req): Json<AddRegionRequest>,
) -> Result<CreateResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let region = req.into_region()?;
    let created = state.region_service.create_region(region).await?;
    Ok(CreateResponse::Created(Json(created.into())))
}

/// `PUT /api/regions/{id}`
pub async fn update<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRegionRequest>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let region_id: RegionId = parse_id("Region", &id)?;
    let updated = state
        .region_service
        .update_region(region_id, req.into())
        .await?;
    Ok(ItemResponse::Ok(Json(updated.into())))
}

/// `DELETE /api/regions/{id}`, answering with the removed region.
pub async fn delete<RR, WR, DR>(
    State(state): State<AppState<RR, WR, DR>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    let region_id: RegionId = parse_id("Region", &id)?;
    let deleted = state.region_service.delete_region(region_id).await?;
    Ok(ItemResponse::Ok(Json(deleted.into())))
}
