//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod difficulties;
#[allow(clippy::missing_errors_doc)]
pub mod regions;
#[allow(clippy::missing_errors_doc)]
pub mod walks;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use nzwalks_app::ports::{DifficultyRepository, RegionRepository, WalkRepository};
use nzwalks_domain::error::{NotFoundError, NzWalksError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<RR, WR, DR>() -> Router<AppState<RR, WR, DR>>
where
    RR: RegionRepository + Send + Sync + 'static,
    WR: WalkRepository + Send + Sync + 'static,
    DR: DifficultyRepository + Send + Sync + 'static,
{
    Router::new()
        // Regions
        .route(
            "/regions",
            get(regions::list::<RR, WR, DR>).post(regions::create::<RR, WR, DR>),
        )
        .route(
            "/regions/{id}",
            get(regions::get::<RR, WR, DR>)
                .put(regions::update::<RR, WR, DR>)
                .delete(regions::delete::<RR, WR, DR>),
        )
        // Walks
        .route(
            "/walks",
            get(walks::list::<RR, WR, DR>).post(walks::create::<RR, WR, DR>),
        )
        .route(
            "/walks/{id}",
            get(walks::get::<RR, WR, DR>)
                .put(walks::update::<RR, WR, DR>)
                .delete(walks::delete::<RR, WR, DR>),
        )
        // Difficulties
        .route("/difficulties", get(difficulties::list::<RR, WR, DR>))
        .route("/difficulties/{id}", get(difficulties::get::<RR, WR, DR>))
}

/// Parse a path segment into a typed id.
///
/// A segment that is not a UUID cannot name any record, so it is answered
/// like a missing one.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(NzWalksError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        }))
    })
}
