//! `SQLite` implementation of [`WalkRepository`].
//!
//! Foreign keys on `difficulty_id` and `region_id` are enforced by the
//! database; a violation surfaces as an unknown-reference validation error.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use nzwalks_app::ports::WalkRepository;
use nzwalks_domain::error::NzWalksError;
use nzwalks_domain::id::WalkId;
use nzwalks_domain::walk::{Walk, WalkChanges};

use crate::error::{StorageError, decode_id};

struct Wrapper(Walk);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Walk> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let difficulty_id: String = row.try_get("difficulty_id")?;
        let region_id: String = row.try_get("region_id")?;

        Ok(Self(Walk {
            id: decode_id("id", &id)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            length_in_km: row.try_get("length_in_km")?,
            image_url: row.try_get("image_url")?,
            difficulty_id: decode_id("difficulty_id", &difficulty_id)?,
            region_id: decode_id("region_id", &region_id)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO walks (id, name, description, length_in_km, image_url, difficulty_id, region_id) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM walks WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM walks ORDER BY rowid";
const UPDATE: &str = "UPDATE walks SET name = ?, description = ?, length_in_km = ?, image_url = ?, difficulty_id = ?, region_id = ? WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM walks WHERE id = ? RETURNING *";

/// `SQLite`-backed walk repository.
pub struct SqliteWalkRepository {
    pool: SqlitePool,
}

impl SqliteWalkRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl WalkRepository for SqliteWalkRepository {
    fn create(&self, walk: Walk) -> impl Future<Output = Result<Walk, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(walk.id.to_string())
                .bind(&walk.name)
                .bind(&walk.description)
                .bind(walk.length_in_km)
                .bind(walk.image_url.as_deref())
                .bind(walk.difficulty_id.to_string())
                .bind(walk.region_id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(walk)
        }
    }

    fn get_by_id(
        &self,
        id: WalkId,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Walk>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: WalkId,
        changes: WalkChanges,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&changes.name)
                .bind(&changes.description)
                .bind(changes.length_in_km)
                .bind(changes.image_url.as_deref())
                .bind(changes.difficulty_id.to_string())
                .bind(changes.region_id.to_string())
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: WalkId,
    ) -> impl Future<Output = Result<Option<Walk>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
