//! `SQLite` implementation of [`RegionRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use nzwalks_app::ports::RegionRepository;
use nzwalks_domain::error::NzWalksError;
use nzwalks_domain::id::RegionId;
use nzwalks_domain::region::{Region, RegionChanges};

use crate::error::{StorageError, decode_id};

/// Wrapper for converting database rows into domain [`Region`].
struct Wrapper(Region);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Region> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;

        Ok(Self(Region {
            id: decode_id("id", &id)?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            image_url: row.try_get("image_url")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO regions (id, code, name, image_url) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM regions WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM regions ORDER BY rowid";
const UPDATE: &str =
    "UPDATE regions SET code = ?, name = ?, image_url = ? WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM regions WHERE id = ? RETURNING *";

/// `SQLite`-backed region repository.
pub struct SqliteRegionRepository {
    pool: SqlitePool,
}

impl SqliteRegionRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RegionRepository for SqliteRegionRepository {
    fn create(&self, region: Region) -> impl Future<Output = Result<Region, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(region.id.to_string())
                .bind(&region.code)
                .bind(&region.name)
                .bind(region.image_url.as_deref())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(region)
        }
    }

    fn get_by_id(
        &self,
        id: RegionId,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Region>, NzWalksError>> + Send {
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
        id: RegionId,
        changes: RegionChanges,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&changes.code)
                .bind(&changes.name)
                .bind(changes.image_url.as_deref())
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: RegionId,
    ) -> impl Future<Output = Result<Option<Region>, NzWalksError>> + Send {
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
