//! `SQLite` implementation of [`DifficultyRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use nzwalks_app::ports::DifficultyRepository;
use nzwalks_domain::difficulty::Difficulty;
use nzwalks_domain::error::NzWalksError;
use nzwalks_domain::id::DifficultyId;

use crate::error::{StorageError, decode_id};

struct Wrapper(Difficulty);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        Ok(Self(Difficulty {
            id: decode_id("id", &id)?,
            name: row.try_get("name")?,
        }))
    }
}

const SELECT_BY_ID: &str = "SELECT * FROM difficulties WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM difficulties ORDER BY rowid";

/// `SQLite`-backed difficulty repository over the seeded `difficulties` table.
pub struct SqliteDifficultyRepository {
    pool: SqlitePool,
}

impl SqliteDifficultyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DifficultyRepository for SqliteDifficultyRepository {
    fn get_by_id(
        &self,
        id: DifficultyId,
    ) -> impl Future<Output = Result<Option<Difficulty>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Difficulty>, NzWalksError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
