//! Storage-specific error type wrapping sqlx errors.

use std::str::FromStr;

use nzwalks_domain::error::{NzWalksError, ValidationError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StorageError {
    fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(err)) => err.is_foreign_key_violation(),
            _ => false,
        }
    }
}

impl From<StorageError> for NzWalksError {
    fn from(err: StorageError) -> Self {
        if err.is_foreign_key_violation() {
            return ValidationError::UnknownReference.into();
        }
        Self::Storage(Box::new(err))
    }
}

/// Map a row column holding a UUID string into a typed id.
pub(crate) fn decode_id<T>(column: &str, value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|err| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(err),
    })
}
