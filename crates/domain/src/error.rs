//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`NzWalksError`] via `From`.

use std::error::Error;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum NzWalksError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(Box<dyn Error + Send + Sync>),
}

/// Field-level invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// A text field exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A text field does not have the exact length required.
    #[error("{field} must be exactly {len} characters")]
    WrongLength { field: &'static str, len: usize },

    /// A numeric field is outside its accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A reference points at a record the store does not know.
    #[error("referenced record does not exist")]
    UnknownReference,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Region"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Check that `value` is non-empty and at most `max` characters long.
pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_text() {
        assert_eq!(
            check_text("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        );
    }

    #[test]
    fn should_count_characters_not_bytes() {
        assert!(check_text("name", "Ōtautahi", 8).is_ok());
        assert_eq!(
            check_text("name", "Ōtautahi", 7),
            Err(ValidationError::TooLong {
                field: "name",
                max: 7
            })
        );
    }

    #[test]
    fn should_render_not_found_message() {
        let err = NotFoundError {
            entity: "Walk",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Walk abc not found");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: NzWalksError = ValidationError::UnknownReference.into();
        assert!(matches!(
            err,
            NzWalksError::Validation(ValidationError::UnknownReference)
        ));
    }
}
