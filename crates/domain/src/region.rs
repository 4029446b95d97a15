//! Region: a named part of the country that walks belong to.

use serde::{Deserialize, Serialize};

use crate::error::{NzWalksError, ValidationError, check_text};
use crate::id::RegionId;

/// Exact length of a region code (e.g. `WLG`).
pub const CODE_LEN: usize = 3;
/// Maximum length of a region name.
pub const NAME_MAX: usize = 100;

/// A geographical region such as Wellington or Northland.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl Region {
    /// Create a builder for constructing a [`Region`].
    #[must_use]
    pub fn builder() -> RegionBuilder {
        RegionBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] when `code` is not exactly three
    /// characters or `name` is empty or too long.
    pub fn validate(&self) -> Result<(), NzWalksError> {
        validate_fields(&self.code, &self.name)
    }
}

/// Full replacement of a region's mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionChanges {
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl RegionChanges {
    /// Check the same invariants a [`Region`] enforces.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] on the first violated field.
    pub fn validate(&self) -> Result<(), NzWalksError> {
        validate_fields(&self.code, &self.name)
    }
}

fn validate_fields(code: &str, name: &str) -> Result<(), NzWalksError> {
    if code.trim().is_empty() {
        return Err(ValidationError::Empty { field: "code" }.into());
    }
    if code.chars().count() != CODE_LEN {
        return Err(ValidationError::WrongLength {
            field: "code",
            len: CODE_LEN,
        }
        .into());
    }
    check_text("name", name, NAME_MAX)?;
    Ok(())
}

/// Step-by-step builder for [`Region`].
#[derive(Debug, Default)]
pub struct RegionBuilder {
    id: Option<RegionId>,
    code: Option<String>,
    name: Option<String>,
    image_url: Option<String>,
}

impl RegionBuilder {
    #[must_use]
    pub fn id(mut self, id: RegionId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Consume the builder, validate, and return a [`Region`].
    ///
    /// A fresh [`RegionId`] is generated unless one was set explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`NzWalksError::Validation`] if `code` or `name` is invalid.
    pub fn build(self) -> Result<Region, NzWalksError> {
        let region = Region {
            id: self.id.unwrap_or_else(RegionId::generate),
            code: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            image_url: self.image_url,
        };
        region.validate()?;
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_region_when_code_and_name_provided() {
        let region = Region::builder()
            .code("WLG")
            .name("Wellington")
            .build()
            .unwrap();
        assert_eq!(region.code, "WLG");
        assert_eq!(region.name, "Wellington");
        assert!(region.image_url.is_none());
    }

    #[test]
    fn should_return_validation_error_when_code_has_wrong_length() {
        let result = Region::builder().code("WELL").name("Wellington").build();
        assert!(matches!(
            result,
            Err(NzWalksError::Validation(ValidationError::WrongLength {
                field: "code",
                len: 3
            }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = Region::builder().code("AKL").build();
        assert!(matches!(
            result,
            Err(NzWalksError::Validation(ValidationError::Empty {
                field: "name"
            }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_too_long() {
        let result = Region::builder().code("AKL").name("a".repeat(101)).build();
        assert!(matches!(
            result,
            Err(NzWalksError::Validation(ValidationError::TooLong { .. }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_code_is_blank() {
        let result = Region::builder().code("   ").name("Blank").build();
        assert!(matches!(
            result,
            Err(NzWalksError::Validation(ValidationError::Empty {
                field: "code"
            }))
        ));
    }

    #[test]
    fn should_apply_same_checks_to_changes() {
        let changes = RegionChanges {
            code: "   ".to_string(),
            name: "Northland".to_string(),
            image_url: None,
        };
        assert!(changes.validate().is_err());
    }
}
