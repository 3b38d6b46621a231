//! Metadata validation.
//!
//! Checks that the required metadata fields are filled in before a document
//! is assembled. Fields are checked in a fixed order (title, description,
//! id) and only the first problem is reported, so a user fixes one field at
//! a time.
//!
//! # Examples
//!
//! ```
//! use schema_form_core::*;
//!
//! let mut metadata = SchemaMetadata::default();
//! metadata.set(MetadataField::Description, "Some description");
//! assert_eq!(validate_metadata(&metadata), Err(ValidationError::MissingTitle));
//!
//! metadata.set(MetadataField::Title, "Thing");
//! metadata.set(MetadataField::Id, "thing");
//! assert!(validate_metadata(&metadata).is_ok());
//! ```

use thiserror::Error;

use crate::{MetadataField, SchemaMetadata};

/// Header shown above a validation message.
pub const WARNING_HEADER: &str = "There is a problem with your options";

/// Metadata validation failures.
///
/// The `Display` impl yields the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is missing or empty.
    #[error("Please enter a title value")]
    MissingTitle,
    /// Description is missing or empty.
    #[error("Please enter a description value")]
    MissingDescription,
    /// Id is missing or empty.
    #[error("Please enter an id value")]
    MissingId,
}

impl ValidationError {
    /// Returns the user-facing message.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_form_core::ValidationError;
    ///
    /// assert_eq!(ValidationError::MissingId.message(), "Please enter an id value");
    /// ```
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "Please enter a title value",
            ValidationError::MissingDescription => "Please enter a description value",
            ValidationError::MissingId => "Please enter an id value",
        }
    }

    /// Returns the field that failed.
    pub fn field(self) -> MetadataField {
        match self {
            ValidationError::MissingTitle => MetadataField::Title,
            ValidationError::MissingDescription => MetadataField::Description,
            ValidationError::MissingId => MetadataField::Id,
        }
    }
}

/// Validates schema metadata.
///
/// Returns the first failing field in title, description, id order. Later
/// fields are not checked once an earlier one fails.
pub fn validate_metadata(metadata: &SchemaMetadata) -> Result<(), ValidationError> {
    require_all(metadata).map(|_| ())
}

/// Validated metadata values, borrowed from [`SchemaMetadata`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequiredMetadata<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub id: &'a str,
}

pub(crate) fn require_all(
    metadata: &SchemaMetadata,
) -> Result<RequiredMetadata<'_>, ValidationError> {
    let title = require(metadata.title.as_deref(), ValidationError::MissingTitle)?;
    let description = require(
        metadata.description.as_deref(),
        ValidationError::MissingDescription,
    )?;
    let id = require(metadata.id.as_deref(), ValidationError::MissingId)?;

    Ok(RequiredMetadata {
        title,
        description,
        id,
    })
}

fn require(value: Option<&str>, missing: ValidationError) -> Result<&str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(
        title: Option<&str>,
        description: Option<&str>,
        id: Option<&str>,
    ) -> SchemaMetadata {
        SchemaMetadata {
            title: title.map(String::from),
            description: description.map(String::from),
            id: id.map(String::from),
        }
    }

    #[test]
    fn test_missing_title_reported_first_regardless_of_other_fields() {
        let cases = [
            metadata(None, None, None),
            metadata(None, Some("D"), None),
            metadata(None, None, Some("I")),
            metadata(None, Some("D"), Some("I")),
            metadata(Some(""), Some("D"), Some("I")),
        ];

        for case in &cases {
            assert_eq!(validate_metadata(case), Err(ValidationError::MissingTitle));
        }
    }

    #[test]
    fn test_description_checked_before_id() {
        let result = validate_metadata(&metadata(Some("T"), Some(""), None));
        assert_eq!(result, Err(ValidationError::MissingDescription));
    }

    #[test]
    fn test_missing_id_reported_last() {
        let result = validate_metadata(&metadata(Some("T"), Some("D"), Some("")));
        assert_eq!(result, Err(ValidationError::MissingId));
        assert_eq!(result.unwrap_err().field(), MetadataField::Id);
    }

    #[test]
    fn test_all_fields_present_passes() {
        let cases = [
            metadata(Some("T"), Some("D"), Some("I")),
            metadata(Some(" "), Some("0"), Some("http://example.com/schema")),
        ];

        for case in &cases {
            assert_eq!(validate_metadata(case), Ok(()));
        }
    }

    #[test]
    fn test_display_matches_message() {
        for err in [
            ValidationError::MissingTitle,
            ValidationError::MissingDescription,
            ValidationError::MissingId,
        ] {
            assert_eq!(err.to_string(), err.message());
        }
    }
}
