//! Error types for form input and submission.
//!
//! [`FormError`] covers everything that can go wrong while feeding input
//! into an assembler: reading form files, unknown input names, invalid
//! options, and builders mounted for the wrong type. [`SubmitError`] covers
//! a submission that produced no document.

use thiserror::Error;

use crate::{SchemaType, ValidationError};

/// Errors raised while applying form input.
#[derive(Debug, Error)]
pub enum FormError {
    /// Form file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Form file YAML (or JSON) parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input name that maps to no metadata field.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Type value outside the supported set.
    #[error("unknown schema type: {0}")]
    UnknownType(String),

    /// String `pattern` option that does not compile as a regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A builder was mounted while no type was selected.
    #[error("cannot mount {0} options: no type selected")]
    NoTypeSelected(SchemaType),

    /// A builder was mounted for a type other than the selected one.
    #[error("cannot mount {mounted} options while {selected} is selected")]
    BuilderMismatch {
        selected: SchemaType,
        mounted: SchemaType,
    },
}

/// Reasons a submission produced no document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Required metadata is missing; the message is also in the warning slot.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Metadata is valid but no type has been selected.
    #[error("no schema type selected")]
    NoTypeSelected,
}
