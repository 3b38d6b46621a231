//! Schema assembly engine for JSON Schema documents built from form input.
//!
//! This crate holds the state of one in-progress schema form and turns it
//! into a JSON Schema document:
//!
//! - [`SchemaAssembler`] — owns the top-level metadata (`title`,
//!   `description`, `id`), the selected [`SchemaType`], the active type
//!   builder, and the single validation warning slot.
//! - [`TypeOptions`] — the selected type together with its option builder
//!   ([`StringOptions`], [`NumberOptions`], [`ObjectOptions`],
//!   [`ArrayOptions`], [`EnumsOptions`], [`MultipleOptions`]).
//! - [`SchemaDocument`] — the assembled output handed to a consumer.
//! - [`FormFile`] — a YAML description of a form submission, replayed onto an
//!   assembler.
//!
//! Validation ([`validate_metadata`]) checks the required metadata fields in
//! order and reports the first missing one.
//!
//! # Example
//!
//! ```
//! use schema_form_core::*;
//! use serde_json::json;
//!
//! let mut assembler = SchemaAssembler::new();
//! assembler.update_metadata(MetadataField::Title, "Age");
//! assembler.update_metadata(MetadataField::Description, "Age in years");
//! assembler.update_metadata(MetadataField::Id, "age");
//! assembler.select_type(SchemaType::Number);
//! assembler
//!     .builder_mut()
//!     .and_then(TypeOptions::as_number_mut)
//!     .unwrap()
//!     .minimum = Some(0.into());
//!
//! let document = assembler.assemble().unwrap();
//! assert_eq!(
//!     document.into_value(),
//!     json!({
//!         "$schema": "http://json-schema.org/schema#",
//!         "title": "Age",
//!         "description": "Age in years",
//!         "id": "age",
//!         "type": "number",
//!         "minimum": 0
//!     })
//! );
//! ```

mod assembler;
mod document;
mod error;
mod form;
mod options;
mod types;
mod validate;

pub use assembler::SchemaAssembler;
pub use document::{JSON_SCHEMA_URI, SchemaDocument};
pub use error::{FormError, SubmitError};
pub use form::FormFile;
pub use options::{
    ArrayOptions, Combinator, EnumsOptions, ExtractOptions, Fragment, MultipleOptions,
    NumberOptions, ObjectOptions, PropertyOptions, StringFormat, StringOptions, TypeOptions,
};
pub use types::*;
pub use validate::{ValidationError, WARNING_HEADER, validate_metadata};
