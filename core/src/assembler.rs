//! In-progress schema state and submission.
//!
//! [`SchemaAssembler`] is the state of one schema form. Input events update
//! the metadata and the selected type; submitting validates the metadata,
//! asks the active builder for its fragment and merges it into a
//! [`SchemaDocument`].
//!
//! # Example
//!
//! ```
//! use schema_form_core::*;
//!
//! let mut assembler = SchemaAssembler::new();
//! assembler.handle_change("schema-title", "Tags").unwrap();
//! assembler.handle_change("type", "enums").unwrap();
//!
//! // Description and id are still missing.
//! let mut received = Vec::new();
//! let result = assembler.submit(|document| received.push(document));
//! assert_eq!(result, Err(SubmitError::Validation(ValidationError::MissingDescription)));
//! assert_eq!(assembler.warning(), Some("Please enter a description value"));
//! assert!(received.is_empty());
//!
//! assembler.handle_change("schema-description", "Allowed tags").unwrap();
//! assembler.handle_change("schema-id", "tags").unwrap();
//! assembler.submit(|document| received.push(document)).unwrap();
//! assert_eq!(assembler.warning(), None);
//! assert_eq!(received.len(), 1);
//! ```

use tracing::{debug, error, info};

use crate::document::SchemaDocument;
use crate::options::{ExtractOptions, TypeOptions};
use crate::validate::{ValidationError, require_all};
use crate::{FormError, MetadataField, SchemaMetadata, SchemaType, SubmitError};

/// State of one schema form.
///
/// Holds the metadata, the selected type with its builder, and the most
/// recent validation warning. Selecting a different type discards the
/// previous builder; the new one starts from defaults.
#[derive(Debug, Clone, Default)]
pub struct SchemaAssembler {
    metadata: SchemaMetadata,
    selection: Option<TypeOptions>,
    warning: Option<ValidationError>,
}

impl SchemaAssembler {
    /// Creates an empty form: no metadata, no type, no warning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current metadata.
    pub fn metadata(&self) -> &SchemaMetadata {
        &self.metadata
    }

    /// Replaces one metadata field with the raw input text.
    pub fn update_metadata(&mut self, field: MetadataField, value: impl Into<String>) {
        let value = value.into();
        debug!(%field, %value, "metadata updated");
        self.metadata.set(field, value);
    }

    /// Selects the top-level type.
    ///
    /// A different type mounts a fresh builder with default options.
    /// Selecting the type that is already selected keeps its builder.
    pub fn select_type(&mut self, ty: SchemaType) {
        if self.selected_type() == Some(ty) {
            debug!(%ty, "type reselected, keeping builder");
            return;
        }
        debug!(%ty, previous = ?self.selected_type(), "type selected");
        self.selection = Some(TypeOptions::fresh(ty));
    }

    /// Returns the selected type, if any.
    pub fn selected_type(&self) -> Option<SchemaType> {
        self.selection.as_ref().map(TypeOptions::schema_type)
    }

    /// Returns the active builder.
    pub fn builder(&self) -> Option<&TypeOptions> {
        self.selection.as_ref()
    }

    /// Returns the active builder for in-place edits.
    pub fn builder_mut(&mut self) -> Option<&mut TypeOptions> {
        self.selection.as_mut()
    }

    /// Replaces the active builder with preconfigured options.
    ///
    /// # Errors
    ///
    /// The options must belong to the selected type. Returns
    /// [`FormError::NoTypeSelected`] or [`FormError::BuilderMismatch`]
    /// otherwise, and [`FormError::InvalidPattern`] if a string pattern in
    /// the options does not compile.
    pub fn mount_builder(&mut self, options: TypeOptions) -> Result<(), FormError> {
        let mounted = options.schema_type();
        let selected = match self.selected_type() {
            Some(selected) => selected,
            None => {
                error!(%mounted, "builder mounted with no type selected");
                return Err(FormError::NoTypeSelected(mounted));
            }
        };
        if selected != mounted {
            error!(%selected, %mounted, "builder does not match selected type");
            return Err(FormError::BuilderMismatch { selected, mounted });
        }
        options.verify()?;
        self.selection = Some(options);
        Ok(())
    }

    /// Routes a named input change.
    ///
    /// `type` selects a type by its wire name; `schema-title`,
    /// `schema-description`, `schema-id` (or the bare field names) update
    /// metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownType`] for an unsupported type value and
    /// [`FormError::UnknownField`] for an unknown input name. State is left
    /// unchanged in both cases.
    pub fn handle_change(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        if name == "type" {
            let ty: SchemaType = value.parse()?;
            self.select_type(ty);
            return Ok(());
        }

        let field: MetadataField = name.parse()?;
        self.update_metadata(field, value);
        Ok(())
    }

    /// Returns the message of the most recent validation, if it failed.
    pub fn warning(&self) -> Option<&'static str> {
        self.warning.map(ValidationError::message)
    }

    /// Returns the most recent validation failure, if any.
    pub fn validation_error(&self) -> Option<ValidationError> {
        self.warning
    }

    /// Validates the metadata and records the outcome in the warning slot.
    ///
    /// The slot is overwritten on every call, so a passing validation clears
    /// an earlier warning.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = require_all(&self.metadata).map(|_| ());
        self.warning = result.err();
        result
    }

    /// Validates and builds the document without handing it off.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] if metadata is missing (the
    /// warning slot holds the same message) and
    /// [`SubmitError::NoTypeSelected`] if no type was chosen. Edits are kept
    /// in both cases.
    pub fn assemble(&mut self) -> Result<SchemaDocument, SubmitError> {
        if let Err(err) = self.validate() {
            debug!(field = %err.field(), "submission rejected: {err}");
            return Err(err.into());
        }

        let selection = self.selection.as_ref().ok_or(SubmitError::NoTypeSelected)?;
        let metadata = require_all(&self.metadata)?;
        let mut document = SchemaDocument::new(metadata);

        let ty = selection.schema_type();
        if ty.is_terminal() {
            document.set_type(ty);
        } else {
            let fragment = selection.extract_options();
            debug!(%ty, keys = fragment.len(), "extracted type options");
            document.merge(fragment);
        }

        info!(%ty, id = metadata.id, "schema assembled");
        Ok(document)
    }

    /// Validates, builds the document, and passes it to `consumer`.
    ///
    /// `consumer` is called exactly once on success and never on failure.
    ///
    /// # Errors
    ///
    /// Same as [`assemble`](Self::assemble).
    pub fn submit<F>(&mut self, consumer: F) -> Result<(), SubmitError>
    where
        F: FnOnce(SchemaDocument),
    {
        let document = self.assemble()?;
        consumer(document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{NumberOptions, StringOptions};

    fn filled() -> SchemaAssembler {
        let mut assembler = SchemaAssembler::new();
        assembler.update_metadata(MetadataField::Title, "T");
        assembler.update_metadata(MetadataField::Description, "D");
        assembler.update_metadata(MetadataField::Id, "I");
        assembler
    }

    fn submit_value(assembler: &mut SchemaAssembler) -> Value {
        let mut received = None;
        assembler
            .submit(|document| received = Some(document))
            .expect("submission should succeed");
        received.expect("consumer should be called").into_value()
    }

    #[test]
    fn test_missing_title_wins_over_other_fields() {
        let mut assembler = SchemaAssembler::new();
        assembler.update_metadata(MetadataField::Id, "I");

        assert_eq!(assembler.validate(), Err(ValidationError::MissingTitle));
        assert_eq!(assembler.warning(), Some("Please enter a title value"));
    }

    #[test]
    fn test_validate_passes_with_all_fields() {
        let mut assembler = filled();
        assert_eq!(assembler.validate(), Ok(()));
        assert_eq!(assembler.warning(), None);
    }

    #[test]
    fn test_warning_cleared_by_valid_resubmission() {
        let mut assembler = SchemaAssembler::new();
        assembler.select_type(SchemaType::Boolean);
        assembler.update_metadata(MetadataField::Title, "T");

        let mut calls = 0;
        let first = assembler.submit(|_| calls += 1);
        assert_eq!(
            first,
            Err(SubmitError::Validation(ValidationError::MissingDescription))
        );
        assert_eq!(assembler.warning(), Some("Please enter a description value"));

        assembler.update_metadata(MetadataField::Description, "D");
        assembler.update_metadata(MetadataField::Id, "I");
        assembler.submit(|_| calls += 1).unwrap();

        assert_eq!(assembler.warning(), None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_failed_submission_keeps_edits() {
        let mut assembler = SchemaAssembler::new();
        assembler.update_metadata(MetadataField::Title, "Kept");
        assembler.select_type(SchemaType::String);
        assembler
            .mount_builder(TypeOptions::String(StringOptions::default().with_min_length(4)))
            .unwrap();

        assert!(assembler.assemble().is_err());
        assert_eq!(assembler.metadata().title.as_deref(), Some("Kept"));
        assert_eq!(
            assembler.builder(),
            Some(&TypeOptions::String(StringOptions::default().with_min_length(4)))
        );
    }

    #[test]
    fn test_terminal_types_produce_exact_keys() {
        for ty in [SchemaType::Boolean, SchemaType::Null] {
            let mut assembler = filled();
            assembler.select_type(ty);
            assert_eq!(
                submit_value(&mut assembler),
                json!({
                    "$schema": "http://json-schema.org/schema#",
                    "title": "T",
                    "description": "D",
                    "id": "I",
                    "type": ty.as_str()
                })
            );
        }
    }

    #[test]
    fn test_number_fragment_is_merged() {
        let mut assembler = filled();
        assembler.select_type(SchemaType::Number);
        assembler
            .builder_mut()
            .and_then(TypeOptions::as_number_mut)
            .unwrap()
            .minimum = Some(0.into());

        assert_eq!(
            submit_value(&mut assembler),
            json!({
                "$schema": "http://json-schema.org/schema#",
                "title": "T",
                "description": "D",
                "id": "I",
                "type": "number",
                "minimum": 0
            })
        );
    }

    #[test]
    fn test_type_switch_resets_builder() {
        let mut assembler = filled();
        assembler.select_type(SchemaType::Number);
        assembler
            .mount_builder(TypeOptions::Number(NumberOptions::default().with_maximum(10)))
            .unwrap();

        assembler.select_type(SchemaType::String);
        assembler.select_type(SchemaType::Number);

        assert_eq!(
            assembler.builder().unwrap().extract_options(),
            NumberOptions::default().extract_options()
        );
        assert_eq!(submit_value(&mut assembler)["type"], json!("number"));
        assert!(submit_value(&mut assembler).get("maximum").is_none());
    }

    #[test]
    fn test_reselecting_same_type_keeps_builder() {
        let mut assembler = filled();
        assembler.select_type(SchemaType::Number);
        assembler
            .mount_builder(TypeOptions::Number(NumberOptions::default().with_maximum(10)))
            .unwrap();
        assembler.select_type(SchemaType::Number);

        assert_eq!(submit_value(&mut assembler)["maximum"], json!(10));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut assembler = filled();
        assembler.select_type(SchemaType::Object);
        let builder = assembler.builder().unwrap();
        assert_eq!(builder.extract_options(), builder.extract_options());
        assert_eq!(submit_value(&mut assembler), submit_value(&mut assembler));
    }

    #[test]
    fn test_mount_rejects_mismatched_builder() {
        let mut assembler = filled();
        let err = assembler.mount_builder(SchemaType::Array.into()).unwrap_err();
        assert!(matches!(err, FormError::NoTypeSelected(SchemaType::Array)));

        assembler.select_type(SchemaType::Number);
        let err = assembler
            .mount_builder(TypeOptions::String(StringOptions::default()))
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::BuilderMismatch {
                selected: SchemaType::Number,
                mounted: SchemaType::String
            }
        ));
        assert_eq!(assembler.builder(), Some(&TypeOptions::fresh(SchemaType::Number)));
    }

    #[test]
    fn test_submit_without_type_emits_nothing() {
        let mut assembler = filled();
        let mut called = false;
        let result = assembler.submit(|_| called = true);

        assert_eq!(result, Err(SubmitError::NoTypeSelected));
        assert!(!called);
        assert_eq!(assembler.warning(), None);
    }

    #[test]
    fn test_handle_change_routes_inputs() {
        let mut assembler = SchemaAssembler::new();
        assembler.handle_change("schema-title", "T").unwrap();
        assembler.handle_change("description", "D").unwrap();
        assembler.handle_change("type", "null").unwrap();

        assert_eq!(assembler.metadata().title.as_deref(), Some("T"));
        assert_eq!(assembler.metadata().description.as_deref(), Some("D"));
        assert_eq!(assembler.selected_type(), Some(SchemaType::Null));

        assert!(matches!(
            assembler.handle_change("type", "date"),
            Err(FormError::UnknownType(_))
        ));
        assert!(matches!(
            assembler.handle_change("schema-version", "1"),
            Err(FormError::UnknownField(_))
        ));
        assert_eq!(assembler.selected_type(), Some(SchemaType::Null));
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut assembler = filled();
        assembler.select_type(SchemaType::Boolean);
        assembler.update_metadata(MetadataField::Id, "");

        assert_eq!(
            assembler.assemble(),
            Err(SubmitError::Validation(ValidationError::MissingId))
        );
    }
}
