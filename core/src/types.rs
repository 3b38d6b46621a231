//! Form-level type definitions.
//!
//! This module defines the closed set of schema types a form can select and
//! the metadata fields every document carries. The types serialize with
//! [`serde`] using the same lowercase names the form input uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FormError;

/// Top-level type selected for a schema.
///
/// `Boolean` and `Null` are terminal: they need no further options. The
/// other six are configured through a builder (see
/// [`TypeOptions`](crate::TypeOptions)).
///
/// # Examples
///
/// ```
/// use schema_form_core::SchemaType;
///
/// let ty: SchemaType = "enums".parse().unwrap();
/// assert_eq!(ty, SchemaType::Enums);
/// assert_eq!(ty.label(), "Enums");
/// assert!(!ty.is_terminal());
/// assert!(SchemaType::Null.is_terminal());
/// assert!("integer".parse::<SchemaType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Text value, configured by [`StringOptions`](crate::StringOptions).
    String,
    /// Numeric value, configured by [`NumberOptions`](crate::NumberOptions).
    Number,
    /// Object with named properties.
    Object,
    /// List of items.
    Array,
    /// Fixed set of allowed values.
    Enums,
    /// Union of several sub-schemas.
    Multiple,
    /// `true`/`false`.
    Boolean,
    /// JSON `null`.
    Null,
}

impl SchemaType {
    /// Every selectable type, in the order the type picker lists them.
    pub const ALL: [SchemaType; 8] = [
        SchemaType::String,
        SchemaType::Number,
        SchemaType::Object,
        SchemaType::Array,
        SchemaType::Enums,
        SchemaType::Multiple,
        SchemaType::Boolean,
        SchemaType::Null,
    ];

    /// Returns the wire name (e.g. `"enums"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Enums => "enums",
            SchemaType::Multiple => "multiple",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }

    /// Returns the human-readable label shown in the type picker.
    pub fn label(self) -> &'static str {
        match self {
            SchemaType::String => "String",
            SchemaType::Number => "Number",
            SchemaType::Object => "Object",
            SchemaType::Array => "Array",
            SchemaType::Enums => "Enums",
            SchemaType::Multiple => "Multiple",
            SchemaType::Boolean => "Boolean",
            SchemaType::Null => "Null",
        }
    }

    /// Returns `true` for types that take no further options.
    pub fn is_terminal(self) -> bool {
        matches!(self, SchemaType::Boolean | SchemaType::Null)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| FormError::UnknownType(s.to_string()))
    }
}

/// One of the three required metadata fields.
///
/// Parses from the bare field name or the `schema-` prefixed input name
/// used by form inputs.
///
/// # Examples
///
/// ```
/// use schema_form_core::MetadataField;
///
/// assert_eq!("title".parse::<MetadataField>().unwrap(), MetadataField::Title);
/// assert_eq!("schema-id".parse::<MetadataField>().unwrap(), MetadataField::Id);
/// assert!("schema-author".parse::<MetadataField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Title,
    Description,
    Id,
}

impl MetadataField {
    /// Returns the document key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Description => "description",
            MetadataField::Id => "id",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("schema-").unwrap_or(s) {
            "title" => Ok(MetadataField::Title),
            "description" => Ok(MetadataField::Description),
            "id" => Ok(MetadataField::Id),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// Top-level metadata of the schema being built.
///
/// Fields stay `None` until the user enters something. All three must be
/// non-empty before a document can be assembled.
///
/// # Examples
///
/// ```
/// use schema_form_core::{MetadataField, SchemaMetadata};
///
/// let mut metadata = SchemaMetadata::default();
/// metadata.set(MetadataField::Title, "Person");
/// assert_eq!(metadata.get(MetadataField::Title), Some("Person"));
/// assert_eq!(metadata.get(MetadataField::Id), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    /// Schema title
    pub title: Option<String>,
    /// Schema description
    pub description: Option<String>,
    /// Schema identifier
    pub id: Option<String>,
}

impl SchemaMetadata {
    /// Returns the current value of `field`.
    pub fn get(&self, field: MetadataField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Replaces `field`, leaving the other fields untouched.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    fn slot(&self, field: MetadataField) -> &Option<String> {
        match field {
            MetadataField::Title => &self.title,
            MetadataField::Description => &self.description,
            MetadataField::Id => &self.id,
        }
    }

    fn slot_mut(&mut self, field: MetadataField) -> &mut Option<String> {
        match field {
            MetadataField::Title => &mut self.title,
            MetadataField::Description => &mut self.description,
            MetadataField::Id => &mut self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_type_round_trips_wire_names() {
        for ty in SchemaType::ALL {
            assert_eq!(ty.as_str().parse::<SchemaType>().unwrap(), ty);
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }

    #[test]
    fn test_schema_type_serde_uses_lowercase() {
        let json = serde_json::to_string(&SchemaType::Multiple).unwrap();
        assert_eq!(json, "\"multiple\"");
        let ty: SchemaType = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(ty, SchemaType::Boolean);
    }

    #[test]
    fn test_only_boolean_and_null_are_terminal() {
        let terminal: Vec<_> = SchemaType::ALL
            .into_iter()
            .filter(|ty| ty.is_terminal())
            .collect();
        assert_eq!(terminal, vec![SchemaType::Boolean, SchemaType::Null]);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = "String".parse::<SchemaType>().unwrap_err();
        assert!(matches!(err, FormError::UnknownType(ref name) if name == "String"));
    }

    #[test]
    fn test_metadata_set_leaves_other_fields() {
        let mut metadata = SchemaMetadata::default();
        metadata.set(MetadataField::Title, "A");
        metadata.set(MetadataField::Id, "x");
        metadata.set(MetadataField::Title, "B");

        assert_eq!(metadata.title.as_deref(), Some("B"));
        assert_eq!(metadata.description, None);
        assert_eq!(metadata.id.as_deref(), Some("x"));
    }
}
