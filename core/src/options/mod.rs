//! Type-specific option builders.
//!
//! Each selectable type with further options has a builder that owns its
//! option state and turns it into a JSON Schema fragment through
//! [`ExtractOptions`]. [`TypeOptions`] ties a builder to its type so the
//! assembler can dispatch with a plain `match`.
//!
//! Builders also deserialize from form files, tagged by `type`:
//!
//! ```
//! use schema_form_core::*;
//! use serde_json::json;
//!
//! let options: TypeOptions = serde_yaml::from_str(
//!     "type: array\nitems: { type: string, maxLength: 8 }\nuniqueItems: true",
//! )
//! .unwrap();
//! assert_eq!(options.schema_type(), SchemaType::Array);
//! assert_eq!(
//!     serde_json::Value::Object(options.extract_options()),
//!     json!({
//!         "type": "array",
//!         "items": { "type": "string", "maxLength": 8 },
//!         "uniqueItems": true
//!     })
//! );
//! ```

mod array;
mod enums;
mod multiple;
mod number;
mod object;
mod string;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{FormError, SchemaType};

pub use array::ArrayOptions;
pub use enums::EnumsOptions;
pub use multiple::{Combinator, MultipleOptions};
pub use number::NumberOptions;
pub use object::{ObjectOptions, PropertyOptions};
pub use string::{StringFormat, StringOptions};

/// JSON Schema fragment produced by a builder.
pub type Fragment = Map<String, Value>;

/// Conversion of builder state into a schema fragment.
///
/// Implementations must be a pure read of current state: calling
/// `extract_options` twice without mutation in between yields equal
/// fragments.
pub trait ExtractOptions {
    /// Returns the complete fragment for the builder's type.
    fn extract_options(&self) -> Fragment;
}

/// A selected type together with its option builder.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
///
/// let fresh = TypeOptions::fresh(SchemaType::Number);
/// assert_eq!(fresh.schema_type(), SchemaType::Number);
/// assert_eq!(fresh, TypeOptions::Number(NumberOptions::default()));
///
/// let terminal = TypeOptions::fresh(SchemaType::Null);
/// assert_eq!(terminal.extract_options()["type"], "null");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeOptions {
    String(StringOptions),
    Number(NumberOptions),
    Object(ObjectOptions),
    Array(ArrayOptions),
    Enums(EnumsOptions),
    Multiple(MultipleOptions),
    Boolean,
    Null,
}

impl TypeOptions {
    /// Creates a builder holding only defaults for `ty`.
    pub fn fresh(ty: SchemaType) -> Self {
        match ty {
            SchemaType::String => TypeOptions::String(StringOptions::default()),
            SchemaType::Number => TypeOptions::Number(NumberOptions::default()),
            SchemaType::Object => TypeOptions::Object(ObjectOptions::default()),
            SchemaType::Array => TypeOptions::Array(ArrayOptions::default()),
            SchemaType::Enums => TypeOptions::Enums(EnumsOptions::default()),
            SchemaType::Multiple => TypeOptions::Multiple(MultipleOptions::default()),
            SchemaType::Boolean => TypeOptions::Boolean,
            SchemaType::Null => TypeOptions::Null,
        }
    }

    /// Returns the type these options belong to.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            TypeOptions::String(_) => SchemaType::String,
            TypeOptions::Number(_) => SchemaType::Number,
            TypeOptions::Object(_) => SchemaType::Object,
            TypeOptions::Array(_) => SchemaType::Array,
            TypeOptions::Enums(_) => SchemaType::Enums,
            TypeOptions::Multiple(_) => SchemaType::Multiple,
            TypeOptions::Boolean => SchemaType::Boolean,
            TypeOptions::Null => SchemaType::Null,
        }
    }

    /// Checks option values that cannot be enforced by their types, such as
    /// string patterns, including those of nested builders.
    pub fn verify(&self) -> Result<(), FormError> {
        match self {
            TypeOptions::String(options) => options.verify(),
            TypeOptions::Object(options) => options
                .properties
                .iter()
                .try_for_each(|property| property.schema.verify()),
            TypeOptions::Array(options) => match &options.items {
                Some(items) => items.verify(),
                None => Ok(()),
            },
            TypeOptions::Multiple(options) => {
                options.variants.iter().try_for_each(TypeOptions::verify)
            }
            TypeOptions::Number(_)
            | TypeOptions::Enums(_)
            | TypeOptions::Boolean
            | TypeOptions::Null => Ok(()),
        }
    }

    /// Returns the [`StringOptions`] builder if this is the `string` variant.
    pub fn as_string_mut(&mut self) -> Option<&mut StringOptions> {
        match self {
            TypeOptions::String(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the [`NumberOptions`] builder if this is the `number` variant.
    pub fn as_number_mut(&mut self) -> Option<&mut NumberOptions> {
        match self {
            TypeOptions::Number(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the [`ObjectOptions`] builder if this is the `object` variant.
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectOptions> {
        match self {
            TypeOptions::Object(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the [`ArrayOptions`] builder if this is the `array` variant.
    pub fn as_array_mut(&mut self) -> Option<&mut ArrayOptions> {
        match self {
            TypeOptions::Array(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the [`EnumsOptions`] builder if this is the `enums` variant.
    pub fn as_enums_mut(&mut self) -> Option<&mut EnumsOptions> {
        match self {
            TypeOptions::Enums(options) => Some(options),
            _ => None,
        }
    }

    /// Returns the [`MultipleOptions`] builder if this is the `multiple` variant.
    pub fn as_multiple_mut(&mut self) -> Option<&mut MultipleOptions> {
        match self {
            TypeOptions::Multiple(options) => Some(options),
            _ => None,
        }
    }
}

impl ExtractOptions for TypeOptions {
    fn extract_options(&self) -> Fragment {
        match self {
            TypeOptions::String(options) => options.extract_options(),
            TypeOptions::Number(options) => options.extract_options(),
            TypeOptions::Object(options) => options.extract_options(),
            TypeOptions::Array(options) => options.extract_options(),
            TypeOptions::Enums(options) => options.extract_options(),
            TypeOptions::Multiple(options) => options.extract_options(),
            TypeOptions::Boolean | TypeOptions::Null => type_fragment(self.schema_type().as_str()),
        }
    }
}

impl From<SchemaType> for TypeOptions {
    fn from(ty: SchemaType) -> Self {
        TypeOptions::fresh(ty)
    }
}

/// Starts a fragment with its `type` key.
fn type_fragment(ty: &str) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.insert("type".into(), Value::from(ty));
    fragment
}

/// Inserts `value` under `key` when it is set.
fn insert_some<T: Into<Value>>(fragment: &mut Fragment, key: &str, value: Option<T>) {
    if let Some(value) = value {
        fragment.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_fresh_matches_schema_type() {
        for ty in SchemaType::ALL {
            assert_eq!(TypeOptions::fresh(ty).schema_type(), ty);
        }
    }

    #[test]
    fn test_fresh_builders_extract_defaults() {
        let cases = [
            (SchemaType::String, json!({ "type": "string" })),
            (SchemaType::Number, json!({ "type": "number" })),
            (SchemaType::Object, json!({ "type": "object", "properties": {} })),
            (SchemaType::Array, json!({ "type": "array" })),
            (SchemaType::Enums, json!({ "enum": [] })),
            (SchemaType::Multiple, json!({ "anyOf": [] })),
            (SchemaType::Boolean, json!({ "type": "boolean" })),
            (SchemaType::Null, json!({ "type": "null" })),
        ];

        for (ty, expected) in cases {
            let fragment = TypeOptions::fresh(ty).extract_options();
            assert_eq!(Value::Object(fragment), expected, "fragment for {ty}");
        }
    }

    #[test]
    fn test_deserialize_terminal_types() {
        let options: TypeOptions = serde_yaml::from_str("type: boolean").unwrap();
        assert_eq!(options, TypeOptions::Boolean);
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let result: Result<TypeOptions, _> = serde_yaml::from_str("type: integer");
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_finds_nested_bad_pattern() {
        let options: TypeOptions = serde_yaml::from_str(
            r#"
type: multiple
variants:
  - type: number
  - type: array
    items:
      type: string
      pattern: "([a-z"
"#,
        )
        .unwrap();

        let err = options.verify().unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { ref pattern, .. } if pattern == "([a-z"));
    }

    #[test]
    fn test_typed_accessors_only_match_own_variant() {
        let mut options = TypeOptions::fresh(SchemaType::Enums);
        assert!(options.as_enums_mut().is_some());
        assert!(options.as_number_mut().is_none());
        assert!(options.as_string_mut().is_none());
    }
}
