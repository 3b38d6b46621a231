use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SchemaType;
use crate::options::Fragment;
use crate::validate::RequiredMetadata;

/// `$schema` value written into every assembled document.
pub const JSON_SCHEMA_URI: &str = "http://json-schema.org/schema#";

/// Assembled JSON Schema document.
///
/// Always carries `$schema`, `title`, `description` and `id`, followed by
/// the type fragment. Keys keep their insertion order when serialized.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
///
/// let mut assembler = SchemaAssembler::new();
/// assembler.update_metadata(MetadataField::Title, "Flag");
/// assembler.update_metadata(MetadataField::Description, "On or off");
/// assembler.update_metadata(MetadataField::Id, "flag");
/// assembler.select_type(SchemaType::Boolean);
///
/// let document = assembler.assemble().unwrap();
/// assert_eq!(document.schema_uri(), Some(JSON_SCHEMA_URI));
/// assert_eq!(document.title(), Some("Flag"));
/// assert_eq!(
///     document.keys().collect::<Vec<_>>(),
///     vec!["$schema", "title", "description", "id", "type"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocument(Map<String, Value>);

impl SchemaDocument {
    pub(crate) fn new(metadata: RequiredMetadata<'_>) -> Self {
        let mut map = Map::new();
        map.insert("$schema".into(), Value::from(JSON_SCHEMA_URI));
        map.insert("title".into(), Value::from(metadata.title));
        map.insert("description".into(), Value::from(metadata.description));
        map.insert("id".into(), Value::from(metadata.id));
        Self(map)
    }

    pub(crate) fn set_type(&mut self, ty: SchemaType) {
        self.0.insert("type".into(), Value::from(ty.as_str()));
    }

    /// Merges a type fragment; fragment keys overwrite existing keys.
    pub(crate) fn merge(&mut self, fragment: Fragment) {
        for (key, value) in fragment {
            self.0.insert(key, value);
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the `$schema` URI.
    pub fn schema_uri(&self) -> Option<&str> {
        self.get_str("$schema")
    }

    /// Returns the document title.
    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    /// Returns the document description.
    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    /// Returns the document id.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Iterates over the top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts into a [`serde_json::Value`].
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Serializes as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
