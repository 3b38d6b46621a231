use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{ExtractOptions, Fragment};

/// Options for an enumeration: a fixed list of allowed JSON values.
///
/// Values are kept in insertion order; adding a value that is already
/// present is a no-op.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let mut options = EnumsOptions::default();
/// options.add_value("small");
/// options.add_value(json!(1));
/// options.add_value("small");
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({ "enum": ["small", 1] })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumsOptions {
    /// Allowed values
    #[serde(deserialize_with = "deserialize_values")]
    pub values: Vec<Value>,
}

impl EnumsOptions {
    /// Adds a value unless it is already present.
    pub fn add_value(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }

    /// Removes a value, returning `true` if it was present.
    pub fn remove_value(&mut self, value: &Value) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Adds a value (builder form of [`add_value`](Self::add_value)).
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.add_value(value);
        self
    }
}

/// Drops repeated values the same way [`EnumsOptions::add_value`] does.
fn deserialize_values<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let listed = Vec::<Value>::deserialize(deserializer)?;
    let mut options = EnumsOptions::default();
    for value in listed {
        options.add_value(value);
    }
    Ok(options.values)
}

impl ExtractOptions for EnumsOptions {
    fn extract_options(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.insert("enum".into(), Value::Array(self.values.clone()));
        fragment
    }
}
