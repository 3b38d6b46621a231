use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ExtractOptions, Fragment, TypeOptions, insert_some, type_fragment};

/// Options for an `array` schema.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let options = ArrayOptions::default()
///     .with_items(SchemaType::Boolean.into())
///     .with_max_items(3);
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({ "type": "array", "items": { "type": "boolean" }, "maxItems": 3 })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrayOptions {
    /// Schema every item must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<TypeOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Items must be pairwise distinct
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique_items: bool,
}

impl ArrayOptions {
    /// Sets the item schema.
    pub fn with_items(mut self, items: TypeOptions) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    /// Sets the minimum item count.
    pub fn with_min_items(mut self, min: u64) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Sets the maximum item count.
    pub fn with_max_items(mut self, max: u64) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Requires items to be unique.
    pub fn unique(mut self) -> Self {
        self.unique_items = true;
        self
    }
}

impl ExtractOptions for ArrayOptions {
    fn extract_options(&self) -> Fragment {
        let mut fragment = type_fragment("array");
        insert_some(
            &mut fragment,
            "items",
            self.items
                .as_ref()
                .map(|items| Value::Object(items.extract_options())),
        );
        insert_some(&mut fragment, "minItems", self.min_items);
        insert_some(&mut fragment, "maxItems", self.max_items);
        if self.unique_items {
            fragment.insert("uniqueItems".into(), Value::Bool(true));
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{EnumsOptions, SchemaType};

    #[test]
    fn test_unique_items_only_emitted_when_set() {
        let plain = ArrayOptions::default().with_min_items(1);
        assert!(!plain.extract_options().contains_key("uniqueItems"));

        let unique = plain.unique();
        assert_eq!(unique.extract_options()["uniqueItems"], json!(true));
    }

    #[test]
    fn test_array_of_arrays() {
        let inner = ArrayOptions::default().with_items(SchemaType::Number.into());
        let outer = ArrayOptions::default().with_items(TypeOptions::Array(inner));

        assert_eq!(
            Value::Object(outer.extract_options()),
            json!({
                "type": "array",
                "items": { "type": "array", "items": { "type": "number" } }
            })
        );
    }

    #[test]
    fn test_items_may_be_enum() {
        let colors = EnumsOptions::default().with_value("red").with_value("blue");
        let options = ArrayOptions::default().with_items(TypeOptions::Enums(colors));
        assert_eq!(
            options.extract_options()["items"],
            json!({ "enum": ["red", "blue"] })
        );
    }
}
