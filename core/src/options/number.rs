use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{ExtractOptions, Fragment, insert_some, type_fragment};

/// Options for a `number` schema.
///
/// Bounds are kept as [`serde_json::Number`] so integral input stays
/// integral in the fragment. Setting `integer` emits `"type": "integer"`.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let options = NumberOptions::default().with_minimum(0).with_maximum(120);
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({ "type": "number", "minimum": 0, "maximum": 120 })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
    /// Restrict to whole numbers
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub integer: bool,
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    /// Exclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,
    /// Exclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,
    /// Value must be a multiple of this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,
}

impl NumberOptions {
    /// Restricts values to integers.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Sets the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: impl Into<Number>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: impl Into<Number>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    /// Sets the exclusive lower bound.
    pub fn with_exclusive_minimum(mut self, minimum: impl Into<Number>) -> Self {
        self.exclusive_minimum = Some(minimum.into());
        self
    }

    /// Sets the exclusive upper bound.
    pub fn with_exclusive_maximum(mut self, maximum: impl Into<Number>) -> Self {
        self.exclusive_maximum = Some(maximum.into());
        self
    }

    /// Sets the `multipleOf` constraint.
    pub fn with_multiple_of(mut self, step: impl Into<Number>) -> Self {
        self.multiple_of = Some(step.into());
        self
    }
}

impl ExtractOptions for NumberOptions {
    fn extract_options(&self) -> Fragment {
        let mut fragment = type_fragment(if self.integer { "integer" } else { "number" });
        insert_some(&mut fragment, "minimum", self.minimum.clone());
        insert_some(&mut fragment, "maximum", self.maximum.clone());
        insert_some(&mut fragment, "exclusiveMinimum", self.exclusive_minimum.clone());
        insert_some(&mut fragment, "exclusiveMaximum", self.exclusive_maximum.clone());
        insert_some(&mut fragment, "multipleOf", self.multiple_of.clone());
        fragment
    }
}
