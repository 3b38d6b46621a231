use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ExtractOptions, Fragment, TypeOptions};

/// How the variants of a [`MultipleOptions`] schema combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Combinator {
    /// At least one variant matches.
    #[default]
    AnyOf,
    /// Exactly one variant matches.
    OneOf,
    /// Every variant matches.
    AllOf,
}

impl Combinator {
    /// Returns the JSON Schema keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Combinator::AnyOf => "anyOf",
            Combinator::OneOf => "oneOf",
            Combinator::AllOf => "allOf",
        }
    }
}

/// Options for a union of several sub-schemas.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let options = MultipleOptions::default()
///     .with_combinator(Combinator::OneOf)
///     .with_variant(SchemaType::String.into())
///     .with_variant(SchemaType::Null.into());
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({ "oneOf": [{ "type": "string" }, { "type": "null" }] })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultipleOptions {
    pub combinator: Combinator,
    /// Sub-schemas in the union
    pub variants: Vec<TypeOptions>,
}

impl MultipleOptions {
    /// Sets the combinator.
    pub fn with_combinator(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    /// Appends a variant.
    pub fn with_variant(mut self, variant: TypeOptions) -> Self {
        self.variants.push(variant);
        self
    }
}

impl ExtractOptions for MultipleOptions {
    fn extract_options(&self) -> Fragment {
        let variants = self
            .variants
            .iter()
            .map(|variant| Value::Object(variant.extract_options()))
            .collect();

        let mut fragment = Fragment::new();
        fragment.insert(self.combinator.keyword().into(), Value::Array(variants));
        fragment
    }
}
