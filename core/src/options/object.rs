use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{ExtractOptions, Fragment, TypeOptions, insert_some, type_fragment};

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOptions {
    /// Property name
    pub name: String,
    /// Whether the property must be present
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Options for the property's own schema
    pub schema: TypeOptions,
}

impl PropertyOptions {
    /// Creates an optional property.
    pub fn optional(name: &str, schema: TypeOptions) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            schema,
        }
    }

    /// Creates a required property.
    pub fn required(name: &str, schema: TypeOptions) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            schema,
        }
    }
}

/// Options for an `object` schema.
///
/// Properties keep the order they were added in. Adding a property whose
/// name already exists replaces it in place.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let options = ObjectOptions::default()
///     .with_property(PropertyOptions::required("name", SchemaType::String.into()))
///     .with_property(PropertyOptions::optional("age", SchemaType::Number.into()))
///     .with_additional_properties(false);
///
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({
///         "type": "object",
///         "properties": {
///             "name": { "type": "string" },
///             "age": { "type": "number" }
///         },
///         "required": ["name"],
///         "additionalProperties": false
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectOptions {
    /// Declared properties
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_properties"
    )]
    pub properties: Vec<PropertyOptions>,
    /// Whether undeclared properties are allowed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
    /// Minimum number of properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Maximum number of properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
}

impl ObjectOptions {
    /// Adds a property, replacing any existing property of the same name.
    pub fn add_property(&mut self, property: PropertyOptions) {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Removes a property by name, returning it if present.
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyOptions> {
        let index = self.properties.iter().position(|p| p.name == name)?;
        Some(self.properties.remove(index))
    }

    /// Finds a property by name.
    pub fn find_property(&self, name: &str) -> Option<&PropertyOptions> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Adds a property (builder form of [`add_property`](Self::add_property)).
    pub fn with_property(mut self, property: PropertyOptions) -> Self {
        self.add_property(property);
        self
    }

    /// Sets whether undeclared properties are allowed.
    pub fn with_additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    /// Sets the minimum property count.
    pub fn with_min_properties(mut self, min: u64) -> Self {
        self.min_properties = Some(min);
        self
    }

    /// Sets the maximum property count.
    pub fn with_max_properties(mut self, max: u64) -> Self {
        self.max_properties = Some(max);
        self
    }

    /// Names of the required properties, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect()
    }
}

/// Folds listed properties through [`ObjectOptions::add_property`] so a
/// repeated name replaces the earlier entry.
fn deserialize_properties<'de, D>(deserializer: D) -> Result<Vec<PropertyOptions>, D::Error>
where
    D: Deserializer<'de>,
{
    let listed = Vec::<PropertyOptions>::deserialize(deserializer)?;
    let mut options = ObjectOptions::default();
    for property in listed {
        options.add_property(property);
    }
    Ok(options.properties)
}

impl ExtractOptions for ObjectOptions {
    fn extract_options(&self) -> Fragment {
        let mut fragment = type_fragment("object");

        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.clone(), Value::Object(p.schema.extract_options())))
            .collect();
        fragment.insert("properties".into(), Value::Object(properties));

        let required = self.required_names();
        if !required.is_empty() {
            fragment.insert("required".into(), Value::from(required));
        }

        insert_some(&mut fragment, "additionalProperties", self.additional_properties);
        insert_some(&mut fragment, "minProperties", self.min_properties);
        insert_some(&mut fragment, "maxProperties", self.max_properties);
        fragment
    }
}
