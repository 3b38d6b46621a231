use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ExtractOptions, Fragment, insert_some, type_fragment};
use crate::FormError;

/// Predefined string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    #[serde(rename = "date-time")]
    DateTime,
    Email,
    Hostname,
    Ipv4,
    Ipv6,
    Uri,
}

impl StringFormat {
    /// Returns the JSON Schema `format` value.
    pub fn as_str(self) -> &'static str {
        match self {
            StringFormat::DateTime => "date-time",
            StringFormat::Email => "email",
            StringFormat::Hostname => "hostname",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
            StringFormat::Uri => "uri",
        }
    }
}

/// Options for a `string` schema.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
/// use serde_json::json;
///
/// let options = StringOptions::default()
///     .with_min_length(2)
///     .with_pattern("^[A-Z]")
///     .unwrap();
/// assert_eq!(
///     serde_json::Value::Object(options.extract_options()),
///     json!({ "type": "string", "minLength": 2, "pattern": "^[A-Z]" })
/// );
///
/// assert!(StringOptions::default().with_pattern("(").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringOptions {
    /// Minimum length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Predefined format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

impl StringOptions {
    /// Sets the minimum length.
    pub fn with_min_length(mut self, min: u64) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the pattern after checking that it compiles.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, FormError> {
        self.set_pattern(pattern)?;
        Ok(self)
    }

    /// Replaces the pattern in place; an invalid pattern leaves the current
    /// one untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn set_pattern(&mut self, pattern: &str) -> Result<(), FormError> {
        check_pattern(pattern)?;
        self.pattern = Some(pattern.to_string());
        Ok(())
    }

    /// Sets the format.
    pub fn with_format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub(crate) fn verify(&self) -> Result<(), FormError> {
        match &self.pattern {
            Some(pattern) => check_pattern(pattern),
            None => Ok(()),
        }
    }
}

fn check_pattern(pattern: &str) -> Result<(), FormError> {
    Regex::new(pattern).map(|_| ()).map_err(|source| {
        debug!(pattern, "rejected string pattern");
        FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })
}

impl ExtractOptions for StringOptions {
    fn extract_options(&self) -> Fragment {
        let mut fragment = type_fragment("string");
        insert_some(&mut fragment, "minLength", self.min_length);
        insert_some(&mut fragment, "maxLength", self.max_length);
        insert_some(&mut fragment, "pattern", self.pattern.as_deref());
        insert_some(&mut fragment, "format", self.format.map(StringFormat::as_str));
        fragment
    }
}
