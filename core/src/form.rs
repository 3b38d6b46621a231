//! Form files: a complete form submission described in YAML.
//!
//! A form file carries the metadata fields and, optionally, the type options
//! tagged by `type`. JSON files load as well, since JSON is valid YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! title: Person
//! description: A person record
//! id: person
//! schema:
//!   type: object
//!   additionalProperties: false
//!   properties:
//!     - name: name
//!       required: true
//!       schema: { type: string, minLength: 1 }
//!     - name: age
//!       schema: { type: number, integer: true, minimum: 0 }
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FormError, MetadataField, SchemaAssembler, TypeOptions};

/// One form submission loaded from disk.
///
/// # Examples
///
/// ```
/// use schema_form_core::*;
///
/// let form = FormFile::from_yaml_str(
///     "title: Flag\ndescription: On or off\nid: flag\nschema: { type: boolean }\n",
/// )
/// .unwrap();
///
/// let mut assembler = SchemaAssembler::new();
/// form.apply(&mut assembler).unwrap();
/// let document = assembler.assemble().unwrap();
/// assert_eq!(document.get("type").unwrap(), "boolean");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Selected type and its options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<TypeOptions>,
}

impl FormFile {
    /// Loads a form file.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Io`] if the file cannot be read, or
    /// [`FormError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading form file");
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let form = serde_yaml::from_reader(reader)?;
        Ok(form)
    }

    /// Parses a form from YAML (or JSON) text.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Yaml`] if parsing fails.
    pub fn from_yaml_str(text: &str) -> Result<Self, FormError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Saves the form as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Io`] if the file cannot be written, or
    /// [`FormError::Yaml`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FormError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Replays the form onto `assembler` as input events.
    ///
    /// Metadata fields present in the file replace the assembler's values;
    /// absent ones are left alone. A `schema` entry selects its type and
    /// mounts the options as the active builder.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidPattern`] if a string pattern does not
    /// compile. Metadata is applied before the options are checked.
    pub fn apply(&self, assembler: &mut SchemaAssembler) -> Result<(), FormError> {
        let fields = [
            (MetadataField::Title, &self.title),
            (MetadataField::Description, &self.description),
            (MetadataField::Id, &self.id),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                assembler.update_metadata(field, value.as_str());
            }
        }

        if let Some(options) = &self.schema {
            assembler.select_type(options.schema_type());
            assembler.mount_builder(options.clone())?;
        }
        Ok(())
    }
}
