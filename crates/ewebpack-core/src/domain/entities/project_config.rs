//! The `ewebpack.json` configuration document.
//!
//! [`ProjectConfig::default`] is the built-in document. A persisted document
//! never mutates it: [`ProjectConfig::merged_with`] validates the loaded JSON
//! and returns a new value with the overrides applied.
//!
//! # Merge rules
//!
//! - Top-level keys other than `main` / `renderer` are carried over verbatim.
//! - Inside `main` / `renderer`, every field present in the loaded section
//!   replaces the default; absent fields keep the default; unknown fields are
//!   kept.
//! - Nothing deeper than a section field is merged: a field's value is
//!   replaced wholesale.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::ProcessKind};

/// File name of the configuration document at the project root.
pub const CONFIG_FILE_NAME: &str = "ewebpack.json";

/// Per-process section of the configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSection {
    /// Source directory, relative to the project root.
    pub src: String,

    /// File name of the webpack configuration written into `src`.
    #[serde(rename = "webpack-config")]
    pub webpack_config: String,

    /// Reserved; carried through but never acted on.
    #[serde(rename = "webpack-override")]
    pub webpack_override: bool,

    /// Fields ewebpack does not know about, preserved as loaded.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProcessSection {
    fn with_src(src: &str) -> Self {
        Self {
            src: src.to_owned(),
            webpack_config: "webpack.config.js".to_owned(),
            webpack_override: false,
            extra: Map::new(),
        }
    }
}

/// The resolved configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub main: ProcessSection,
    pub renderer: ProcessSection,

    /// Top-level fields ewebpack does not know about, preserved as loaded.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            main: ProcessSection::with_src("src/main"),
            renderer: ProcessSection::with_src("src/renderer"),
            extra: Map::new(),
        }
    }
}

impl ProjectConfig {
    /// Section for the given process.
    pub fn section(&self, process: ProcessKind) -> &ProcessSection {
        match process {
            ProcessKind::Main => &self.main,
            ProcessKind::Renderer => &self.renderer,
        }
    }

    /// Parse a persisted document and merge it over the built-in defaults.
    ///
    /// `path` is only used for error messages.
    pub fn from_json_str(contents: &str, path: &Path) -> Result<Self, DomainError> {
        let loaded: Value =
            serde_json::from_str(contents).map_err(|e| DomainError::MalformedConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::default().merged_with(&loaded)
    }

    /// Return a new document with `overrides` applied on top of `self`.
    ///
    /// `overrides` is validated first; a shape error names the offending field.
    pub fn merged_with(&self, overrides: &Value) -> Result<Self, DomainError> {
        DomainValidator::validate_config_document(overrides)?;

        let mut merged = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(DomainError::Serialization(
                    "configuration did not encode as an object".into(),
                ));
            }
            Err(e) => return Err(DomainError::Serialization(e.to_string())),
        };

        // Validation guarantees an object.
        let Some(overrides) = overrides.as_object() else {
            return Err(DomainError::InvalidConfig {
                field: "<root>".into(),
                reason: "expected a JSON object".into(),
            });
        };

        for (key, value) in overrides {
            let is_section = ProcessKind::ALL.iter().any(|p| p.as_str() == key);
            if is_section {
                if let (Some(Value::Object(base)), Value::Object(fields)) =
                    (merged.get_mut(key), value)
                {
                    for (field, field_value) in fields {
                        base.insert(field.clone(), field_value.clone());
                    }
                    continue;
                }
            }
            merged.insert(key.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(merged)).map_err(|e| DomainError::InvalidConfig {
            field: "<root>".into(),
            reason: e.to_string(),
        })
    }

    /// Render the document the way it is persisted: 2-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Serialization(e.to_string()))
    }
}
