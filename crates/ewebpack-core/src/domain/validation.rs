use std::ffi::OsStr;
use std::path::{Component, Path};

use serde_json::Value;

use crate::domain::{error::DomainError, value_objects::ProcessKind};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check the shape of a loaded `ewebpack.json` before it is merged.
    ///
    /// Only the known fields are checked; anything else is passed through.
    pub fn validate_config_document(document: &Value) -> Result<(), DomainError> {
        let Some(root) = document.as_object() else {
            return Err(invalid("<root>", "expected a JSON object"));
        };

        for process in ProcessKind::ALL {
            if let Some(section) = root.get(process.as_str()) {
                Self::validate_section(process, section)?;
            }
        }

        Ok(())
    }

    fn validate_section(process: ProcessKind, section: &Value) -> Result<(), DomainError> {
        let Some(fields) = section.as_object() else {
            return Err(invalid(process.as_str(), "expected a JSON object"));
        };

        if let Some(src) = fields.get("src") {
            let field = format!("{process}.src");
            let src = src
                .as_str()
                .ok_or_else(|| invalid(&field, "must be a string"))?;
            if src.trim().is_empty() {
                return Err(invalid(&field, "must not be empty"));
            }
            let path = Path::new(src);
            if path.is_absolute() || path.has_root() {
                return Err(invalid(&field, "must be relative to the project root"));
            }
            if path.components().any(|c| c == Component::ParentDir) {
                return Err(invalid(&field, "must stay inside the project root"));
            }
        }

        if let Some(name) = fields.get("webpack-config") {
            let field = format!("{process}.webpack-config");
            let name = name
                .as_str()
                .ok_or_else(|| invalid(&field, "must be a string"))?;
            if name.trim().is_empty() {
                return Err(invalid(&field, "must not be empty"));
            }
            // Rejects `.` and `..` as well as anything with a separator.
            let bare = Path::new(name).file_name() == Some(OsStr::new(name));
            if !bare || name.contains('/') || name.contains('\\') {
                return Err(invalid(&field, "must be a file name, not a path"));
            }
        }

        if let Some(flag) = fields.get("webpack-override") {
            if !flag.is_boolean() {
                return Err(invalid(
                    &format!("{process}.webpack-override"),
                    "must be true or false",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> DomainError {
    DomainError::InvalidConfig {
        field: field.to_owned(),
        reason: reason.to_owned(),
    }
}
