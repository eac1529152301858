// ============================================================================
// domain/error.rs - CONFIGURATION DOCUMENT ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration document errors
    // ========================================================================
    /// `ewebpack.json` is not valid JSON.
    #[error("{path} is not valid JSON: {reason}")]
    MalformedConfig { path: PathBuf, reason: String },

    /// `ewebpack.json` parsed, but a field has the wrong shape.
    #[error("invalid configuration field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("configuration could not be encoded: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedConfig { path, .. } => vec![
                format!("Fix the JSON syntax in {}", path.display()),
                "Or delete the file to start over with the defaults".into(),
            ],
            Self::InvalidConfig { field, .. } => vec![
                format!("Check the value of '{}' in ewebpack.json", field),
                "Expected shape: { \"src\": string, \"webpack-config\": string, \"webpack-override\": bool }".into(),
            ],
            Self::Serialization(_) => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedConfig { .. } | Self::InvalidConfig { .. } => {
                ErrorCategory::Configuration
            }
            Self::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_suggests_deleting_file() {
        let err = DomainError::MalformedConfig {
            path: PathBuf::from("/p/ewebpack.json"),
            reason: "expected value".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("delete")));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn invalid_config_names_field() {
        let err = DomainError::InvalidConfig {
            field: "main.src".into(),
            reason: "must be a string".into(),
        };
        assert!(err.to_string().contains("main.src"));
        assert!(err.suggestions()[0].contains("main.src"));
    }
}
