//! Application layer errors.
//!
//! These errors represent failures in orchestration, not configuration
//! content. Configuration errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Conflict, ProcessKind, TemplateKind};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A source directory exists and the target is not the current directory.
    #[error("{} already exists; use --force to overwrite", path.display())]
    DirectoryExists { path: PathBuf },

    /// An entry script exists and `--force` was not given.
    #[error("{process} entry {} already exists; use --force to overwrite", path.display())]
    EntryExists { process: ProcessKind, path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A bundled template could not be loaded.
    #[error("Template '{template}' unavailable: {reason}")]
    TemplateUnavailable {
        template: TemplateKind,
        reason: String,
    },

    /// Adapter state is unusable (lock poisoned, etc.).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl From<Conflict> for ApplicationError {
    fn from(conflict: Conflict) -> Self {
        match conflict {
            Conflict::Directory { path } => Self::DirectoryExists { path },
            Conflict::Entry { process, path } => Self::EntryExists { process, path },
        }
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or point 'src' in ewebpack.json at a new directory".into(),
            ],
            Self::EntryExists { path, .. } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Build-config files were still refreshed".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateUnavailable { template, .. } => vec![
                format!("Expected template file '{}'", template.file_name()),
                "Check the templates directory setting (templates.dir / EWEBPACK_TEMPLATES__DIR)"
                    .into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } | Self::EntryExists { .. } => ErrorCategory::Conflict,
            Self::TemplateUnavailable { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
