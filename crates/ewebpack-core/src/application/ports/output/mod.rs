//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ewebpack-adapters` crate provides implementations.

use crate::domain::TemplateKind;
use crate::error::EwebpackResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ewebpack_adapters::filesystem::LocalFilesystem` (production)
/// - `ewebpack_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> EwebpackResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EwebpackResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, contents: &[u8]) -> EwebpackResult<()>;
}

/// Port for the static files copied into a new project.
///
/// Implemented by:
/// - `ewebpack_adapters::template_store::EmbeddedTemplates` (built-in)
/// - `ewebpack_adapters::template_store::DirectoryTemplates` (user override)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Raw bytes of a template. Copied verbatim; never rendered.
    fn load(&self, template: TemplateKind) -> EwebpackResult<Vec<u8>>;
}
