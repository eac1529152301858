//! Infrastructure adapters for ewebpack.
//!
//! This crate implements the ports defined in `ewebpack_core::application::ports`.
//! It contains all I/O and the templates bundled into the binary.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{DirectoryTemplates, EmbeddedTemplates};
