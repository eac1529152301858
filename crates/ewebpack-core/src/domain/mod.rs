// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ewebpack.
//!
//! This module contains pure logic with no I/O. Reading and writing files is
//! handled via ports (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem calls; paths are computed, not touched
//! - **Immutable values**: the default configuration is never mutated; merges
//!   return new values
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    project_config::{CONFIG_FILE_NAME, ProcessSection, ProjectConfig},
    project_layout::{ProcessPaths, ProjectLayout},
    scaffold_plan::{ConfigOrigin, Conflict, FileContents, InitPlan, ScaffoldStep},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ProcessKind, TemplateKind};

pub use validation::DomainValidator;
