//! Application layer for ewebpack.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (InitService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Configuration rules
//! and path derivation live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{InitReport, InitRequest, InitService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateSource};

pub use error::ApplicationError;
