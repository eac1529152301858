//! ewebpack Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ewebpack
//! Electron + webpack project initializer, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ewebpack-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (InitService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, TemplateSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ewebpack-adapters (Infrastructure)   │
//! │ (LocalFilesystem, EmbeddedTemplates...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, ProjectLayout, InitPlan)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ewebpack_core::application::{InitRequest, InitService};
//!
//! let service = InitService::new(filesystem, templates);
//! let report = service.initialize(InitRequest::new("./my-app")).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitReport, InitRequest, InitService,
        ports::{Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        CONFIG_FILE_NAME, ConfigOrigin, Conflict, FileContents, InitPlan, ProcessKind,
        ProcessSection, ProjectConfig, ProjectLayout, ScaffoldStep, TemplateKind,
    };
    pub use crate::error::{EwebpackError, EwebpackResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
