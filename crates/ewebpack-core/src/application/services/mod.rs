//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "initialize a project".

pub mod init_service;

pub use init_service::{InitReport, InitRequest, InitService};
