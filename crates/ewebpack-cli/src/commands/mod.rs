//! Command handlers. Each translates parsed arguments into calls on the
//! core services and renders the result.

pub mod completions;
pub mod config;
pub mod init;
