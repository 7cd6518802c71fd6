//! Core domain logic for the todo CLI.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::todo::{Todo, TodoId, TodoValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
