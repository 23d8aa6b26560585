//! Core domain logic for Ticklist.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoValidationError};
pub use service::todo_service::{ServiceError, ServiceResult, TodoService};
pub use storage::{
    MemoryStorage, SqliteStorage, StorageError, StorageResult, TodoStorage, TODOS_KEY,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
