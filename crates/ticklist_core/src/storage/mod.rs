//! Durable storage port and backend implementations.
//!
//! # Responsibility
//! - Define the keyed text-slot contract the service persists through.
//! - Isolate SQLite details from service/business orchestration.
//!
//! # Invariants
//! - A write atomically replaces the full value for its key.
//! - A read of an absent key returns `Ok(None)`, never an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Well-known slot key holding the serialized todo collection.
pub const TODOS_KEY: &str = "todos";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Keyed text-slot port consumed by the service.
///
/// The service depends only on this interface, so tests run against an
/// in-memory fake while production uses the SQLite-backed slot.
pub trait TodoStorage {
    /// Returns the stored value for `key`, or `None` when absent.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value for `key` with `value`.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}
