//! Todo domain model.
//!
//! # Responsibility
//! - Define the persisted record shape for a single list entry.
//! - Provide the validation error kinds raised by mutation preconditions.
//!
//! # Invariants
//! - `id` is stable and never reassigned to another todo in the same
//!   collection.
//! - An empty `title` marks the single in-progress placeholder row; it is
//!   never a durable long-term state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a todo within one collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = u64;

/// One list entry: a service-assigned id and a user-editable title.
///
/// The wire shape is `{"id": <int>, "title": <string>}`, matching the
/// serialized collection stored in the durable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the service on creation, immutable afterwards.
    pub id: TodoId,
    /// Free text. Empty only for the in-progress placeholder.
    pub title: String,
}

impl Todo {
    /// Creates a todo with a caller-provided id.
    ///
    /// Id assignment lives in the service; this constructor does not check
    /// uniqueness.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns whether this todo is the untitled placeholder row.
    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty()
    }
}

/// Precondition violations raised by collection mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// An untitled placeholder already exists; it must be filled in or
    /// deleted before another todo can be added.
    PendingUntitled,
    /// Edits may not clear a title; deletion is the way to remove a todo.
    TitleRequired,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingUntitled => {
                write!(f, "an untitled todo is already pending; give it a title first")
            }
            Self::TitleRequired => {
                write!(f, "title cannot be set empty; delete the todo instead")
            }
        }
    }
}

impl Error for TodoValidationError {}
