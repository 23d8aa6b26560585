//! Todo collection service.
//!
//! # Responsibility
//! - Provide the mutation and query surface consumed by view layers.
//! - Enforce collection invariants before any state change.
//! - Commit the full collection to the storage slot after every
//!   successful mutation.
//!
//! # Invariants
//! - At most one untitled placeholder exists at any time.
//! - Ids are unique; the next id is one past the current maximum.
//! - Failed validation leaves the collection byte-identical to before.

use crate::model::todo::{Todo, TodoId, TodoValidationError};
use crate::storage::{StorageError, TodoStorage, TODOS_KEY};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-visible failure kinds for todo operations.
#[derive(Debug)]
pub enum ServiceError {
    Validation(TodoValidationError),
    NotFound(TodoId),
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "no todo with id {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode todo collection: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<TodoValidationError> for ServiceError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owner of the canonical todo collection for one session.
///
/// Constructed once, hydrated from the storage slot, then driven by view
/// callbacks. All methods run to completion synchronously; the single
/// logical thread of control makes locking unnecessary.
pub struct TodoService<S: TodoStorage> {
    storage: S,
    todos: Vec<Todo>,
}

impl<S: TodoStorage> TodoService<S> {
    /// Creates a service hydrated from the storage slot alone.
    ///
    /// # Errors
    /// - Propagates storage transport failures from the hydration read.
    pub fn new(storage: S) -> ServiceResult<Self> {
        Self::with_todos(storage, Vec::new())
    }

    /// Creates a service seeded with `todos`, then appends whatever the
    /// storage slot holds.
    ///
    /// # Contract
    /// - Stored todos land after the seeded ones, in stored order.
    /// - No deduplication across the two sources.
    /// - A missing or malformed slot hydrates as an empty list.
    pub fn with_todos(storage: S, todos: Vec<Todo>) -> ServiceResult<Self> {
        let mut service = Self { storage, todos };
        service.hydrate()?;
        Ok(service)
    }

    fn hydrate(&mut self) -> ServiceResult<()> {
        let stored = match self.storage.read(TODOS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Todo>>(&raw) {
                Ok(stored) => stored,
                Err(err) => {
                    warn!(
                        "event=hydrate module=service status=recovered error_code=malformed_slot error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        info!(
            "event=hydrate module=service status=ok seeded={} stored={}",
            self.todos.len(),
            stored.len()
        );
        self.todos.extend(stored);
        Ok(())
    }

    /// Returns a defensive copy of the collection in its current order.
    ///
    /// Mutating the returned vector never affects the service.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Adds a todo to the front of the collection.
    ///
    /// Pass an empty title to open the untitled placeholder row the view
    /// fills in through [`edit_todo`](Self::edit_todo).
    ///
    /// # Contract
    /// - Rejected with `Validation(PendingUntitled)` while an untitled
    ///   placeholder exists; the collection stays unchanged.
    /// - Returns a copy of the created todo.
    pub fn add_todo(&mut self, title: impl Into<String>) -> ServiceResult<Todo> {
        if self.todos.iter().any(Todo::is_placeholder) {
            return Err(TodoValidationError::PendingUntitled.into());
        }

        let todo = Todo::new(self.next_id(), title);
        self.todos.insert(0, todo.clone());
        self.commit()?;

        debug!("event=add_todo module=service status=ok id={}", todo.id);
        Ok(todo)
    }

    /// Replaces the title of the todo with the given id.
    ///
    /// # Contract
    /// - Rejected with `Validation(TitleRequired)` for an empty title,
    ///   whether or not `id` exists.
    /// - Rejected with `NotFound` for an unknown `id`.
    /// - Identity and position of the todo are unchanged.
    pub fn edit_todo(&mut self, id: TodoId, title: &str) -> ServiceResult<()> {
        if title.is_empty() {
            return Err(TodoValidationError::TitleRequired.into());
        }

        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(ServiceError::NotFound(id))?;

        // Copy-and-replace rather than in-place field mutation, so snapshots
        // already handed out can never observe a half-applied edit.
        self.todos[index] = Todo::new(id, title);
        self.commit()?;

        debug!("event=edit_todo module=service status=ok id={id}");
        Ok(())
    }

    /// Removes the todo with the given id.
    ///
    /// An absent id is a no-op, not an error. Returns the resulting
    /// collection size.
    pub fn delete_todo(&mut self, id: TodoId) -> ServiceResult<usize> {
        self.todos.retain(|todo| todo.id != id);
        self.commit()?;

        debug!(
            "event=delete_todo module=service status=ok id={id} remaining={}",
            self.todos.len()
        );
        Ok(self.todos.len())
    }

    /// Reorders the collection by case-insensitive title comparison.
    ///
    /// # Contract
    /// - Untitled placeholders are dropped, not hidden.
    /// - Ascending order is a stable sort; descending is the ascending
    ///   result reversed, so equal titles keep their ascending-pass
    ///   relative order before the reversal.
    pub fn sort_todos(&mut self, ascending: bool) -> ServiceResult<()> {
        self.todos.retain(|todo| !todo.is_placeholder());
        self.todos
            .sort_by(|a, b| a.title.to_uppercase().cmp(&b.title.to_uppercase()));
        if !ascending {
            self.todos.reverse();
        }
        self.commit()?;

        debug!(
            "event=sort_todos module=service status=ok ascending={ascending} size={}",
            self.todos.len()
        );
        Ok(())
    }

    /// Next id is one past the maximum currently in use, or 1 when empty.
    ///
    /// Derived from the whole collection rather than the first element, so
    /// a sort (which reorders without renumbering) can never cause a
    /// collision on the next add.
    fn next_id(&self) -> TodoId {
        self.todos.iter().map(|todo| todo.id).max().map_or(1, |max| max + 1)
    }

    /// Writes the full collection to the storage slot.
    ///
    /// On failure the in-memory collection keeps the state it just tried
    /// to persist; the error propagates to the caller.
    fn commit(&self) -> ServiceResult<()> {
        let encoded = serde_json::to_string(&self.todos).map_err(ServiceError::Encode)?;
        self.storage.write(TODOS_KEY, &encoded)?;
        Ok(())
    }
}
