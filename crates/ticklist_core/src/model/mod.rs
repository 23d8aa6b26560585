//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the canonical record shape owned by the service layer.
//! - Host the validation error kinds shared by all mutation paths.
//!
//! # Invariants
//! - Every todo is identified by a positive, service-assigned `TodoId`.
//! - At most one todo with an empty title exists in a collection.

pub mod todo;
