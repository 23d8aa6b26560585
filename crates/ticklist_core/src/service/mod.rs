//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical in-memory todo collection and its invariants.
//! - Mirror every successful mutation into the durable storage slot.
//!
//! # Invariants
//! - Mutations validate preconditions before touching the collection.
//! - UI layers stay decoupled from storage details behind `TodoStorage`.

pub mod todo_service;
