//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for the task collection.
//! - Isolate SQLite query details from view/service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   DB transport errors.
//! - Delete is idempotent; a missing id is not an error.

pub mod task_repo;
