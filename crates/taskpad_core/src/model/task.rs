//! Task domain model.
//!
//! # Invariants
//! - `id` is assigned by the storage engine at creation time, is
//!   monotonically increasing, and is never reused or mutated.
//! - `title` is persisted verbatim; the store imposes no constraint on
//!   its content. Blank-title rejection is a presentation-side rule.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the storage engine.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Callers never choose ids; they only observe them.
pub type TaskId = i64;

/// The sole persisted entity: an identifier and a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
}

impl Task {
    /// Builds a task from an already-assigned id, e.g. a row read back
    /// from storage.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
