//! View model layer.
//!
//! # Responsibility
//! - Hold the in-memory snapshot rendered by presentation code.
//! - Re-read the full collection after every mutation (pull-based
//!   refresh, no incremental merge).
//!
//! # Invariants
//! - At most one task is in edit mode at a time.
//! - A failed refresh retains the previous snapshot.

pub mod board;
