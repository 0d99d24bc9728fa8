//! In-memory task filtering.
//!
//! # Responsibility
//! - Narrow a snapshot of tasks by a free-text search term.
//! - Never touch storage; filtering reads only what is already in
//!   memory.

pub mod filter;
