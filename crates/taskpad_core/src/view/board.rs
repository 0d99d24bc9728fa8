//! Task board: snapshot, search term and edit-mode state.
//!
//! # Responsibility
//! - Expose the list the presentation layer renders, plus the intents
//!   it dispatches (add / edit / delete / filter).
//! - Reject blank titles before any store call is made.
//!
//! # Invariants
//! - Every successful mutation is followed by a full snapshot re-read;
//!   the board never patches the snapshot locally.
//! - Changing the search term never triggers a store read.
//! - `editing` refers to at most one task; starting an edit elsewhere
//!   implicitly ends the previous one.
//! - When a refresh fails the stale snapshot stays available and the
//!   error propagates to the caller.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, TaskRepository};
use crate::search::filter::filter_tasks;
use crate::service::task_service::TaskService;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surface of board intents.
#[derive(Debug)]
pub enum BoardError {
    /// Trimmed title was empty; rejected client-side, no store call.
    EmptyTitle,
    /// An edit was submitted while no task is in edit mode.
    NoActiveEdit,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NoActiveEdit => write!(f, "no task is being edited"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// View model over the task collection.
///
/// Starts with an empty snapshot; call [`TaskBoard::refresh`] on mount
/// to load the stored tasks.
pub struct TaskBoard<R: TaskRepository> {
    service: TaskService<R>,
    snapshot: Vec<Task>,
    search_term: String,
    editing: Option<TaskId>,
}

impl<R: TaskRepository> TaskBoard<R> {
    pub fn new(service: TaskService<R>) -> Self {
        Self {
            service,
            snapshot: Vec::new(),
            search_term: String::new(),
            editing: None,
        }
    }

    /// Re-reads the full collection and replaces the snapshot.
    ///
    /// On failure the previous snapshot is left in place.
    pub fn refresh(&mut self) -> Result<(), RepoError> {
        let tasks = self.service.list_tasks()?;
        self.snapshot = tasks;
        Ok(())
    }

    /// The last successfully loaded snapshot, unfiltered.
    pub fn snapshot(&self) -> &[Task] {
        &self.snapshot
    }

    /// The snapshot subset matching the current search term.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.snapshot, &self.search_term)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Updates the search term. In-memory only; the store is not read.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The task currently in edit mode, if any.
    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Puts `id` into edit mode, ending any previous edit.
    pub fn begin_edit(&mut self, id: TaskId) {
        self.editing = Some(id);
    }

    /// Exits edit mode without persisting anything.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Adds a task from raw form input, then refreshes.
    ///
    /// The input is trimmed; a blank result is rejected before any
    /// store call. Returns the engine-assigned id.
    pub fn submit_new_task(&mut self, input: &str) -> Result<TaskId, BoardError> {
        let title = normalized_title(input).ok_or(BoardError::EmptyTitle)?;
        let id = self.service.add_task(&title)?;
        self.refresh()?;
        Ok(id)
    }

    /// Persists the active edit with the given input, exits edit mode,
    /// then refreshes.
    ///
    /// Edit mode is kept when the input is blank or the update fails,
    /// so the caller can retry or cancel.
    pub fn submit_edit(&mut self, input: &str) -> Result<(), BoardError> {
        let id = self.editing.ok_or(BoardError::NoActiveEdit)?;
        let title = normalized_title(input).ok_or(BoardError::EmptyTitle)?;
        self.service.update_task(id, &title)?;
        self.editing = None;
        self.refresh()?;
        Ok(())
    }

    /// Deletes a task, then refreshes. Missing ids are a no-op.
    pub fn remove_task(&mut self, id: TaskId) -> Result<(), BoardError> {
        self.service.delete_task(id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.refresh()?;
        Ok(())
    }
}

fn normalized_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::normalized_title;

    #[test]
    fn normalized_title_trims_surrounding_whitespace() {
        assert_eq!(normalized_title("  Buy milk \n").as_deref(), Some("Buy milk"));
    }

    #[test]
    fn normalized_title_rejects_blank_input() {
        assert_eq!(normalized_title(""), None);
        assert_eq!(normalized_title("   \t "), None);
    }
}
