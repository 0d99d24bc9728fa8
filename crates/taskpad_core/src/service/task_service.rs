//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service performs no title validation; by contract that rule
//!   belongs to the presentation side, and the store accepts whatever
//!   it is given.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};

/// Use-case service wrapper for task CRUD operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every stored task in engine order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks()
    }

    /// Persists a new task and returns the engine-assigned id.
    pub fn add_task(&self, title: &str) -> RepoResult<TaskId> {
        self.repo.add_task(title)
    }

    /// Replaces the title of an existing task.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_task(&self, id: TaskId, title: &str) -> RepoResult<()> {
        self.repo.update_task(id, title)
    }

    /// Deletes a task by id; missing ids are a no-op.
    pub fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        self.repo.delete_task(id)
    }
}
