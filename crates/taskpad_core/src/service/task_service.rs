//! Task use-case service.
//!
//! # Responsibility
//! - Provide the single entry point UI layers call for task operations.
//! - Re-persist the collection after every successful mutation.
//!
//! # Invariants
//! - Read paths never write to storage.
//! - A failed store operation leaves store and storage untouched.
//! - Persistence is best-effort and never fails a user action.

use crate::model::task::{Task, TaskId};
use crate::search::title_match::{search_tasks, SearchQuery};
use crate::storage::task_storage::TaskStorage;
use crate::store::task_store::{StoreResult, TaskCounts, TaskFilter, TaskStore};
use log::info;

/// Use-case facade owning the task store and its persistence adapter.
pub struct TaskService<S: TaskStorage> {
    store: TaskStore,
    storage: S,
}

impl<S: TaskStorage> TaskService<S> {
    /// Creates a service with an empty store.
    pub fn new(storage: S) -> Self {
        Self::with_store(TaskStore::new(), storage)
    }

    /// Creates a service around a pre-built store.
    ///
    /// Used by tests that need deterministic id generation.
    pub fn with_store(store: TaskStore, storage: S) -> Self {
        Self { store, storage }
    }

    /// Bulk-replaces the store contents from persisted state.
    ///
    /// Called once at startup before any user action is handled.
    pub fn hydrate(&mut self) {
        let tasks = self.storage.load();
        info!(
            "event=hydrate module=service status=ok count={}",
            tasks.len()
        );
        self.store.replace_all(&tasks);
    }

    /// Validates, appends and persists a new task.
    pub fn create_task(&mut self, title: &str) -> StoreResult<Task> {
        let task = self.store.create(title)?;
        self.persist();
        Ok(task)
    }

    /// Flips completion and persists.
    pub fn toggle_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self.store.toggle(id)?;
        self.persist();
        Ok(task)
    }

    /// Replaces a title and persists.
    pub fn rename_task(&mut self, id: TaskId, new_title: &str) -> StoreResult<Task> {
        let task = self.store.rename(id, new_title)?;
        self.persist();
        Ok(task)
    }

    /// Removes a task and persists.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        self.store.delete(id)?;
        self.persist();
        Ok(())
    }

    /// Empties the collection and persists the empty state.
    pub fn clear_tasks(&mut self) {
        self.store.clear();
        self.persist();
    }

    /// Independent copy of the full collection, insertion-ordered.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Independent copy of the tasks admitted by `filter`.
    pub fn list_filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.store.list_filtered(filter)
    }

    /// Title search composed with the query's completion filter.
    pub fn search(&self, query: &SearchQuery) -> Vec<Task> {
        search_tasks(&self.store.list(), query)
    }

    /// Active/completed tallies for counter displays.
    pub fn counts(&self) -> TaskCounts {
        self.store.counts()
    }

    fn persist(&self) {
        self.storage.save(&self.store.list());
    }
}
