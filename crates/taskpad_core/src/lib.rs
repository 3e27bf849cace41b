//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::theme::Theme;
pub use search::title_match::{search_tasks, SearchQuery};
pub use service::task_service::TaskService;
pub use storage::task_storage::{SqliteTaskStorage, StorageError, TaskStorage};
pub use store::task_store::{
    IdGenerator, StoreError, StoreResult, TaskCounts, TaskFilter, TaskStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
