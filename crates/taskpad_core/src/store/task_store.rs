//! Task store: CRUD and filtering over the in-memory collection.
//!
//! # Responsibility
//! - Provide create/list/toggle/rename/delete/filter entry points.
//! - Enforce title validation on every write path.
//!
//! # Invariants
//! - Insertion order is preserved for the default listing.
//! - Listings return independent copies; internal state cannot be
//!   mutated through results.
//! - No partial mutation survives a failed operation.

use crate::model::task::{validate_title, Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by task store operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// View selector over the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    /// Tasks with `completed == false`.
    Active,
    /// Tasks with `completed == true`.
    Completed,
}

impl TaskFilter {
    /// Decodes UI text leniently; unknown values behave as `All`.
    ///
    /// The lenient fallback is deliberate, not a bug.
    pub fn from_text(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the task is admitted by this filter.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Active/completed tallies for counter displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

/// Id generation strategy, selected once at store construction.
///
/// The generator must produce collision-resistant unique ids; the default
/// is a v4 UUID. Store operations trust it and never re-check uniqueness.
pub type IdGenerator = fn() -> TaskId;

fn random_id() -> TaskId {
    Uuid::new_v4()
}

/// Owned, encapsulated in-memory task collection.
///
/// There is no module-level singleton; callers construct an instance and
/// pass it to whatever renders or persists it.
pub struct TaskStore {
    tasks: Vec<Task>,
    generate_id: IdGenerator,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store using v4 UUID id generation.
    pub fn new() -> Self {
        Self::with_id_generator(random_id)
    }

    /// Creates an empty store with a caller-selected id generator.
    ///
    /// Used by tests and import paths that need deterministic ids.
    pub fn with_id_generator(generate_id: IdGenerator) -> Self {
        Self {
            tasks: Vec::new(),
            generate_id,
        }
    }

    /// Validates and appends a new task, returning a copy of it.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the title trims to empty or the
    ///   generator produced a nil id.
    pub fn create(&mut self, title: &str) -> StoreResult<Task> {
        let task = Task::new((self.generate_id)(), title)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Returns an independent copy of the full collection.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns an independent copy of the tasks admitted by `filter`.
    pub fn list_filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.admits(task))
            .cloned()
            .collect()
    }

    /// Returns a copy of one task by id.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    /// Flips the completion flag and returns the updated task.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    /// Replaces the title with the trimmed value and returns the task.
    ///
    /// Validates `new_title` exactly as [`TaskStore::create`] does, before
    /// the id lookup, so bad input never reports `NotFound`.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> StoreResult<Task> {
        let title = validate_title(new_title)?;
        let task = self.find_mut(id)?;
        task.title = title;
        Ok(task.clone())
    }

    /// Removes one task by id.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Replaces the entire collection with an independent copy.
    ///
    /// Hydration path: persisted records were validated by the storage
    /// layer, so the slice is taken as-is.
    pub fn replace_all(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }

    /// Empties the collection unconditionally.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Active/completed tallies over the current collection.
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskCounts {
            active: self.tasks.len() - completed,
            completed,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::TaskFilter;

    #[test]
    fn filter_decodes_known_values() {
        assert_eq!(TaskFilter::from_text("active"), TaskFilter::Active);
        assert_eq!(TaskFilter::from_text(" Completed "), TaskFilter::Completed);
        assert_eq!(TaskFilter::from_text("all"), TaskFilter::All);
    }

    #[test]
    fn unknown_filter_text_behaves_as_all() {
        assert_eq!(TaskFilter::from_text("recent"), TaskFilter::All);
        assert_eq!(TaskFilter::from_text(""), TaskFilter::All);
    }
}
