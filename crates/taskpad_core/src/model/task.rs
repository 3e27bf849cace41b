//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by store, search and storage layers.
//! - Validate title text before any mutation is accepted.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another task.
//! - `title` holds the trimmed, non-blank text after validation.
//! - `created_at_ms` is assigned once at construction and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task held by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error raised before a task write is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title was empty or whitespace-only after trimming.
    EmptyTitle,
    /// Task carried the nil UUID as its identity.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// Validates raw title input and returns the trimmed text.
pub fn validate_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for addressing and persistence.
    pub id: TaskId,
    /// User-visible task text, trimmed and non-blank.
    pub title: String,
    /// Completion flag; starts as `false`.
    pub completed: bool,
    /// Creation instant in Unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl Task {
    /// Creates a task with a caller-provided stable ID.
    ///
    /// # Invariants
    /// - `title` is trimmed before storage and must not be blank.
    /// - `completed` starts as `false`.
    pub fn new(id: TaskId, title: &str) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let title = validate_title(title)?;
        Ok(Self {
            id,
            title,
            completed: false,
            created_at_ms: now_epoch_ms(),
        })
    }

    /// Checks structural invariants of an already-built task.
    ///
    /// Used by storage read paths to reject invalid persisted records
    /// instead of masking them.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
