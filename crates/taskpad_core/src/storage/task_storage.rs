//! Task collection persistence over the key-value table.
//!
//! # Responsibility
//! - Serialize the task collection as one JSON array under a fixed key.
//! - Persist the theme preference under its own key.
//! - Shield callers from storage failures.
//!
//! # Invariants
//! - `load` never fails: a corrupt payload is discarded and replaced by
//!   an empty collection.
//! - Entries failing structural validation are dropped, not repaired.

use crate::db::DbError;
use crate::model::task::Task;
use crate::model::theme::Theme;
use log::{error, warn};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASKS_KEY: &str = "tasks";
const THEME_KEY: &str = "theme";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised inside the adapter; never crosses the trait boundary.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task payload: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Adapter contract consumed by the task service.
///
/// All methods are best-effort: implementations log failures and degrade
/// instead of returning errors.
pub trait TaskStorage {
    /// Persists the collection; failures are logged and swallowed.
    fn save(&self, tasks: &[Task]);
    /// Returns the persisted collection, or empty when absent or corrupt.
    fn load(&self) -> Vec<Task>;
    /// Removes the persisted collection.
    fn clear(&self);
}

/// SQLite-backed adapter storing the collection as a JSON array in the
/// `kv_entries` table.
pub struct SqliteTaskStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Persists the theme preference; failures are logged and swallowed.
    pub fn save_theme(&self, theme: Theme) {
        if let Err(err) = self.write_value(THEME_KEY, theme.as_str()) {
            error!("event=theme_save module=storage status=error error={err}");
        }
    }

    /// Returns the persisted theme preference, or `None` when absent or
    /// unrecognized.
    pub fn load_theme(&self) -> Option<Theme> {
        match self.read_value(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::from_saved),
            Err(err) => {
                error!("event=theme_load module=storage status=error error={err}");
                None
            }
        }
    }

    fn try_save(&self, tasks: &[Task]) -> StorageResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.write_value(TASKS_KEY, &payload)
    }

    fn try_load(&self) -> StorageResult<Vec<Task>> {
        let Some(raw) = self.read_value(TASKS_KEY)? else {
            return Ok(Vec::new());
        };

        let entries = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Array(entries)) => entries,
            Ok(_) | Err(_) => {
                // Corrupt payload: reset storage rather than carry it forward.
                warn!("event=storage_load module=storage status=reset reason=invalid_payload");
                self.delete_value(TASKS_KEY)?;
                return Ok(Vec::new());
            }
        };

        let total = entries.len();
        let mut tasks = Vec::with_capacity(total);
        for entry in entries {
            if let Some(task) = decode_task(entry) {
                tasks.push(task);
            }
        }

        let dropped = total - tasks.len();
        if dropped > 0 {
            warn!(
                "event=storage_load module=storage status=partial dropped={dropped} kept={}",
                tasks.len()
            );
        }

        Ok(tasks)
    }

    fn write_value(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn read_value(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_entries WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn delete_value(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

impl TaskStorage for SqliteTaskStorage<'_> {
    fn save(&self, tasks: &[Task]) {
        if let Err(err) = self.try_save(tasks) {
            error!(
                "event=storage_save module=storage status=error count={} error={err}",
                tasks.len()
            );
        }
    }

    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("event=storage_load module=storage status=error error={err}");
                Vec::new()
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = self.delete_value(TASKS_KEY) {
            error!("event=storage_clear module=storage status=error error={err}");
        }
    }
}

/// Decodes one persisted entry; structurally invalid records (missing
/// fields, wrong types, nil id, blank title) yield `None`.
fn decode_task(entry: serde_json::Value) -> Option<Task> {
    let task: Task = serde_json::from_value(entry).ok()?;
    task.validate().ok()?;
    Some(task)
}
