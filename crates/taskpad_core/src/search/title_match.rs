//! Substring search over task titles.
//!
//! # Responsibility
//! - Normalize user queries and match them against task titles.
//! - Compose text matching with the completion filter.
//!
//! # Invariants
//! - Matching is case-insensitive and whitespace-insensitive.
//! - A blank query matches every task the filter admits.

use crate::model::task::Task;
use crate::store::task_store::TaskFilter;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Search options combining query text and completion filter.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text; matched as a substring of the title.
    pub text: String,
    /// Completion filter applied before text matching.
    pub filter: TaskFilter,
}

impl SearchQuery {
    /// Creates a query over the full collection.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filter: TaskFilter::All,
        }
    }
}

/// Returns copies of the tasks admitted by the filter whose titles
/// contain the query text.
pub fn search_tasks(tasks: &[Task], query: &SearchQuery) -> Vec<Task> {
    let needle = normalize(&query.text);

    tasks
        .iter()
        .filter(|task| query.filter.admits(task))
        .filter(|task| needle.is_empty() || normalize(&task.title).contains(&needle))
        .cloned()
        .collect()
}

/// Lowercases and collapses whitespace runs so that `"buy   milk"`
/// matches `"Buy milk"`.
fn normalize(text: &str) -> String {
    WHITESPACE_RE
        .replace_all(text.trim(), " ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize("  Buy\t  MILK "), "buy milk");
        assert_eq!(normalize(""), "");
    }
}
