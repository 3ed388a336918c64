//! Persistence adapters for the task list
//!
//! The store loads its list once through a [`PersistenceAdapter`] and hands
//! the full list back after every mutation. Adapters never fail the store:
//! unreadable data loads as an empty list and failed writes are logged.

mod file;
mod memory;

pub use file::{DEFAULT_STORE_DIR, FALLBACK_STORE_DIR, JsonFileAdapter, STORE_FILE_NAME};
pub use memory::MemoryAdapter;

use crate::error::{StoreError, StoreResult};
use crate::models::{Task, trim_task_text};
use std::collections::HashSet;
use tracing::warn;

/// Load/save contract between the store and its backing storage
pub trait PersistenceAdapter {
    /// Read the saved list.
    ///
    /// Absent or malformed data yields an empty list.
    fn load(&self) -> Vec<Task>;

    /// Replace the saved list with `tasks`.
    ///
    /// Fire-and-forget: failures are logged, never returned.
    fn save(&mut self, tasks: &[Task]);
}

/// Serialize a task list into its stored document form.
pub fn encode_tasks(tasks: &[Task]) -> StoreResult<String> {
    serde_json::to_string(tasks).map_err(StoreError::Encode)
}

/// Parse a stored document back into a task list.
///
/// Blank documents and JSON `null` mean "no prior data". Records with blank
/// text, and records repeating an earlier id, are dropped.
pub fn decode_tasks(raw: &str) -> StoreResult<Vec<Task>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Option<Vec<Task>> = serde_json::from_str(raw).map_err(StoreError::Decode)?;
    Ok(dedupe_ids(drop_blank_text(tasks.unwrap_or_default())))
}

/// Drop records whose text trims to nothing.
fn drop_blank_text(tasks: Vec<Task>) -> Vec<Task> {
    let before = tasks.len();
    let kept: Vec<Task> = tasks
        .into_iter()
        .filter(|t| !trim_task_text(t.text()).is_empty())
        .collect();

    if kept.len() != before {
        warn!(
            dropped = before - kept.len(),
            "stored task list had tasks with blank text; dropped them"
        );
    }

    kept
}

/// Keep the first task for every id.
fn dedupe_ids(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    let before = tasks.len();
    let unique: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id())).collect();

    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "stored task list repeated ids; kept the first of each"
        );
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;
    use chrono::{TimeZone, Utc};

    fn task(id: u64, text: &str) -> Task {
        Task::new(
            TaskId::new(id),
            text,
            Utc.timestamp_opt(1_714_555_800 + id as i64, 0).unwrap(),
        )
    }

    #[test]
    fn test_encode_decode_preserves_list() {
        let tasks = vec![
            task(3, "Walk dog"),
            task(2, "Buy milk").with_completed(true),
            task(1, "할 일 관리"),
        ];
        let raw = encode_tasks(&tasks).unwrap();
        assert_eq!(decode_tasks(&raw).unwrap(), tasks);
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode_tasks(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_blank_is_empty() {
        assert!(decode_tasks("").unwrap().is_empty());
        assert!(decode_tasks("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_null_is_empty() {
        assert!(decode_tasks("null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed_is_error() {
        assert!(matches!(
            decode_tasks("{not json"),
            Err(StoreError::Decode(_))
        ));
        assert!(matches!(
            decode_tasks(r#"{"id":1}"#),
            Err(StoreError::Decode(_))
        ));
        assert!(matches!(
            decode_tasks(r#"[{"id":"x","text":"a","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"}]"#),
            Err(StoreError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_reads_original_record_shape() {
        let raw = r#"[
            {"id":1714555800123,"text":"Walk dog","completed":false,"createdAt":"2024-05-01T09:30:00.123Z"},
            {"id":1714555700000,"text":"Buy milk","completed":true,"createdAt":"2024-05-01T09:28:20.000Z"}
        ]"#;
        let tasks = decode_tasks(raw).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id(), TaskId::new(1714555800123));
        assert_eq!(tasks[0].text(), "Walk dog");
        assert!(tasks[1].is_completed());
    }

    #[test]
    fn test_decode_truncates_finer_timestamps() {
        let raw = r#"[{"id":1,"text":"Walk dog","completed":false,"createdAt":"2024-05-01T09:30:00.123456Z"}]"#;
        let tasks = decode_tasks(raw).unwrap();
        assert_eq!(
            tasks[0].created_at(),
            Utc.timestamp_opt(1_714_555_800, 123_000_000).unwrap()
        );

        let reloaded = decode_tasks(&encode_tasks(&tasks).unwrap()).unwrap();
        assert_eq!(reloaded, tasks);
    }

    #[test]
    fn test_decode_drops_blank_text() {
        let raw = r#"[
            {"id":3,"text":"  ","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"},
            {"id":2,"text":"Buy milk","completed":false,"createdAt":"2024-05-01T09:30:00.000Z"},
            {"id":1,"text":"","completed":true,"createdAt":"2024-05-01T09:30:00.000Z"}
        ]"#;
        let tasks = decode_tasks(raw).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text(), "Buy milk");
    }

    #[test]
    fn test_decode_drops_repeated_ids() {
        let raw = encode_tasks(&[task(1, "first"), task(2, "other"), task(1, "second")]).unwrap();
        let tasks = decode_tasks(&raw).unwrap();
        let texts: Vec<&str> = tasks.iter().map(Task::text).collect();
        assert_eq!(texts, vec!["first", "other"]);
    }
}
