//! Output formatting module for Ticklist
//!
//! Provides table formatting and display utilities for CLI output.

use ticklist_store::{Stats, Task};

/// Maximum width for the text column before truncation
const MAX_TEXT_WIDTH: usize = 50;

/// Format used for the creation time column
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Width of a timestamp rendered with [`CREATED_FORMAT`]
const CREATED_FORMAT_WIDTH: usize = "YYYY-MM-DD HH:MM".len();

/// Truncate a string to the specified maximum width in characters, adding
/// an ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{}...", kept)
    }
}

/// Completion marker for a task
fn format_done(task: &Task) -> &'static str {
    if task.is_completed() { "[x]" } else { "[ ]" }
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID             Done  Created           Text
/// -------------  ----  ----------------  --------
/// 1714555800123  [ ]   2024-05-01 09:30  Walk dog
/// ```
///
/// Creation times are shown in UTC. Callers handle the empty case, since
/// the message depends on the active filter.
pub fn format_task_table(tasks: &[Task]) -> String {
    let headers = ["ID", "Done", "Created", "Text"];

    let id_width = tasks
        .iter()
        .map(|t| t.id().to_string().len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let done_width = headers[1].len();
    let created_width = CREATED_FORMAT_WIDTH.max(headers[2].len());

    let text_width = tasks
        .iter()
        .map(|t| t.text().chars().count().min(MAX_TEXT_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[3].len());

    let mut output = String::new();

    // Header row
    output.push_str(&format!(
        "{:<id_w$}  {:<done_w$}  {:<created_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        id_w = id_width,
        done_w = done_width,
        created_w = created_width,
    ));

    // Separator row
    output.push_str(&format!(
        "{:->id_w$}  {:->done_w$}  {:->created_w$}  {:->text_w$}",
        "",
        "",
        "",
        "",
        id_w = id_width,
        done_w = done_width,
        created_w = created_width,
        text_w = text_width,
    ));

    // Data rows
    for task in tasks {
        output.push_str(&format!(
            "\n{:<id_w$}  {:<done_w$}  {:<created_w$}  {}",
            task.id(),
            format_done(task),
            task.created_at().format(CREATED_FORMAT),
            truncate(task.text(), MAX_TEXT_WIDTH),
            id_w = id_width,
            done_w = done_width,
            created_w = created_width,
        ));
    }

    output
}

/// Format counts on a single line.
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Active: {}  Completed: {}",
        stats.total, stats.active, stats.completed
    )
}

/// Footer line shown under a listing once something is completed.
pub fn format_completion_footer(stats: &Stats) -> Option<String> {
    stats.completion_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ticklist_store::TaskId;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        Task::new(
            TaskId::new(id),
            text,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        )
        .with_completed(completed)
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_max() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("할 일 관리하기", 6), "할 일...");
        assert_eq!(truncate("할 일", 5), "할 일");
    }

    #[test]
    fn test_format_task_table_layout() {
        let tasks = vec![task(12, "Walk dog", false), task(3, "Buy milk", true)];
        let output = format_task_table(&tasks);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID  Done  Created           Text");
        assert_eq!(lines[1], "--  ----  ----------------  --------");
        assert_eq!(lines[2], "12  [ ]   2024-05-01 09:30  Walk dog");
        assert_eq!(lines[3], "3   [x]   2024-05-01 09:30  Buy milk");
    }

    #[test]
    fn test_format_task_table_truncates_long_text() {
        let long = "x".repeat(80);
        let output = format_task_table(&[task(1, &long, false)]);
        let row = output.lines().last().unwrap();
        assert!(row.ends_with("..."));
        assert!(!row.contains(&long));
    }

    #[test]
    fn test_format_stats() {
        let stats = Stats {
            total: 5,
            active: 3,
            completed: 2,
        };
        assert_eq!(format_stats(&stats), "Total: 5  Active: 3  Completed: 2");
    }

    #[test]
    fn test_format_completion_footer() {
        assert_eq!(format_completion_footer(&Stats::default()), None);
        let stats = Stats {
            total: 2,
            active: 0,
            completed: 2,
        };
        assert_eq!(
            format_completion_footer(&stats).as_deref(),
            Some("2 tasks completed!")
        );
    }
}
