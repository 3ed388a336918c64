//! Data models for Ticklist
//!
//! Defines the task record and its identifier, the transient status filter
//! and the derived statistics view.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a task
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw identifier value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single entry in the task list
///
/// Text and creation time are fixed once the task exists; only the
/// completion flag changes, and only through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(with = "iso8601_millis")]
    created_at: DateTime<Utc>,
}

/// Strip surrounding whitespace from task text, including the U+FEFF
/// byte order mark that `str::trim` keeps.
pub fn trim_task_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl Task {
    /// Create an open task.
    ///
    /// The creation time is truncated to millisecond precision, the
    /// precision of the persisted record.
    pub fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    /// Set the completion flag of this task
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Status selector for viewing the task list
///
/// Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a status name.
    ///
    /// Matching ignores case and surrounding whitespace. Anything that is
    /// not `active` or `completed` selects `All`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Returns the lowercase status name
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Returns the capitalized label used for tabs and headings
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Position of this filter within [`Filter::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Active => 1,
            Filter::Completed => 2,
        }
    }

    /// Cycle to the next filter.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Whether a task is visible under this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.is_completed(),
            Filter::Completed => task.is_completed(),
        }
    }

    /// Message shown when no task is visible under this filter
    pub fn empty_message(&self) -> &'static str {
        match self {
            Filter::All => "No tasks yet.",
            Filter::Active => "No active tasks.",
            Filter::Completed => "No completed tasks.",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Counts derived from a task list
///
/// `active + completed == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Stats {
    /// Count the tasks of a list
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        Self {
            total: tasks.len(),
            active: tasks.len() - completed,
            completed,
        }
    }

    /// Footer celebrating completed work, if there is any
    pub fn completion_message(&self) -> Option<String> {
        match self.completed {
            0 => None,
            1 => Some("1 task completed!".to_string()),
            n => Some(format!("{} tasks completed!", n)),
        }
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix.
///
/// Any RFC 3339 offset is accepted on input and normalized to UTC. Finer
/// precision is truncated to milliseconds so a loaded task saves unchanged.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
