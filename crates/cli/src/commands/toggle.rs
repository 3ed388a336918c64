//! Toggle command for completing and reopening tasks
//!
//! Implements the `tick toggle` command. Unknown ids are reported but are
//! not an error.

use super::parse_task_id;
use clap::Args;
use std::fmt;
use ticklist_store::{IdGenerator, PersistenceAdapter, TaskId, TaskStore};

/// Mark a task completed, or reopen a completed one
#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// Task ID to toggle
    #[arg(required = true, value_parser = parse_task_id)]
    pub id: TaskId,
}

/// Result of the toggle command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResult {
    /// The requested task ID
    pub id: TaskId,
    /// New completion flag, `None` if no task has this id
    pub completed: Option<bool>,
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.completed {
            Some(true) => write!(f, "Completed task: {}", self.id),
            Some(false) => write!(f, "Reopened task: {}", self.id),
            None => write!(f, "No task with id {}", self.id),
        }
    }
}

impl ToggleCommand {
    /// Execute the toggle command.
    pub fn execute<A, G>(&self, store: &mut TaskStore<A, G>) -> ToggleResult
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        ToggleResult {
            id: self.id,
            completed: store.toggle(self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticklist_store::{MemoryAdapter, SequentialIdGenerator};

    #[test]
    fn test_toggle_completes_then_reopens() {
        let mut store =
            TaskStore::with_id_generator(MemoryAdapter::new(), SequentialIdGenerator::default());
        let id = store.add("Buy milk").unwrap();
        let cmd = ToggleCommand { id };

        let first = cmd.execute(&mut store);
        assert_eq!(first.completed, Some(true));
        assert_eq!(first.to_string(), format!("Completed task: {}", id));

        let second = cmd.execute(&mut store);
        assert_eq!(second.completed, Some(false));
        assert_eq!(second.to_string(), format!("Reopened task: {}", id));
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut store =
            TaskStore::with_id_generator(MemoryAdapter::new(), SequentialIdGenerator::default());
        store.add("Buy milk");
        let before = store.tasks().to_vec();

        let result = ToggleCommand {
            id: TaskId::new(404),
        }
        .execute(&mut store);

        assert_eq!(result.completed, None);
        assert_eq!(result.to_string(), "No task with id 404");
        assert_eq!(store.tasks(), before.as_slice());
    }
}
