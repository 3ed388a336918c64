//! Delete command for removing tasks
//!
//! Implements the `tick delete` command.

use super::parse_task_id;
use clap::Args;
use std::fmt;
use ticklist_store::{IdGenerator, PersistenceAdapter, Task, TaskId, TaskStore};

/// Remove a task
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Task ID to delete
    #[arg(required = true, value_parser = parse_task_id)]
    pub id: TaskId,
}

/// Result of the delete command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    /// The requested task ID
    pub id: TaskId,
    /// The removed task, `None` if no task had this id
    pub removed: Option<Task>,
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed {
            Some(_) => write!(f, "Deleted task: {}", self.id),
            None => write!(f, "No task with id {}", self.id),
        }
    }
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute<A, G>(&self, store: &mut TaskStore<A, G>) -> DeleteResult
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        DeleteResult {
            id: self.id,
            removed: store.delete(self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticklist_store::{MemoryAdapter, SequentialIdGenerator};

    #[test]
    fn test_delete_removes_task() {
        let mut store =
            TaskStore::with_id_generator(MemoryAdapter::new(), SequentialIdGenerator::default());
        store.add("Buy milk");
        let dog = store.add("Walk dog").unwrap();

        let result = DeleteCommand { id: dog }.execute(&mut store);
        assert_eq!(result.removed.as_ref().map(Task::text), Some("Walk dog"));
        assert_eq!(result.to_string(), format!("Deleted task: {}", dog));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store =
            TaskStore::with_id_generator(MemoryAdapter::new(), SequentialIdGenerator::default());
        store.add("Buy milk");

        let result = DeleteCommand {
            id: TaskId::new(404),
        }
        .execute(&mut store);
        assert!(result.removed.is_none());
        assert_eq!(result.to_string(), "No task with id 404");
        assert_eq!(store.len(), 1);
    }
}
