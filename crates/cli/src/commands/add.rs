//! Add command for creating new tasks
//!
//! Implements the `tick add` command.

use clap::Args;
use std::fmt;
use ticklist_store::{IdGenerator, PersistenceAdapter, TaskId, TaskStore};

/// Add a task to the top of the list
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Text of the task (surrounding whitespace is trimmed)
    #[arg(required = true)]
    pub text: String,
}

/// Result of the add command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResult {
    /// Id of the created task, `None` when the text was blank
    pub id: Option<TaskId>,
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Added task: {}", id),
            None => write!(f, "Nothing to add: task text is blank"),
        }
    }
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// Blank text is not an error; the result reports that nothing was added.
    pub fn execute<A, G>(&self, store: &mut TaskStore<A, G>) -> AddResult
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        AddResult {
            id: store.add(&self.text),
        }
    }
}
