//! CLI commands for Ticklist
//!
//! This module contains all subcommand implementations for the tick CLI.

pub mod add;
pub mod delete;
pub mod list;
pub mod stats;
pub mod toggle;

pub use add::{AddCommand, AddResult};
pub use delete::{DeleteCommand, DeleteResult};
pub use list::{ListCommand, ListResult};
pub use stats::{StatsCommand, StatsResult};
pub use toggle::{ToggleCommand, ToggleResult};

use clap::Subcommand;
use ticklist_store::{IdGenerator, PersistenceAdapter, TaskId, TaskStore};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a task to the top of the list
    Add(AddCommand),

    /// Mark a task completed, or reopen a completed one
    Toggle(ToggleCommand),

    /// Remove a task
    Delete(DeleteCommand),

    /// List tasks, optionally filtered by status
    List(ListCommand),

    /// Show total, active and completed counts
    Stats(StatsCommand),
}

impl Command {
    /// Execute the command against a store and render its result.
    ///
    /// None of the commands fail: blank text and unknown ids are reported
    /// in the rendered message and leave the list untouched.
    pub fn execute<A, G>(&self, store: &mut TaskStore<A, G>) -> String
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        match self {
            Command::Add(cmd) => cmd.execute(store).to_string(),
            Command::Toggle(cmd) => cmd.execute(store).to_string(),
            Command::Delete(cmd) => cmd.execute(store).to_string(),
            Command::List(cmd) => cmd.execute(store).to_string(),
            Command::Stats(cmd) => cmd.execute(store).to_string(),
        }
    }
}

/// Parse a task id argument
pub(crate) fn parse_task_id(s: &str) -> Result<TaskId, String> {
    s.parse()
        .map_err(|_| format!("invalid task id '{}'. Task ids are non-negative integers", s))
}
