//! List command for displaying tasks
//!
//! Implements the `tick list` command to display tasks with a status filter.

use crate::output::{format_completion_footer, format_task_table};
use clap::Args;
use std::fmt;
use ticklist_store::{Filter, IdGenerator, PersistenceAdapter, Stats, Task, TaskStore};

/// List tasks, optionally filtered by status
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Status filter (all, active, completed); anything else lists all tasks
    #[arg(short, long, default_value = "all", value_parser = parse_filter)]
    pub filter: Filter,

    /// Print the matching task records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse a filter argument, falling back to `all` for unknown names
fn parse_filter(s: &str) -> Result<Filter, String> {
    Ok(Filter::parse(s))
}

/// Result of the list command execution
#[derive(Debug, Clone)]
pub struct ListResult {
    /// The filter that was applied
    pub filter: Filter,
    /// Matching tasks, newest first
    pub tasks: Vec<Task>,
    /// Counts over the whole list, not just the matching tasks
    pub stats: Stats,
    /// Render as JSON instead of a table
    pub json: bool,
}

impl fmt::Display for ListResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.json {
            let json = serde_json::to_string_pretty(&self.tasks).map_err(|_| fmt::Error)?;
            return write!(f, "{}", json);
        }

        if self.tasks.is_empty() {
            write!(f, "{}", self.filter.empty_message())?;
        } else {
            write!(f, "{}", format_task_table(&self.tasks))?;
        }

        if let Some(footer) = format_completion_footer(&self.stats) {
            write!(f, "\n\n{}", footer)?;
        }

        Ok(())
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute<A, G>(&self, store: &TaskStore<A, G>) -> ListResult
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        ListResult {
            filter: self.filter,
            tasks: store.filtered(self.filter).into_iter().cloned().collect(),
            stats: store.stats(),
            json: self.json,
        }
    }
}
