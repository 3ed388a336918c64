//! Stats command for task counts
//!
//! Implements the `tick stats` command.

use crate::output::format_stats;
use clap::Args;
use std::fmt;
use ticklist_store::{IdGenerator, PersistenceAdapter, Stats, TaskStore};

/// Show total, active and completed counts
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Print the counts as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of the stats command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsResult {
    pub stats: Stats,
    pub json: bool,
}

impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.json {
            let json = serde_json::to_string(&self.stats).map_err(|_| fmt::Error)?;
            write!(f, "{}", json)
        } else {
            write!(f, "{}", format_stats(&self.stats))
        }
    }
}

impl StatsCommand {
    /// Execute the stats command.
    pub fn execute<A, G>(&self, store: &TaskStore<A, G>) -> StatsResult
    where
        A: PersistenceAdapter,
        G: IdGenerator,
    {
        StatsResult {
            stats: store.stats(),
            json: self.json,
        }
    }
}
