//! In-memory persistence
//!
//! Holds the serialized list in a single string slot, the way a browser
//! keeps it under one storage key.

use super::{PersistenceAdapter, decode_tasks, encode_tasks};
use crate::error::StoreResult;
use crate::models::Task;
use tracing::warn;

/// Adapter keeping the serialized task list in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    slot: Option<String>,
    saves: usize,
}

impl MemoryAdapter {
    /// Create an adapter with nothing saved
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter whose slot already holds `raw`, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
            saves: 0,
        }
    }

    /// Create an adapter that already holds `tasks`
    pub fn with_tasks(tasks: &[Task]) -> StoreResult<Self> {
        Ok(Self::with_raw(encode_tasks(tasks)?))
    }

    /// The serialized document, if anything was ever stored
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Number of saves performed through this adapter
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Decode the stored document, reporting malformed data.
    pub fn stored_tasks(&self) -> StoreResult<Vec<Task>> {
        self.slot.as_deref().map_or(Ok(Vec::new()), decode_tasks)
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Vec<Task> {
        self.stored_tasks().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable task list, starting empty");
            Vec::new()
        })
    }

    fn save(&mut self, tasks: &[Task]) {
        match encode_tasks(tasks) {
            Ok(raw) => {
                self.slot = Some(raw);
                self.saves += 1;
            }
            Err(e) => warn!(error = %e, "failed to save task list"),
        }
    }
}
