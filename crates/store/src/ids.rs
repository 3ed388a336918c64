//! Task identifier generation
//!
//! The store asks an [`IdGenerator`] for fresh ids and tells it about the
//! largest id it loaded, so a generator never hands out an id that was
//! already issued in an earlier session.

use crate::models::TaskId;
use chrono::Utc;

/// Source of fresh task identifiers
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_id(&mut self) -> TaskId;

    /// Make sure every later id is greater than `id`.
    fn advance_past(&mut self, id: TaskId);
}

/// Millisecond-timestamp identifiers
///
/// Ids follow the wall clock but are strictly increasing within a process:
/// two adds in the same millisecond (or a clock that steps backwards) get
/// consecutive values instead of a duplicate.
#[derive(Debug, Clone, Default)]
pub struct TimestampIdGenerator {
    last: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let next = Self::now_millis().max(self.last.saturating_add(1));
        self.last = next;
        TaskId::new(next)
    }

    fn advance_past(&mut self, id: TaskId) {
        self.last = self.last.max(id.get());
    }
}

/// Counter identifiers, for deterministic ids in tests and tooling
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Start counting at `start`
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    fn advance_past(&mut self, id: TaskId) {
        if id.get() >= self.next {
            self.next = id.get().saturating_add(1);
        }
    }
}
