//! The task list store
//!
//! Owns the ordered task list, applies add/toggle/delete to it and mirrors
//! every change to an injected [`PersistenceAdapter`].

use crate::ids::{IdGenerator, TimestampIdGenerator};
use crate::models::{Filter, Stats, Task, TaskId, trim_task_text};
use crate::persistence::PersistenceAdapter;
use crate::view;
use chrono::Utc;
use tracing::{debug, trace, warn};

/// How many ids `add` will try before giving up on a colliding generator
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Ordered task list backed by a persistence adapter
///
/// Newest tasks come first. Blank input and unknown ids are ignored rather
/// than reported, and nothing here returns an error.
pub struct TaskStore<A, G = TimestampIdGenerator> {
    tasks: Vec<Task>,
    adapter: A,
    ids: G,
}

impl<A: PersistenceAdapter> TaskStore<A> {
    /// Load the task list from `adapter`, using timestamp ids.
    pub fn open(adapter: A) -> Self {
        Self::with_id_generator(adapter, TimestampIdGenerator::new())
    }
}

impl<A: PersistenceAdapter, G: IdGenerator> TaskStore<A, G> {
    /// Load the task list from `adapter`, drawing new ids from `ids`.
    pub fn with_id_generator(adapter: A, mut ids: G) -> Self {
        let tasks = adapter.load();
        if let Some(max) = tasks.iter().map(Task::id).max() {
            ids.advance_past(max);
        }
        debug!(count = tasks.len(), "loaded task list");

        Self {
            tasks,
            adapter,
            ids,
        }
    }

    /// All tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The persistence adapter behind this store
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Add a task to the front of the list.
    ///
    /// `text` is trimmed first. Returns the new task's id, or `None` when the
    /// trimmed text is empty (nothing is created or saved).
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = trim_task_text(text);
        if text.is_empty() {
            trace!("ignoring blank task text");
            return None;
        }

        let id = self.fresh_id()?;
        self.tasks.insert(0, Task::new(id, text, Utc::now()));
        debug!(%id, "added task");
        self.persist();
        Some(id)
    }

    /// Flip the completion flag of a task.
    ///
    /// Returns the new flag, or `None` if no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            trace!(%id, "toggle of unknown task ignored");
            return None;
        };

        task.toggle();
        let completed = task.is_completed();
        debug!(%id, completed, "toggled task");
        self.persist();
        Some(completed)
    }

    /// Remove a task, keeping the order of the rest.
    ///
    /// Returns the removed task, or `None` if no task has this id.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id() == id) else {
            trace!(%id, "delete of unknown task ignored");
            return None;
        };

        let removed = self.tasks.remove(index);
        debug!(%id, "deleted task");
        self.persist();
        Some(removed)
    }

    /// Tasks visible under `filter`, in list order
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        view::filter(&self.tasks, filter)
    }

    /// Counts over the whole list
    pub fn stats(&self) -> Stats {
        view::stats(&self.tasks)
    }

    /// Draw ids until one is not already in the list.
    fn fresh_id(&mut self) -> Option<TaskId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.contains(id) {
                return Some(id);
            }
            trace!(%id, "generated id already in use, retrying");
        }

        warn!(
            attempts = MAX_ID_ATTEMPTS,
            "could not generate an unused task id; task not added"
        );
        None
    }

    fn persist(&mut self) {
        self.adapter.save(&self.tasks);
    }
}
