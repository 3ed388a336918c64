//! Test infrastructure for integration tests
//!
//! Provides isolated store file setup/teardown and CLI command helpers.
//! Each test gets its own task list file to ensure no shared state.

use std::path::PathBuf;
use ticklist_cli::commands::{AddCommand, DeleteCommand, ListCommand, StatsCommand, ToggleCommand};
use ticklist_store::{Filter, JsonFileAdapter, SequentialIdGenerator, TaskId, TaskStore};

/// Store type used by the integration tests: a real file with predictable ids
pub type TestStore = TaskStore<JsonFileAdapter, SequentialIdGenerator>;

/// Test context containing an isolated store file and temp directory
pub struct TestContext {
    pub store: TestStore,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated task list file.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub fn new() -> Self {
        Self::with_name("default")
    }

    /// Create a new test context with a specific suffix for debugging.
    pub fn with_name(name: &str) -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tick-integration-{}-{}-{:?}-{}",
            name,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));

        let store = open_store(&temp_dir.join("tasks.json"));
        Self { store, temp_dir }
    }

    /// Path of the task list file
    pub fn store_path(&self) -> PathBuf {
        self.temp_dir.join("tasks.json")
    }

    /// Replace the store with a fresh one loaded from the same file,
    /// as a second run of the CLI would.
    pub fn reopen(&mut self) {
        self.store = open_store(&self.store_path());
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Auto-cleanup on drop
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

fn open_store(path: &std::path::Path) -> TestStore {
    let adapter = JsonFileAdapter::open(path).unwrap();
    TaskStore::with_id_generator(adapter, SequentialIdGenerator::default())
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

/// Create an AddCommand for the given text.
pub fn add_cmd(text: &str) -> AddCommand {
    AddCommand {
        text: text.to_string(),
    }
}

/// Create a ToggleCommand for the given id.
pub fn toggle_cmd(id: TaskId) -> ToggleCommand {
    ToggleCommand { id }
}

/// Create a DeleteCommand for the given id.
pub fn delete_cmd(id: TaskId) -> DeleteCommand {
    DeleteCommand { id }
}

/// Create a table-rendering ListCommand with the given filter.
pub fn list_cmd(filter: Filter) -> ListCommand {
    ListCommand {
        filter,
        json: false,
    }
}

/// Create a JSON-rendering ListCommand with the given filter.
#[allow(dead_code)]
pub fn list_json_cmd(filter: Filter) -> ListCommand {
    ListCommand { filter, json: true }
}

/// Create a StatsCommand.
pub fn stats_cmd(json: bool) -> StatsCommand {
    StatsCommand { json }
}

// =============================================================================
// Store Helpers
// =============================================================================

/// Add a task through the CLI command and return its id.
pub fn add_task(ctx: &mut TestContext, text: &str) -> TaskId {
    add_cmd(text)
        .execute(&mut ctx.store)
        .id
        .expect("task text should not be blank")
}

/// Texts of the tasks in list order
pub fn texts(store: &TestStore) -> Vec<String> {
    store.tasks().iter().map(|t| t.text().to_string()).collect()
}
