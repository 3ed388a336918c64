//! Task list store for Ticklist
//!
//! Provides the ordered task list with its add/toggle/delete operations,
//! pure filter and statistics views, injectable id generation, and the
//! persistence adapters that mirror the list to storage.

pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod persistence;
pub mod store;
pub mod view;

pub use config::{STORE_PATH_ENV, resolve_store_path};
pub use error::{StoreError, StoreResult};
pub use ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use models::{Filter, Stats, Task, TaskId};
pub use persistence::{JsonFileAdapter, MemoryAdapter, PersistenceAdapter};
pub use store::TaskStore;
pub use view::{filter, filter_by_name, stats};

/// Store backed by the JSON file adapter, as used by the binaries
pub type FileTaskStore = TaskStore<JsonFileAdapter>;

// Stores move freely between threads even though they are used from one
static_assertions::assert_impl_all!(FileTaskStore: Send, Sync);
static_assertions::assert_impl_all!(TaskStore<MemoryAdapter, SequentialIdGenerator>: Send, Sync);
