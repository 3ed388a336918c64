//! JSON file persistence
//!
//! Stores the whole task list as one JSON document on disk, the local
//! counterpart of a browser storage slot.

use super::{PersistenceAdapter, decode_tasks, encode_tasks};
use crate::error::{StoreError, StoreResult};
use crate::models::Task;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Directory under the platform data dir that holds the store file
pub const DEFAULT_STORE_DIR: &str = "ticklist";

/// Directory relative to the working directory used when the platform has no data dir
pub const FALLBACK_STORE_DIR: &str = ".ticklist";

/// File name of the store document
pub const STORE_FILE_NAME: &str = "tasks.json";

/// Adapter keeping the task list in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    /// Open the store file at `path`.
    ///
    /// Creates missing parent directories. The file itself is only created
    /// by the first save.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPath` if the path is a directory or has no file name.
    /// Returns `StoreError::CreateDirectory` if a parent directory cannot be created.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let path = Self::prepare_path(path)?;
        debug!(path = %path.display(), "opened task list file");
        Ok(Self { path })
    }

    /// Path of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default location of the store file.
    ///
    /// `<data dir>/ticklist/tasks.json`, or `./.ticklist/tasks.json` when the
    /// platform reports no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(DEFAULT_STORE_DIR))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_DIR))
            .join(STORE_FILE_NAME)
    }

    /// Read the saved list, reporting why it could not be read.
    ///
    /// A missing file is not an error and reads as an empty list.
    pub fn read_tasks(&self) -> StoreResult<Vec<Task>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "no task list file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        decode_tasks(&raw)
    }

    /// Replace the saved list.
    ///
    /// Writes a sibling temporary file and renames it over the store file,
    /// so readers never observe a half-written document.
    pub fn write_tasks(&self, tasks: &[Task]) -> StoreResult<()> {
        let raw = encode_tasks(tasks)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, raw).map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        trace!(path = %self.path.display(), count = tasks.len(), "wrote task list");
        Ok(())
    }

    /// Validate the store path and create its parent directories.
    fn prepare_path(path: &Path) -> StoreResult<PathBuf> {
        let path = path.to_path_buf();

        if path.is_dir() {
            return Err(StoreError::InvalidPath {
                path,
                reason: "path is a directory, expected a file".to_string(),
            });
        }

        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath {
                path,
                reason: "path has no file name".to_string(),
            });
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(path)
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn load(&self) -> Vec<Task> {
        self.read_tasks().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable task list, starting empty");
            Vec::new()
        })
    }

    fn save(&mut self, tasks: &[Task]) {
        if let Err(e) = self.write_tasks(tasks) {
            warn!(error = %e, "failed to save task list");
        }
    }
}
