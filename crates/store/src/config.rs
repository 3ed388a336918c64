//! Store location resolution shared by the binaries

use crate::persistence::JsonFileAdapter;
use std::path::PathBuf;

/// Environment variable naming the store file
pub const STORE_PATH_ENV: &str = "TICK_STORE_PATH";

/// Get the store file path from an explicit argument, the environment, or the default.
///
/// Priority:
/// 1. `explicit` (e.g. a `--store` flag)
/// 2. `TICK_STORE_PATH` environment variable (if non-empty)
/// 3. [`JsonFileAdapter::default_path`]
pub fn resolve_store_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Ok(env_path) = std::env::var(STORE_PATH_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    JsonFileAdapter::default_path()
}
