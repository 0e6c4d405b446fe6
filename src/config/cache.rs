//! Application cache
//!
//! A small key-value store persisted in the user's cache directory. Its one
//! real job is remembering the last ledger file the user opened, so the
//! embedding application can auto-load it at startup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::paths::AppPaths;
use crate::error::LedgerError;
use crate::storage::file_io;

/// Cache key for the most recently saved/loaded ledger file path
pub const LAST_OPENED_KEY: &str = "last_opened";

/// Persistent application cache
#[derive(Debug, Clone)]
pub struct AppCache {
    path: PathBuf,
    data: BTreeMap<String, String>,
}

impl AppCache {
    /// Load the cache from the standard location, or start empty
    ///
    /// An unreadable or corrupt cache file is treated as empty; the cache is
    /// best-effort state, never required for correctness.
    pub fn load_or_default(paths: &AppPaths) -> Self {
        Self::at_path(paths.cache_file())
    }

    /// Load a cache from an explicit file path, or start empty
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = file_io::read_json(&path).unwrap_or_default();
        Self { path, data }
    }

    /// Get a cached value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Set a cached value (in memory; call [`AppCache::flush`] to persist)
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// The most recently saved/loaded ledger file path, if any
    pub fn last_opened(&self) -> Option<PathBuf> {
        self.get(LAST_OPENED_KEY).map(PathBuf::from)
    }

    /// Record the most recently saved/loaded ledger file path
    pub fn set_last_opened(&mut self, path: impl AsRef<Path>) {
        self.set(
            LAST_OPENED_KEY,
            path.as_ref().to_string_lossy().into_owned(),
        );
    }

    /// Write the cache to disk
    pub fn flush(&self) -> Result<(), LedgerError> {
        file_io::write_json_atomic(&self.path, &self.data)
    }
}
