//! Path management for MyLedger
//!
//! Resolves the per-user cache directory that holds the application cache.
//!
//! ## Path Resolution Order
//!
//! 1. `MYLEDGER_CACHE_DIR` environment variable (if set)
//! 2. The platform cache directory (`~/.cache/MyLedger` on Linux,
//!    `~/Library/Caches/MyLedger` on macOS, `%LOCALAPPDATA%\MyLedger` on
//!    Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by MyLedger
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base cache directory for MyLedger
    cache_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let cache_dir = if let Ok(custom) = std::env::var("MYLEDGER_CACHE_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_cache_dir()?
        };

        Ok(Self { cache_dir })
    }

    /// Create AppPaths with a custom cache directory (useful for testing)
    pub fn with_cache_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Get the cache directory
    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Get the path to the application cache file
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join("app_data.json")
    }

    /// Ensure the cache directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.cache_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create cache directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the platform cache directory
fn resolve_default_cache_dir() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "MyLedger")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Io("Could not determine a home directory".into()))
}
