//! Configuration module for MyLedger
//!
//! This module provides configuration management including:
//! - Platform cache-directory resolution
//! - The small application cache (last-opened ledger file)

pub mod cache;
pub mod paths;

pub use cache::AppCache;
pub use paths::AppPaths;
