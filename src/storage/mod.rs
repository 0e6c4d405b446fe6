//! Storage layer for MyLedger
//!
//! JSON file I/O with atomic writes and automatic directory creation. The
//! versioned document work itself lives in [`crate::serialize`].

pub mod file_io;

pub use file_io::{read_json, read_json_required, write_json_atomic};
