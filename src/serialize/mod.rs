//! Versioned ledger document serialization
//!
//! One saved file holds one complete ledger snapshot as a self-describing
//! JSON document (conventional extension: `.pml`). The document embeds a
//! schema version; load dispatches to the codec registered for that version,
//! so old files keep loading as the schema evolves.

pub mod v0;

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::services::LedgerService;
use crate::storage::file_io;

/// Application tag written into every saved document
pub const APPLICATION_TAG: &str = "MyLedger";

/// Newest schema version
///
/// Saves default to this, and so do documents that carry no `version` field.
pub const LATEST_VERSION: u32 = v0::VERSION;

/// A versioned encode/decode pair for the persisted document format
pub trait Codec {
    /// The schema version this codec reads and writes
    fn version(&self) -> u32;

    /// Encode the full service state into a document
    fn encode(&self, data: &LedgerService) -> LedgerResult<serde_json::Value>;

    /// Rebuild a service from a document of this codec's version
    fn decode(&self, document: &serde_json::Value) -> LedgerResult<LedgerService>;
}

/// Version registry
///
/// Append-only: a new schema revision adds a module and a match arm here;
/// existing codecs stay untouched so previously written files keep loading.
fn codec_for(version: u32) -> Option<&'static dyn Codec> {
    match version {
        v0::VERSION => Some(&v0::CodecV0),
        _ => None,
    }
}

/// Reads and writes one ledger snapshot at a fixed file path
pub struct Serializer {
    path: PathBuf,
}

impl Serializer {
    /// Create a serializer bound to a ledger file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this serializer reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the service state at the latest schema version
    pub fn save(&self, data: &LedgerService) -> LedgerResult<()> {
        self.save_as_version(data, LATEST_VERSION)
    }

    /// Save the service state at a specific schema version
    ///
    /// Replaces the whole file atomically; there are no partial writes.
    pub fn save_as_version(&self, data: &LedgerService, version: u32) -> LedgerResult<()> {
        let codec =
            codec_for(version).ok_or(LedgerError::UnsupportedVersion { version })?;
        let document = codec.encode(data)?;
        file_io::write_json_atomic(&self.path, &document)
    }

    /// Load a service from the file, dispatching on the document's version
    ///
    /// A document without a `version` field is read with the latest codec.
    /// A version with no registered codec is a hard failure; nothing is
    /// partially loaded.
    pub fn load(&self) -> LedgerResult<LedgerService> {
        let document: serde_json::Value = file_io::read_json_required(&self.path)?;

        let version = match document.get("version") {
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| {
                    LedgerError::Json(format!("Document version is not an integer: {}", value))
                })?,
            None => LATEST_VERSION,
        };

        let codec =
            codec_for(version).ok_or(LedgerError::UnsupportedVersion { version })?;
        codec.decode(&document)
    }
}
