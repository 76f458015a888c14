//! Device storage port (driven/secondary port)
//!
//! This module defines the interface for the device storage capability:
//! writing, reading, and deleting files inside the fixed application data
//! directory, plus the binary-blob-to-base64 conversion used for transient
//! capture references.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific.
//! - File payloads cross this boundary as base64 `String`s: that is the
//!   form the capture pipeline produces and the form the persisted index
//!   re-reads, so adapters encode/decode at the edge.
//! - `read_file` accepts either a bare [`FileName`]-style name (resolved
//!   against the data directory) or a full adapter URI, mirroring the two
//!   shapes a `PhotoRecord::file_path` can take.

use crate::domain::newtypes::FileName;

/// Result of a successful file write
///
/// `uri` is the adapter's durable locator for the stored file. On hybrid
/// hosts this becomes the record's `file_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Adapter-assigned URI of the stored file
    pub uri: String,
}

/// Port trait for device storage operations
///
/// All paths are plain file names within one fixed logical directory (the
/// application data directory); the adapter owns the mapping to real
/// storage.
#[async_trait::async_trait]
pub trait IStorageAdapter: Send + Sync {
    /// Writes a base64 payload under `name` in the data directory
    ///
    /// Replaces any existing file of the same name.
    ///
    /// # Returns
    /// The adapter URI of the stored file
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64 or the write fails
    async fn write_file(&self, name: &FileName, base64_data: &str) -> anyhow::Result<WrittenFile>;

    /// Reads a stored file and returns its content as base64
    ///
    /// # Arguments
    /// * `path` - A bare file name (resolved against the data directory) or
    ///   a full adapter URI as returned by [`write_file`](Self::write_file)
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    async fn read_file(&self, path: &str) -> anyhow::Result<String>;

    /// Deletes a stored file from the data directory
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be deleted
    async fn delete_file(&self, name: &FileName) -> anyhow::Result<()>;

    /// Fetches a transient capture reference and converts it to base64
    ///
    /// This is the binary-blob-to-text conversion used on web hosts, where
    /// the capture result is a short-lived locator rather than a stored
    /// file.
    ///
    /// # Errors
    /// Returns an error if the locator cannot be resolved or read
    async fn read_blob_as_base64(&self, locator: &str) -> anyhow::Result<String>;

    /// Converts a stored-file URI into one the rendering layer can load
    ///
    /// Hybrid hosts cannot render raw native URIs directly; this is the
    /// conversion applied when building a record's `display_path`.
    fn to_display_uri(&self, uri: &str) -> String;
}
