//! Photomap Storage - Device storage adapters
//!
//! Driven (secondary) adapters implementing the storage-facing ports of
//! `photomap-core` against the local filesystem:
//!
//! - [`DataDirStorage`] - `IStorageAdapter` over one application data
//!   directory (atomic writes, base64 at the boundary)
//! - [`JsonFilePreferenceStore`] - `IPreferenceStore` backed by a single
//!   JSON object file
//!
//! ## Architecture
//!
//! Both adapters keep durability simple: every write goes to a temporary
//! file in the target directory and is renamed into place, so a crash never
//! leaves a half-written photo or index behind.

pub mod data_dir;
pub mod preferences;

pub use data_dir::DataDirStorage;
pub use preferences::JsonFilePreferenceStore;

/// Errors that can occur during storage adapter operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The payload handed to a write was not valid base64
    #[error("Invalid base64 payload: {0}")]
    InvalidPayload(String),

    /// An I/O error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file holds something other than a string map
    #[error("Corrupt preference file: {0}")]
    CorruptPreferences(String),
}
