//! Data directory storage adapter (secondary/driven adapter)
//!
//! Implements [`IStorageAdapter`] using `tokio::fs` against one application
//! data directory.
//!
//! ## Design Decisions
//!
//! - **Atomic writes**: Uses write-to-temp + rename so a crash never leaves
//!   a partial photo file.
//! - **Base64 at the boundary**: payloads cross the port as base64; this
//!   adapter decodes on write and encodes on read, so the files on disk are
//!   real JPEG bytes.
//! - **Two path shapes**: `read_file` accepts a bare file name (resolved
//!   against the data directory) or an absolute path/`file://` URI, the two
//!   forms a `PhotoRecord::file_path` takes across platforms.

use std::path::{Path, PathBuf};

use base64::Engine;
use photomap_core::domain::newtypes::FileName;
use photomap_core::ports::storage::{IStorageAdapter, WrittenFile};
use tracing::{debug, instrument};

use crate::StorageError;

/// Adapter that bridges the [`IStorageAdapter`] port to a directory on disk
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct DataDirStorage {
    root: PathBuf,
}

impl DataDirStorage {
    /// Create an adapter rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this adapter writes into
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the two accepted path shapes to an on-disk path
    fn resolve(&self, path: &str) -> PathBuf {
        if let Some(stripped) = path.strip_prefix("file://") {
            return PathBuf::from(stripped);
        }
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }

    /// Write bytes to `target` via a temporary file in the same directory
    /// so the rename is atomic (same filesystem).
    async fn write_atomic(&self, target: &Path, bytes: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp_path = {
            let mut p = target.as_os_str().to_owned();
            p.push(".tmp");
            PathBuf::from(p)
        };

        debug!(?tmp_path, "writing to temporary file");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, target).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl IStorageAdapter for DataDirStorage {
    #[instrument(skip(self, base64_data), fields(name = %name))]
    async fn write_file(&self, name: &FileName, base64_data: &str) -> anyhow::Result<WrittenFile> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(base64_data)
            .map_err(|e| StorageError::InvalidPayload(e.to_string()))?;

        let target = self.root.join(name.as_str());
        self.write_atomic(&target, &bytes).await?;

        debug!(bytes = bytes.len(), "photo written");
        Ok(WrittenFile {
            uri: target.to_string_lossy().into_owned(),
        })
    }

    #[instrument(skip(self))]
    async fn read_file(&self, path: &str) -> anyhow::Result<String> {
        let resolved = self.resolve(path);
        let bytes = tokio::fs::read(&resolved).await?;
        debug!(bytes = bytes.len(), "file read complete");
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    #[instrument(skip(self), fields(name = %name))]
    async fn delete_file(&self, name: &FileName) -> anyhow::Result<()> {
        let target = self.root.join(name.as_str());
        tokio::fs::remove_file(&target).await?;
        debug!("file deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn read_blob_as_base64(&self, locator: &str) -> anyhow::Result<String> {
        // Transient references on this host are plain paths or file:// URIs;
        // resolving one is the same read as a stored file.
        self.read_file(locator).await
    }

    fn to_display_uri(&self, uri: &str) -> String {
        if uri.contains("://") {
            uri.to_string()
        } else {
            format!("file://{uri}")
        }
    }
}
