//! Platform persistence strategies
//!
//! The photo workflow differs between hybrid and web hosts in three spots:
//! how a fresh capture becomes a base64 payload, what goes into the
//! resulting [`PhotoRecord`], and whether display paths must be recomputed
//! when the persisted index is reloaded. Those three decisions form the
//! [`IPersistenceStrategy`] interface, with one implementation per host
//! kind, selected once when the gallery manager is constructed.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::domain::newtypes::FileName;
use crate::domain::photo::PhotoRecord;
use crate::ports::camera::CapturedPhoto;
use crate::ports::platform::Platform;
use crate::ports::storage::{IStorageAdapter, WrittenFile};

/// Strategy for the platform-dependent parts of photo persistence
#[async_trait::async_trait]
pub trait IPersistenceStrategy: Send + Sync {
    /// Converts a transient capture into a durable base64 payload
    async fn read_as_base64(&self, photo: &CapturedPhoto) -> Result<String>;

    /// Builds the gallery record for a capture that was just written
    fn build_record(
        &self,
        photo: &CapturedPhoto,
        written: &WrittenFile,
        file_name: &FileName,
    ) -> PhotoRecord;

    /// Recomputes display paths for records loaded from the index
    ///
    /// # Errors
    /// Fails the whole load if any record's file cannot be re-read; a
    /// partial list is never produced.
    async fn rehydrate(&self, records: &mut [PhotoRecord]) -> Result<()>;
}

/// Selects the strategy matching the probed platform
pub fn strategy_for(
    platform: Platform,
    storage: Arc<dyn IStorageAdapter>,
) -> Arc<dyn IPersistenceStrategy> {
    match platform {
        Platform::Hybrid => Arc::new(HybridPersistence { storage }),
        Platform::Web => Arc::new(WebPersistence { storage }),
    }
}

// ============================================================================
// Hybrid strategy
// ============================================================================

/// Persistence on a device-native host
///
/// The capture already lives on device storage, so its payload is obtained
/// by reading the native path back (already base64 at the port boundary).
/// Stored URIs remain directly usable across sessions, so reload never
/// recomputes display paths.
pub struct HybridPersistence {
    storage: Arc<dyn IStorageAdapter>,
}

#[async_trait::async_trait]
impl IPersistenceStrategy for HybridPersistence {
    async fn read_as_base64(&self, photo: &CapturedPhoto) -> Result<String> {
        let path = photo.require_path()?;
        self.storage
            .read_file(path)
            .await
            .with_context(|| format!("Failed to read capture back from {path}"))
    }

    fn build_record(
        &self,
        _photo: &CapturedPhoto,
        written: &WrittenFile,
        _file_name: &FileName,
    ) -> PhotoRecord {
        PhotoRecord::new(written.uri.clone(), self.storage.to_display_uri(&written.uri))
    }

    async fn rehydrate(&self, records: &mut [PhotoRecord]) -> Result<()> {
        debug!(count = records.len(), "hybrid host, stored paths stay usable");
        Ok(())
    }
}

// ============================================================================
// Web strategy
// ============================================================================

/// Persistence on a browser host
///
/// The capture is only reachable through its transient reference, which is
/// fetched as a blob and converted to base64. Transient references do not
/// survive a restart, so every reload re-reads each stored file and
/// rebuilds the display path as an inline `data:` URI.
pub struct WebPersistence {
    storage: Arc<dyn IStorageAdapter>,
}

#[async_trait::async_trait]
impl IPersistenceStrategy for WebPersistence {
    async fn read_as_base64(&self, photo: &CapturedPhoto) -> Result<String> {
        let web_path = photo.require_web_path()?;
        self.storage
            .read_blob_as_base64(web_path)
            .await
            .with_context(|| format!("Failed to convert transient capture {web_path}"))
    }

    fn build_record(
        &self,
        photo: &CapturedPhoto,
        _written: &WrittenFile,
        file_name: &FileName,
    ) -> PhotoRecord {
        // The transient reference is already loaded in memory; keep using it
        // for display instead of the freshly written base64 payload.
        PhotoRecord {
            file_path: file_name.as_str().to_string(),
            display_path: photo.web_path.clone(),
        }
    }

    async fn rehydrate(&self, records: &mut [PhotoRecord]) -> Result<()> {
        for record in records.iter_mut() {
            let payload = self
                .storage
                .read_file(&record.file_path)
                .await
                .with_context(|| {
                    format!("Failed to re-read stored photo {}", record.file_path)
                })?;
            record.display_path = Some(format!("data:image/jpeg;base64,{payload}"));
        }
        debug!(count = records.len(), "recomputed display paths");
        Ok(())
    }
}
