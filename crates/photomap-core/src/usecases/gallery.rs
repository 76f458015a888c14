//! Photo gallery use case
//!
//! Orchestrates the capture → encode → write → index → reload workflow over
//! the camera, storage, and preference-store ports. Owns the in-memory
//! gallery; the persisted serialized index under the fixed `"photos"` key is
//! the durable source of truth, and the in-memory list is a cache rebuilt
//! from it on load.
//!
//! ## Failure policy
//!
//! - `capture_and_add` mutates nothing unless capture, encoding, and the
//!   file write all succeed.
//! - The index write that follows an add or delete is always attempted
//!   before the operation returns, but its failure is logged rather than
//!   returned (the in-memory state is already the intended one).
//! - `delete` updates memory and index before issuing the file delete; a
//!   failed file delete is surfaced but never rolled back.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::newtypes::{FileName, StorageKey};
use crate::domain::photo::{Gallery, PhotoRecord};
use crate::ports::camera::{CameraConfig, CapturedPhoto, ICamera};
use crate::ports::platform::Platform;
use crate::ports::preferences::IPreferenceStore;
use crate::ports::storage::IStorageAdapter;
use crate::usecases::persistence::{strategy_for, IPersistenceStrategy};

/// Use case owning the photo gallery
///
/// Construction probes nothing at call time: the platform decides the
/// persistence strategy once, here.
pub struct PhotoGalleryManager {
    camera: Arc<dyn ICamera>,
    storage: Arc<dyn IStorageAdapter>,
    preferences: Arc<dyn IPreferenceStore>,
    strategy: Arc<dyn IPersistenceStrategy>,
    storage_key: StorageKey,
    camera_config: CameraConfig,
    gallery: Gallery,
}

impl PhotoGalleryManager {
    /// Creates a gallery manager for the given host platform
    pub fn new(
        platform: Platform,
        camera: Arc<dyn ICamera>,
        storage: Arc<dyn IStorageAdapter>,
        preferences: Arc<dyn IPreferenceStore>,
    ) -> Self {
        let strategy = strategy_for(platform, Arc::clone(&storage));
        Self {
            camera,
            storage,
            preferences,
            strategy,
            storage_key: StorageKey::photos(),
            camera_config: CameraConfig::default(),
            gallery: Gallery::new(),
        }
    }

    /// Replaces the capture configuration passed to the camera
    #[must_use]
    pub fn with_camera_config(mut self, config: CameraConfig) -> Self {
        self.camera_config = config;
        self
    }

    /// Immutable snapshot of the gallery, newest first
    #[must_use]
    pub fn photos(&self) -> &[PhotoRecord] {
        self.gallery.records()
    }

    /// Captures a photo, persists it, and prepends it to the gallery
    ///
    /// # Errors
    ///
    /// Returns an error if capture is cancelled or denied, encoding fails,
    /// or the file write fails. In every error case the in-memory gallery
    /// is left unmodified.
    pub async fn capture_and_add(&mut self) -> Result<PhotoRecord> {
        let captured = self
            .camera
            .get_photo(&self.camera_config)
            .await
            .context("Failed to capture photo")?;

        let record = self.save_picture(&captured).await?;

        self.gallery
            .prepend(record.clone())
            .context("Failed to add captured photo to gallery")?;
        debug!(file_path = %record.file_path, "photo added to gallery");

        self.persist_index().await;
        Ok(record)
    }

    /// Loads the persisted index, replacing the in-memory gallery wholesale
    ///
    /// An absent index is the empty gallery, not an error. On web hosts
    /// every record's display path is recomputed from storage; a missing
    /// file fails the whole load and leaves the previous in-memory gallery
    /// untouched.
    pub async fn load_saved(&mut self) -> Result<()> {
        let value = self
            .preferences
            .get(&self.storage_key)
            .await
            .context("Failed to read gallery index from preference store")?;

        let mut records: Vec<PhotoRecord> = match value {
            Some(json) => {
                serde_json::from_str(&json).context("Failed to parse gallery index")?
            }
            None => Vec::new(),
        };

        self.strategy
            .rehydrate(&mut records)
            .await
            .context("Failed to rebuild display paths from storage")?;

        self.gallery =
            Gallery::from_records(records).context("Persisted gallery index is inconsistent")?;
        debug!(count = self.gallery.len(), "gallery loaded");
        Ok(())
    }

    /// Deletes the photo at `position`
    ///
    /// `photo` must be the record currently at `position`; the pair is
    /// validated before anything is mutated. Memory and index are updated
    /// first, then the stored file (addressed by the trailing segment of
    /// its `file_path`) is deleted. A failed file delete is surfaced to the
    /// caller and the removal is not rolled back, so a failed delete can
    /// leave an orphaned file behind.
    pub async fn delete(&mut self, photo: &PhotoRecord, position: usize) -> Result<PhotoRecord> {
        match self.gallery.records().get(position) {
            Some(current) if current.file_path == photo.file_path => {}
            Some(_) => {
                return Err(crate::domain::DomainError::PositionMismatch { position }.into());
            }
            None => {
                return Err(crate::domain::DomainError::PositionOutOfBounds {
                    position,
                    len: self.gallery.len(),
                }
                .into());
            }
        }

        let removed = self
            .gallery
            .remove_at(position)
            .context("Failed to remove photo from gallery")?;
        self.persist_index().await;

        let file_name = removed
            .stored_file_name()
            .context("Stored photo has no usable file name")?;
        self.storage
            .delete_file(&file_name)
            .await
            .with_context(|| format!("Failed to delete stored photo {file_name}"))?;

        debug!(file_path = %removed.file_path, "photo deleted");
        Ok(removed)
    }

    /// Runs the platform strategy over a fresh capture and stores the result
    async fn save_picture(&self, captured: &CapturedPhoto) -> Result<PhotoRecord> {
        let base64_data = self.strategy.read_as_base64(captured).await?;

        let file_name = FileName::timestamped(Utc::now());
        let written = self
            .storage
            .write_file(&file_name, &base64_data)
            .await
            .with_context(|| format!("Failed to write photo {file_name}"))?;

        Ok(self.strategy.build_record(captured, &written, &file_name))
    }

    /// Serializes the gallery into the preference store
    ///
    /// Attempted after every mutation; failure leaves the in-memory state
    /// authoritative until the next successful write, so it is logged
    /// rather than returned.
    async fn persist_index(&self) {
        let json = match self.gallery.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize gallery index");
                return;
            }
        };
        if let Err(e) = self.preferences.set(&self.storage_key, &json).await {
            warn!(error = %e, "failed to persist gallery index");
        }
    }
}
