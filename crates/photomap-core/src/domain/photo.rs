//! Photo gallery domain entities
//!
//! This module defines [`PhotoRecord`], the persisted description of one
//! stored capture, and [`Gallery`], the owned newest-first collection of
//! records. The gallery is an owned-state object: mutation goes through
//! explicit commands that enforce ordering and uniqueness, and the UI layer
//! only ever sees immutable snapshots.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::FileName;

// ============================================================================
// PhotoRecord
// ============================================================================

/// One photo in the gallery
///
/// `file_path` is the durable identifier: a storage-adapter URI on hybrid
/// hosts, or the bare generated file name (`<timestamp>.jpeg`) on web hosts.
/// It is unique within a gallery and stable across sessions.
///
/// `display_path` is whatever currently resolves to renderable image bytes
/// (a converted native URI, a transient capture reference, or a generated
/// `data:` URI). It may be absent and may be recomputed on every load.
///
/// Serialized field names match the persisted index format (`filePath` /
/// `displayPath`), so an index written by an earlier session round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Durable identifier of the stored file
    pub file_path: String,
    /// Renderable locator for the image bytes, if one is currently known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_path: Option<String>,
}

impl PhotoRecord {
    /// Create a record with a known display path
    pub fn new(file_path: impl Into<String>, display_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            display_path: Some(display_path.into()),
        }
    }

    /// Derive the on-disk file name from the trailing segment of `file_path`
    ///
    /// Hybrid hosts store a full adapter URI in `file_path`; the stored file
    /// itself is addressed by the substring after the last `/`.
    pub fn stored_file_name(&self) -> Result<FileName, DomainError> {
        let name = match self.file_path.rfind('/') {
            Some(idx) => &self.file_path[idx + 1..],
            None => self.file_path.as_str(),
        };
        FileName::new(name)
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// Newest-first ordered collection of photo records
///
/// Every successful capture is prepended, so index 0 is always the most
/// recent photo. `file_path` values are unique within the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    records: Vec<PhotoRecord>,
}

impl Gallery {
    /// Create an empty gallery
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a gallery from loaded records, re-validating uniqueness
    ///
    /// Order is preserved as given (the persisted form is already
    /// newest-first).
    pub fn from_records(records: Vec<PhotoRecord>) -> Result<Self, DomainError> {
        let mut gallery = Self::new();
        // Prepending in reverse keeps the incoming order intact.
        for record in records.into_iter().rev() {
            gallery.prepend(record)?;
        }
        Ok(gallery)
    }

    /// Insert a record at the head of the list (newest-first)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePhoto` if a record with the same
    /// `file_path` is already present.
    pub fn prepend(&mut self, record: PhotoRecord) -> Result<(), DomainError> {
        if self.records.iter().any(|r| r.file_path == record.file_path) {
            return Err(DomainError::DuplicatePhoto(record.file_path));
        }
        self.records.insert(0, record);
        Ok(())
    }

    /// Remove and return the record at `position`
    ///
    /// The relative order of the remaining records is preserved.
    pub fn remove_at(&mut self, position: usize) -> Result<PhotoRecord, DomainError> {
        if position >= self.records.len() {
            return Err(DomainError::PositionOutOfBounds {
                position,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(position))
    }

    /// Immutable view of the records, newest first
    #[must_use]
    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    /// Number of photos in the gallery
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the gallery holds no photos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the gallery to the persisted JSON index form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }
}
