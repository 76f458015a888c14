//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including validation failures and gallery position errors.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid stored file name (empty, path separators, or traversal)
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Invalid preference store key
    #[error("Invalid storage key: {0}")]
    InvalidStorageKey(String),

    /// A coordinate is outside its valid range or not finite
    #[error("Invalid {axis}: {value}")]
    InvalidCoordinate {
        /// Which axis failed validation ("latitude" or "longitude")
        axis: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A photo with the same file path is already in the gallery
    #[error("Duplicate photo: {0}")]
    DuplicatePhoto(String),

    /// A gallery position is outside the current list bounds
    #[error("Position {position} out of bounds (gallery holds {len} photos)")]
    PositionOutOfBounds {
        /// The requested position
        position: usize,
        /// Number of photos currently in the gallery
        len: usize,
    },

    /// The record at the given position is not the record the caller named
    #[error("Photo at position {position} does not match the given record")]
    PositionMismatch {
        /// The position the caller supplied
        position: usize,
    },
}
