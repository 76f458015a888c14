//! Domain entities and business rules
//!
//! Pure domain logic with no I/O:
//! - [`PhotoRecord`] / [`Gallery`] - the newest-first photo collection
//! - [`MapMarker`] - titled map positions and reserved titles
//! - Validated newtypes - [`FileName`], [`StorageKey`], [`GeoPosition`]
//! - [`DomainError`] - validation and position errors

pub mod errors;
pub mod marker;
pub mod newtypes;
pub mod photo;

pub use errors::DomainError;
pub use marker::{MapMarker, CURRENT_LOCATION_TITLE, CUSTOM_MARKER_TITLE};
pub use newtypes::{FileName, GeoPosition, StorageKey, PHOTO_EXTENSION};
pub use photo::{Gallery, PhotoRecord};
