//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for domain identifiers and
//! values. Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// File extension used for every stored capture
pub const PHOTO_EXTENSION: &str = "jpeg";

// ============================================================================
// FileName
// ============================================================================

/// A plain file name within the application data directory
///
/// File names are bare names, never paths: separators and parent-directory
/// components are rejected so a name can be handed to the storage adapter
/// without escaping the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    /// Create a FileName, validating that it is a bare name
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidFileName(name));
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(DomainError::InvalidFileName(name));
        }
        Ok(Self(name))
    }

    /// Generate the file name for a fresh capture: `<unix-millis>.jpeg`
    #[must_use]
    pub fn timestamped(now: DateTime<Utc>) -> Self {
        Self(format!("{}.{}", now.timestamp_millis(), PHOTO_EXTENSION))
    }

    /// Get the inner name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// StorageKey
// ============================================================================

/// A key in the preference store
///
/// Keys are non-empty and carry no whitespace; the gallery index lives
/// under a single fixed key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// Create a StorageKey, validating its content
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidStorageKey(key));
        }
        Ok(Self(key))
    }

    /// The fixed key under which the gallery index is persisted
    #[must_use]
    pub fn photos() -> Self {
        Self("photos".to_string())
    }

    /// Get the inner key
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StorageKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// GeoPosition
// ============================================================================

/// A latitude/longitude pair in floating-point degrees
///
/// Both coordinates are validated at construction: latitude within
/// −90..=90, longitude within −180..=180, and both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Create a GeoPosition, validating coordinate ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for GeoPosition {
    /// Renders at the 6-decimal precision used by marker info windows
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_valid() {
        let name = FileName::new("1714000000000.jpeg").unwrap();
        assert_eq!(name.as_str(), "1714000000000.jpeg");
    }

    #[test]
    fn test_file_name_rejects_paths() {
        assert!(FileName::new("").is_err());
        assert!(FileName::new("a/b.jpeg").is_err());
        assert!(FileName::new("a\\b.jpeg").is_err());
        assert!(FileName::new("..").is_err());
    }

    #[test]
    fn test_file_name_timestamped() {
        let now = Utc.timestamp_millis_opt(1_714_000_000_123).unwrap();
        let name = FileName::timestamped(now);
        assert_eq!(name.as_str(), "1714000000123.jpeg");
    }

    #[test]
    fn test_storage_key_validation() {
        assert!(StorageKey::new("photos").is_ok());
        assert!(StorageKey::new("").is_err());
        assert!(StorageKey::new("my photos").is_err());
    }

    #[test]
    fn test_geo_position_ranges() {
        assert!(GeoPosition::new(45.0, 7.0).is_ok());
        assert!(GeoPosition::new(90.0, 180.0).is_ok());
        assert!(GeoPosition::new(-90.0, -180.0).is_ok());
        assert!(GeoPosition::new(90.1, 0.0).is_err());
        assert!(GeoPosition::new(0.0, -180.5).is_err());
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_geo_position_display_six_decimals() {
        let pos = GeoPosition::new(45.4642035, 9.1899711).unwrap();
        assert_eq!(pos.to_string(), "45.464204, 9.189971");
    }
}
