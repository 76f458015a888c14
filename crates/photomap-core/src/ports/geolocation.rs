//! Geolocation capability port (driven/secondary port)
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result`; user denial and positioning failure both
//!   surface as errors, and callers in the map workflow catch and log
//!   them rather than propagate.
//! - No caching: every call re-acquires the position from the host.

use crate::domain::newtypes::GeoPosition;

/// Port trait for the device geolocation capability
#[async_trait::async_trait]
pub trait IGeolocation: Send + Sync {
    /// Acquires the device's current position
    ///
    /// # Errors
    /// Returns an error if the user denies location access or the host
    /// cannot produce a fix
    async fn current_position(&self) -> anyhow::Result<GeoPosition>;
}
