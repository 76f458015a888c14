//! Settable geolocation adapter (secondary/driven adapter)
//!
//! Desktop hosts have no positioning hardware; the position is supplied by
//! the wiring layer and can be moved between acquisitions to simulate the
//! device travelling. An unset position plays the role of a denied
//! location request.

use std::sync::Mutex;

use photomap_core::domain::newtypes::GeoPosition;
use photomap_core::ports::geolocation::IGeolocation;
use tracing::debug;

/// Geolocation source with an updatable position
#[derive(Debug, Default)]
pub struct SettableGeolocation {
    position: Mutex<Option<GeoPosition>>,
}

impl SettableGeolocation {
    /// Create a source that reports `position`
    #[must_use]
    pub fn at(position: GeoPosition) -> Self {
        Self {
            position: Mutex::new(Some(position)),
        }
    }

    /// Create a source with no position; every acquisition fails
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Move the reported position
    pub fn set_position(&self, position: GeoPosition) {
        let mut guard = match self.position.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(position);
    }
}

#[async_trait::async_trait]
impl IGeolocation for SettableGeolocation {
    async fn current_position(&self) -> anyhow::Result<GeoPosition> {
        let guard = match self.position.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match *guard {
            Some(position) => {
                debug!(%position, "position acquired");
                Ok(position)
            }
            None => anyhow::bail!("location access denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lat: f64, lng: f64) -> GeoPosition {
        GeoPosition::new(lat, lng).unwrap()
    }

    #[tokio::test]
    async fn test_reports_and_moves_position() {
        let geo = SettableGeolocation::at(pos(1.0, 2.0));
        assert_eq!(geo.current_position().await.unwrap(), pos(1.0, 2.0));

        geo.set_position(pos(3.0, 4.0));
        assert_eq!(geo.current_position().await.unwrap(), pos(3.0, 4.0));
    }

    #[tokio::test]
    async fn test_unavailable_denies() {
        let geo = SettableGeolocation::unavailable();
        assert!(geo.current_position().await.is_err());
    }
}
