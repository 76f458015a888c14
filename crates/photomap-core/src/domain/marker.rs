//! Map marker domain entities
//!
//! This module defines [`MapMarker`], a titled position on the map, and the
//! reserved marker titles. The literal title `"You are here!"` denotes the
//! live current-position marker; at most one such marker exists on a board
//! at any time.

use serde::{Deserialize, Serialize};

use super::newtypes::GeoPosition;

/// Reserved title of the live current-position marker
pub const CURRENT_LOCATION_TITLE: &str = "You are here!";

/// Title given to markers placed by map clicks
pub const CUSTOM_MARKER_TITLE: &str = "Custom marker";

/// A titled marker at a map position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    position: GeoPosition,
    title: String,
}

impl MapMarker {
    /// Create a marker at `position` labelled `title`
    pub fn new(position: GeoPosition, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
        }
    }

    /// The marker's position
    #[must_use]
    pub fn position(&self) -> GeoPosition {
        self.position
    }

    /// The marker's label
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this is the reserved current-position marker
    #[must_use]
    pub fn is_current_location(&self) -> bool {
        self.title == CURRENT_LOCATION_TITLE
    }

    /// Info-window body shown when the marker is clicked
    ///
    /// Coordinates are rendered at 6 decimal places.
    #[must_use]
    pub fn info_content(&self) -> String {
        format!(
            "{}\nLat: {:.6}\nLng: {:.6}",
            self.title,
            self.position.latitude(),
            self.position.longitude()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position() -> GeoPosition {
        GeoPosition::new(45.4642035, 9.1899711).unwrap()
    }

    #[test]
    fn test_current_location_detection() {
        let here = MapMarker::new(position(), CURRENT_LOCATION_TITLE);
        let custom = MapMarker::new(position(), CUSTOM_MARKER_TITLE);

        assert!(here.is_current_location());
        assert!(!custom.is_current_location());
    }

    #[test]
    fn test_info_content_six_decimals() {
        let marker = MapMarker::new(position(), "Custom marker");
        assert_eq!(
            marker.info_content(),
            "Custom marker\nLat: 45.464204\nLng: 9.189971"
        );
    }
}
