//! Map rendering port (driven/secondary port)
//!
//! This module defines the interface to the third-party map SDK, treated
//! as a black box: a constructible map parameterized by center and zoom,
//! marker creation with an attached info window, click subscription, and
//! marker removal by detaching from the map.
//!
//! ## Design Notes
//!
//! - `create_map` is async (the SDK may load tiles or spin up a view);
//!   the per-map operations are synchronous, as map SDK calls are.
//! - Click handlers are synchronous callbacks because the SDK delivers
//!   click events synchronously on its event loop; handlers must be
//!   thread-safe and must not block.
//! - [`IMarkerHandle`] is the rendering association of one marker:
//!   `detach` removes the marker from the surface. Dropping the handle
//!   without detaching leaves the marker rendered, matching SDK behavior.

use std::sync::Arc;

use crate::domain::newtypes::GeoPosition;

/// Synchronous callback invoked for every map click
pub type ClickHandler = Box<dyn Fn(GeoPosition) + Send + Sync>;

/// Rendering association of one placed marker
pub trait IMarkerHandle: Send + Sync {
    /// Removes the marker from the rendering surface
    fn detach(&self);
}

/// One created map instance
pub trait IMapHandle: Send + Sync {
    /// Re-centers the map viewport
    fn set_center(&self, position: GeoPosition);

    /// Places a marker and attaches an info window
    ///
    /// The info window opens when the rendered marker is clicked and shows
    /// `info_content` verbatim.
    fn add_marker(
        &self,
        position: GeoPosition,
        title: &str,
        info_content: &str,
    ) -> Box<dyn IMarkerHandle>;

    /// Registers the click handler for this map
    ///
    /// At most one handler is active; registering again replaces it.
    fn on_click(&self, handler: ClickHandler);
}

/// Port trait for the map rendering capability
#[async_trait::async_trait]
pub trait IMapSurface: Send + Sync {
    /// Creates a map centered on `center` at the given zoom level
    ///
    /// # Errors
    /// Returns an error if the SDK fails to construct the map
    async fn create_map(
        &self,
        center: GeoPosition,
        zoom: u8,
    ) -> anyhow::Result<Arc<dyn IMapHandle>>;
}
