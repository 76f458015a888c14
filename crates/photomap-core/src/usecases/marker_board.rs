//! Location marker board use case
//!
//! Owns the map handle, the marker collection, and the tracked current
//! position. Coordinates geolocation, map creation, marker bookkeeping,
//! and the click-to-place-marker flow.
//!
//! ## Failure policy
//!
//! Capability and SDK errors in this workflow are caught and logged; prior
//! state stays intact and nothing retries. A board whose initialization
//! failed simply stays uninitialized.
//!
//! ## State & callbacks
//!
//! The map SDK delivers clicks through a synchronous callback, so board
//! state lives behind a mutex and the public methods take `&self`. The app
//! itself is single-driver (discrete UI actions, one operation at a time);
//! the mutex only bridges the callback, it is not a concurrency scheme.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result};
use tracing::{debug, error};

use crate::domain::marker::{MapMarker, CURRENT_LOCATION_TITLE, CUSTOM_MARKER_TITLE};
use crate::domain::newtypes::GeoPosition;
use crate::ports::geolocation::IGeolocation;
use crate::ports::map_surface::{IMapHandle, IMapSurface, IMarkerHandle};
use crate::ports::notification::{INotificationService, Notification};

/// Default map zoom level
pub const DEFAULT_ZOOM: u8 = 15;

/// A marker together with its rendering association
struct BoardMarker {
    marker: MapMarker,
    handle: Box<dyn IMarkerHandle>,
}

/// Mutable board state, shared with the click handler
#[derive(Default)]
struct BoardState {
    map: Option<Arc<dyn IMapHandle>>,
    markers: Vec<BoardMarker>,
    current_position: Option<GeoPosition>,
}

/// Use case owning the location marker board
pub struct MarkerBoard {
    geolocation: Arc<dyn IGeolocation>,
    surface: Arc<dyn IMapSurface>,
    notifier: Arc<dyn INotificationService>,
    zoom: u8,
    state: Arc<Mutex<BoardState>>,
}

impl MarkerBoard {
    /// Creates an uninitialized board (no map yet)
    pub fn new(
        geolocation: Arc<dyn IGeolocation>,
        surface: Arc<dyn IMapSurface>,
        notifier: Arc<dyn INotificationService>,
        zoom: u8,
    ) -> Self {
        Self {
            geolocation,
            surface,
            notifier,
            zoom,
            state: Arc::new(Mutex::new(BoardState::default())),
        }
    }

    /// Acquires the current position, creates the map, and wires clicks
    ///
    /// On success the board is centered on the device position with a
    /// `"You are here!"` marker, and every subsequent map click places a
    /// `"Custom marker"` and surfaces its coordinates through the
    /// notification port. Any failure is logged and leaves the board
    /// uninitialized; there is no retry.
    pub async fn initialize(&self) {
        if let Err(e) = self.try_initialize().await {
            error!(error = %format!("{e:#}"), "error getting location");
        }
    }

    async fn try_initialize(&self) -> Result<()> {
        let position = self
            .geolocation
            .current_position()
            .await
            .context("Failed to acquire current position")?;

        let map = self
            .surface
            .create_map(position, self.zoom)
            .await
            .context("Failed to create map")?;

        {
            let mut state = self.lock_state();
            state.map = Some(Arc::clone(&map));
            state.current_position = Some(position);
        }

        self.add_marker(position, CURRENT_LOCATION_TITLE);

        let state = Arc::clone(&self.state);
        let notifier = Arc::clone(&self.notifier);
        map.on_click(Box::new(move |clicked| {
            Self::place_marker(&state, clicked, CUSTOM_MARKER_TITLE);
            notifier.notify(Notification::new(
                "Custom marker placed",
                format!(
                    "Latitude: {:.6}\nLongitude: {:.6}",
                    clicked.latitude(),
                    clicked.longitude()
                ),
            ));
        }));

        debug!(%position, zoom = self.zoom, "map initialized");
        Ok(())
    }

    /// Adds a marker with an attached info window
    ///
    /// No-op while the board has no map.
    pub fn add_marker(&self, position: GeoPosition, title: &str) {
        Self::place_marker(&self.state, position, title);
    }

    /// Re-acquires the position and replaces the current-position marker
    ///
    /// The map is recentered, any existing `"You are here!"` marker is torn
    /// down (removed from the surface and the collection), and a fresh one
    /// is added at the new position. Errors are logged; prior state stays
    /// unchanged.
    pub async fn refresh_location(&self) {
        if let Err(e) = self.try_refresh().await {
            error!(error = %format!("{e:#}"), "error refreshing location");
        }
    }

    async fn try_refresh(&self) -> Result<()> {
        let position = self
            .geolocation
            .current_position()
            .await
            .context("Failed to acquire current position")?;

        {
            let mut state = self.lock_state();
            state.current_position = Some(position);

            if let Some(map) = &state.map {
                map.set_center(position);
            }

            if let Some(idx) = state
                .markers
                .iter()
                .position(|m| m.marker.is_current_location())
            {
                let previous = state.markers.remove(idx);
                previous.handle.detach();
            }
        }

        self.add_marker(position, CURRENT_LOCATION_TITLE);
        debug!(%position, "location refreshed");
        Ok(())
    }

    /// Removes every marker, then restores the current-position marker
    ///
    /// All rendering associations are detached and the collection emptied.
    /// When a map and a tracked position exist, the `"You are here!"`
    /// marker is re-added, so the net effect is: custom markers gone,
    /// current-position marker back.
    pub fn clear_all(&self) {
        let restore = {
            let mut state = self.lock_state();
            for board_marker in state.markers.drain(..) {
                board_marker.handle.detach();
            }
            state.map.is_some().then_some(state.current_position).flatten()
        };

        if let Some(position) = restore {
            self.add_marker(position, CURRENT_LOCATION_TITLE);
        }
    }

    /// Snapshot of the markers currently on the board
    #[must_use]
    pub fn markers(&self) -> Vec<MapMarker> {
        self.lock_state()
            .markers
            .iter()
            .map(|m| m.marker.clone())
            .collect()
    }

    /// The last acquired device position, if any
    #[must_use]
    pub fn current_position(&self) -> Option<GeoPosition> {
        self.lock_state().current_position
    }

    /// Whether a map has been created
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lock_state().map.is_some()
    }

    /// Places a marker through the shared state, used by methods and the
    /// click handler alike
    fn place_marker(state: &Arc<Mutex<BoardState>>, position: GeoPosition, title: &str) {
        let mut state = match state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let Some(map) = state.map.as_ref().map(Arc::clone) else {
            return;
        };

        let marker = MapMarker::new(position, title);
        let handle = map.add_marker(position, title, &marker.info_content());
        state.markers.push(BoardMarker { marker, handle });
    }

    fn lock_state(&self) -> MutexGuard<'_, BoardState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
