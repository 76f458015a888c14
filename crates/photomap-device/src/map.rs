//! Headless map adapter (secondary/driven adapter)
//!
//! Implements the map rendering port without a display: markers, centers,
//! and the click handler are tracked in process and every operation is
//! logged. The wiring layer can replay click events through
//! [`HeadlessMap::simulate_click`] and read back what is rendered, which
//! is all a terminal host needs from a map SDK.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use photomap_core::domain::newtypes::GeoPosition;
use photomap_core::ports::map_surface::{ClickHandler, IMapHandle, IMapSurface, IMarkerHandle};
use tracing::{debug, info};

/// One marker as rendered by the headless surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMarker {
    /// Marker position
    pub position: GeoPosition,
    /// Marker label
    pub title: String,
    /// Info-window body attached to the marker
    pub info_content: String,
}

#[derive(Default)]
struct MapInner {
    center: Option<GeoPosition>,
    // BTreeMap keyed by placement id keeps iteration in placement order.
    markers: BTreeMap<u64, RenderedMarker>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// A headless map instance
pub struct HeadlessMap {
    zoom: u8,
    inner: Arc<Mutex<MapInner>>,
    handler: Mutex<Option<ClickHandler>>,
    next_id: AtomicU64,
}

impl HeadlessMap {
    fn new(center: GeoPosition, zoom: u8) -> Self {
        Self {
            zoom,
            inner: Arc::new(Mutex::new(MapInner {
                center: Some(center),
                markers: BTreeMap::new(),
            })),
            handler: Mutex::new(None),
            next_id: AtomicU64::new(0),
        }
    }

    /// Delivers a click event to the registered handler, if any
    pub fn simulate_click(&self, position: GeoPosition) {
        debug!(%position, "map clicked");
        let handler = lock(&self.handler);
        if let Some(handler) = handler.as_ref() {
            handler(position);
        }
    }

    /// Markers currently rendered, in placement order
    #[must_use]
    pub fn rendered_markers(&self) -> Vec<RenderedMarker> {
        lock(&self.inner).markers.values().cloned().collect()
    }

    /// Current viewport center
    #[must_use]
    pub fn center(&self) -> Option<GeoPosition> {
        lock(&self.inner).center
    }

    /// Configured zoom level
    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

struct HeadlessMarkerHandle {
    id: u64,
    inner: Arc<Mutex<MapInner>>,
}

impl IMarkerHandle for HeadlessMarkerHandle {
    fn detach(&self) {
        lock(&self.inner).markers.remove(&self.id);
        debug!(id = self.id, "marker detached");
    }
}

impl IMapHandle for HeadlessMap {
    fn set_center(&self, position: GeoPosition) {
        info!(%position, "map recentered");
        lock(&self.inner).center = Some(position);
    }

    fn add_marker(
        &self,
        position: GeoPosition,
        title: &str,
        info_content: &str,
    ) -> Box<dyn IMarkerHandle> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        info!(%position, title, "marker placed");
        lock(&self.inner).markers.insert(
            id,
            RenderedMarker {
                position,
                title: title.to_string(),
                info_content: info_content.to_string(),
            },
        );
        Box::new(HeadlessMarkerHandle {
            id,
            inner: Arc::clone(&self.inner),
        })
    }

    fn on_click(&self, handler: ClickHandler) {
        *lock(&self.handler) = Some(handler);
    }
}

/// Surface producing headless maps
///
/// Keeps a handle to the most recently created map so the wiring layer can
/// replay clicks and inspect rendering.
#[derive(Default)]
pub struct HeadlessMapSurface {
    created: Mutex<Option<Arc<HeadlessMap>>>,
}

impl HeadlessMapSurface {
    /// Create a surface with no maps yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently created map, if any
    #[must_use]
    pub fn created_map(&self) -> Option<Arc<HeadlessMap>> {
        lock(&self.created).clone()
    }
}

#[async_trait::async_trait]
impl IMapSurface for HeadlessMapSurface {
    async fn create_map(
        &self,
        center: GeoPosition,
        zoom: u8,
    ) -> anyhow::Result<Arc<dyn IMapHandle>> {
        let map = Arc::new(HeadlessMap::new(center, zoom));
        info!(%center, zoom, "map created");
        *lock(&self.created) = Some(Arc::clone(&map));
        Ok(map)
    }
}
