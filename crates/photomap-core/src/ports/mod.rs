//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ICamera`] - Device camera capture
//! - [`IStorageAdapter`] - File storage in the application data directory
//! - [`IPreferenceStore`] - Durable string key-value store (the photo index)
//! - [`IGeolocation`] - Current device position
//! - [`IMapSurface`] - Black-box map SDK (maps, markers, clicks)
//! - [`INotificationService`] - Non-blocking user notifications
//! - [`IPlatformProbe`] - Hybrid-vs-web host detection

pub mod camera;
pub mod geolocation;
pub mod map_surface;
pub mod notification;
pub mod platform;
pub mod preferences;
pub mod storage;

pub use camera::{CameraConfig, CapturedPhoto, ICamera};
pub use geolocation::IGeolocation;
pub use map_surface::{ClickHandler, IMapHandle, IMapSurface, IMarkerHandle};
pub use notification::{INotificationService, Notification};
pub use platform::{FixedPlatformProbe, IPlatformProbe, Platform};
pub use preferences::IPreferenceStore;
pub use storage::{IStorageAdapter, WrittenFile};
