//! Photomap Device - Device capability adapters
//!
//! Driven (secondary) adapters implementing the device-facing ports of
//! `photomap-core` for a desktop host, where no real camera, GPS, or map
//! SDK is present:
//!
//! - [`FileCamera`] - `ICamera` that "captures" a configured image file
//! - [`SettableGeolocation`] - `IGeolocation` with an updatable position
//! - [`HeadlessMapSurface`] - `IMapSurface` tracking markers in process
//! - [`ConsoleNotifier`] - `INotificationService` over the log stream
//!
//! These adapters carry the real port semantics (transient capture
//! references, click delivery, marker detachment), so the use cases run
//! unchanged against them.

pub mod camera;
pub mod geolocation;
pub mod map;
pub mod notify;

pub use camera::FileCamera;
pub use geolocation::SettableGeolocation;
pub use map::{HeadlessMap, HeadlessMapSurface};
pub use notify::ConsoleNotifier;

use std::path::PathBuf;

/// Errors that can occur in device adapters
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// The configured capture source does not exist
    #[error("Capture source not found: {0}")]
    SourceMissing(PathBuf),

    /// No capture source was configured at all
    #[error("No capture source configured")]
    NoSource,
}
