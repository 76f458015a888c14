//! Camera capability port (driven/secondary port)
//!
//! This module defines the interface for acquiring a fresh image from the
//! device camera. The capture result is a transient reference (a locator
//! resolvable while the process lives), never inline bytes.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because capture errors are adapter-specific;
//!   user cancellation and OS denial both surface as errors here.
//! - The configuration is fixed by the gallery workflow: full quality,
//!   transient-URI result, device-camera source. It is still passed
//!   explicitly so adapters can log or honor it.

/// Configuration for a capture request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    /// JPEG quality, 1-100
    pub quality: u8,
}

impl Default for CameraConfig {
    /// The gallery's fixed capture configuration: full quality
    fn default() -> Self {
        Self { quality: 100 }
    }
}

/// A just-captured photo, referenced rather than inlined
///
/// `path` is a native storage path to the capture (hybrid hosts);
/// `web_path` is a transient in-memory-resolvable locator (web hosts).
/// Either may be absent depending on the host; the persistence strategy
/// knows which one it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPhoto {
    /// Native storage path of the capture, when the host provides one
    pub path: Option<String>,
    /// Transient locator for the capture bytes, when the host provides one
    pub web_path: Option<String>,
}

impl CapturedPhoto {
    /// The native path, or an error if the host did not provide one
    pub fn require_path(&self) -> anyhow::Result<&str> {
        self.path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("capture result carries no native path"))
    }

    /// The transient locator, or an error if the host did not provide one
    pub fn require_web_path(&self) -> anyhow::Result<&str> {
        self.web_path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("capture result carries no transient reference"))
    }
}

/// Port trait for the device camera capability
#[async_trait::async_trait]
pub trait ICamera: Send + Sync {
    /// Acquires a fresh image from the camera
    ///
    /// # Errors
    /// Returns an error if the user cancels, the OS denies camera access,
    /// or the capture itself fails
    async fn get_photo(&self, config: &CameraConfig) -> anyhow::Result<CapturedPhoto>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_full_quality() {
        assert_eq!(CameraConfig::default().quality, 100);
    }

    #[test]
    fn test_require_accessors() {
        let photo = CapturedPhoto {
            path: Some("/data/cap.jpeg".to_string()),
            web_path: None,
        };
        assert_eq!(photo.require_path().unwrap(), "/data/cap.jpeg");
        assert!(photo.require_web_path().is_err());
    }
}
