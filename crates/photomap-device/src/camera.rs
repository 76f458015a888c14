//! File-backed camera adapter (secondary/driven adapter)
//!
//! On a desktop host there is no camera prompt; "capturing" means taking
//! the image file the caller pointed the adapter at. The capture result
//! still has the device shape: a native absolute path plus a `file://`
//! transient reference, so both persistence strategies work against it.
//! A missing or unconfigured source plays the role of a cancelled or
//! denied capture.

use std::path::PathBuf;

use photomap_core::ports::camera::{CameraConfig, CapturedPhoto, ICamera};
use tracing::{debug, instrument};

use crate::DeviceError;

/// Camera that returns a configured image file as the capture
#[derive(Debug, Clone, Default)]
pub struct FileCamera {
    source: Option<PathBuf>,
}

impl FileCamera {
    /// Create a camera that captures the image at `source`
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    /// Create a camera with no source; every capture is a denial
    #[must_use]
    pub fn unavailable() -> Self {
        Self { source: None }
    }
}

#[async_trait::async_trait]
impl ICamera for FileCamera {
    #[instrument(skip(self))]
    async fn get_photo(&self, config: &CameraConfig) -> anyhow::Result<CapturedPhoto> {
        let source = self.source.as_ref().ok_or(DeviceError::NoSource)?;

        let meta = tokio::fs::metadata(source).await;
        if meta.is_err() {
            return Err(DeviceError::SourceMissing(source.clone()).into());
        }

        let absolute = tokio::fs::canonicalize(source).await?;
        let path = absolute.to_string_lossy().into_owned();
        debug!(quality = config.quality, source = %path, "capture produced");

        Ok(CapturedPhoto {
            web_path: Some(format!("file://{path}")),
            path: Some(path),
        })
    }
}
