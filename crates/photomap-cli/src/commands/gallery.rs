//! Gallery commands - capture, list, and delete photos
//!
//! Each command rebuilds the gallery manager from configuration, loads the
//! persisted index, runs one operation, and reports the result. The
//! manager's platform strategy comes from the global `--platform` flag.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use photomap_core::ports::camera::{CameraConfig, ICamera};
use photomap_core::usecases::PhotoGalleryManager;
use photomap_device::FileCamera;
use photomap_storage::{DataDirStorage, JsonFilePreferenceStore};

use crate::CliContext;

#[derive(Debug, clap::Subcommand)]
pub enum GalleryCommand {
    /// Capture a photo into the gallery
    Capture(CaptureCommand),
    /// List the gallery, newest first
    List(ListCommand),
    /// Delete the photo at a gallery position
    Delete(DeleteCommand),
}

impl GalleryCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        match self {
            GalleryCommand::Capture(cmd) => cmd.execute(ctx).await,
            GalleryCommand::List(cmd) => cmd.execute(ctx).await,
            GalleryCommand::Delete(cmd) => cmd.execute(ctx).await,
        }
    }
}

/// Builds a gallery manager over the configured stores
fn build_manager(ctx: &CliContext, camera: Arc<dyn ICamera>) -> PhotoGalleryManager {
    let storage = Arc::new(DataDirStorage::new(&ctx.config.gallery.data_dir));
    let preferences = Arc::new(JsonFilePreferenceStore::new(
        &ctx.config.gallery.preferences_path,
    ));
    PhotoGalleryManager::new(ctx.platform, camera, storage, preferences).with_camera_config(
        CameraConfig {
            quality: ctx.config.gallery.quality,
        },
    )
}

#[derive(Debug, Args)]
pub struct CaptureCommand {
    /// Image file the camera will "capture"
    #[arg(long)]
    pub image: PathBuf,
}

impl CaptureCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let camera = Arc::new(FileCamera::new(&self.image));
        let mut manager = build_manager(ctx, camera);

        manager
            .load_saved()
            .await
            .context("Failed to load the saved gallery")?;
        let record = manager
            .capture_and_add()
            .await
            .context("Failed to capture photo")?;

        ctx.format.emit(
            &format!("Captured {}", record.file_path),
            &[],
            &serde_json::to_value(&record)?,
        )
    }
}

#[derive(Debug, Args)]
pub struct ListCommand;

impl ListCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let mut manager = build_manager(ctx, Arc::new(FileCamera::unavailable()));

        manager
            .load_saved()
            .await
            .context("Failed to load the saved gallery")?;

        let photos = manager.photos();
        let headline = if photos.is_empty() {
            "Gallery is empty".to_string()
        } else {
            format!("{} photo(s), newest first", photos.len())
        };
        let details: Vec<String> = photos
            .iter()
            .enumerate()
            .map(|(position, record)| format!("[{position}] {}", record.file_path))
            .collect();

        ctx.format
            .emit(&headline, &details, &serde_json::to_value(photos)?)
    }
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Gallery position of the photo to delete (0 is the newest)
    pub position: usize,
}

impl DeleteCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let mut manager = build_manager(ctx, Arc::new(FileCamera::unavailable()));

        manager
            .load_saved()
            .await
            .context("Failed to load the saved gallery")?;

        let record = match manager.photos().get(self.position) {
            Some(record) => record.clone(),
            None => {
                ctx.format.problem(&format!(
                    "No photo at position {} (gallery holds {})",
                    self.position,
                    manager.photos().len()
                ));
                return Ok(());
            }
        };

        let removed = manager
            .delete(&record, self.position)
            .await
            .context("Failed to delete photo")?;
        ctx.format.emit(
            &format!("Deleted {}", removed.file_path),
            &[],
            &serde_json::to_value(&removed)?,
        )
    }
}
