//! Configuration module for Photomap.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for Photomap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub gallery: GalleryConfig,
    pub map: MapConfig,
    pub logging: LoggingConfig,
}

/// Photo gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Application data directory holding the stored photo files.
    pub data_dir: PathBuf,
    /// File backing the preference store (the JSON photo index lives here).
    pub preferences_path: PathBuf,
    /// JPEG capture quality (1-100).
    pub quality: u8,
}

/// Map settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial zoom level when the map is created (1-21).
    pub zoom: u8,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

// ---------------------------------------------------------------------------
// Loading and saving
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save the configuration as YAML to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/photomap/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("photomap")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

// Config derives Default because all its fields implement Default.

impl Default for GalleryConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("photomap");
        Self {
            data_dir: data_dir.join("photos"),
            preferences_path: data_dir.join("preferences.json"),
            quality: 100,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { zoom: 15 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"map.zoom"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- gallery ---
        if self.gallery.quality == 0 || self.gallery.quality > 100 {
            errors.push(ValidationError {
                field: "gallery.quality".into(),
                message: "must be between 1 and 100".into(),
            });
        }
        if self.gallery.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "gallery.data_dir".into(),
                message: "must not be empty".into(),
            });
        }
        if self.gallery.preferences_path.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "gallery.preferences_path".into(),
                message: "must not be empty".into(),
            });
        }

        // --- map ---
        if self.map.zoom == 0 || self.map.zoom > 21 {
            errors.push(ValidationError {
                field: "map.zoom".into(),
                message: "must be between 1 and 21".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!("must be one of {}", VALID_LOG_LEVELS.join(", ")),
            });
        }

        errors
    }
}
