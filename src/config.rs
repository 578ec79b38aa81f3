//! Viewer configuration (loaded from `movebank-tracker.json`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::track::Viewport;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MOVEBANK_TRACKER_CONFIG";
/// Looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "movebank-tracker.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Height of the track canvas in pixels; width follows the panel.
    pub viewport_height: f64,
    pub margin: f64,
    pub marker_radius: f32,
    pub endpoint_radius: f32,
    /// Colour segments from oldest (blue) to newest (red).
    pub color_by_time: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            viewport_height: 300.0,
            margin: Viewport::DEFAULT_MARGIN,
            marker_radius: 3.0,
            endpoint_radius: 6.0,
            color_by_time: false,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Config from `$MOVEBANK_TRACKER_CONFIG`, else `./movebank-tracker.json`,
    /// else defaults. A file that exists but fails to parse is an error.
    pub fn discover() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.exists() {
            log::info!("Using config {}", path.display());
            Self::load(&path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn viewport(&self, width: f64) -> Viewport {
        Viewport::new(width, self.viewport_height).with_margin(self.margin)
    }
}
