//! Clock settings
//!
//! Read once at startup from `config.json` in the platform config
//! directory. Every field is optional; a missing file gives the stock clock.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::readout::{self, DEFAULT_FORMAT};
use crate::transform::DragAnchor;

pub const DEFAULT_RADIUS: f32 = 350.0;

/// Radii outside this range are replaced by the default.
const RADIUS_RANGE: std::ops::RangeInclusive<f32> = 16.0..=4096.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Unscaled dial radius in points.
    pub radius: f32,
    pub drag_anchor: DragAnchor,
    pub show_readout: bool,
    /// strftime pattern for the digital readout.
    pub readout_format: String,
    /// Initial outer position of the window.
    pub position: Option<[f32; 2]>,
    pub always_on_top: bool,
    /// `env_logger` filter; `RUST_LOG` is used when unset.
    pub log_filter: Option<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            drag_anchor: DragAnchor::PressPoint,
            show_readout: true,
            readout_format: DEFAULT_FORMAT.to_string(),
            position: None,
            always_on_top: false,
            log_filter: None,
        }
    }
}

impl ClockConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Settle a load result: sanitize a loaded config, or fall back to
    /// defaults. Anything other than a missing file is logged.
    pub fn or_default(loaded: Result<Self>, path: &Path) -> Self {
        match loaded {
            Ok(config) => config.sanitized(),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values that would break drawing with their defaults.
    fn sanitized(mut self) -> Self {
        if !self.radius.is_finite() || !RADIUS_RANGE.contains(&self.radius) {
            log::warn!("radius {} out of range, using {}", self.radius, DEFAULT_RADIUS);
            self.radius = DEFAULT_RADIUS;
        }
        if !readout::is_valid_format(&self.readout_format) {
            log::warn!("invalid readout format {:?}, using default", self.readout_format);
            self.readout_format = DEFAULT_FORMAT.to_string();
        }
        self
    }
}

/// Get the config directory for the clock
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "deskclock")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}
