//! Host settings
//!
//! Loaded from a JSON file by the headless host. Gameplay constants are
//! fixed and are not part of the settings.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Sprite load outcome to simulate in the headless host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpriteMode {
    #[default]
    Ready,
    Pending,
    Failed,
}

impl SpriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteMode::Ready => "Ready",
            SpriteMode::Pending => "Pending",
            SpriteMode::Failed => "Failed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ready" => Some(SpriteMode::Ready),
            "pending" | "loading" => Some(SpriteMode::Pending),
            "failed" | "missing" => Some(SpriteMode::Failed),
            _ => None,
        }
    }
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; `None` picks one from the system clock
    pub seed: Option<u64>,
    /// Synthetic clock step between frames (ms)
    pub frame_interval_ms: f64,
    /// Stop the headless run after this many frames
    pub max_frames: u64,
    /// Drive the player with the scripted autopilot
    pub autopilot: bool,
    /// Which sprite path to exercise
    pub sprite: SpriteMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_ms: 1000.0 / 60.0,
            max_frames: 5 * 60 * 60, // 5 minutes at 60 fps
            autopilot: true,
            sprite: SpriteMode::Ready,
        }
    }
}

/// Why settings could not be loaded or saved
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access settings file {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed settings file {}: {source}", path.display())
            }
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "frame_interval_ms",
                reason: format!("must be a positive number, got {}", self.frame_interval_ms),
            });
        }
        if self.max_frames == 0 {
            return Err(SettingsError::Invalid {
                field: "max_frames",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
