//! Game settings
//!
//! Persisted as JSON next to the executable (or wherever the host points).
//! A missing or malformed file is never fatal: defaults are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Content ===
    /// Directory holding `Level1.dat`, `Level2.dat`, ...
    pub levels_dir: PathBuf,
    /// Number of levels in a full run
    pub level_count: u32,

    // === Records ===
    /// Directory for the best score / fastest time files
    pub records_dir: PathBuf,

    // === View ===
    /// Visible area in world units, used to clamp the camera
    pub view_size: Vec2,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            levels_dir: PathBuf::from("assets/levels"),
            level_count: 2,
            records_dir: PathBuf::from("."),
            view_size: Vec2::new(800.0, 600.0),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON (best effort)
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
