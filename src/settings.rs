//! Game settings and preferences
//!
//! Read from a JSON file at startup. Physics is fixed; only presentation and
//! session knobs live here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FONT_SIZE, FRAME_DELAY_MS, MAX_PARTICLES};
use crate::error::SettingsError;

/// Env var naming an alternative settings file
pub const SETTINGS_ENV: &str = "VECTOR_PONG_SETTINGS";
/// Env var overriding the font path
pub const FONT_ENV: &str = "VECTOR_PONG_FONT";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "vector-pong.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window caption
    pub window_title: String,
    /// TrueType font for the score and streak text
    pub font_path: String,
    /// Point size the font is opened at
    pub font_size: u16,

    /// Sleep after each frame (ms)
    pub frame_delay_ms: u32,
    /// Present in sync with the display refresh
    pub vsync: bool,

    // === Visual Effects ===
    /// Fireball trail
    pub particles: bool,
    /// Trail pool size
    pub max_particles: usize,

    /// Fixed RNG seed for reproducible serves; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Vector Pong with Fireball and Fancy Paddles".to_string(),
            font_path: "/Library/Fonts/Arial Unicode.ttf".to_string(),
            font_size: FONT_SIZE,

            frame_delay_ms: FRAME_DELAY_MS,
            vsync: false,

            particles: true,
            max_particles: MAX_PARTICLES,

            seed: None,
        }
    }
}

impl Settings {
    /// Effective particle count cap
    pub fn effective_max_particles(&self) -> usize {
        if !self.particles { 0 } else { self.max_particles }
    }

    /// Parse settings JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from `path`
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Which file `load` reads
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings from disk, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is reported
    /// and ignored. The font env override is applied last.
    pub fn load() -> Self {
        let path = Self::path();
        let mut settings = if path.exists() {
            match Self::load_from(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring settings file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            log::info!("Using default settings");
            Self::default()
        };

        if let Ok(font) = std::env::var(FONT_ENV) {
            log::info!("Font overridden by {}: {}", FONT_ENV, font);
            settings.font_path = font;
        }

        settings
    }
}
