//! One-handed mode settings and their durable store.
//!
//! Settings are loaded once when an input session starts and persisted
//! immediately on every control interaction (no batching). The on-disk format
//! keeps the key names of the original preference store so existing
//! preference files stay readable.
//!
//! If no settings file exists, defaults are used automatically.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Lower bound of the one-handed width percentage.
pub const MIN_WIDTH_PERCENT: i32 = 30;
/// Upper bound of the one-handed width percentage.
pub const MAX_WIDTH_PERCENT: i32 = 100;
/// Width adjustment granularity.
pub const WIDTH_STEP_PERCENT: i32 = 5;

/// Which screen edge the one-handed keyboard hugs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyboardPosition {
    /// Anchor to the left edge
    Left,
    /// Anchor to the right edge
    Right,
}

/// One-handed mode preferences.
///
/// `width_percent` is always a multiple of [`WIDTH_STEP_PERCENT`] within
/// [`MIN_WIDTH_PERCENT`]..=[`MAX_WIDTH_PERCENT`] after loading; the geometry
/// code relies on that and has no failure modes of its own.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OneHandedSettings {
    /// Whether one-handed mode is active
    #[serde(rename = "oneHandedMode", default)]
    pub enabled: bool,

    /// Which side the reduced keyboard hugs
    #[serde(rename = "keyboardPosition", default = "default_position")]
    pub position: KeyboardPosition,

    /// Keyboard width as a percentage of screen width (30-100, steps of 5)
    #[serde(rename = "keyboardWidthPercent", default = "default_width_percent")]
    pub width_percent: i32,

    /// Keyboard height in density-independent pixels
    #[serde(rename = "keyboardHeightDp", default = "default_height_dp")]
    pub height_dp: i32,
}

fn default_position() -> KeyboardPosition {
    KeyboardPosition::Right
}

fn default_width_percent() -> i32 {
    70
}

fn default_height_dp() -> i32 {
    250
}

impl Default for OneHandedSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            position: default_position(),
            width_percent: default_width_percent(),
            height_dp: default_height_dp(),
        }
    }
}

impl OneHandedSettings {
    /// Returns a copy with one-handed mode flipped.
    pub fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
            ..self
        }
    }

    /// Returns a copy anchored to the given side.
    pub fn with_position(self, position: KeyboardPosition) -> Self {
        Self { position, ..self }
    }

    /// Returns a copy one width step wider. No-op at the upper bound.
    pub fn grown(self) -> Self {
        Self {
            width_percent: (self.width_percent + WIDTH_STEP_PERCENT).min(MAX_WIDTH_PERCENT),
            ..self
        }
    }

    /// Returns a copy one width step narrower. No-op at the lower bound.
    pub fn shrunk(self) -> Self {
        Self {
            width_percent: (self.width_percent - WIDTH_STEP_PERCENT).max(MIN_WIDTH_PERCENT),
            ..self
        }
    }

    /// Clamps loaded values to acceptable ranges.
    ///
    /// Out-of-range width percentages are clamped to 30-100 and snapped down
    /// to the step granularity so repeated grow/shrink stays on the grid.
    /// Non-positive heights fall back to the default.
    fn validate_and_clamp(&mut self) {
        if !(MIN_WIDTH_PERCENT..=MAX_WIDTH_PERCENT).contains(&self.width_percent) {
            warn!(
                "Invalid keyboardWidthPercent {}, clamping to {}-{} range",
                self.width_percent, MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT
            );
            self.width_percent = self.width_percent.clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT);
        }

        let off_grid = self.width_percent % WIDTH_STEP_PERCENT;
        if off_grid != 0 {
            warn!(
                "keyboardWidthPercent {} is not a multiple of {}, snapping down",
                self.width_percent, WIDTH_STEP_PERCENT
            );
            self.width_percent -= off_grid;
        }

        if self.height_dp <= 0 {
            warn!(
                "Invalid keyboardHeightDp {}, falling back to {}",
                self.height_dp,
                default_height_dp()
            );
            self.height_dp = default_height_dp();
        }
    }
}

/// Errors raised by the durable settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the settings directory")]
    NoSettingsDir,

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable key-value store for one-handed preferences.
///
/// Read once at session start; written on every control interaction.
pub trait SettingsStore {
    /// Loads the persisted settings, or defaults when nothing is stored.
    fn load(&self) -> Result<OneHandedSettings, SettingsError>;

    /// Persists the given settings immediately.
    fn store(&mut self, settings: &OneHandedSettings) -> Result<(), SettingsError>;
}

/// File-backed settings store (`~/.config/softboard/settings.toml`).
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Creates a store at the default per-user settings path.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g. HOME not set).
    pub fn new() -> Result<Self, SettingsError> {
        let config_dir = dirs::config_dir()
            .ok_or(SettingsError::NoSettingsDir)?
            .join("softboard");
        Ok(Self {
            path: config_dir.join("settings.toml"),
        })
    }

    /// Creates a store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<OneHandedSettings, SettingsError> {
        if !self.path.exists() {
            info!("Settings file not found, using defaults");
            debug!("Expected settings at: {}", self.path.display());
            return Ok(OneHandedSettings::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut settings: OneHandedSettings = toml::from_str(&raw)?;
        settings.validate_and_clamp();

        info!("Loaded settings from {}", self.path.display());
        debug!("Settings: {settings:?}");

        Ok(settings)
    }

    fn store(&mut self, settings: &OneHandedSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = toml::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for tests and the demo harness.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    settings: OneHandedSettings,
}

impl MemorySettingsStore {
    pub fn new(settings: OneHandedSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<OneHandedSettings, SettingsError> {
        Ok(self.settings)
    }

    fn store(&mut self, settings: &OneHandedSettings) -> Result<(), SettingsError> {
        self.settings = *settings;
        Ok(())
    }
}
