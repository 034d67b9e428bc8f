//! Centralized flythrough options with TOML preset support.
//!
//! All tweakable settings (curve construction, playback smoothing, free-look,
//! reference spin, camera projection) are consolidated here. Options
//! serialize to/from TOML for presets.

mod camera;
mod free_look;
mod path;
mod playback;
mod reference;

use std::path::Path;

pub use camera::CameraOptions;
pub use free_look::FreeLookOptions;
pub use path::PathOptions;
pub use playback::PlaybackOptions;
pub use reference::ReferenceOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlypathError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Curve construction parameters.
    pub path: PathOptions,
    /// Progress smoothing parameters.
    pub playback: PlaybackOptions,
    /// Pointer-driven look-at offset parameters.
    pub free_look: FreeLookOptions,
    /// Spin of the object the path is anchored to.
    pub reference: ReferenceOptions,
    /// Render camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every section for values the engine cannot use.
    pub fn validate(&self) -> Result<(), FlypathError> {
        self.path.validate()?;
        self.playback.validate()?;
        self.free_look.validate()
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(text: &str) -> Result<Self, FlypathError> {
        let options: Self = toml::from_str(text)
            .map_err(|e| FlypathError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlypathError> {
        let content = std::fs::read_to_string(path).map_err(FlypathError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlypathError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlypathError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlypathError::Io)?;
        }
        std::fs::write(path, content).map_err(FlypathError::Io)
    }

    /// Load the preset `name` from `dir`, logging the outcome.
    pub fn load_preset(dir: &Path, name: &str) -> Option<Self> {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(options) => {
                log::info!("Loaded preset '{name}'");
                Some(options)
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                None
            }
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
