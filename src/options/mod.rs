//! View options with TOML preset support.
//!
//! Camera placement and animation settings are consolidated here. Options
//! serialize to/from TOML so plots can share view presets.

mod animation;
mod camera;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::PlotViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement.
    pub camera: CameraOptions,
    /// View transition settings.
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    pub fn from_toml(text: &str) -> Result<Self, PlotViewError> {
        let options: Self = toml::from_str(text)
            .map_err(|e| PlotViewError::OptionsParse(e.to_string()))?;
        options.camera.validate()?;
        Ok(options)
    }

    /// Pretty-printed TOML for these options.
    pub fn to_toml(&self) -> Result<String, PlotViewError> {
        toml::to_string_pretty(self)
            .map_err(|e| PlotViewError::OptionsParse(e.to_string()))
    }

    /// Camera placed as `[camera]` describes.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::from_options(&self.camera)
    }

    /// Load a view preset file.
    pub fn load(path: &Path) -> Result<Self, PlotViewError> {
        let options = std::fs::read_to_string(path)
            .map_err(PlotViewError::from)
            .and_then(|text| Self::from_toml(&text))
            .inspect_err(|e| {
                log::error!("view preset '{}': {e}", path.display());
            })?;
        log::info!("loaded view preset '{}'", path.display());
        Ok(options)
    }

    /// Write a view preset file, creating missing parent directories.
    pub fn save(&self, path: &Path) -> Result<(), PlotViewError> {
        self.camera.validate()?;
        let text = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        log::info!("saved view preset '{}'", path.display());
        Ok(())
    }

    /// Sorted names of the `.toml` view presets in `dir`.
    pub fn list_presets(dir: &Path) -> Result<Vec<String>, PlotViewError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_preset = path.is_file()
                && path.extension().is_some_and(|ext| ext == "toml");
            if !is_preset {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort_unstable();
        Ok(names)
    }
}
