// SPDX-License-Identifier: MPL-2.0
//! This module handles the preview configuration, including loading and saving
//! user preferences to a `preview.toml` file.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `LENS_PREVIEW_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lens_preview::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.zoom_step = Some(2.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::state::rotation::RotationStep;
use crate::ui::state::zoom::{ScaleBounds, ZoomStep};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "preview.toml";
const APP_NAME: &str = "LensPreview";

/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "LENS_PREVIEW_CONFIG_DIR";

/// When the user may grab and pan the previewed image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// Dragging is always allowed.
    #[default]
    Always,
    /// Dragging is only allowed while the image is zoomed (scale != 1).
    WhenZoomed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zoom_step: Option<f32>,
    #[serde(default)]
    pub min_scale: Option<f32>,
    #[serde(default)]
    pub max_scale: Option<f32>,
    #[serde(default)]
    pub rotate_step: Option<f32>,
    #[serde(default)]
    pub double_click_scale: Option<f32>,
    #[serde(default)]
    pub drag_policy: Option<DragPolicy>,
    #[serde(default)]
    pub event_history: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            min_scale: Some(DEFAULT_MIN_SCALE),
            max_scale: Some(DEFAULT_MAX_SCALE),
            rotate_step: Some(DEFAULT_ROTATE_STEP_DEGREES),
            double_click_scale: Some(DEFAULT_DOUBLE_CLICK_SCALE),
            drag_policy: Some(DragPolicy::default()),
            event_history: Some(DEFAULT_EVENT_HISTORY),
        }
    }
}

impl Config {
    /// Resolves optional fields into validated settings.
    #[must_use]
    pub fn settings(&self) -> PreviewSettings {
        let bounds = ScaleBounds::new(
            self.min_scale.unwrap_or(DEFAULT_MIN_SCALE),
            self.max_scale.unwrap_or(DEFAULT_MAX_SCALE),
        );

        PreviewSettings {
            zoom_step: ZoomStep::new(self.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP)),
            scale_bounds: bounds,
            rotate_step: RotationStep::new(
                self.rotate_step.unwrap_or(DEFAULT_ROTATE_STEP_DEGREES),
            ),
            double_click_scale: bounds
                .clamp(self.double_click_scale.unwrap_or(DEFAULT_DOUBLE_CLICK_SCALE)),
            drag_policy: self.drag_policy.unwrap_or_default(),
            event_history: self
                .event_history
                .unwrap_or(DEFAULT_EVENT_HISTORY)
                .clamp(MIN_EVENT_HISTORY, MAX_EVENT_HISTORY),
        }
    }
}

/// Validated preview tuning shared by every overlay in a scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSettings {
    pub zoom_step: ZoomStep,
    pub scale_bounds: ScaleBounds,
    pub rotate_step: RotationStep,
    pub double_click_scale: f32,
    pub drag_policy: DragPolicy,
    pub event_history: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "Ignoring malformed preview config at {}: {err}",
                path.display()
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            zoom_step: Some(2.0),
            drag_policy: Some(DragPolicy::WhenZoomed),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("preview.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("preview.toml");
        fs::write(&config_path, "zoom_step = [").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should fall back");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("zoom_step = 3.0").expect("valid toml");
        let settings = config.settings();

        assert_abs_diff_eq!(settings.zoom_step.value(), 3.0);
        assert_abs_diff_eq!(settings.scale_bounds.min(), DEFAULT_MIN_SCALE);
        assert_abs_diff_eq!(settings.scale_bounds.max(), DEFAULT_MAX_SCALE);
        assert_eq!(settings.drag_policy, DragPolicy::Always);
    }

    #[test]
    fn drag_policy_uses_snake_case() {
        let config: Config = toml::from_str("drag_policy = \"when_zoomed\"").expect("valid toml");
        assert_eq!(config.drag_policy, Some(DragPolicy::WhenZoomed));
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = Config {
            zoom_step: Some(100.0),
            min_scale: Some(5.0),
            max_scale: Some(0.5),
            rotate_step: Some(0.0),
            double_click_scale: Some(1000.0),
            drag_policy: None,
            event_history: Some(0),
        };
        let settings = config.settings();

        assert_abs_diff_eq!(settings.zoom_step.value(), MAX_ZOOM_STEP);
        assert_abs_diff_eq!(settings.scale_bounds.min(), IDENTITY_SCALE);
        assert_abs_diff_eq!(settings.scale_bounds.max(), IDENTITY_SCALE);
        assert_abs_diff_eq!(settings.rotate_step.degrees(), MIN_ROTATE_STEP_DEGREES);
        assert_abs_diff_eq!(settings.double_click_scale, IDENTITY_SCALE);
        assert_eq!(settings.event_history, MIN_EVENT_HISTORY);
    }
}
