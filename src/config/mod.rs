// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the viewport tuning file, `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[zoom]` - Density floor, exact-width maximum, double-tap behaviour
//! - `[gestures]` - Single-tap confirmation delay
//!
//! Every field is optional; missing fields take the defaults in
//! [`defaults`]. Values are clamped into their valid ranges when resolved
//! into engine types, so a hand-edited file cannot break the geometry.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to `load_with_override()`/`save_with_override()`
//! 2. `ZOOM_VIEWPORT_CONFIG_DIR` environment variable
//! 3. Platform config directory (via `dirs`) + `ZoomViewport/`
//!
//! # Examples
//!
//! ```no_run
//! use zoom_viewport::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using default settings: {key}");
//! }
//! let policy = config.zoom_policy();
//! let delay = config.tap_delay();
//! # let _ = (policy, delay);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{DensityFloor, ExactWidthMaxScale, StepMultiplier, TapDelay};
use crate::engine::{DoubleTapZoom, ZoomPolicy};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config directory.
const APP_NAME: &str = "ZoomViewport";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ZOOM_VIEWPORT_CONFIG_DIR";

/// Warning key returned when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// What a double tap at minimum zoom does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DoubleTapMode {
    /// Zoom straight to the maximum scale.
    #[default]
    Maximum,
    /// Multiply the current scale by `double_tap_step_multiplier`.
    Step,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Zoom computation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Minimum pixel density used for maximum zoom and zoom rectangles.
    #[serde(
        default = "default_density_floor",
        skip_serializing_if = "Option::is_none"
    )]
    pub density_floor: Option<f32>,

    /// Maximum zoom for an image exactly one screen of pixels wide.
    #[serde(
        default = "default_exact_width_max_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub exact_width_max_scale: Option<f32>,

    /// Double-tap zoom behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap: Option<DoubleTapMode>,

    /// Multiplier used when `double_tap = "step"`.
    #[serde(
        default = "default_step_multiplier",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_step_multiplier: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            density_floor: default_density_floor(),
            exact_width_max_scale: default_exact_width_max_scale(),
            double_tap: Some(DoubleTapMode::default()),
            double_tap_step_multiplier: default_step_multiplier(),
        }
    }
}

/// Tap handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// How long a single tap waits for a second tap (milliseconds).
    #[serde(
        default = "default_single_tap_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub single_tap_delay_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            single_tap_delay_ms: default_single_tap_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Viewport configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub gestures: GestureConfig,
}

impl Config {
    /// Resolves the `[zoom]` section into an engine policy.
    #[must_use]
    pub fn zoom_policy(&self) -> ZoomPolicy {
        let zoom = &self.zoom;
        let double_tap = match zoom.double_tap.unwrap_or_default() {
            DoubleTapMode::Maximum => DoubleTapZoom::Maximum,
            DoubleTapMode::Step => DoubleTapZoom::Step(
                zoom.double_tap_step_multiplier
                    .map(StepMultiplier::new)
                    .unwrap_or_default(),
            ),
        };

        ZoomPolicy {
            density_floor: zoom
                .density_floor
                .map(DensityFloor::new)
                .unwrap_or_default(),
            exact_width_max_scale: zoom
                .exact_width_max_scale
                .map(ExactWidthMaxScale::new)
                .unwrap_or_default(),
            double_tap,
        }
    }

    /// Resolves the single-tap confirmation delay.
    #[must_use]
    pub fn tap_delay(&self) -> TapDelay {
        self.gestures
            .single_tap_delay_ms
            .map(TapDelay::from_millis)
            .unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_density_floor() -> Option<f32> {
    Some(DEFAULT_DENSITY_FLOOR)
}

fn default_exact_width_max_scale() -> Option<f32> {
    Some(DEFAULT_EXACT_WIDTH_MAX_SCALE)
}

fn default_step_multiplier() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_STEP_MULTIPLIER)
}

fn default_single_tap_delay_ms() -> Option<u64> {
    Some(DEFAULT_SINGLE_TAP_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honouring the override order above.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults plus
/// [`LOAD_ERROR_KEY`].
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}; using defaults", path.display());
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
