// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The bounds themselves live next to the newtypes that enforce them in
//! [`crate::domain::newtypes`]; this module names them for configuration
//! code.
//!
//! # Categories
//!
//! - **Zoom**: density floor, exact-width maximum, stepped double-tap factor
//! - **Gestures**: single-tap confirmation delay

use crate::domain::newtypes::{density_bounds, exact_width_bounds, step_bounds, tap_delay_bounds};

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum pixel density assumed for maximum zoom and zoom rectangles.
pub const DEFAULT_DENSITY_FLOOR: f32 = density_bounds::DEFAULT;

/// Maximum zoom when the image is exactly one screen of pixels wide.
pub const DEFAULT_EXACT_WIDTH_MAX_SCALE: f32 = exact_width_bounds::DEFAULT;

/// Multiplier for stepped double-tap zoom.
pub const DEFAULT_DOUBLE_TAP_STEP_MULTIPLIER: f32 = step_bounds::DEFAULT;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// How long a single tap waits for a second tap (milliseconds).
pub const DEFAULT_SINGLE_TAP_DELAY_MS: u64 = tap_delay_bounds::DEFAULT_MS;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(density_bounds::MIN > 0.0);
    assert!(DEFAULT_DENSITY_FLOOR >= density_bounds::MIN);
    assert!(DEFAULT_DENSITY_FLOOR <= density_bounds::MAX);

    assert!(exact_width_bounds::MIN >= 1.0);
    assert!(DEFAULT_EXACT_WIDTH_MAX_SCALE >= exact_width_bounds::MIN);
    assert!(DEFAULT_EXACT_WIDTH_MAX_SCALE <= exact_width_bounds::MAX);

    assert!(step_bounds::MIN > 1.0);
    assert!(DEFAULT_DOUBLE_TAP_STEP_MULTIPLIER >= step_bounds::MIN);
    assert!(DEFAULT_DOUBLE_TAP_STEP_MULTIPLIER <= step_bounds::MAX);

    assert!(tap_delay_bounds::MIN_MS > 0);
    assert!(DEFAULT_SINGLE_TAP_DELAY_MS >= tap_delay_bounds::MIN_MS);
    assert!(DEFAULT_SINGLE_TAP_DELAY_MS <= tap_delay_bounds::MAX_MS);
};
