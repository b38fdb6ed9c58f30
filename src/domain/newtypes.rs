// SPDX-License-Identifier: MPL-2.0
//! Zoom and gesture policy newtypes.
//!
//! This module provides type-safe wrappers for tunable policy values,
//! ensuring they are always within valid ranges. Values read from a
//! configuration file pass through these before reaching the engine.

use std::time::Duration;

// =============================================================================
// Density Floor
// =============================================================================

/// Density floor bounds (1x to 4x).
pub mod density_bounds {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 4.0;
    pub const DEFAULT: f32 = 2.0;
}

/// Minimum pixel-density multiplier used for maximum zoom and zoom-rectangle
/// offsets, regardless of the density the device reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityFloor(f32);

impl DensityFloor {
    /// Creates a new density floor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_or(value, density_bounds::MIN, density_bounds::MAX, density_bounds::DEFAULT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DensityFloor {
    fn default() -> Self {
        Self(density_bounds::DEFAULT)
    }
}

// =============================================================================
// Exact Width Max Scale
// =============================================================================

/// Bounds for the maximum scale used when an image is exactly one screen of
/// pixels wide.
pub mod exact_width_bounds {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 10.0;
    pub const DEFAULT: f32 = 2.5;
}

/// Maximum zoom scale for an image whose width equals the device pixel width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactWidthMaxScale(f32);

impl ExactWidthMaxScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_or(
            value,
            exact_width_bounds::MIN,
            exact_width_bounds::MAX,
            exact_width_bounds::DEFAULT,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ExactWidthMaxScale {
    fn default() -> Self {
        Self(exact_width_bounds::DEFAULT)
    }
}

// =============================================================================
// Step Multiplier
// =============================================================================

/// Bounds for the stepped double-tap zoom multiplier.
pub mod step_bounds {
    pub const MIN: f32 = 1.1;
    pub const MAX: f32 = 10.0;
    pub const DEFAULT: f32 = 3.13;
}

/// Factor a stepped double tap multiplies the current zoom by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMultiplier(f32);

impl StepMultiplier {
    /// Creates a new multiplier, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_or(value, step_bounds::MIN, step_bounds::MAX, step_bounds::DEFAULT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for StepMultiplier {
    fn default() -> Self {
        Self(step_bounds::DEFAULT)
    }
}

// =============================================================================
// Tap Delay
// =============================================================================

/// Single-tap confirmation delay bounds, in milliseconds.
pub mod tap_delay_bounds {
    pub const MIN_MS: u64 = 50;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 250;
}

/// How long a single tap waits for a possible second tap before its action
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapDelay(u64);

impl TapDelay {
    /// Creates a new delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(tap_delay_bounds::MIN_MS, tap_delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TapDelay {
    fn default() -> Self {
        Self(tap_delay_bounds::DEFAULT_MS)
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

// =============================================================================
// Tests
// =============================================================================
