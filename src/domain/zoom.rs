// SPDX-License-Identifier: MPL-2.0
//! Zoom state: the current scale together with its allowed range.

/// Current, minimum and maximum zoom scale of a viewport.
///
/// The invariant `0 < min <= current <= max` holds for every value of this
/// type; all constructors enforce it, so no caller ever has to re-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    current: f32,
    min: f32,
    max: f32,
}

impl ZoomState {
    /// `{1, 1, 1}`: the state of a viewport with nothing to zoom.
    pub const NEUTRAL: Self = Self {
        current: 1.0,
        min: 1.0,
        max: 1.0,
    };

    /// Builds a state at its minimum from freshly computed bounds.
    ///
    /// Returns `None` when `min` is not a finite positive number or `max` is
    /// not finite. A `max` below `min` is raised to `min`.
    #[must_use]
    pub fn from_bounds(min: f32, max: f32) -> Option<Self> {
        if !min.is_finite() || min <= 0.0 || !max.is_finite() {
            return None;
        }
        Some(Self {
            current: min,
            min,
            max: max.max(min),
        })
    }

    /// Returns a copy with the current scale moved to `scale`, clamped into
    /// `[min, max]`. A non-finite `scale` leaves the state unchanged.
    #[must_use]
    pub fn with_current(self, scale: f32) -> Self {
        if !scale.is_finite() {
            return self;
        }
        Self {
            current: scale.clamp(self.min, self.max),
            ..self
        }
    }

    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns true when the viewport is magnified beyond fit-to-bounds.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.current > self.min
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
