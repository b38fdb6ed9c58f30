// SPDX-License-Identifier: MPL-2.0
//! Description of the display a viewport is shown on.

use super::geometry::Size;

/// Interface orientation of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    #[must_use]
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}

/// Screen metrics the maximum zoom is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMetrics {
    /// Physical pixels per point as reported by the platform.
    pub scale: f32,
    /// Screen size in points for the current orientation.
    pub bounds: Size,
    pub orientation: Orientation,
}

impl DeviceMetrics {
    #[must_use]
    pub fn new(scale: f32, bounds: Size, orientation: Orientation) -> Self {
        Self {
            scale,
            bounds,
            orientation,
        }
    }

    /// Pixel density with `floor` applied: `max(scale, floor)`.
    ///
    /// A non-finite platform scale falls back to the floor.
    #[must_use]
    pub fn density(&self, floor: f32) -> f32 {
        if self.scale.is_finite() {
            self.scale.max(floor)
        } else {
            floor
        }
    }

    /// Screen extent in physical pixels for the given density.
    #[must_use]
    pub fn screen_pixels(&self, density: f32) -> Size {
        self.bounds.scaled(density)
    }
}

impl Default for DeviceMetrics {
    /// A 2x phone in portrait, used until the host reports real metrics.
    fn default() -> Self {
        Self {
            scale: 2.0,
            bounds: Size::new(375.0, 667.0),
            orientation: Orientation::Portrait,
        }
    }
}
