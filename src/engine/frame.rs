// SPDX-License-Identifier: MPL-2.0
//! Placement of the image inside the scrollable content area.

use crate::domain::{Point, Size};

/// The image's rectangle in content space.
///
/// `size` is the raw content size at scale 1. The zoom factor is applied by
/// the viewport transform and never folded into this value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentFrame {
    pub origin: Point,
    pub size: Size,
}

impl ContentFrame {
    /// A frame of `size` at the content origin.
    #[must_use]
    pub fn at_origin(size: Size) -> Self {
        Self {
            origin: Point::ORIGIN,
            size,
        }
    }

    /// On-screen extent of the content at `scale`.
    #[must_use]
    pub fn scaled_size(&self, scale: f32) -> Size {
        self.size.scaled(scale)
    }

    /// Returns this frame positioned for `viewport` at `scale`.
    ///
    /// Each axis is handled on its own: content smaller than the viewport is
    /// centered (rounded down to whole points), content at least as large is
    /// pinned to the leading edge and left to scrolling.
    #[must_use]
    pub fn centered_in(&self, viewport: Size, scale: f32) -> Self {
        let scaled = self.scaled_size(scale);
        Self {
            origin: Point::new(
                center_axis(scaled.width, viewport.width),
                center_axis(scaled.height, viewport.height),
            ),
            size: self.size,
        }
    }
}

fn center_axis(content: f32, viewport: f32) -> f32 {
    if content < viewport {
        ((viewport - content) / 2.0).floor()
    } else {
        0.0
    }
}
