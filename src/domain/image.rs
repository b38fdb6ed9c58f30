// SPDX-License-Identifier: MPL-2.0
//! The image a viewport is currently showing.

use super::geometry::Size;

/// How the renderer should lay the bitmap out inside its frame.
///
/// The zoom engine stores this for the renderer; it never affects the
/// geometry it computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    AspectFit,
    AspectFill,
    Fill,
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// An image bound to a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundImage {
    /// Natural size in points (pixel size divided by the image's own scale).
    pub natural_size: Size,
    pub display_mode: DisplayMode,
}

impl BoundImage {
    #[must_use]
    pub fn new(natural_size: Size, display_mode: DisplayMode) -> Self {
        Self {
            natural_size,
            display_mode,
        }
    }
}
