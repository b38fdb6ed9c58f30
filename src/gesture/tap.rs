// SPDX-License-Identifier: MPL-2.0
//! Classified tap events as delivered by the host's hit-testing.

use crate::domain::{Point, Size};

/// Which of the two overlapping hit-test surfaces was tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapSource {
    /// The empty area around the image, covering the whole viewport.
    Background,
    /// The image itself. Points are in image content space at scale 1.
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapCount {
    Single,
    Double,
}

/// One tap, already classified by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub source: TapSource,
    pub count: TapCount,
    /// Location in the tapped surface's own coordinates.
    pub point: Point,
    /// Size of the tapped surface.
    pub view_size: Size,
}

impl TapEvent {
    #[must_use]
    pub fn single(source: TapSource, point: Point, view_size: Size) -> Self {
        Self {
            source,
            count: TapCount::Single,
            point,
            view_size,
        }
    }

    #[must_use]
    pub fn double(source: TapSource, point: Point, view_size: Size) -> Self {
        Self {
            source,
            count: TapCount::Double,
            point,
            view_size,
        }
    }
}
