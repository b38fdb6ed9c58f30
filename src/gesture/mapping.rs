// SPDX-License-Identifier: MPL-2.0
//! Mapping background taps into image content space.
//!
//! The background surface has no geometric relation to the image, so the
//! mapping is proportional on X and snaps to the top or bottom edge on Y.

use crate::domain::{Point, Size};

/// Maps a tap on the background surface to a point on the image.
///
/// X is carried over as a percentage of the surface width. Y becomes `0` for
/// taps in the upper half and the image height for taps in the lower half.
/// Returns `None` if either size is degenerate.
#[must_use]
pub fn background_to_content(tap: Point, view_size: Size, image_size: Size) -> Option<Point> {
    if !view_size.is_usable() || !image_size.is_usable() {
        return None;
    }

    let percent_x = tap.x / (view_size.width / 100.0);
    let x = percent_x * (image_size.width / 100.0);

    let y = if tap.y < view_size.height / 2.0 {
        0.0
    } else {
        image_size.height
    };

    Some(Point::new(x, y))
}
