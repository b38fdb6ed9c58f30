// SPDX-License-Identifier: MPL-2.0
//! Double-tap zoom targets.

use crate::domain::{Point, Rect, Size, StepMultiplier};

/// How a double tap at minimum zoom chooses the scale to zoom in to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DoubleTapZoom {
    /// Jump straight to the maximum scale.
    #[default]
    Maximum,
    /// Multiply the current scale, capped at the maximum.
    Step(StepMultiplier),
}

impl DoubleTapZoom {
    /// Scale a double tap zooms in to from `current`.
    #[must_use]
    pub fn zoom_in_scale(self, current: f32, max: f32) -> f32 {
        match self {
            DoubleTapZoom::Maximum => max,
            DoubleTapZoom::Step(multiplier) => (current * multiplier.value()).min(max),
        }
    }
}

/// What the host should animate the viewport to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTarget {
    /// Scale-only transition back to the minimum.
    ZoomOut { scale: f32 },
    /// Zoom so that `rect` (content space, scale 1) fills the viewport.
    ZoomToRect { rect: Rect, scale: f32 },
}

impl ZoomTarget {
    /// Scale the viewport ends up at once the target is reached.
    #[must_use]
    pub fn scale(&self) -> f32 {
        match self {
            ZoomTarget::ZoomOut { scale } | ZoomTarget::ZoomToRect { scale, .. } => *scale,
        }
    }
}

/// Content-space rectangle that fills `viewport` at `scale` around `point`.
///
/// The rectangle is `viewport / scale` in size. Its origin is offset from
/// `point` by the crossed dimensions divided by `density`: the x offset uses
/// the height and the y offset the width. A square viewport at the 2x floor
/// puts `point` in the middle.
#[must_use]
pub fn zoom_rect(viewport: Size, scale: f32, point: Point, density: f32) -> Rect {
    let width = viewport.width / scale;
    let height = viewport.height / scale;
    Rect::new(
        Point::new(point.x - height / density, point.y - width / density),
        Size::new(width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn maximum_mode_ignores_current() {
        assert_abs_diff_eq!(DoubleTapZoom::Maximum.zoom_in_scale(0.1, 4.0), 4.0);
    }

    #[test]
    fn step_mode_multiplies_and_caps() {
        let step = DoubleTapZoom::Step(StepMultiplier::default());
        assert_abs_diff_eq!(step.zoom_in_scale(0.5, 4.0), 1.565, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(step.zoom_in_scale(2.0, 4.0), 4.0);
    }

    #[test]
    fn square_rect_is_centered_on_point_at_density_two() {
        let rect = zoom_rect(Size::new(300.0, 300.0), 2.0, Point::new(500.0, 400.0), 2.0);
        assert_abs_diff_eq!(rect.size.width, 150.0);
        assert_abs_diff_eq!(rect.size.height, 150.0);
        assert_eq!(rect.center(), Point::new(500.0, 400.0));
    }

    #[test]
    fn wide_rect_offsets_cross_axes() {
        let rect = zoom_rect(Size::new(300.0, 200.0), 1.0, Point::new(1500.0, 1000.0), 3.0);
        assert_abs_diff_eq!(rect.size.width, 300.0);
        assert_abs_diff_eq!(rect.size.height, 200.0);
        // x is pulled back by height / density, y by width / density.
        assert_abs_diff_eq!(rect.origin.x, 1500.0 - 200.0 / 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.origin.y, 900.0, epsilon = 1e-3);
    }

    #[test]
    fn rect_offset_shrinks_with_higher_density() {
        let rect = zoom_rect(Size::new(300.0, 300.0), 3.0, Point::new(100.0, 100.0), 3.0);
        assert_abs_diff_eq!(rect.size.width, 100.0);
        assert_abs_diff_eq!(rect.origin.x, 100.0 - 100.0 / 3.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rect.origin.y, 100.0 - 100.0 / 3.0, epsilon = 1e-4);
    }

    #[test]
    fn target_scale_reads_either_variant() {
        assert_abs_diff_eq!(ZoomTarget::ZoomOut { scale: 0.2 }.scale(), 0.2);
        let rect = Rect::from_size(Size::new(10.0, 10.0));
        assert_abs_diff_eq!(ZoomTarget::ZoomToRect { rect, scale: 3.0 }.scale(), 3.0);
    }
}
