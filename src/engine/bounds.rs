// SPDX-License-Identifier: MPL-2.0
//! Minimum and maximum zoom computation.
//!
//! The minimum is plain fit-to-bounds. The maximum depends on how wide the
//! image is compared to one screen of physical pixels: small images may be
//! magnified up to roughly native device resolution, images wider than the
//! screen never go past their own pixels.

use std::cmp::Ordering;

use crate::domain::{DeviceMetrics, ExactWidthMaxScale, Size, ZoomState};

/// Scale at which `image` fits entirely inside `viewport`.
///
/// Callers must pass usable sizes; see [`Size::is_usable`].
#[must_use]
pub fn fit_scale(image: Size, viewport: Size) -> f32 {
    let x_scale = viewport.width / image.width;
    let y_scale = viewport.height / image.height;
    x_scale.min(y_scale)
}

/// Largest zoom scale allowed for an image `image_width` points wide.
#[must_use]
pub fn max_scale(
    image_width: f32,
    device: &DeviceMetrics,
    density: f32,
    exact_width: ExactWidthMaxScale,
) -> f32 {
    let screen = device.screen_pixels(density);

    match image_width.partial_cmp(&screen.width) {
        Some(Ordering::Less) => {
            // Same result whichever way the device is held.
            if device.orientation.is_portrait() {
                screen.height / image_width
            } else {
                screen.width / image_width
            }
        }
        Some(Ordering::Greater) => 1.0,
        _ => exact_width.value(),
    }
}

/// Computes the zoom state for `image` shown in `viewport`.
///
/// Returns `None` when either size is degenerate or the device metrics yield
/// a non-finite maximum, so the caller can keep whatever state it had instead
/// of storing NaN or infinity.
#[must_use]
pub fn compute(
    image: Size,
    viewport: Size,
    device: &DeviceMetrics,
    density: f32,
    exact_width: ExactWidthMaxScale,
) -> Option<ZoomState> {
    if !image.is_usable() || !viewport.is_usable() {
        return None;
    }
    let min = fit_scale(image, viewport);
    let max = max_scale(image.width, device, density, exact_width);
    if max < min {
        log::debug!("maximum zoom {max} below fit scale {min}; raising maximum to fit");
    }
    ZoomState::from_bounds(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Orientation;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq, F32_EPSILON};

    fn phone(orientation: Orientation) -> DeviceMetrics {
        DeviceMetrics::new(3.0, Size::new(375.0, 812.0), orientation)
    }

    #[test]
    fn fit_scale_uses_tighter_axis() {
        let square = Size::new(500.0, 500.0);
        assert_abs_diff_eq!(
            fit_scale(Size::new(3000.0, 2000.0), Size::new(300.0, 200.0)),
            0.1
        );
        assert_abs_diff_eq!(fit_scale(Size::new(1000.0, 100.0), square), 0.5);
        assert_abs_diff_eq!(fit_scale(Size::new(100.0, 1000.0), square), 0.5);
    }

    #[test]
    fn wide_image_never_exceeds_native_pixels() {
        let device = phone(Orientation::Portrait);
        let max = max_scale(3000.0, &device, 3.0, ExactWidthMaxScale::default());
        assert_abs_diff_eq!(max, 1.0);
    }

    #[test]
    fn small_image_in_portrait_uses_screen_height() {
        let device = phone(Orientation::Portrait);
        let max = max_scale(100.0, &device, 3.0, ExactWidthMaxScale::default());
        assert_relative_eq!(max, 24.36, max_relative = F32_EPSILON);
    }

    #[test]
    fn small_image_in_landscape_uses_screen_width() {
        let device = phone(Orientation::Landscape);
        let max = max_scale(100.0, &device, 3.0, ExactWidthMaxScale::default());
        assert_relative_eq!(max, 11.25, max_relative = F32_EPSILON);
    }

    #[test]
    fn exact_screen_width_uses_fallback_constant() {
        let device = phone(Orientation::Portrait);
        let max = max_scale(1125.0, &device, 3.0, ExactWidthMaxScale::default());
        assert_eq!(max, 2.5);
    }

    #[test]
    fn compute_rejects_degenerate_sizes() {
        let device = phone(Orientation::Portrait);
        let exact = ExactWidthMaxScale::default();
        let usable = Size::new(300.0, 200.0);
        assert!(compute(Size::ZERO, usable, &device, 3.0, exact).is_none());
        assert!(compute(usable, Size::new(0.0, 200.0), &device, 3.0, exact).is_none());
        assert!(compute(Size::new(f32::NAN, 2.0), usable, &device, 3.0, exact).is_none());
    }

    #[test]
    fn compute_rejects_non_finite_device_bounds() {
        let device = DeviceMetrics::new(
            3.0,
            Size::new(f32::INFINITY, f32::INFINITY),
            Orientation::Portrait,
        );
        let state = compute(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            &device,
            3.0,
            ExactWidthMaxScale::default(),
        );
        assert!(state.is_none());
    }

    #[test]
    fn compute_raises_max_when_viewport_dwarfs_wide_image() {
        // 2000pt wide image, 3000pt viewport: fit scale 1.5 but max 1.0.
        let state = compute(
            Size::new(2000.0, 1000.0),
            Size::new(3000.0, 3000.0),
            &phone(Orientation::Portrait),
            3.0,
            ExactWidthMaxScale::default(),
        )
        .expect("usable sizes");
        assert_abs_diff_eq!(state.min(), 1.5);
        assert_abs_diff_eq!(state.max(), 1.5);
    }
}
