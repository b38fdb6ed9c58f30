// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry engine.
//!
//! Owns the zoom state and content frame of a single viewport and derives
//! them from three inputs: the bound image's natural size, the viewport size
//! and the device metrics. Every operation is a pure function of those
//! inputs plus the current zoom; nothing here can fail. Missing preconditions
//! turn an operation into a no-op, and degenerate sizes are rejected before
//! they can put NaN or infinity into the state.
//!
//! ```text
//! bind_image ─► recompute_zoom_bounds ─► recenter ─► (host lays out)
//!                                          ▲
//! zoom_toggle ─► ZoomTarget ─► host animates ─► apply_zoom_scale
//! ```

pub mod bounds;
pub mod frame;
pub mod target;

pub use frame::ContentFrame;
pub use target::{DoubleTapZoom, ZoomTarget};

use crate::domain::{
    BoundImage, DensityFloor, DeviceMetrics, DisplayMode, ExactWidthMaxScale, Point, Size,
    ZoomState,
};

/// Tunable constants of the zoom computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomPolicy {
    pub density_floor: DensityFloor,
    pub exact_width_max_scale: ExactWidthMaxScale,
    pub double_tap: DoubleTapZoom,
}

/// Zoom and layout state of one viewport.
#[derive(Debug, Clone)]
pub struct ViewportGeometry {
    policy: ZoomPolicy,
    device: DeviceMetrics,
    viewport: Size,
    image: Option<BoundImage>,
    zoom: ZoomState,
    frame: ContentFrame,
    /// Scrollable extent at scale 1.
    content_extent: Size,
    layout_dirty: bool,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(policy: ZoomPolicy, device: DeviceMetrics, viewport: Size) -> Self {
        Self {
            policy,
            device,
            viewport,
            image: None,
            zoom: ZoomState::NEUTRAL,
            frame: ContentFrame::default(),
            content_extent: Size::ZERO,
            layout_dirty: false,
        }
    }

    /// Binds `image` and derives fresh zoom bounds for the current viewport.
    ///
    /// The zoom state is reset to neutral first. Without an image, or with an
    /// image whose natural size is degenerate, nothing is bound and `None` is
    /// returned.
    pub fn bind_image(&mut self, image: Option<BoundImage>) -> Option<ContentFrame> {
        self.reset();

        let image = match image {
            Some(image) if image.natural_size.is_usable() => image,
            Some(image) => {
                log::warn!(
                    "ignoring image with degenerate natural size {:?}",
                    image.natural_size
                );
                return None;
            }
            None => return None,
        };

        self.image = Some(image);
        self.frame = ContentFrame::at_origin(image.natural_size);
        self.content_extent = image.natural_size;
        self.recompute_zoom_bounds(self.viewport);
        Some(self.frame)
    }

    /// Recomputes minimum and maximum zoom for `viewport` and resets the
    /// current zoom to the minimum.
    ///
    /// With no image bound the state is neutral. A degenerate viewport keeps
    /// the previous zoom state. The content frame goes back to the origin and
    /// layout is marked dirty; callers are expected to [`recenter`] next.
    ///
    /// [`recenter`]: Self::recenter
    pub fn recompute_zoom_bounds(&mut self, viewport: Size) -> ZoomState {
        self.viewport = viewport;

        let Some(image) = self.image else {
            self.zoom = ZoomState::NEUTRAL;
            return self.zoom;
        };

        let density = self.density();
        match bounds::compute(
            image.natural_size,
            viewport,
            &self.device,
            density,
            self.policy.exact_width_max_scale,
        ) {
            Some(zoom) => {
                log::debug!(
                    "zoom bounds for {:?} in {:?}: min {} max {} (density {density})",
                    image.natural_size,
                    viewport,
                    zoom.min(),
                    zoom.max()
                );
                self.zoom = zoom;
            }
            None => {
                log::warn!(
                    "skipping zoom recomputation: degenerate input (image {:?}, viewport \
                     {viewport:?}, device {:?})",
                    image.natural_size,
                    self.device
                );
                return self.zoom;
            }
        }

        self.frame = ContentFrame::at_origin(image.natural_size);
        self.layout_dirty = true;
        self.zoom
    }

    /// Centers the content inside `viewport` at the current zoom.
    ///
    /// Layout is only invalidated when the frame actually moves, so calling
    /// this repeatedly with the same inputs is free.
    pub fn recenter(&mut self, viewport: Size) -> ContentFrame {
        self.viewport = viewport;
        let centered = self.frame.centered_in(viewport, self.zoom.current());
        if centered != self.frame {
            self.frame = centered;
            self.layout_dirty = true;
        }
        self.frame
    }

    /// Chooses where a double tap at `content_point` should take the zoom.
    ///
    /// Zoomed in: back out to the minimum. At the minimum: in to the policy's
    /// zoom-in scale, framed around `content_point`. Returns `None` without a
    /// bound image or a usable viewport.
    #[must_use]
    pub fn zoom_toggle(&self, content_point: Point) -> Option<ZoomTarget> {
        self.image?;
        if !self.viewport.is_usable() {
            return None;
        }

        if self.zoom.is_zoomed_in() {
            log::debug!("double tap: zooming out to {}", self.zoom.min());
            return Some(ZoomTarget::ZoomOut {
                scale: self.zoom.min(),
            });
        }

        let scale = self
            .policy
            .double_tap
            .zoom_in_scale(self.zoom.current(), self.zoom.max());
        let rect = target::zoom_rect(self.viewport, scale, content_point, self.density());
        log::debug!("double tap at {content_point:?}: zooming to {rect:?} at {scale}");
        Some(ZoomTarget::ZoomToRect { rect, scale })
    }

    /// Records the scale the host's viewport reached, clamped into range,
    /// and recenters for it.
    pub fn apply_zoom_scale(&mut self, scale: f32) -> ZoomState {
        if self.image.is_none() {
            return self.zoom;
        }
        self.zoom = self.zoom.with_current(scale);
        self.recenter(self.viewport);
        self.zoom
    }

    /// Jumps straight to `target` without animation.
    pub fn apply_target(&mut self, target: &ZoomTarget) -> ZoomState {
        self.apply_zoom_scale(target.scale())
    }

    /// Handles a viewport size change.
    ///
    /// A size equal to the current one only recenters, so repeated layout
    /// passes keep the user's zoom.
    pub fn resize(&mut self, viewport: Size) -> ZoomState {
        if self.image.is_some() && viewport == self.viewport {
            self.recenter(viewport);
            return self.zoom;
        }
        let zoom = self.recompute_zoom_bounds(viewport);
        self.recenter(viewport);
        zoom
    }

    /// Handles rotation or a move to another screen.
    pub fn set_device(&mut self, device: DeviceMetrics) -> ZoomState {
        self.device = device;
        let zoom = self.recompute_zoom_bounds(self.viewport);
        self.recenter(self.viewport);
        zoom
    }

    /// Drops the bound image and returns to the neutral state.
    pub fn reset(&mut self) {
        let had_image = self.image.is_some();
        self.clear_image();
        if had_image {
            self.layout_dirty = true;
        }
    }

    /// Returns whether layout changed since the last call, clearing the flag.
    pub fn take_layout_dirty(&mut self) -> bool {
        std::mem::take(&mut self.layout_dirty)
    }

    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Effective pixel density: device scale with the policy floor applied.
    #[must_use]
    pub fn density(&self) -> f32 {
        self.device.density(self.policy.density_floor.value())
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom
    }

    #[must_use]
    pub fn content_frame(&self) -> ContentFrame {
        self.frame
    }

    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.content_extent
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn device(&self) -> DeviceMetrics {
        self.device
    }

    #[must_use]
    pub fn policy(&self) -> ZoomPolicy {
        self.policy
    }

    #[must_use]
    pub fn image(&self) -> Option<BoundImage> {
        self.image
    }

    /// Natural size of the bound image.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image.map(|image| image.natural_size)
    }

    #[must_use]
    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.image.map(|image| image.display_mode)
    }

    fn clear_image(&mut self) {
        self.image = None;
        self.zoom = ZoomState::NEUTRAL;
        self.frame = ContentFrame::default();
        self.content_extent = Size::ZERO;
    }
}
