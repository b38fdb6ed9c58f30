// SPDX-License-Identifier: MPL-2.0
//! Zoomable viewport orchestrator.
//!
//! A `ZoomingViewport` is what the owning gallery holds for each page. It
//! wires the geometry engine to the gesture arbiter and keeps the weak link
//! back to the gallery. The host feeds it [`Message`]s and acts on the
//! returned [`Effect`]:
//!
//! ```text
//! ZoomingViewport (orchestrator)
//!     ├── engine   - zoom bounds, centering, zoom targets
//!     ├── gesture  - single/double tap arbitration
//!     └── link     - weak back-reference to the gallery
//! ```

use std::rc::Rc;
use std::time::Instant;

use crate::config::Config;
use crate::controller::{ControllerLink, GalleryController};
use crate::domain::{BoundImage, DeviceMetrics, Size, TapDelay, ZoomState};
use crate::engine::{ContentFrame, ViewportGeometry, ZoomPolicy, ZoomTarget};
use crate::gesture::arbiter::{self, Context};
use crate::gesture::{Phase, TapEvent};

/// Messages for the viewport.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Bind a new image, or clear the viewport with `None`.
    BindImage(Option<BoundImage>),
    /// The viewport's bounds changed size.
    Resized(Size),
    /// The device rotated or the viewport moved to another screen.
    DeviceChanged(DeviceMetrics),
    /// A classified tap from one of the hit-test surfaces.
    Tap { event: TapEvent, at: Instant },
    /// Host timer tick, used to confirm pending single taps.
    Tick(Instant),
    /// The user started a pinch.
    PinchBegan,
    /// The zoom scale changed during a pinch or animation.
    Zoomed(f32),
    /// A pinch or zoom animation finished at this scale.
    ZoomEnded(f32),
    /// The viewport is going back to the gallery's reuse pool.
    PrepareForReuse,
}

/// Effects produced by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The content frame moved; the host should re-render.
    LayoutChanged(ContentFrame),
    /// The host should animate to this target, reporting progress with
    /// `Zoomed` and finishing with `ZoomEnded`.
    AnimateZoom(ZoomTarget),
    /// A confirmed single tap toggled the gallery controls.
    ControlsToggled,
}

/// One zoomable page of a gallery.
#[derive(Debug)]
pub struct ZoomingViewport {
    geometry: ViewportGeometry,
    gestures: arbiter::State,
    link: ControllerLink,
}

impl ZoomingViewport {
    #[must_use]
    pub fn new(
        policy: ZoomPolicy,
        tap_delay: TapDelay,
        device: DeviceMetrics,
        viewport: Size,
    ) -> Self {
        Self {
            geometry: ViewportGeometry::new(policy, device, viewport),
            gestures: arbiter::State::new(tap_delay),
            link: ControllerLink::detached(),
        }
    }

    /// Builds a viewport from loaded settings.
    #[must_use]
    pub fn from_config(config: &Config, device: DeviceMetrics, viewport: Size) -> Self {
        Self::new(config.zoom_policy(), config.tap_delay(), device, viewport)
    }

    /// Handle a viewport message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::BindImage(image) => {
                self.bind_image(image);
                self.layout_effect()
            }
            Message::Resized(size) => {
                self.geometry.resize(size);
                self.layout_effect()
            }
            Message::DeviceChanged(device) => {
                self.geometry.set_device(device);
                self.layout_effect()
            }
            Message::Tap { event, at } => {
                let effect = self.arbitrate(arbiter::Message::Tap { event, at });
                self.resolve(effect)
            }
            Message::Tick(now) => {
                let effect = self.arbitrate(arbiter::Message::Tick(now));
                self.resolve(effect)
            }
            Message::PinchBegan => {
                self.arbitrate(arbiter::Message::ZoomBegan);
                Effect::None
            }
            Message::Zoomed(scale) => {
                self.geometry.apply_zoom_scale(scale);
                self.layout_effect()
            }
            Message::ZoomEnded(scale) => {
                self.geometry.apply_zoom_scale(scale);
                self.arbitrate(arbiter::Message::ZoomEnded);
                self.layout_effect()
            }
            Message::PrepareForReuse => {
                self.prepare_for_reuse();
                self.layout_effect()
            }
        }
    }

    /// Binds `image` (or clears with `None`) and centers it.
    pub fn bind_image(&mut self, image: Option<BoundImage>) -> Option<ContentFrame> {
        self.gestures.reset();
        self.geometry.bind_image(image)?;
        Some(self.geometry.recenter(self.geometry.viewport_size()))
    }

    /// Clears the image and all gesture state before the viewport is reused.
    ///
    /// The controller link is kept: a pooled viewport still belongs to the
    /// same gallery.
    pub fn prepare_for_reuse(&mut self) {
        self.gestures.reset();
        self.geometry.reset();
    }

    /// Links this viewport to its owning gallery.
    pub fn attach_controller<C: GalleryController + 'static>(&mut self, controller: &Rc<C>) {
        self.link = ControllerLink::new(controller);
    }

    pub fn detach_controller(&mut self) {
        self.link = ControllerLink::detached();
    }

    #[must_use]
    pub fn current_zoom_state(&self) -> ZoomState {
        self.geometry.zoom_state()
    }

    #[must_use]
    pub fn content_frame(&self) -> ContentFrame {
        self.geometry.content_frame()
    }

    #[must_use]
    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn gesture_phase(&self) -> Phase {
        self.gestures.phase()
    }

    /// Whether a zoom is in flight; the gallery should not auto-hide
    /// controls meanwhile.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.gestures.is_zooming()
    }

    /// When the host should next send [`Message::Tick`], if anything is
    /// pending.
    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.gestures.pending_deadline()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.link.is_attached()
    }

    fn arbitrate(&mut self, msg: arbiter::Message) -> arbiter::Effect {
        let controller = self.link.upgrade();
        let ctx = Context {
            controller: controller.as_deref(),
            image_size: self.geometry.image_size(),
        };
        self.gestures.handle(msg, ctx)
    }

    fn resolve(&mut self, effect: arbiter::Effect) -> Effect {
        match effect {
            arbiter::Effect::None => Effect::None,
            arbiter::Effect::ControlsToggled => Effect::ControlsToggled,
            arbiter::Effect::ZoomToggle(point) => match self.geometry.zoom_toggle(point) {
                Some(target) => {
                    self.arbitrate(arbiter::Message::ZoomBegan);
                    Effect::AnimateZoom(target)
                }
                None => Effect::None,
            },
        }
    }

    fn layout_effect(&mut self) -> Effect {
        if self.geometry.take_layout_dirty() {
            Effect::LayoutChanged(self.geometry.content_frame())
        } else {
            Effect::None
        }
    }
}
