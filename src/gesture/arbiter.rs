// SPDX-License-Identifier: MPL-2.0
//! Tap arbitration state machine.
//!
//! ```text
//!            single tap                      delay elapsed
//!   Idle ─────────────────► AwaitingSecondTap ─────────────► Idle (toggle controls)
//!    ▲  ▲                        │   double tap
//!    │  └────────────────────────┘   (pending tap cancelled, zoom toggled)
//!    │ zoom ended
//!  Zooming ◄──── zoom began (from any state; cancels auto-hide)
//! ```
//!
//! A double tap always wins over a pending single tap. `Zooming` does not
//! block taps; the owning gallery reads it to hold back control hiding, so
//! only the end of the zoom leaves it. A tap pending mid-zoom is still
//! tracked and fires as usual.

use std::time::Instant;

use super::delay::DelayedAction;
use super::mapping;
use super::tap::{TapCount, TapEvent, TapSource};
use crate::controller::GalleryController;
use crate::domain::{Point, Size, TapDelay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A single tap is waiting to find out whether a second one follows.
    AwaitingSecondTap,
    /// A pinch or programmatic zoom is in flight.
    Zooming,
}

/// Messages for the arbiter.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Tap { event: TapEvent, at: Instant },
    /// Host timer tick; fires the pending single tap once it is due.
    Tick(Instant),
    ZoomBegan,
    ZoomEnded,
}

/// Effects produced by arbitration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Toggle zoom around this point in image content space.
    ZoomToggle(Point),
    /// The pending single tap fired and the controls were toggled.
    ControlsToggled,
}

/// What the arbiter may consult while handling a message.
#[derive(Clone, Copy, Default)]
pub struct Context<'a> {
    /// The owning gallery, if still attached.
    pub controller: Option<&'a dyn GalleryController>,
    /// Natural size of the bound image, if any.
    pub image_size: Option<Size>,
}

/// Per-viewport arbitration state.
#[derive(Debug, Clone)]
pub struct State {
    zooming: bool,
    pending: DelayedAction<TapSource>,
}

impl State {
    #[must_use]
    pub fn new(delay: TapDelay) -> Self {
        Self {
            zooming: false,
            pending: DelayedAction::new(delay.as_duration()),
        }
    }

    /// Handle an arbitration message.
    pub fn handle(&mut self, msg: Message, ctx: Context<'_>) -> Effect {
        match msg {
            Message::Tap { event, at } => match event.count {
                TapCount::Single => self.single_tap(event, at, ctx),
                TapCount::Double => self.double_tap(event, ctx),
            },
            Message::Tick(now) => self.tick(now, ctx),
            Message::ZoomBegan => {
                if self.pending.cancel() {
                    log::trace!("zoom began: dropping pending single tap");
                }
                self.zooming = true;
                if let Some(controller) = ctx.controller {
                    controller.cancel_control_auto_hide();
                }
                Effect::None
            }
            Message::ZoomEnded => {
                self.zooming = false;
                Effect::None
            }
        }
    }

    fn single_tap(&mut self, event: TapEvent, at: Instant, ctx: Context<'_>) -> Effect {
        let Some(controller) = ctx.controller else {
            return Effect::None;
        };
        if event.source == TapSource::Background && !controller.is_background_tap_zoom_enabled() {
            return Effect::None;
        }

        log::trace!("single tap on {:?}: awaiting second tap", event.source);
        self.pending.schedule(at, event.source);
        Effect::None
    }

    fn double_tap(&mut self, event: TapEvent, ctx: Context<'_>) -> Effect {
        if self.pending.cancel() {
            log::trace!("double tap: cancelled pending single tap");
        }

        let point = match event.source {
            TapSource::Image => Some(event.point),
            TapSource::Background => {
                let enabled = ctx
                    .controller
                    .is_some_and(|controller| controller.is_background_tap_zoom_enabled());
                if !enabled {
                    return Effect::None;
                }
                ctx.image_size.and_then(|image_size| {
                    mapping::background_to_content(event.point, event.view_size, image_size)
                })
            }
        };

        point.map_or(Effect::None, Effect::ZoomToggle)
    }

    fn tick(&mut self, now: Instant, ctx: Context<'_>) -> Effect {
        let Some(source) = self.pending.poll(now) else {
            return Effect::None;
        };

        match ctx.controller {
            Some(controller) => {
                log::trace!("single tap on {source:?} confirmed: toggling controls");
                controller.toggle_controls();
                Effect::ControlsToggled
            }
            None => Effect::None,
        }
    }

    /// Drops any pending tap and returns to idle.
    pub fn reset(&mut self) {
        self.pending.cancel();
        self.zooming = false;
    }

    /// Current phase. A zoom in flight outranks a pending tap.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.zooming {
            Phase::Zooming
        } else if self.pending.is_pending() {
            Phase::AwaitingSecondTap
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// When the pending single tap will fire, if one is waiting.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(TapDelay::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::RecordingController;
    use std::time::Duration;

    const VIEW: Size = Size::new(300.0, 600.0);
    const IMAGE: Size = Size::new(2000.0, 1000.0);

    fn ctx(controller: &RecordingController) -> Context<'_> {
        Context {
            controller: Some(controller),
            image_size: Some(IMAGE),
        }
    }

    fn tap(event: TapEvent, at: Instant) -> Message {
        Message::Tap { event, at }
    }

    #[test]
    fn image_single_tap_toggles_after_delay() {
        let controller = RecordingController::with_background(false);
        let mut state = State::default();
        let start = Instant::now();

        let effect = state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::AwaitingSecondTap);

        let early = state.handle(
            Message::Tick(start + Duration::from_millis(100)),
            ctx(&controller),
        );
        assert_eq!(early, Effect::None);
        assert_eq!(controller.toggles.get(), 0);

        let due = state.handle(
            Message::Tick(start + Duration::from_millis(250)),
            ctx(&controller),
        );
        assert_eq!(due, Effect::ControlsToggled);
        assert_eq!(controller.toggles.get(), 1);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn double_tap_cancels_pending_single_tap() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        let start = Instant::now();
        let point = Point::new(120.0, 80.0);

        state.handle(
            tap(TapEvent::single(TapSource::Image, point, IMAGE), start),
            ctx(&controller),
        );
        let effect = state.handle(
            tap(
                TapEvent::double(TapSource::Image, point, IMAGE),
                start + Duration::from_millis(1),
            ),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::ZoomToggle(point));
        assert_eq!(state.phase(), Phase::Idle);

        state.handle(Message::Tick(start + Duration::from_secs(5)), ctx(&controller));
        assert_eq!(controller.toggles.get(), 0);
    }

    #[test]
    fn background_taps_ignored_when_disabled() {
        let controller = RecordingController::with_background(false);
        let mut state = State::default();
        let start = Instant::now();

        state.handle(
            tap(TapEvent::single(TapSource::Background, Point::ORIGIN, VIEW), start),
            ctx(&controller),
        );
        assert_eq!(state.phase(), Phase::Idle);

        let effect = state.handle(
            tap(TapEvent::double(TapSource::Background, Point::ORIGIN, VIEW), start),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn background_double_tap_maps_into_content_space() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();

        let effect = state.handle(
            tap(
                TapEvent::double(TapSource::Background, Point::new(150.0, 500.0), VIEW),
                Instant::now(),
            ),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::ZoomToggle(Point::new(1000.0, 1000.0)));
    }

    #[test]
    fn background_double_tap_without_image_does_nothing() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        let context = Context {
            controller: Some(&*controller),
            image_size: None,
        };

        let effect = state.handle(
            tap(
                TapEvent::double(TapSource::Background, Point::new(10.0, 10.0), VIEW),
                Instant::now(),
            ),
            context,
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn detached_controller_makes_forwarding_a_no_op() {
        let mut state = State::default();
        let start = Instant::now();
        let detached = Context {
            controller: None,
            image_size: Some(IMAGE),
        };

        state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            detached,
        );
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.handle(Message::ZoomBegan, detached), Effect::None);

        // Image double taps need no controller.
        let point = Point::new(5.0, 5.0);
        let effect = state.handle(
            tap(TapEvent::double(TapSource::Image, point, IMAGE), start),
            detached,
        );
        assert_eq!(effect, Effect::ZoomToggle(point));
    }

    #[test]
    fn controller_dropped_while_tap_pending_fires_nothing() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        let start = Instant::now();

        state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            ctx(&controller),
        );
        let effect = state.handle(
            Message::Tick(start + Duration::from_secs(1)),
            Context::default(),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.pending_deadline().is_none());
    }

    #[test]
    fn zoom_began_cancels_auto_hide_and_pending_tap() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        let start = Instant::now();

        state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            ctx(&controller),
        );
        state.handle(Message::ZoomBegan, ctx(&controller));
        assert!(state.is_zooming());
        assert_eq!(controller.auto_hide_cancels.get(), 1);

        state.handle(Message::Tick(start + Duration::from_secs(1)), ctx(&controller));
        assert_eq!(controller.toggles.get(), 0);

        state.handle(Message::ZoomEnded, ctx(&controller));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn taps_still_work_while_zooming() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        state.handle(Message::ZoomBegan, ctx(&controller));

        let point = Point::new(1.0, 2.0);
        let effect = state.handle(
            tap(TapEvent::double(TapSource::Image, point, IMAGE), Instant::now()),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::ZoomToggle(point));
        assert!(state.is_zooming());
    }

    #[test]
    fn tap_during_pinch_keeps_zooming_phase() {
        let controller = RecordingController::with_background(true);
        let mut state = State::default();
        let start = Instant::now();
        state.handle(Message::ZoomBegan, ctx(&controller));

        state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            ctx(&controller),
        );
        assert_eq!(state.phase(), Phase::Zooming);
        assert!(state.pending_deadline().is_some());

        let effect = state.handle(
            Message::Tick(start + Duration::from_secs(1)),
            ctx(&controller),
        );
        assert_eq!(effect, Effect::ControlsToggled);
        assert!(state.is_zooming());

        state.handle(Message::ZoomEnded, ctx(&controller));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn custom_delay_is_respected() {
        let controller = RecordingController::with_background(true);
        let mut state = State::new(TapDelay::from_millis(500));
        let start = Instant::now();

        state.handle(
            tap(TapEvent::single(TapSource::Image, Point::ORIGIN, IMAGE), start),
            ctx(&controller),
        );
        assert_eq!(state.pending_deadline(), Some(start + Duration::from_millis(500)));
    }
}
