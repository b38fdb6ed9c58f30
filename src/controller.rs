// SPDX-License-Identifier: MPL-2.0
//! Back-reference from a viewport to the gallery that owns it.
//!
//! The gallery owns its viewports, never the other way round, so the link is
//! weak and may be dead at any call. Every consumer goes through
//! [`ControllerLink::upgrade`] and treats `None` as "do nothing".

use std::fmt;
use std::rc::{Rc, Weak};

/// Hooks a viewport calls on its owning gallery.
pub trait GalleryController {
    /// Flips the visibility of the gallery chrome.
    fn toggle_controls(&self);

    /// Stops a pending auto-hide of the gallery chrome.
    fn cancel_control_auto_hide(&self);

    /// Whether taps on the empty area around the image may toggle controls
    /// and zoom.
    fn is_background_tap_zoom_enabled(&self) -> bool;
}

/// Optional weak link to a [`GalleryController`].
#[derive(Clone, Default)]
pub struct ControllerLink(Option<Weak<dyn GalleryController>>);

impl ControllerLink {
    /// A link with no controller behind it.
    #[must_use]
    pub fn detached() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn new<C: GalleryController + 'static>(controller: &Rc<C>) -> Self {
        let weak: Weak<C> = Rc::downgrade(controller);
        Self(Some(weak))
    }

    /// Returns the controller if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<dyn GalleryController>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.0.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }
}

impl fmt::Debug for ControllerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerLink")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Controller that counts hook calls.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingController {
        pub toggles: Cell<u32>,
        pub auto_hide_cancels: Cell<u32>,
        pub background_enabled: Cell<bool>,
    }

    impl RecordingController {
        pub(crate) fn with_background(enabled: bool) -> Rc<Self> {
            let controller = Rc::new(Self::default());
            controller.background_enabled.set(enabled);
            controller
        }
    }

    impl GalleryController for RecordingController {
        fn toggle_controls(&self) {
            self.toggles.set(self.toggles.get() + 1);
        }

        fn cancel_control_auto_hide(&self) {
            self.auto_hide_cancels.set(self.auto_hide_cancels.get() + 1);
        }

        fn is_background_tap_zoom_enabled(&self) -> bool {
            self.background_enabled.get()
        }
    }

    #[test]
    fn detached_link_upgrades_to_none() {
        let link = ControllerLink::detached();
        assert!(link.upgrade().is_none());
        assert!(!link.is_attached());
    }

    #[test]
    fn link_follows_controller_lifetime() {
        let controller = RecordingController::with_background(true);
        let link = ControllerLink::new(&controller);
        assert!(link.is_attached());

        link.upgrade().expect("alive").toggle_controls();
        assert_eq!(controller.toggles.get(), 1);

        drop(controller);
        assert!(link.upgrade().is_none());
        assert!(!link.is_attached());
    }
}
