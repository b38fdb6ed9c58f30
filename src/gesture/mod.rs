// SPDX-License-Identifier: MPL-2.0
//! Gesture arbitration for a zoomable viewport.
//!
//! Taps reach a viewport from two overlapping surfaces: the background that
//! fills the viewport and the image on top of it. This module decides what
//! each tap means:
//!
//! ```text
//! tap ──► arbiter ──┬─ single ─► (delay) ─► toggle controls
//!                   └─ double ─► mapping ─► zoom toggle
//! ```
//!
//! - [`tap`]: classified tap events
//! - [`delay`]: the cancellable single-tap timer
//! - [`mapping`]: background-surface to content-space conversion
//! - [`arbiter`]: the state machine tying them together

pub mod arbiter;
pub mod delay;
pub mod mapping;
pub mod tap;

pub use arbiter::Phase;
pub use delay::DelayedAction;
pub use tap::{TapCount, TapEvent, TapSource};
