// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with ZERO external dependencies.
//!
//! Everything here is plain geometry and policy data. Nothing in this module
//! knows about gestures, controllers, or configuration files, which keeps the
//! arithmetic independently testable.
//!
//! # Modules
//!
//! - [`geometry`]: [`Size`](geometry::Size), [`Point`](geometry::Point),
//!   [`Rect`](geometry::Rect)
//! - [`device`]: [`DeviceMetrics`](device::DeviceMetrics) and
//!   [`Orientation`](device::Orientation)
//! - [`image`]: [`BoundImage`](image::BoundImage) and
//!   [`DisplayMode`](image::DisplayMode)
//! - [`zoom`]: the [`ZoomState`](zoom::ZoomState) triple
//! - [`newtypes`]: clamped policy values ([`DensityFloor`](newtypes::DensityFloor),
//!   [`StepMultiplier`](newtypes::StepMultiplier), [`TapDelay`](newtypes::TapDelay))

pub mod device;
pub mod geometry;
pub mod image;
pub mod newtypes;
pub mod zoom;

pub use device::{DeviceMetrics, Orientation};
pub use geometry::{Point, Rect, Size};
pub use image::{BoundImage, DisplayMode};
pub use newtypes::{DensityFloor, ExactWidthMaxScale, StepMultiplier, TapDelay};
pub use zoom::ZoomState;
