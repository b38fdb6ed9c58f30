// SPDX-License-Identifier: MPL-2.0
//! `zoom_viewport` is the zoom and gesture core of a single-image gallery page.
//!
//! It computes zoom bounds for an image inside a viewport, keeps the image
//! centered while it is smaller than the viewport, chooses double-tap zoom
//! targets, and tells single taps apart from double taps before handing them
//! to the owning gallery. Rendering and animation stay with the host, which
//! drives a [`ZoomingViewport`] with messages and acts on its effects.

#![doc(html_root_url = "https://docs.rs/zoom_viewport/0.1.0")]

pub mod config;
pub mod controller;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod viewport;

#[cfg(test)]
mod test_utils;

pub use controller::GalleryController;
pub use viewport::{Effect, Message, ZoomingViewport};
