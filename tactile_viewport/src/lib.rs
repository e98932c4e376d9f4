// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Viewport: the transform port that gesture handlers read and write.
//!
//! The gesture engine never owns a camera. Instead it talks to a
//! [`ViewportPort`]: a snapshot-read, single-atomic-write interface over
//! whatever pan/zoom camera the host actually renders with. Per gesture step
//! the engine reads the current transform, computes a correction, and issues
//! exactly one mutation ([`ViewportPort::set_pan_and_zoom`] or
//! [`ViewportPort::set_zoom`]), so no intermediate frame is rendered with a
//! mismatched pan/zoom pair.
//!
//! [`QuantizedViewport`] is a reference implementation of the port with one
//! deliberate quirk copied from the renderer this engine was designed
//! against: **zoom values are quantized to two decimal places on write**.
//! Reading the zoom back therefore returns the quantized value, and gesture
//! math that assumes continuity of zoom must compensate (the gesture crate's
//! combined zoom+pan handler does). Hosts with their own camera implement
//! [`ViewportPort`] directly and can skip the reference type.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tactile_viewport::{PanZoomCommand, QuantizedViewport, ViewportPort};
//!
//! let mut view = QuantizedViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // World origin starts at the view center.
//! assert_eq!(view.screen_to_world(Point::new(400.0, 300.0)), Point::ZERO);
//!
//! // Pan and zoom in one atomic command; the zoom is quantized on write.
//! view.set_pan_and_zoom(PanZoomCommand::pan_zoom(Point::new(50.0, 20.0), 1.2345));
//! assert_eq!(view.zoom(), 1.23);
//! assert_eq!(view.screen_to_world(Point::new(400.0, 300.0)), Point::new(50.0, 20.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod port;
mod quantized;

pub use port::{PanZoomCommand, TransformParams, ViewportPort};
pub use quantized::{QuantizedViewport, quantize_zoom};
