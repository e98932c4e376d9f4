// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport transform port trait and its parameter types.

use kurbo::{Affine, Point};

/// Parameters for building a transform snapshot that differs from the
/// current one in selected components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TransformParams {
    /// Zoom factor for the built transform; `None` keeps the current zoom.
    pub zoom: Option<f64>,
}

impl TransformParams {
    /// Parameters that override only the zoom factor.
    #[must_use]
    pub fn with_zoom(zoom: f64) -> Self {
        Self { zoom: Some(zoom) }
    }
}

/// One atomic pan (and optionally zoom) command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanZoomCommand {
    /// World-space point to place at the screen center.
    pub center: Point,
    /// New zoom factor; `None` leaves the zoom unchanged.
    pub zoom: Option<f64>,
}

impl PanZoomCommand {
    /// A pure pan: recenter the view on `center`, zoom unchanged.
    #[must_use]
    pub fn pan_to(center: Point) -> Self {
        Self { center, zoom: None }
    }

    /// A combined pan and zoom, applied as one mutation.
    #[must_use]
    pub fn pan_zoom(center: Point, zoom: f64) -> Self {
        Self {
            center,
            zoom: Some(zoom),
        }
    }
}

/// The viewport transform port: the camera interface gesture handlers read
/// and write.
///
/// Implementations expose the current world→screen affine transform, both
/// coordinate conversions, a transform builder for correction math, two
/// mutators, and the permission flags that let a host temporarily forbid
/// zooming or panning (gesture handlers silently narrow to whatever subset
/// is permitted).
///
/// ### Quantization
///
/// The renderer this port abstracts stores zoom at two decimal places of
/// precision, so [`zoom`](Self::zoom) may return a coarser value than the
/// last one commanded. [`build_transform`](Self::build_transform) is pure
/// math and uses the requested zoom exactly.
pub trait ViewportPort {
    /// Returns the current world→screen transform.
    fn current_transform(&self) -> Affine;

    /// Returns the current uniform zoom factor, as stored by the renderer.
    ///
    /// This is the `x`-scale coefficient of the current transform; for the
    /// uniform, axis-aligned transforms this port deals in, that is the
    /// zoom.
    fn zoom(&self) -> f64 {
        self.current_transform().as_coeffs()[0]
    }

    /// Converts a screen-space point into world space.
    fn screen_to_world(&self, point: Point) -> Point;

    /// Returns the screen-space center of the view.
    fn screen_center(&self) -> Point;

    /// Builds a world→screen transform with the given parameter overrides,
    /// leaving the viewport itself untouched.
    ///
    /// `discrete` requests a transform evaluated without animation or easing,
    /// for instantaneous correction math. Implementations without an
    /// animation concept may ignore the flag.
    fn build_transform(&self, params: TransformParams, discrete: bool) -> Affine;

    /// Sets the zoom factor, leaving the pan untouched.
    ///
    /// A no-op when zooming is not allowed.
    fn set_zoom(&mut self, zoom: f64);

    /// Applies one atomic pan+zoom command.
    ///
    /// Both components take effect together; no observer sees the new pan
    /// with the old zoom or vice versa. Components whose permission flag is
    /// off are dropped from the command.
    fn set_pan_and_zoom(&mut self, command: PanZoomCommand);

    /// Returns `true` when the host currently permits zoom changes.
    fn is_zoom_allowed(&self) -> bool;

    /// Returns `true` when the host currently permits panning.
    fn is_pan_allowed(&self) -> bool;
}
