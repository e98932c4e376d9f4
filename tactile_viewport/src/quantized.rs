// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference viewport with two-decimal zoom precision.

use kurbo::{Affine, Point, Rect};

use crate::port::{PanZoomCommand, TransformParams, ViewportPort};

/// Rounds a zoom factor to the two decimal places the renderer stores.
///
/// Zoom factors are positive; the rounding is half-up on the hundredths
/// grid, matching the renderer's observed read-back values.
#[must_use]
pub fn quantize_zoom(zoom: f64) -> f64 {
    let scaled = zoom * 100.0;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };
    rounded as f64 / 100.0
}

/// Reference [`ViewportPort`] implementation.
///
/// Models the host camera the gesture engine was designed against: a
/// uniform pan+zoom transform over a rectangular view, with zoom quantized
/// to two decimals on every write and per-component permission flags.
///
/// The pan state is the world-space point shown at the view center, which is
/// also the coordinate [`set_pan_and_zoom`](ViewportPort::set_pan_and_zoom)
/// commands. A fresh viewport shows the world origin at the view center at
/// zoom `1.0`.
#[derive(Clone, Debug)]
pub struct QuantizedViewport {
    view_rect: Rect,
    center: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    allow_zoom: bool,
    allow_pan: bool,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl QuantizedViewport {
    /// Creates a viewport covering `view_rect`, centered on the world origin
    /// at zoom `1.0`, with both permissions granted.
    ///
    /// Zoom is clamped to `[0.1, 10.0]` by default.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            center: Point::ZERO,
            zoom: 1.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
            allow_zoom: true,
            allow_pan: true,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the view rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in screen coordinates, keeping the same world
    /// center and zoom.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transforms();
    }

    /// Returns the world-space point currently at the view center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`, and the
    /// current zoom is clamped into it.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = quantize_zoom(self.zoom.clamp(min_zoom, max_zoom));
        self.rebuild_transforms();
    }

    /// Grants or revokes permission to change the zoom.
    pub fn set_zoom_allowed(&mut self, allowed: bool) {
        self.allow_zoom = allowed;
    }

    /// Grants or revokes permission to pan.
    pub fn set_pan_allowed(&mut self, allowed: bool) {
        self.allow_pan = allowed;
    }

    /// Converts a world-space point into screen space.
    #[must_use]
    pub fn world_to_screen(&self, point: Point) -> Point {
        self.world_to_screen * point
    }

    fn transform_for(&self, center: Point, zoom: f64) -> Affine {
        let view_center = self.view_rect.center().to_vec2();
        Affine::translate(view_center) * Affine::scale(zoom) * Affine::translate(-center.to_vec2())
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_screen = self.transform_for(self.center, self.zoom);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

impl ViewportPort for QuantizedViewport {
    fn current_transform(&self) -> Affine {
        self.world_to_screen
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn screen_to_world(&self, point: Point) -> Point {
        self.screen_to_world * point
    }

    fn screen_center(&self) -> Point {
        self.view_rect.center()
    }

    fn build_transform(&self, params: TransformParams, _discrete: bool) -> Affine {
        // Pure math: the requested zoom is used exactly, without the write
        // quantization, so correction calculations can reason about zoom
        // values between grid steps.
        let zoom = params.zoom.unwrap_or(self.zoom);
        self.transform_for(self.center, zoom)
    }

    fn set_zoom(&mut self, zoom: f64) {
        if !self.allow_zoom {
            return;
        }
        self.zoom = quantize_zoom(zoom.clamp(self.min_zoom, self.max_zoom));
        self.rebuild_transforms();
    }

    fn set_pan_and_zoom(&mut self, command: PanZoomCommand) {
        if self.allow_pan {
            self.center = command.center;
        }
        if self.allow_zoom
            && let Some(zoom) = command.zoom
        {
            self.zoom = quantize_zoom(zoom.clamp(self.min_zoom, self.max_zoom));
        }
        self.rebuild_transforms();
    }

    fn is_zoom_allowed(&self) -> bool {
        self.allow_zoom
    }

    fn is_pan_allowed(&self) -> bool {
        self.allow_pan
    }
}
