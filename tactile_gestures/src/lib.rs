// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Gestures: multi-touch gesture recognition for 2D canvases.
//!
//! This crate turns streams of raw touch events into precise camera
//! mutations on a pan/zoom viewport. It recognizes a fixed gesture set:
//!
//! - **Two fingers**: pinch zoom, either combined with panning or split off
//!   from it, per [`GestureMode`].
//! - **Three or four fingers**: pan.
//! - **One finger**: pass-through — the event is optionally expanded into
//!   synthetic pointer events for hosts whose canvas predates native touch
//!   handling (see [`CompatProfile`]).
//!
//! The core types are deliberately headless. [`GestureEngine`] owns only
//! the contact tracker and its enabled flag; the camera is any
//! [`ViewportPort`](tactile_viewport::ViewportPort) implementation passed
//! into each entry point, and configuration ([`GestureMode`],
//! [`CompatProfile`]) is injected at construction. Nothing reads ambient
//! state, so the whole engine is testable against the reference
//! [`QuantizedViewport`](tactile_viewport::QuantizedViewport).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tactile_contacts::{ContactId, TouchInput, TouchPhase, TouchSample};
//! use tactile_gestures::{CompatProfile, GestureEngine, GestureMode};
//! use tactile_viewport::{QuantizedViewport, ViewportPort};
//!
//! let mut port = QuantizedViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut engine = GestureEngine::new(GestureMode::Combined, CompatProfile::modern());
//!
//! // Two fingers land 200 pixels apart.
//! let a = TouchSample::new(ContactId(1), Point::new(300.0, 300.0));
//! let b = TouchSample::new(ContactId(2), Point::new(500.0, 300.0));
//! engine.handle_touch_start(&TouchInput::new(TouchPhase::Press, a), &port);
//! engine.handle_touch_start(&TouchInput::with_active(TouchPhase::Press, b, [a, b]), &port);
//!
//! // They spread to 400 pixels apart: the view zooms in 2x.
//! let a = TouchSample::new(ContactId(1), Point::new(200.0, 300.0));
//! let b = TouchSample::new(ContactId(2), Point::new(600.0, 300.0));
//! engine.handle_touch_move(&TouchInput::with_active(TouchPhase::Move, a, [a, b]), &mut port);
//! assert_eq!(port.zoom(), 2.0);
//! ```
//!
//! ## Anchoring
//!
//! Every contact remembers the world point that was under it when it first
//! touched down, and every gesture step computes the pan correction that
//! keeps those world points visually pinned under the fingers — including
//! across the host camera's quantization of zoom to two decimal places
//! (see [`pan_correction`] and the combined zoom+pan handler).
//!
//! The [`double_tap`] and [`slop`] modules carry the two window-layer
//! interaction helpers that accompany the canvas gestures: touch double-tap
//! recognition and click movement-slop filtering.
//!
//! This crate is `no_std`.

#![no_std]

pub mod double_tap;
pub mod slop;
pub mod vectors;

mod compat;
mod engine;
mod modes;
mod pan;
mod zoom;

pub use compat::{CompatProfile, EventMap, ForwardedEvents, SyntheticPointerEvent};
pub use engine::GestureEngine;
pub use modes::{GestureMode, TouchContext};
pub use pan::pan_correction;
pub use zoom::pinch_zoom;
