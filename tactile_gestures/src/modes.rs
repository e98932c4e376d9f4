// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration enums consumed by the gesture engine.

/// How two-finger contact is interpreted.
///
/// The value comes from host configuration and is injected when the engine
/// is constructed; the engine never looks it up from ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureMode {
    /// Two fingers perform combined zoom and pan in a single gesture.
    #[default]
    Combined,
    /// Two fingers zoom only; panning requires three or four fingers.
    Split,
}

/// How one incoming contact should be interpreted, given the contacts
/// already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchContext {
    /// The contact is a click candidate and may be forwarded to the host's
    /// pointer pipeline.
    PrimaryClick,
    /// The contact participates in a zoom/pan gesture; click semantics are
    /// suppressed for the whole contact set.
    ZoomPanGesture,
}
