// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan-correction calculator.

use kurbo::{Affine, Vec2};
use tactile_contacts::Contact;

/// Computes the world-space drift of one contact under a transform.
///
/// The result is the difference between the world point implied by the
/// contact's current screen position under `transform` and the world point
/// that was actually under the finger when the contact was registered. It is
/// the offset the view must shift by to re-anchor that finger. A contact
/// that has not moved, measured against its registration-time transform,
/// yields a zero correction.
#[must_use]
pub fn pan_correction(transform: Affine, contact: &Contact) -> Vec2 {
    let implied_world = transform.inverse() * contact.current();
    implied_world - contact.world()
}
