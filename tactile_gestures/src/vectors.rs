// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small elementwise vector helpers used by the gesture calculators.
//!
//! Kurbo's [`Vec2`] covers subtraction, scaling, and magnitudes; the
//! operations here are the handful of elementwise and aggregate forms that
//! gesture math needs on top of that.

use kurbo::Vec2;

/// Divides two vectors elementwise.
///
/// A zero component in `b` produces an infinite or NaN component in the
/// result, exactly as the underlying float division does; callers that blend
/// per-axis estimates weight such axes out (see
/// [`pinch_zoom`](crate::pinch_zoom)).
#[must_use]
pub fn divide_elements(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x / b.x, a.y / b.y)
}

/// Returns the elementwise absolute value.
#[must_use]
pub fn abs_elements(v: Vec2) -> Vec2 {
    Vec2::new(v.x.abs(), v.y.abs())
}

/// Returns the arithmetic mean of the given vectors.
///
/// The centroid of an empty slice is the zero vector.
#[must_use]
pub fn centroid(vectors: &[Vec2]) -> Vec2 {
    if vectors.is_empty() {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for v in vectors {
        sum += *v;
    }
    sum / vectors.len() as f64
}
