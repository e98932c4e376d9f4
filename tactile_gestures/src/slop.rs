// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement-slop filtering for touch clicks.
//!
//! Fingers wobble. Sortable lists and similar drag-sensitive widgets treat
//! any move between press and release as the start of a drag, which turns
//! wobbly taps into accidental micro-drags. The filter answers, per move
//! event, whether the host should suppress the move because it is still
//! within the click slop radius of the press point.
//!
//! ```
//! use kurbo::Point;
//! use tactile_gestures::slop::SlopFilter;
//!
//! let mut slop = SlopFilter::new();
//! slop.on_press(Point::new(100.0, 100.0));
//!
//! assert!(slop.suppress_move(Point::new(104.0, 97.0)));
//! assert!(!slop.suppress_move(Point::new(100.0, 112.0)));
//!
//! slop.on_release();
//! assert!(!slop.suppress_move(Point::new(104.0, 97.0)));
//! ```

use kurbo::Point;

/// Moves strictly inside this radius of the press point count as wobble.
pub const CLICK_SLOP: f64 = 10.0;

/// Tracks the press position of a potential click and classifies moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlopFilter {
    press: Option<Point>,
}

impl SlopFilter {
    /// Creates a filter with no press in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press at the given screen position.
    pub fn on_press(&mut self, position: Point) {
        self.press = Some(position);
    }

    /// Ends the potential click; subsequent moves are never suppressed.
    pub fn on_release(&mut self) {
        self.press = None;
    }

    /// Returns `true` when a move to `position` should be suppressed.
    ///
    /// True exactly when a press is in flight and `position` lies strictly
    /// within [`CLICK_SLOP`] of it. The comparison uses squared distances;
    /// no square root is taken.
    #[must_use]
    pub fn suppress_move(&self, position: Point) -> bool {
        match self.press {
            Some(press) => (position - press).hypot2() < CLICK_SLOP * CLICK_SLOP,
            None => false,
        }
    }
}
