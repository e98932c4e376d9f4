// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch double-tap recognition.
//!
//! Hosts whose native double-click synthesis misfires for touch input can
//! cancel the native event and drive this recognizer from their click
//! stream instead: feed every click in, and dispatch a double-click
//! whenever [`DoubleTapState::on_click`] answers `true`.
//!
//! ```
//! use tactile_gestures::double_tap::DoubleTapState;
//!
//! let mut taps: DoubleTapState<u32> = DoubleTapState::new();
//!
//! assert!(!taps.on_click(7, 1_000, true));
//! // Same target, 180 ms later: double-tap.
//! assert!(taps.on_click(7, 1_180, true));
//! // The pair is consumed; a third tap starts a fresh cycle.
//! assert!(!taps.on_click(7, 1_360, true));
//! ```

/// Two taps further apart than this are separate clicks.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 500;

/// Recognizes touch double-taps from a stream of clicks.
///
/// Generic over the host's target identifier so the "same element" check
/// works against whatever handle the host's hit-testing produces.
#[derive(Clone, Debug)]
pub struct DoubleTapState<T> {
    last: Option<(T, u64)>,
}

impl<T> Default for DoubleTapState<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq> DoubleTapState<T> {
    /// Creates a recognizer with no pending tap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one click; returns `true` when it completes a double-tap.
    ///
    /// A double-tap is a touch click on the same target within
    /// [`DOUBLE_TAP_WINDOW_MS`] of the previous touch click. A completing
    /// click consumes the pair, so three rapid taps fire once, not twice.
    /// Non-touch clicks never fire and reset the cycle.
    pub fn on_click(&mut self, target: T, now_ms: u64, touch: bool) -> bool {
        if !touch {
            self.last = None;
            return false;
        }
        if let Some((last_target, last_time)) = &self.last
            && *last_target == target
            && now_ms.saturating_sub(*last_time) < DOUBLE_TAP_WINDOW_MS
        {
            self.last = None;
            return true;
        }
        self.last = Some((target, now_ms));
        false
    }

    /// Forgets any pending tap.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fast_taps_on_the_same_target_fire() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        assert!(taps.on_click("a", 499, true));
    }

    #[test]
    fn slow_second_tap_does_not_fire() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        assert!(!taps.on_click("a", 500, true));
        // But it primes a new cycle.
        assert!(taps.on_click("a", 700, true));
    }

    #[test]
    fn different_target_does_not_fire() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        assert!(!taps.on_click("b", 100, true));
    }

    #[test]
    fn triple_tap_fires_exactly_once() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        assert!(taps.on_click("a", 150, true));
        assert!(!taps.on_click("a", 300, true));
        assert!(taps.on_click("a", 450, true));
    }

    #[test]
    fn mouse_clicks_reset_and_never_fire() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        assert!(!taps.on_click("a", 100, false));
        // The touch history was cleared by the mouse click.
        assert!(!taps.on_click("a", 200, true));
    }

    #[test]
    fn reset_clears_the_pending_tap() {
        let mut taps = DoubleTapState::new();
        assert!(!taps.on_click("a", 0, true));
        taps.reset();
        assert!(!taps.on_click("a", 100, true));
    }
}
