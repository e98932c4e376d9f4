// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host compatibility profiles and the pass-through forwarding shim.

use kurbo::Point;
use smallvec::SmallVec;
use tactile_contacts::{TouchInput, TouchPhase};

/// A synthetic pointer event produced by the forwarding shim, to be
/// redispatched to the host canvas by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SyntheticPointerEvent {
    /// Pointer phase of the synthetic event.
    pub phase: TouchPhase,
    /// Screen position, carried over from the original touch event.
    pub position: Point,
}

/// Ordered sequence of synthetic events produced for one real event.
pub type ForwardedEvents = SmallVec<[SyntheticPointerEvent; 2]>;

/// One host profile's expansion table: real phase → synthetic phase sequence.
pub type EventMap = &'static [(TouchPhase, &'static [TouchPhase])];

// Legacy hosts drop a press unless the pointer has already "moved" to the
// touched position, so hit-testing has settled before the press arrives.
const LEGACY_MAP: EventMap = &[
    (TouchPhase::Press, &[TouchPhase::Move, TouchPhase::Press]),
    (TouchPhase::Move, &[TouchPhase::Move]),
    (TouchPhase::Release, &[TouchPhase::Release]),
    (TouchPhase::Cancel, &[TouchPhase::Cancel]),
];

const MODERN_MAP: EventMap = &[
    (TouchPhase::Press, &[TouchPhase::Press]),
    (TouchPhase::Move, &[TouchPhase::Move]),
    (TouchPhase::Release, &[TouchPhase::Release]),
    (TouchPhase::Cancel, &[TouchPhase::Cancel]),
];

/// Version-dependent host behavior, selected once at startup.
///
/// Hosts that predate native touch handling need single-finger touch events
/// forwarded to their pointer pipeline, with a press expanded into a
/// move-then-press pair. Current hosts understand single-finger touches
/// natively, so their profile maps every event to itself and the shim is
/// inert.
///
/// The profile is a plain strategy object: the host decides which one
/// applies (for example from its runtime version) and injects it into the
/// gesture engine; no version checks happen inside gesture handling.
#[derive(Clone, Copy, Debug)]
pub struct CompatProfile {
    event_map: EventMap,
    needs_forwarding: bool,
}

impl CompatProfile {
    /// Profile for hosts that need touch events forwarded as synthetic
    /// pointer events.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            event_map: LEGACY_MAP,
            needs_forwarding: true,
        }
    }

    /// Profile for hosts with native single-finger touch handling.
    #[must_use]
    pub fn modern() -> Self {
        Self {
            event_map: MODERN_MAP,
            needs_forwarding: false,
        }
    }

    /// Returns `true` when pass-through forwarding is required at all.
    #[must_use]
    pub fn needs_forwarding(&self) -> bool {
        self.needs_forwarding
    }

    /// Returns this profile's full expansion table.
    #[must_use]
    pub fn event_map(&self) -> EventMap {
        self.event_map
    }

    /// Returns the synthetic phase sequence for one real phase.
    #[must_use]
    pub fn expansion(&self, phase: TouchPhase) -> &'static [TouchPhase] {
        self.event_map
            .iter()
            .find(|entry| entry.0 == phase)
            .map(|entry| entry.1)
            .unwrap_or(&[])
    }

    /// Expands one real touch event into the synthetic pointer events the
    /// host canvas expects.
    ///
    /// Returns an empty sequence on profiles that do not forward. Every
    /// synthetic event carries the original event's screen position.
    #[must_use]
    pub fn forward(&self, input: &TouchInput) -> ForwardedEvents {
        if !self.needs_forwarding {
            return ForwardedEvents::new();
        }
        self.expansion(input.phase)
            .iter()
            .map(|&phase| SyntheticPointerEvent {
                phase,
                position: input.changed.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tactile_contacts::{ContactId, TouchSample};

    use super::*;

    #[test]
    fn legacy_press_expands_to_move_then_press() {
        let profile = CompatProfile::legacy();
        let input = TouchInput::new(
            TouchPhase::Press,
            TouchSample::new(ContactId(1), Point::new(12.0, 34.0)),
        );

        let events = profile.forward(&input);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].phase, TouchPhase::Move);
        assert_eq!(events[1].phase, TouchPhase::Press);
        assert_eq!(events[0].position, Point::new(12.0, 34.0));
        assert_eq!(events[1].position, Point::new(12.0, 34.0));
    }

    #[test]
    fn legacy_non_press_phases_map_one_to_one() {
        let profile = CompatProfile::legacy();
        for phase in [TouchPhase::Move, TouchPhase::Release, TouchPhase::Cancel] {
            let input = TouchInput::new(phase, TouchSample::new(ContactId(1), Point::ZERO));
            let events = profile.forward(&input);
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].phase, phase);
        }
    }

    #[test]
    fn modern_profile_is_inert_but_reports_an_identity_map() {
        let profile = CompatProfile::modern();
        assert!(!profile.needs_forwarding());

        let input = TouchInput::new(
            TouchPhase::Press,
            TouchSample::new(ContactId(1), Point::ZERO),
        );
        assert!(profile.forward(&input).is_empty());

        for (real, synthetic) in profile.event_map() {
            assert_eq!(*synthetic, &[*real]);
        }
    }

    #[test]
    fn expansion_matches_the_event_map() {
        let profile = CompatProfile::legacy();
        assert_eq!(
            profile.expansion(TouchPhase::Press),
            &[TouchPhase::Move, TouchPhase::Press]
        );
        assert_eq!(profile.expansion(TouchPhase::Cancel), &[TouchPhase::Cancel]);
    }
}
