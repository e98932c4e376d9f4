// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch input event model consumed by contact tracking and gestures.

use kurbo::Point;
use smallvec::SmallVec;

use crate::ContactId;

/// Lifecycle phase of a touch event.
///
/// For one identity, hosts deliver events in the order press, any number of
/// moves, then one release or cancel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A contact touched down.
    Press,
    /// A contact moved while down.
    Move,
    /// A contact lifted normally.
    Release,
    /// The platform aborted the contact (palm rejection, focus loss, …).
    Cancel,
}

/// One contact's position as reported by a single platform event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// The contact this sample belongs to.
    pub id: ContactId,
    /// Screen-space position.
    pub position: Point,
}

impl TouchSample {
    /// Creates a sample for the given contact and screen position.
    #[must_use]
    pub fn new(id: ContactId, position: Point) -> Self {
        Self { id, position }
    }
}

/// One low-level touch event as delivered by the host.
///
/// `changed` is the contact the event is about (the finger that pressed,
/// moved, lifted, or was cancelled). `active` mirrors the platform's full
/// list of contacts currently on the surface, including `changed`; trackers
/// update every listed contact but never remove contacts that are merely
/// absent from the list.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    /// Lifecycle phase of this event.
    pub phase: TouchPhase,
    /// The contact this event reports on.
    pub changed: TouchSample,
    /// All contacts on the surface at the time of the event.
    pub active: SmallVec<[TouchSample; 4]>,
}

impl TouchInput {
    /// Creates an event whose active list contains just the changed contact.
    #[must_use]
    pub fn new(phase: TouchPhase, changed: TouchSample) -> Self {
        let mut active = SmallVec::new();
        active.push(changed);
        Self {
            phase,
            changed,
            active,
        }
    }

    /// Creates an event with an explicit active contact list.
    #[must_use]
    pub fn with_active(
        phase: TouchPhase,
        changed: TouchSample,
        active: impl IntoIterator<Item = TouchSample>,
    ) -> Self {
        Self {
            phase,
            changed,
            active: active.into_iter().collect(),
        }
    }
}
