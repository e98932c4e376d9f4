// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The insertion-ordered contact set and its entry types.

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Identifier for one physical contact (finger or stylus) on a surface.
///
/// The value is whatever stable identifier the platform assigns to the
/// contact (for example a pointer id or touch identifier). It is valid from
/// the contact's first observed press until its explicit release or cancel;
/// platforms are free to reuse values afterwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContactId(pub u64);

/// One tracked contact: its identity, current screen position, and the world
/// position that was under it when it first touched down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    id: ContactId,
    current: Point,
    world: Point,
}

impl Contact {
    /// Returns the contact's stable identity.
    #[must_use]
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the most recent screen-space position.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Returns the world-space anchor captured at registration.
    ///
    /// This is the inverse-transform of the screen position evaluated against
    /// the view transform in effect when the contact was first registered.
    /// It never changes for the lifetime of the contact, even across
    /// finger-count changes mid-gesture.
    #[must_use]
    pub fn world(&self) -> Point {
        self.world
    }
}

/// Live set of active contacts for one interactive surface.
///
/// Contacts are stored in insertion order (finger #1 stays first for as long
/// as it is down) with an identity index for O(1) lookup. The ordering only
/// changes on add or remove, never on position updates.
///
/// Events that omit a previously seen identity do **not** remove it; only
/// [`release`](Self::release) (driven by explicit end/cancel events) and
/// [`clear`](Self::clear) shrink the set. This keeps state intact across
/// partial event delivery.
#[derive(Clone, Debug, Default)]
pub struct ContactSet {
    // `index` always maps exactly the ids present in `entries` to their
    // positions. All mutation goes through the three methods below.
    entries: SmallVec<[Contact; 4]>,
    index: HashMap<ContactId, usize>,
}

impl ContactSet {
    /// Creates an empty contact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new contact or updates an existing one.
    ///
    /// For a known identity only `current` is updated. For a new identity the
    /// contact is appended to the ordering and its world anchor is computed by
    /// `world_at` from the screen position — callers pass the screen→world
    /// conversion of the transform in effect at this instant, and the anchor
    /// is never recomputed afterwards.
    pub fn register_or_update(
        &mut self,
        id: ContactId,
        current: Point,
        world_at: impl FnOnce(Point) -> Point,
    ) {
        if let Some(&slot) = self.index.get(&id) {
            self.entries[slot].current = current;
        } else {
            let world = world_at(current);
            self.index.insert(id, self.entries.len());
            self.entries.push(Contact { id, current, world });
        }
    }

    /// Removes a contact, returning it if it was present.
    ///
    /// Later contacts keep their relative order and move up one slot.
    pub fn release(&mut self, id: ContactId) -> Option<Contact> {
        let slot = self.index.remove(&id)?;
        let removed = self.entries.remove(slot);
        for entry in &self.entries[slot..] {
            if let Some(s) = self.index.get_mut(&entry.id) {
                *s -= 1;
            }
        }
        Some(removed)
    }

    /// Removes all contacts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns the number of currently active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no contact is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when the given identity is currently tracked.
    #[must_use]
    pub fn contains(&self, id: ContactId) -> bool {
        self.index.contains_key(&id)
    }

    /// Looks up a contact by identity.
    #[must_use]
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.index.get(&id).map(|&slot| &self.entries[slot])
    }

    /// Returns the contact at the given position in insertion order.
    #[must_use]
    pub fn nth(&self, n: usize) -> Option<&Contact> {
        self.entries.get(n)
    }

    /// Iterates over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    /// Iterates over identities in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ContactId> + '_ {
        self.entries.iter().map(Contact::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flipped(p: Point) -> Point {
        Point::new(-p.x, -p.y)
    }

    #[test]
    fn registration_captures_world_anchor_once() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(7), Point::new(10.0, 20.0), flipped);
        set.register_or_update(ContactId(7), Point::new(30.0, 40.0), |_| {
            panic!("world anchor must not be recomputed for a known contact")
        });

        let c = set.get(ContactId(7)).unwrap();
        assert_eq!(c.current(), Point::new(30.0, 40.0));
        assert_eq!(c.world(), Point::new(-10.0, -20.0));
    }

    #[test]
    fn insertion_order_is_stable_across_moves() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(1), Point::new(0.0, 0.0), |p| p);
        set.register_or_update(ContactId(2), Point::new(1.0, 0.0), |p| p);
        set.register_or_update(ContactId(3), Point::new(2.0, 0.0), |p| p);

        // Move the later fingers; finger #1 must stay first.
        set.register_or_update(ContactId(3), Point::new(9.0, 9.0), |p| p);
        set.register_or_update(ContactId(2), Point::new(5.0, 5.0), |p| p);

        let order: SmallVec<[ContactId; 4]> = set.ids().collect();
        assert_eq!(&order[..], &[ContactId(1), ContactId(2), ContactId(3)]);
    }

    #[test]
    fn release_keeps_relative_order_and_lookup() {
        let mut set = ContactSet::new();
        for id in 1..=4 {
            set.register_or_update(ContactId(id), Point::new(id as f64, 0.0), |p| p);
        }

        assert_eq!(
            set.release(ContactId(2)).map(|c| c.id()),
            Some(ContactId(2))
        );
        assert_eq!(set.len(), 3);

        let order: SmallVec<[ContactId; 4]> = set.ids().collect();
        assert_eq!(&order[..], &[ContactId(1), ContactId(3), ContactId(4)]);

        // Lookup still works for the shifted entries.
        assert_eq!(set.get(ContactId(4)).unwrap().current().x, 4.0);
        assert_eq!(set.nth(1).unwrap().id(), ContactId(3));
    }

    #[test]
    fn release_of_unknown_identity_is_a_no_op() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(1), Point::ZERO, |p| p);

        assert!(set.release(ContactId(99)).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn omission_from_an_update_does_not_remove() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(1), Point::ZERO, |p| p);
        set.register_or_update(ContactId(2), Point::new(5.0, 5.0), |p| p);

        // An event that only mentions contact 2 leaves contact 1 tracked.
        set.register_or_update(ContactId(2), Point::new(6.0, 6.0), |p| p);
        assert!(set.contains(ContactId(1)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(1), Point::ZERO, |p| p);
        set.register_or_update(ContactId(2), Point::ZERO, |p| p);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(ContactId(1)));
        assert!(set.nth(0).is_none());
    }

    #[test]
    fn reused_identity_after_release_gets_a_fresh_anchor() {
        let mut set = ContactSet::new();
        set.register_or_update(ContactId(1), Point::new(10.0, 0.0), flipped);
        set.release(ContactId(1));

        set.register_or_update(ContactId(1), Point::new(50.0, 0.0), flipped);
        assert_eq!(set.get(ContactId(1)).unwrap().world(), Point::new(-50.0, 0.0));
    }
}
