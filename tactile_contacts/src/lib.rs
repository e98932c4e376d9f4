// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tactile Contacts: stable multi-touch contact tracking.
//!
//! This crate maintains the live set of touch contacts on one interactive
//! surface. Each contact is tracked from its first observed press to its
//! explicit release or cancel, and carries two positions:
//!
//! - `current`: the screen-space position, updated on every move event.
//! - `world`: the world-space position under the finger at the instant the
//!   contact was first registered. It is captured once and never updated, so
//!   gesture math can keep the original world point anchored under the finger
//!   while the view transform changes.
//!
//! [`ContactSet`] is a single insertion-ordered associative structure: lookup
//! by identity is O(1) and iteration order is the order of first contact.
//! Its only mutators are [`register_or_update`](ContactSet::register_or_update),
//! [`release`](ContactSet::release), and [`clear`](ContactSet::clear), so the
//! identity index and the ordering can never desynchronize.
//!
//! The crate also defines the touch input event model ([`TouchPhase`],
//! [`TouchSample`], [`TouchInput`]) shared with the gesture engine built on
//! top of it.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tactile_contacts::{ContactId, ContactSet};
//!
//! let mut contacts = ContactSet::new();
//!
//! // First finger lands at (100, 100); the world anchor is captured from the
//! // transform in effect right now (identity here).
//! contacts.register_or_update(ContactId(1), Point::new(100.0, 100.0), |p| p);
//! // The same finger moves; only `current` changes.
//! contacts.register_or_update(ContactId(1), Point::new(120.0, 90.0), |p| p);
//!
//! let c = contacts.get(ContactId(1)).unwrap();
//! assert_eq!(c.current(), Point::new(120.0, 90.0));
//! assert_eq!(c.world(), Point::new(100.0, 100.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod set;

pub use event::{TouchInput, TouchPhase, TouchSample};
pub use set::{Contact, ContactId, ContactSet};
