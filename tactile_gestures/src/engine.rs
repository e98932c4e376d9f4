// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture engine: classification and viewport mutation.

use kurbo::Vec2;
use smallvec::SmallVec;
use tactile_contacts::{ContactSet, TouchInput};
use tactile_viewport::{PanZoomCommand, TransformParams, ViewportPort, quantize_zoom};

use crate::compat::{CompatProfile, EventMap, ForwardedEvents};
use crate::modes::{GestureMode, TouchContext};
use crate::{pan, vectors, zoom};

/// Multi-touch gesture engine for one interactive surface.
///
/// The engine owns the contact tracker and the gestures-enabled flag; the
/// gesture mode and compatibility profile are injected at construction. The
/// viewport is *not* owned: every entry point takes the port as a parameter,
/// reads a transform snapshot, and issues at most one atomic mutation before
/// returning.
///
/// On every move event the active contact count selects the gesture:
///
/// - 2 contacts: pinch zoom, or combined zoom+pan, per [`GestureMode`].
/// - 3 or 4 contacts: multi-finger pan (the correction is the centroid of
///   the first three contacts' drifts; a fourth finger rides along).
/// - anything else, or gestures disabled: pass-through — on legacy profiles
///   the event is expanded into synthetic pointer events for the caller to
///   redispatch, on current profiles nothing happens.
#[derive(Clone, Debug)]
pub struct GestureEngine {
    contacts: ContactSet,
    mode: GestureMode,
    profile: CompatProfile,
    gestures_enabled: bool,
}

impl GestureEngine {
    /// Creates an engine with the given mode and host profile.
    ///
    /// Gestures start enabled.
    #[must_use]
    pub fn new(mode: GestureMode, profile: CompatProfile) -> Self {
        Self {
            contacts: ContactSet::new(),
            mode,
            profile,
            gestures_enabled: true,
        }
    }

    /// Returns the live contact set.
    #[must_use]
    pub fn contacts(&self) -> &ContactSet {
        &self.contacts
    }

    /// Returns `true` while gesture handling is active.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// Resumes gesture handling, starting with the next event.
    pub fn enable_gestures(&mut self) {
        self.gestures_enabled = true;
    }

    /// Suspends gesture handling, starting with the next event.
    ///
    /// Useful while a modal UI holds input focus. Contacts keep being
    /// tracked; motion events take the pass-through path regardless of
    /// finger count until gestures are re-enabled.
    pub fn disable_gestures(&mut self) {
        self.gestures_enabled = false;
    }

    /// Returns the active profile's event expansion table.
    #[must_use]
    pub fn event_map(&self) -> EventMap {
        self.profile.event_map()
    }

    /// Classifies an incoming touch event as a click candidate or part of a
    /// zoom/pan gesture.
    ///
    /// A second finger landing mid-gesture resolves to
    /// [`TouchContext::ZoomPanGesture`] even before it is registered, which
    /// suppresses click semantics for the whole contact set. Call this
    /// *before* the event is fed to a registering entry point.
    #[must_use]
    pub fn touch_context(&self, input: &TouchInput) -> TouchContext {
        let active = self.contacts.len();
        if active >= 2 || (active == 1 && !self.contacts.contains(input.changed.id)) {
            TouchContext::ZoomPanGesture
        } else {
            TouchContext::PrimaryClick
        }
    }

    /// Handles a touch press: registers the contact set and, for click
    /// candidates on forwarding profiles, returns the synthetic press
    /// sequence to redispatch.
    ///
    /// World anchors for new contacts are captured from the port's transform
    /// as it is at this instant.
    pub fn handle_touch_start<V: ViewportPort + ?Sized>(
        &mut self,
        input: &TouchInput,
        port: &V,
    ) -> ForwardedEvents {
        // Resolve the context first, while the incoming identity still
        // counts as not-yet-tracked.
        let context = self.touch_context(input);
        self.register(input, port);
        if context == TouchContext::PrimaryClick {
            self.profile.forward(input)
        } else {
            ForwardedEvents::new()
        }
    }

    /// Handles a touch move: the main driver.
    ///
    /// Updates the tracker from the event, classifies the active set, and
    /// either mutates the viewport (gesture case, empty return) or returns
    /// the synthetic events to redispatch (pass-through case).
    pub fn handle_touch_move<V: ViewportPort + ?Sized>(
        &mut self,
        input: &TouchInput,
        port: &mut V,
    ) -> ForwardedEvents {
        self.register(input, port);

        match self.contacts.len() {
            2 if self.gestures_enabled => {
                match self.mode {
                    GestureMode::Split => self.two_finger_zoom(port),
                    GestureMode::Combined => self.two_finger_zoom_and_pan(port),
                }
                ForwardedEvents::new()
            }
            3 | 4 if self.gestures_enabled => {
                self.multi_finger_pan(port);
                ForwardedEvents::new()
            }
            _ => self.profile.forward(input),
        }
    }

    /// Handles a normal touch release.
    pub fn handle_touch_end(&mut self, input: &TouchInput) -> ForwardedEvents {
        self.finish(input)
    }

    /// Handles a platform-cancelled touch.
    pub fn handle_touch_cancel(&mut self, input: &TouchInput) -> ForwardedEvents {
        self.finish(input)
    }

    fn finish(&mut self, input: &TouchInput) -> ForwardedEvents {
        // Only a lone contact ends a potential click; lifting a finger out
        // of a gesture set is not a pointer event the host should see.
        let was_click = self.contacts.len() <= 1;
        self.contacts.release(input.changed.id);
        if was_click {
            self.profile.forward(input)
        } else {
            ForwardedEvents::new()
        }
    }

    fn register<V: ViewportPort + ?Sized>(&mut self, input: &TouchInput, port: &V) {
        for sample in &input.active {
            self.contacts
                .register_or_update(sample.id, sample.position, |p| port.screen_to_world(p));
        }
    }

    fn two_finger_zoom<V: ViewportPort + ?Sized>(&self, port: &mut V) {
        if !port.is_zoom_allowed() {
            return;
        }
        // Count may have changed since dispatch; re-check before indexing.
        let (Some(first), Some(second)) = (self.contacts.nth(0), self.contacts.nth(1)) else {
            return;
        };
        if let Some(zoom) = zoom::pinch_zoom(first, second) {
            port.set_zoom(zoom);
        }
    }

    fn two_finger_zoom_and_pan<V: ViewportPort + ?Sized>(&self, port: &mut V) {
        if port.is_zoom_allowed() && port.is_pan_allowed() {
            let (Some(first), Some(second)) = (self.contacts.nth(0), self.contacts.nth(1)) else {
                return;
            };
            let Some(zoom_after) = zoom::pinch_zoom(first, second) else {
                // Coincident fingers: zoom is undefined, leave the view as is.
                return;
            };
            let zoom_before = port.zoom();

            // The port rounds commanded zoom to two decimals. Build the
            // correction transform from the zoom that will actually be in
            // effect after that rounding, otherwise the pan is computed
            // against a zoom the port silently discards and the view drifts
            // for a frame.
            let adjusted_zoom = if quantize_zoom(zoom_after) == zoom_before {
                zoom_before
            } else {
                zoom_after
            };
            let adjusted = port.build_transform(TransformParams::with_zoom(adjusted_zoom), true);

            let correction = vectors::centroid(&[
                pan::pan_correction(adjusted, first),
                pan::pan_correction(adjusted, second),
            ]);
            let center_before = port.screen_to_world(port.screen_center());
            let world_center = center_before - correction;

            port.set_pan_and_zoom(PanZoomCommand::pan_zoom(world_center, zoom_after));
        } else if port.is_zoom_allowed() {
            self.two_finger_zoom(port);
        } else if port.is_pan_allowed() {
            self.multi_finger_pan(port);
        }
    }

    fn multi_finger_pan<V: ViewportPort + ?Sized>(&self, port: &mut V) {
        if !port.is_pan_allowed() {
            return;
        }
        let count = match self.contacts.len() {
            0 | 1 => return,
            2 => 2,
            // The centroid uses exactly three points; a fourth finger is
            // tracked but not averaged in.
            _ => 3,
        };

        let transform = port.current_transform();
        let mut corrections: SmallVec<[Vec2; 3]> = SmallVec::new();
        for i in 0..count {
            let Some(contact) = self.contacts.nth(i) else {
                return;
            };
            corrections.push(pan::pan_correction(transform, contact));
        }
        let correction = vectors::centroid(&corrections);

        let center_before = port.screen_to_world(port.screen_center());
        port.set_pan_and_zoom(PanZoomCommand::pan_to(center_before - correction));
    }
}
