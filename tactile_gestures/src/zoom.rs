// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pinch-zoom calculator.

use tactile_contacts::Contact;

use crate::vectors;

/// Computes the zoom factor implied by two pinching contacts.
///
/// Each axis yields its own zoom estimate: the ratio of the fingers' screen
/// separation to their world separation along that axis. The two estimates
/// are blended by how much each axis contributes to the total on-screen
/// finger separation, so a mostly-horizontal pinch is dominated by the
/// horizontal estimate (the near-degenerate axis carries little signal and
/// little weight). The result is a convex combination of the two per-axis
/// estimates.
///
/// Returns `None` when the contacts share an identical screen position:
/// with zero separation the zoom is undefined and callers must leave the
/// transform unchanged for that event.
#[must_use]
pub fn pinch_zoom(first: &Contact, second: &Contact) -> Option<f64> {
    let screen = first.current() - second.current();
    let layout = vectors::abs_elements(screen);
    let total = layout.x + layout.y;
    if total == 0.0 {
        return None;
    }

    let axis_zoom = vectors::divide_elements(screen, first.world() - second.world());

    // An axis with no screen separation carries zero weight; skip it
    // entirely so a 0/0 estimate on that axis cannot poison the blend.
    let mut zoom = 0.0;
    if layout.x > 0.0 {
        zoom += (layout.x / total) * axis_zoom.x;
    }
    if layout.y > 0.0 {
        zoom += (layout.y / total) * axis_zoom.y;
    }
    Some(zoom)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use tactile_contacts::{ContactId, ContactSet};

    use super::*;

    // Builds two contacts registered under the identity transform at the
    // `world` positions, then moved to the `current` positions.
    fn pair(world: [Point; 2], current: [Point; 2]) -> ContactSet {
        let mut set = ContactSet::new();
        for (i, w) in world.iter().enumerate() {
            set.register_or_update(ContactId(i as u64 + 1), *w, |p| p);
        }
        for (i, c) in current.iter().enumerate() {
            set.register_or_update(ContactId(i as u64 + 1), *c, |p| p);
        }
        set
    }

    #[test]
    fn horizontal_pinch_uses_the_horizontal_ratio() {
        let set = pair(
            [Point::new(100.0, 300.0), Point::new(300.0, 300.0)],
            [Point::new(50.0, 300.0), Point::new(350.0, 300.0)],
        );
        let zoom = pinch_zoom(set.nth(0).unwrap(), set.nth(1).unwrap()).unwrap();
        // Screen separation grew from 200 to 300 world units apart.
        assert!((zoom - 1.5).abs() < 1e-12);
    }

    #[test]
    fn blend_is_convex_and_weights_sum_to_one() {
        let set = pair(
            [Point::new(0.0, 0.0), Point::new(100.0, 50.0)],
            [Point::new(-20.0, -5.0), Point::new(120.0, 60.0)],
        );
        let (a, b) = (set.nth(0).unwrap(), set.nth(1).unwrap());

        let screen = a.current() - b.current();
        let axis = vectors::divide_elements(screen, a.world() - b.world());
        let layout = vectors::abs_elements(screen);
        let (wx, wy) = (
            layout.x / (layout.x + layout.y),
            layout.y / (layout.x + layout.y),
        );
        assert!((wx + wy - 1.0).abs() < 1e-12);

        let zoom = pinch_zoom(a, b).unwrap();
        let lo = axis.x.min(axis.y);
        let hi = axis.x.max(axis.y);
        assert!(zoom >= lo - 1e-12 && zoom <= hi + 1e-12);
        assert!((zoom - (wx * axis.x + wy * axis.y)).abs() < 1e-12);
    }

    #[test]
    fn coincident_contacts_yield_none() {
        let set = pair(
            [Point::new(10.0, 10.0), Point::new(90.0, 90.0)],
            [Point::new(40.0, 40.0), Point::new(40.0, 40.0)],
        );
        assert!(pinch_zoom(set.nth(0).unwrap(), set.nth(1).unwrap()).is_none());
    }

    #[test]
    fn degenerate_world_axis_does_not_poison_the_blend() {
        // Both anchors share a y coordinate, so the vertical world
        // separation is zero. As long as the fingers stay level, the
        // vertical axis has no weight and the zoom stays finite.
        let set = pair(
            [Point::new(0.0, 100.0), Point::new(200.0, 100.0)],
            [Point::new(-50.0, 100.0), Point::new(250.0, 100.0)],
        );
        let zoom = pinch_zoom(set.nth(0).unwrap(), set.nth(1).unwrap()).unwrap();
        assert!(zoom.is_finite());
        assert!((zoom - 1.5).abs() < 1e-12);
    }

    #[test]
    fn symmetric_pinch_in_reduces_zoom() {
        let set = pair(
            [Point::new(100.0, 100.0), Point::new(300.0, 300.0)],
            [Point::new(150.0, 150.0), Point::new(250.0, 250.0)],
        );
        let zoom = pinch_zoom(set.nth(0).unwrap(), set.nth(1).unwrap()).unwrap();
        assert!((zoom - 0.5).abs() < 1e-12);
    }
}
