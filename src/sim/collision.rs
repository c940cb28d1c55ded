//! Swept collision detection and response for a moving ball against a box
//!
//! The tricky part of the game: the ball can move further in one tick than a
//! brick is thick, so position-only overlap tests let it tunnel straight
//! through. Instead each edge is treated as a separating axis and we solve for
//! the fraction of the tick at which the ball's centre comes within one radius
//! of the edge line.

use glam::Vec2;

use super::oriented_box::{Edge, OrientedBox};
use super::vector::Vec2Ext;

/// Tolerance when deciding whether a normal lies on a coordinate axis
const AXIS_EPSILON: f32 = 1e-5;

/// Extra padding on the extent filter. A contact sits exactly one radius from
/// the struck edge, right on the filter boundary, so rounding must not drop it.
const CONTACT_SLOP: f32 = 1e-3;

/// A contact found by the swept test. Consumed within the tick that made it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionContact {
    /// Ball centre at the moment of impact
    pub position: Vec2,
    /// Fraction of the tick's motion completed at impact, in (0, 1)
    pub time_of_impact: f32,
    /// Outward normal of the struck edge
    pub normal: Vec2,
    pub edge: Edge,
    /// Signed distance from the edge line to the ball centre at tick start
    pub penetration: f32,
}

impl CollisionContact {
    /// Fraction of the tick's motion left after impact
    pub fn lateness(&self) -> f32 {
        1.0 - self.time_of_impact
    }
}

/// Where the ball ends up after bouncing off a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub position: Vec2,
    pub direction: Vec2,
}

/// Every edge the ball crosses the radius offset of during this sweep
///
/// Candidates are returned in edge order (right, bottom, left, top) and are
/// not yet checked against the box's extent.
pub fn sweep_candidates(
    current: Vec2,
    future: Vec2,
    radius: f32,
    target: &OrientedBox,
) -> Vec<CollisionContact> {
    let mut candidates = Vec::with_capacity(4);

    for edge in Edge::ALL {
        let anchor = target.corner(edge.start());
        let normal = target.normal(edge);

        let d0 = normal.dot(current - anchor);
        let d1 = normal.dot(future - anchor);

        let closing = d1 - d0;
        if closing == 0.0 {
            // Moving parallel to the edge
            continue;
        }

        let t = (radius - d0) / closing;
        if t > 0.0 && t < 1.0 {
            candidates.push(CollisionContact {
                position: current + (future - current) * t,
                time_of_impact: t,
                normal,
                edge,
                penetration: d0,
            });
        }
    }

    candidates
}

/// Pick the contact that drives the response
///
/// The candidate furthest from the ball along its own axis (largest
/// `|penetration|`) wins; this keeps corner hits from steering the ball into a
/// neighbouring brick. Exact ties prefer an x-axis normal, then edge order.
pub fn select_contact(candidates: &[CollisionContact]) -> Option<CollisionContact> {
    let mut best: Option<CollisionContact> = None;

    for candidate in candidates {
        best = match best {
            None => Some(*candidate),
            Some(current) => {
                let a = candidate.penetration.abs();
                let b = current.penetration.abs();
                let wins_tie = a == b && is_axis(candidate.normal.x) && !is_axis(current.normal.x);
                if a > b || wins_tie {
                    Some(*candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// Full swept test of a ball against a box
///
/// Returns the authoritative contact if any candidate lands within the box's
/// radius-padded extent, `None` otherwise.
pub fn sweep_circle_box(
    current: Vec2,
    future: Vec2,
    radius: f32,
    target: &OrientedBox,
) -> Option<CollisionContact> {
    let mut candidates = sweep_candidates(current, future, radius, target);
    candidates.retain(|c| target.contains_circle(c.position, radius + CONTACT_SLOP));
    select_contact(&candidates)
}

/// Reflect the remainder of the tick's motion about the struck edge
///
/// The ball is placed at the contact, the motion left over past the contact is
/// mirrored on the axis of the edge normal, and the direction is mirrored on
/// the same axis.
pub fn bounce(contact: &CollisionContact, future: Vec2, direction: Vec2) -> Bounce {
    let mut remainder = future - contact.position;
    let mut direction = direction;

    if is_axis(contact.normal.x) {
        direction = direction.negate_x();
        remainder = remainder.negate_x();
    }
    if is_axis(contact.normal.y) {
        direction = direction.negate_y();
        remainder = remainder.negate_y();
    }

    Bounce {
        position: contact.position + remainder,
        direction,
    }
}

/// Is the component ±1?
#[inline]
fn is_axis(component: f32) -> bool {
    (component.abs() - 1.0).abs() <= AXIS_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn floor_box() -> OrientedBox {
        OrientedBox::new(Vec2::new(0.0, 100.0), 100.0, 20.0)
    }

    #[test]
    fn test_time_of_impact_half_tick() {
        // Ball moving straight down at speed 10, radius reached exactly mid-tick
        let current = Vec2::new(50.0, 90.0);
        let future = Vec2::new(50.0, 100.0);
        let target = floor_box();

        let contact = sweep_circle_box(current, future, 5.0, &target).unwrap();
        assert_eq!(contact.edge, Edge::Top);
        assert_eq!(contact.normal, Vec2::new(0.0, -1.0));
        assert!((contact.time_of_impact - 0.5).abs() < 1e-6);
        assert!((contact.lateness() - 0.5).abs() < 1e-6);
        assert_eq!(contact.position, Vec2::new(50.0, 95.0));

        // Exactly one radius from the struck edge along its normal
        let anchor = target.corner(Edge::Top.start());
        let distance = contact.normal.dot(contact.position - anchor);
        assert!((distance - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_parallel_motion_is_not_a_fault() {
        // Sliding alongside the top edge, never closing in
        let candidates = sweep_candidates(
            Vec2::new(-50.0, 50.0),
            Vec2::new(150.0, 50.0),
            5.0,
            &floor_box(),
        );
        assert!(candidates.iter().all(|c| c.edge != Edge::Top && c.edge != Edge::Bottom));
        assert!(sweep_circle_box(Vec2::new(-50.0, 50.0), Vec2::new(150.0, 50.0), 5.0, &floor_box()).is_none());

        // Stationary ball
        assert!(sweep_candidates(Vec2::new(50.0, 90.0), Vec2::new(50.0, 90.0), 5.0, &floor_box()).is_empty());
    }

    #[test]
    fn test_outside_extent_is_filtered() {
        // Crosses the top edge's line well to the right of the box
        let current = Vec2::new(300.0, 90.0);
        let future = Vec2::new(300.0, 100.0);
        let candidates = sweep_candidates(current, future, 5.0, &floor_box());
        assert_eq!(candidates.len(), 1);
        assert!(sweep_circle_box(current, future, 5.0, &floor_box()).is_none());
    }

    #[test]
    fn test_thin_box_is_not_tunnelled() {
        let thin = OrientedBox::new(Vec2::new(0.0, 100.0), 100.0, 2.0);
        let current = Vec2::new(50.0, 80.0);
        let future = Vec2::new(50.0, 140.0);

        // Neither endpoint overlaps the box
        assert!(!thin.contains_circle(current, 5.0));
        assert!(!thin.contains_circle(future, 5.0));

        let contact = sweep_circle_box(current, future, 5.0, &thin);
        assert!(contact.is_some());
    }

    #[test]
    fn test_reflection_off_horizontal_edge() {
        let current = Vec2::new(50.0, 90.0);
        let direction = Vec2::new(0.6, 0.8);
        let future = current + direction * 10.0;

        let contact = sweep_circle_box(current, future, 5.0, &floor_box()).unwrap();
        assert_eq!(contact.edge, Edge::Top);

        let result = bounce(&contact, future, direction);
        assert_eq!(result.direction, Vec2::new(0.6, -0.8));
        // The leftover motion is mirrored back above the box
        assert!(result.position.y < contact.position.y);
        assert!(result.position.x > contact.position.x);
    }

    #[test]
    fn test_reflection_off_vertical_edge() {
        let wall = OrientedBox::new(Vec2::new(100.0, 0.0), 20.0, 100.0);
        let current = Vec2::new(90.0, 50.0);
        let direction = Vec2::new(1.0, 0.25);
        let future = current + direction * 10.0;

        let contact = sweep_circle_box(current, future, 5.0, &wall).unwrap();
        assert_eq!(contact.edge, Edge::Left);
        assert!((contact.time_of_impact - 0.5).abs() < 1e-6);

        let result = bounce(&contact, future, direction);
        assert_eq!(result.direction, Vec2::new(-1.0, 0.25));
        assert!(result.position.x < contact.position.x);
    }

    #[test]
    fn test_corner_tie_prefers_x_axis() {
        // Diagonal approach to the right-top corner: both edges equally far
        let target = OrientedBox::new(Vec2::ZERO, 100.0, 100.0);
        let current = Vec2::new(110.0, -10.0);
        let future = Vec2::new(100.0, 0.0);

        let candidates = sweep_candidates(current, future, 5.0, &target);
        assert_eq!(candidates.len(), 2);

        let contact = sweep_circle_box(current, future, 5.0, &target).unwrap();
        assert_eq!(contact.edge, Edge::Right);

        // Order does not matter for the tie-break
        let reversed: Vec<_> = candidates.iter().rev().copied().collect();
        assert_eq!(select_contact(&reversed).unwrap().edge, Edge::Right);

        let result = bounce(&contact, future, Vec2::new(-1.0, 1.0));
        assert_eq!(result.direction, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_furthest_candidate_wins() {
        let near = CollisionContact {
            position: Vec2::ZERO,
            time_of_impact: 0.3,
            normal: Vec2::new(1.0, 0.0),
            edge: Edge::Right,
            penetration: 6.0,
        };
        let far = CollisionContact {
            normal: Vec2::new(0.0, -1.0),
            edge: Edge::Top,
            penetration: -9.0,
            ..near
        };
        assert_eq!(select_contact(&[near, far]).unwrap().edge, Edge::Top);
        assert!(select_contact(&[]).is_none());
    }

    proptest! {
        #[test]
        fn prop_fast_ball_never_tunnels(
            x in 5.0f32..95.0,
            start_gap in 6.0f32..40.0,
            speed in 60.0f32..400.0,
            thickness in 0.5f32..4.0,
        ) {
            let thin = OrientedBox::new(Vec2::new(0.0, 100.0), 100.0, thickness);
            let current = Vec2::new(x, 100.0 - start_gap);
            let future = current + Vec2::new(0.0, speed);
            // Future lies entirely past the box
            prop_assume!(future.y - 5.0 > thin.bottom());

            let contact = sweep_circle_box(current, future, 5.0, &thin);
            prop_assert!(contact.is_some());
            let contact = contact.unwrap();
            prop_assert!(contact.time_of_impact > 0.0 && contact.time_of_impact < 1.0);
        }
    }
}
