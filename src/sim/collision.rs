//! Collision detection between circular bodies
//!
//! Every pair in the game (asteroid/projectile, asteroid/ship) is a
//! circle-circle overlap test. There is no spatial index: the wave checks
//! every asteroid against every projectile and the ship each frame, which
//! stays cheap for the few dozen bodies a wave holds but will not scale to
//! hundreds.

use glam::Vec2;

use super::body::Body;

/// Two circles overlap iff the distance between centers is strictly less
/// than the sum of their radii. Touching circles do not collide.
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Overlap test for two bodies
#[inline]
pub fn collides(a: &Body, b: &Body) -> bool {
    circles_overlap(a.pos, a.radius(), b.pos, b.radius())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, r: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::ZERO, r)
    }

    #[test]
    fn test_tangent_circles_do_not_collide() {
        let a = body(0.0, 0.0, 10.0);
        let b = body(30.0, 0.0, 20.0);
        assert!(!collides(&a, &b));
    }

    #[test]
    fn test_slightly_closer_collides() {
        let a = body(0.0, 0.0, 10.0);
        let b = body(29.99, 0.0, 20.0);
        assert!(collides(&a, &b));
    }

    #[test]
    fn test_diagonal_overlap() {
        // 3-4-5 triangle: distance 50
        let a = body(0.0, 0.0, 25.0);
        assert!(collides(&a, &body(30.0, 40.0, 25.5)));
        assert!(!collides(&a, &body(30.0, 40.0, 25.0)));
    }

    #[test]
    fn test_zero_radius_points() {
        let a = body(5.0, 5.0, 0.0);
        assert!(!collides(&a, &body(5.0, 5.0, 0.0)));
        assert!(collides(&a, &body(5.0, 5.0, 0.1)));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            ar in 0.0f32..100.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            br in 0.0f32..100.0,
        ) {
            let a = body(ax, ay, ar);
            let b = body(bx, by, br);
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }
    }
}
