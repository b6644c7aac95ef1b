//! Kinematic body shared by the ship, projectiles and asteroids
//!
//! A body is a circle with a velocity. It knows how to advance itself and
//! how to wrap across the toroidal play field; it never clamps or reflects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Play field: visible area plus a dead-zone margin on every side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub dead_zone: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, dead_zone: f32) -> Self {
        Self {
            width,
            height,
            dead_zone,
        }
    }

    /// Horizontal wrap distance (width + 2 * dead zone)
    #[inline]
    pub fn span_x(&self) -> f32 {
        self.width + 2.0 * self.dead_zone
    }

    /// Vertical wrap distance (height + 2 * dead zone)
    #[inline]
    pub fn span_y(&self) -> f32 {
        self.height + 2.0 * self.dead_zone
    }

    /// Strictly inside the extended bounds (center test)
    pub fn contains(&self, pos: Vec2) -> bool {
        -self.dead_zone < pos.x
            && pos.x < self.width + self.dead_zone
            && -self.dead_zone < pos.y
            && pos.y < self.height + self.dead_zone
    }

    /// Wrap one axis coordinate by one span once the center leaves the
    /// dead zone. Any body no wider than the dead zone lands fully outside
    /// the visible area on the opposite side.
    fn wrap_axis(&self, center: f32, dimension: f32, span: f32) -> f32 {
        if center < -self.dead_zone {
            center + span
        } else if center > dimension + self.dead_zone {
            center - span
        } else {
            center
        }
    }
}

/// Position, velocity and a fixed collision radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub(crate) vel: Vec2,
    radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius: radius.max(0.0),
        }
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fixed-step move: one frame's worth of velocity
    #[inline]
    pub fn translate(&mut self) {
        self.pos += self.vel;
    }

    /// Time-scaled move: velocity * dt
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Toroidal wrap, applied independently per axis
    pub fn wrap(&mut self, bounds: &Bounds) {
        self.pos.x = bounds.wrap_axis(self.pos.x, bounds.width, bounds.span_x());
        self.pos.y = bounds.wrap_axis(self.pos.y, bounds.height, bounds.span_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0, 50.0)
    }

    #[test]
    fn test_integrate_and_translate() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), Vec2::new(2.0, -4.0), 5.0);
        body.translate();
        assert_eq!(body.pos, Vec2::new(12.0, 6.0));
        body.integrate(0.5);
        assert_eq!(body.pos, Vec2::new(13.0, 4.0));
    }

    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(Body::new(Vec2::ZERO, Vec2::ZERO, -3.0).radius(), 0.0);
    }

    #[test]
    fn test_wrap_left_edge() {
        let b = bounds();
        // Center exactly on the boundary: no wrap
        let mut body = Body::new(Vec2::new(-b.dead_zone, 300.0), Vec2::ZERO, 10.0);
        body.wrap(&b);
        assert_eq!(body.pos.x, -b.dead_zone);

        // One unit further out: translated by exactly the span
        let mut body = Body::new(Vec2::new(-b.dead_zone - 1.0, 300.0), Vec2::ZERO, 10.0);
        body.wrap(&b);
        assert_eq!(body.pos.x, -b.dead_zone - 1.0 + b.span_x());
        assert_eq!(body.pos.y, 300.0);
    }

    #[test]
    fn test_wrap_bottom_edge() {
        let b = bounds();
        let y = b.height + b.dead_zone + 1.0;
        let mut body = Body::new(Vec2::new(100.0, y), Vec2::ZERO, 4.0);
        body.wrap(&b);
        assert_eq!(body.pos.y, y - b.span_y());
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn test_wrapped_body_stays_hidden() {
        let b = bounds();
        // Radius equal to the dead zone: the near edge lands on the screen edge
        let r = b.dead_zone;
        let mut body = Body::new(Vec2::new(-b.dead_zone - 0.5, 300.0), Vec2::ZERO, r);
        body.wrap(&b);
        assert!(body.pos.x - r >= b.width);

        let mut body = Body::new(Vec2::new(300.0, b.height + b.dead_zone + 0.5), Vec2::ZERO, r);
        body.wrap(&b);
        assert!(body.pos.y + r <= 0.0);
    }

    #[test]
    fn test_wrap_no_drift_over_laps() {
        let b = bounds();
        let start = Vec2::new(400.0, 300.0);
        let mut body = Body::new(start, Vec2::new(-5.0, 0.0), 10.0);
        // span_x = 900 = 180 frames at 5 px/frame: one full lap
        for _ in 0..(180 * 4) {
            body.translate();
            body.wrap(&b);
        }
        assert!((body.pos.x - start.x).abs() < 1e-2);
        assert_eq!(body.pos.y, start.y);
    }

    #[test]
    fn test_contains_is_strict() {
        let b = bounds();
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(!b.contains(Vec2::new(-b.dead_zone, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, b.height + b.dead_zone)));
        assert!(b.contains(Vec2::new(-b.dead_zone + 0.5, b.height + b.dead_zone - 0.5)));
    }

    proptest! {
        #[test]
        fn prop_wrap_is_idempotent(
            x in -900.0f32..1700.0,
            y in -700.0f32..1300.0,
            r in 0.0f32..60.0,
        ) {
            // Within one span of the field, a single wrap always lands inside
            let b = bounds();
            let mut once = Body::new(Vec2::new(x, y), Vec2::ZERO, r);
            once.wrap(&b);
            let mut twice = once;
            twice.wrap(&b);
            prop_assert_eq!(once.pos, twice.pos);
        }

        #[test]
        fn prop_wrap_moves_by_whole_spans(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            r in 0.0f32..60.0,
        ) {
            let b = bounds();
            let mut body = Body::new(Vec2::new(x, y), Vec2::ZERO, r);
            body.wrap(&b);
            let dx = (body.pos.x - x).abs();
            let dy = (body.pos.y - y).abs();
            prop_assert!(dx == 0.0 || (dx - b.span_x()).abs() < 1e-3);
            prop_assert!(dy == 0.0 || (dy - b.span_y()).abs() < 1e-3);
        }
    }
}
