//! Planetoids - single-wave asteroids simulation core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (kinematics, collisions, wave state)
//! - `level`: Typed level data, JSON loading and procedural generation
//! - `settings`: Physics configuration with documented defaults
//! - `view`: Read-only draw list for an external renderer
//! - `error`: Construction-time error types

pub mod error;
pub mod level;
pub mod settings;
pub mod sim;
pub mod view;

pub use error::{WaveError, WaveResult};
pub use level::{AsteroidSpawn, LevelData, ShipSpawn};
pub use settings::Settings;

use glam::Vec2;

/// Default physics constants (pixels, pixels per frame, degrees per frame)
pub mod consts {
    /// Visible play area
    pub const GAME_WIDTH: f32 = 1280.0;
    pub const GAME_HEIGHT: f32 = 720.0;
    /// Margin beyond the visible area used for wrap and projectile pruning
    pub const DEAD_ZONE: f32 = 64.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    pub const SHIP_IMPULSE: f32 = 0.25;
    pub const SHIP_MAX_SPEED: f32 = 10.0;
    /// Degrees turned per frame while a turn control is held
    pub const SHIP_TURN_RATE: f32 = 5.0;

    /// Projectile defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Frames that must elapse between shots
    pub const BULLET_RATE: u32 = 5;

    /// Asteroid tier radii
    pub const LARGE_RADIUS: f32 = 50.0;
    pub const MEDIUM_RADIUS: f32 = 30.0;
    pub const SMALL_RADIUS: f32 = 20.0;

    /// Asteroid tier speeds
    pub const LARGE_SPEED: f32 = 2.0;
    pub const MEDIUM_SPEED: f32 = 3.0;
    pub const SMALL_SPEED: f32 = 4.0;

    /// Terminal banner text
    pub const WIN_MESSAGE: &str = "Congratulations! You Win!";
    pub const LOSE_MESSAGE: &str = "Game Over! You Lose!";
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit facing vector for a heading in degrees (counterclockwise from +x)
#[inline]
pub fn facing_from_degrees(angle: f32) -> Vec2 {
    let radians = angle.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Rotate a unit direction by `radians`
#[inline]
pub fn direction_at(radians: f32) -> Vec2 {
    Vec2::new(radians.cos(), radians.sin())
}
