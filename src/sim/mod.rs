//! Wave simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `tick` per rendered frame, `dt` supplied by the caller
//! - Single-threaded, no I/O, no background work
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, Bounds};
pub use collision::{circles_overlap, collides};
pub use state::{
    Asteroid, AsteroidSize, Banner, Projectile, Ship, WaveEvent, WavePhase, WaveState,
};
pub use tick::{TickInput, tick};
