//! Level data: the initial ship and asteroid layout of a wave
//!
//! Levels are JSON documents of the form
//!
//! ```json
//! {
//!   "ship": { "position": [640, 360], "angle": 90 },
//!   "asteroids": [
//!     { "size": "large", "position": [100, 100], "direction": [1, 0] }
//!   ]
//! }
//! ```
//!
//! A `[0, 0]` direction is a stationary asteroid.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{WaveError, WaveResult};
use crate::settings::Settings;
use crate::sim::AsteroidSize;

/// Ship spawn point and heading (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpawn {
    pub position: Vec2,
    pub angle: f32,
}

/// One initial asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSpawn {
    pub size: AsteroidSize,
    pub position: Vec2,
    /// Any length; only the direction is used
    pub direction: Vec2,
}

/// Complete layout for one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub ship: ShipSpawn,
    pub asteroids: Vec<AsteroidSpawn>,
}

impl LevelData {
    /// Parse and validate a level document
    pub fn from_json(json: &str) -> WaveResult<Self> {
        let level: LevelData = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Reject NaN or infinite values anywhere in the layout
    pub fn validate(&self) -> WaveResult<()> {
        finite_vec("ship.position", self.ship.position)?;
        if !self.ship.angle.is_finite() {
            return Err(WaveError::NonFinite {
                field: "ship.angle".to_string(),
            });
        }
        for (i, spawn) in self.asteroids.iter().enumerate() {
            finite_vec(&format!("asteroids[{}].position", i), spawn.position)?;
            finite_vec(&format!("asteroids[{}].direction", i), spawn.direction)?;
        }
        Ok(())
    }

    /// Build a level procedurally from a seed.
    ///
    /// The ship sits in the middle of the screen facing up. `count` large
    /// asteroids are scattered around it, each at least three ship+asteroid
    /// radii away, drifting in a random direction.
    pub fn generate(seed: u64, count: usize, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = Vec2::new(settings.game_width / 2.0, settings.game_height / 2.0);

        let safe_distance = 3.0 * (settings.ship_radius + settings.large_radius);
        let max_distance = (settings.game_width.min(settings.game_height) / 2.0).max(safe_distance);

        let asteroids = (0..count)
            .map(|_| {
                let bearing = rng.random_range(0.0..std::f32::consts::TAU);
                let distance = if max_distance > safe_distance {
                    rng.random_range(safe_distance..max_distance)
                } else {
                    safe_distance
                };
                let heading = rng.random_range(0.0..std::f32::consts::TAU);
                AsteroidSpawn {
                    size: AsteroidSize::Large,
                    position: center + Vec2::new(bearing.cos(), bearing.sin()) * distance,
                    direction: Vec2::new(heading.cos(), heading.sin()),
                }
            })
            .collect::<Vec<_>>();

        log::debug!("Generated level from seed {}: {} asteroids", seed, asteroids.len());

        Self {
            ship: ShipSpawn {
                position: center,
                angle: 90.0,
            },
            asteroids,
        }
    }
}

fn finite_vec(field: &str, v: Vec2) -> WaveResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(WaveError::NonFinite {
            field: field.to_string(),
        })
    }
}
