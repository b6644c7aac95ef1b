//! Wave state and entity types
//!
//! Entities are plain physics data composed around a [`Body`]. Drawing is
//! somebody else's job; see [`crate::view`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{LOSE_MESSAGE, WIN_MESSAGE};
use crate::error::WaveResult;
use crate::level::LevelData;
use crate::settings::Settings;
use crate::{direction_at, facing_from_degrees, normalize_degrees};

/// Spacing between the three fragments of a broken asteroid (120 degrees)
const FAN_STEP: f32 = std::f32::consts::TAU / 3.0;

/// Asteroid size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Large => "large",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Small => "small",
        }
    }

    pub fn radius(&self, settings: &Settings) -> f32 {
        match self {
            AsteroidSize::Large => settings.large_radius,
            AsteroidSize::Medium => settings.medium_radius,
            AsteroidSize::Small => settings.small_radius,
        }
    }

    pub fn speed(&self, settings: &Settings) -> f32 {
        match self {
            AsteroidSize::Large => settings.large_speed,
            AsteroidSize::Medium => settings.medium_speed,
            AsteroidSize::Small => settings.small_speed,
        }
    }

    /// Tier of the fragments this size breaks into (None = fully destroyed)
    pub fn child(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// Outcome of a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Ship alive, asteroids remaining
    Active,
    /// Every asteroid destroyed
    Won,
    /// Ship destroyed
    Lost,
}

impl WavePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WavePhase::Active)
    }
}

/// Something that happened during the last tick (for audio/score hooks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveEvent {
    ProjectileFired { id: u32 },
    AsteroidDestroyed {
        id: u32,
        size: AsteroidSize,
        pos: Vec2,
        fragments: usize,
    },
    ShipDestroyed { pos: Vec2 },
    WaveWon,
    WaveLost,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Heading in degrees, [0, 360)
    angle: f32,
    /// Unit vector derived from `angle`
    facing: Vec2,
}

impl Ship {
    pub fn new(pos: Vec2, angle: f32, radius: f32) -> Self {
        let angle = normalize_degrees(angle);
        Self {
            body: Body::new(pos, Vec2::ZERO, radius),
            angle,
            facing: facing_from_degrees(angle),
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    /// Rotate by `delta` degrees (positive = counterclockwise)
    pub fn turn(&mut self, delta: f32) {
        self.angle = normalize_degrees(self.angle + delta);
        self.facing = facing_from_degrees(self.angle);
    }

    /// Add one impulse along the facing, then hard-clamp to `max_speed`.
    /// The ship never slows down by itself.
    pub fn apply_thrust(&mut self, impulse: f32, max_speed: f32) {
        self.body.vel += self.facing * impulse;
        if self.body.vel.length() > max_speed {
            self.body.vel = self.body.vel.normalize_or_zero() * max_speed;
        }
    }

    /// Point on the hull along the facing, where projectiles spawn
    pub fn nose(&self) -> Vec2 {
        self.body.pos + self.facing * self.body.radius()
    }
}

/// A shot fired by the ship. Moves in a straight line and never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, vel, radius),
        }
    }

    /// Spawn at the ship's nose, travelling along its facing
    pub fn fire(id: u32, ship: &Ship, settings: &Settings) -> Self {
        Self::new(
            id,
            ship.nose(),
            ship.facing() * settings.bullet_speed,
            settings.bullet_radius,
        )
    }
}

/// An asteroid. Radius and speed come from its tier; velocity is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub size: AsteroidSize,
    pub body: Body,
}

impl Asteroid {
    /// A zero `direction` gives a stationary asteroid
    pub fn new(
        id: u32,
        size: AsteroidSize,
        pos: Vec2,
        direction: Vec2,
        settings: &Settings,
    ) -> Self {
        let vel = direction.normalize_or_zero() * size.speed(settings);
        Self {
            id,
            size,
            body: Body::new(pos, vel, size.radius(settings)),
        }
    }

    /// Break this asteroid after being struck by something moving at `strike`.
    ///
    /// Large and medium asteroids emit three children one tier down, fanned
    /// out at the strike angle and +/-120 degrees from it. Each child sits one
    /// child radius from the parent's center along its fan direction and moves
    /// outward along that direction at its tier speed. Small asteroids leave
    /// nothing. A zero strike vector fans from angle 0.
    pub fn fragment(&self, strike: Vec2, settings: &Settings, next_id: &mut u32) -> Vec<Asteroid> {
        let Some(child) = self.size.child() else {
            return Vec::new();
        };

        let theta = strike.y.atan2(strike.x);
        let offset = child.radius(settings);

        [theta, theta + FAN_STEP, theta - FAN_STEP]
            .into_iter()
            .map(|angle| {
                let dir = direction_at(angle);
                let id = *next_id;
                *next_id += 1;
                Asteroid::new(id, child, self.body.pos + dir * offset, dir, settings)
            })
            .collect()
    }
}

/// Terminal message shown once the wave resolves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub visible: bool,
}

/// Complete state of one wave
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveState {
    /// Physics configuration this wave was built with
    pub settings: Settings,
    /// None once the ship has been destroyed
    pub ship: Option<Ship>,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    /// Frames since the last shot (or since the wave started)
    pub fire_cooldown: u32,
    /// Active ticks simulated so far
    pub frame: u64,
    /// Events raised by the most recent active tick
    #[serde(skip)]
    pub events: Vec<WaveEvent>,
    phase: WavePhase,
    banner: Banner,
    /// Next entity ID
    pub(super) next_id: u32,
}

impl WaveState {
    /// Build a wave from level data. Both inputs are validated up front;
    /// nothing is constructed from a malformed level.
    pub fn new(level: &LevelData, settings: Settings) -> WaveResult<Self> {
        settings.validate()?;
        level.validate()?;

        let mut state = Self {
            ship: Some(Ship::new(
                level.ship.position,
                level.ship.angle,
                settings.ship_radius,
            )),
            asteroids: Vec::with_capacity(level.asteroids.len()),
            projectiles: Vec::new(),
            fire_cooldown: 0,
            frame: 0,
            events: Vec::new(),
            phase: WavePhase::Active,
            banner: Banner::default(),
            next_id: 1,
            settings,
        };

        for spawn in &level.asteroids {
            let id = state.next_entity_id();
            let asteroid =
                Asteroid::new(id, spawn.size, spawn.position, spawn.direction, &state.settings);
            state.asteroids.push(asteroid);
        }

        log::info!(
            "Wave ready: ship at ({}, {}) facing {}, {} asteroids",
            level.ship.position.x,
            level.ship.position.y,
            level.ship.angle,
            state.asteroids.len()
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == WavePhase::Active
    }

    pub fn is_won(&self) -> bool {
        self.phase == WavePhase::Won
    }

    pub fn is_lost(&self) -> bool {
        self.phase == WavePhase::Lost
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    /// Enter a terminal phase and raise the banner. No-op once terminal.
    pub(super) fn finish(&mut self, phase: WavePhase) {
        if self.phase.is_terminal() || !phase.is_terminal() {
            return;
        }
        let (text, event) = match phase {
            WavePhase::Won => (WIN_MESSAGE, WaveEvent::WaveWon),
            _ => (LOSE_MESSAGE, WaveEvent::WaveLost),
        };
        self.phase = phase;
        self.banner = Banner {
            text: text.to_string(),
            visible: true,
        };
        self.events.push(event);
        log::info!("Wave finished after {} frames: {:?}", self.frame, phase);
    }
}
