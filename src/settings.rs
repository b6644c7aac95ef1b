//! Physics settings
//!
//! Every constant the simulation reads lives here. Defaults mirror
//! [`crate::consts`]; a JSON document may override any subset of keys.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{WaveError, WaveResult};
use crate::sim::Bounds;

/// Physics configuration for one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Visible width in pixels
    pub game_width: f32,
    /// Visible height in pixels
    pub game_height: f32,
    /// Margin beyond the visible area for wrap and pruning
    pub dead_zone: f32,

    // === Ship ===
    pub ship_radius: f32,
    /// Velocity added along the facing per thrust frame
    pub ship_impulse: f32,
    /// Hard speed cap
    pub ship_max_speed: f32,
    /// Degrees per frame
    pub ship_turn_rate: f32,

    // === Projectiles ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Cooldown threshold in frames
    pub bullet_rate: u32,

    // === Asteroids ===
    pub large_radius: f32,
    pub medium_radius: f32,
    pub small_radius: f32,
    pub large_speed: f32,
    pub medium_speed: f32,
    pub small_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_width: GAME_WIDTH,
            game_height: GAME_HEIGHT,
            dead_zone: DEAD_ZONE,

            ship_radius: SHIP_RADIUS,
            ship_impulse: SHIP_IMPULSE,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_turn_rate: SHIP_TURN_RATE,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_rate: BULLET_RATE,

            large_radius: LARGE_RADIUS,
            medium_radius: MEDIUM_RADIUS,
            small_radius: SMALL_RADIUS,
            large_speed: LARGE_SPEED,
            medium_speed: MEDIUM_SPEED,
            small_speed: SMALL_SPEED,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> WaveResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every value is finite and within range
    pub fn validate(&self) -> WaveResult<()> {
        positive("game_width", self.game_width)?;
        positive("game_height", self.game_height)?;
        non_negative("dead_zone", self.dead_zone)?;

        non_negative("ship_radius", self.ship_radius)?;
        non_negative("ship_impulse", self.ship_impulse)?;
        positive("ship_max_speed", self.ship_max_speed)?;
        finite("ship_turn_rate", self.ship_turn_rate)?;

        non_negative("bullet_radius", self.bullet_radius)?;
        non_negative("bullet_speed", self.bullet_speed)?;

        non_negative("large_radius", self.large_radius)?;
        non_negative("medium_radius", self.medium_radius)?;
        non_negative("small_radius", self.small_radius)?;
        non_negative("large_speed", self.large_speed)?;
        non_negative("medium_speed", self.medium_speed)?;
        non_negative("small_speed", self.small_speed)?;
        Ok(())
    }

    /// Screen bounds with the dead-zone margin
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.game_width, self.game_height, self.dead_zone)
    }
}

fn finite(name: &'static str, value: f32) -> WaveResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WaveError::InvalidSetting {
            name,
            value,
            expected: "finite",
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> WaveResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WaveError::InvalidSetting {
            name,
            value,
            expected: "finite and >= 0",
        })
    }
}

fn positive(name: &'static str, value: f32) -> WaveResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WaveError::InvalidSetting {
            name,
            value,
            expected: "finite and > 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "bullet_rate": 12, "dead_zone": 0 }"#).unwrap();
        assert_eq!(settings.bullet_rate, 12);
        assert_eq!(settings.dead_zone, 0.0);
        assert_eq!(settings.ship_radius, SHIP_RADIUS);
        assert_eq!(settings.game_width, GAME_WIDTH);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = Settings::from_json(r#"{ "medium_radius": -3.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            WaveError::InvalidSetting {
                name: "medium_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_max_speed_rejected() {
        let settings = Settings {
            ship_max_speed: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let settings = Settings {
            ship_turn_rate: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bounds_extent() {
        let bounds = Settings::default().bounds();
        assert_eq!(bounds.span_x(), GAME_WIDTH + 2.0 * DEAD_ZONE);
        assert_eq!(bounds.span_y(), GAME_HEIGHT + 2.0 * DEAD_ZONE);
    }
}
