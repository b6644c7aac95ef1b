//! Render query surface
//!
//! The renderer never touches the simulation directly. Each frame it asks
//! for a draw list and paints it in order: ship, asteroids, projectiles,
//! then the terminal banner. Works the same while paused, when only drawing
//! happens and `tick` is not called.

use glam::Vec2;

use crate::sim::{AsteroidSize, WaveState};

/// One thing to paint this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem<'a> {
    Ship {
        pos: Vec2,
        /// Heading in degrees, counterclockwise from +x
        angle: f32,
        radius: f32,
    },
    Asteroid {
        id: u32,
        size: AsteroidSize,
        pos: Vec2,
        radius: f32,
    },
    Projectile {
        id: u32,
        pos: Vec2,
        radius: f32,
    },
    /// Centered on the visible area
    Banner { text: &'a str, pos: Vec2 },
}

/// Everything visible in the wave, in paint order
pub fn draw_list(state: &WaveState) -> Vec<DrawItem<'_>> {
    let mut items = Vec::with_capacity(state.asteroids.len() + state.projectiles.len() + 2);

    if let Some(ship) = state.ship() {
        items.push(DrawItem::Ship {
            pos: ship.body.pos,
            angle: ship.angle(),
            radius: ship.body.radius(),
        });
    }

    items.extend(state.asteroids.iter().map(|a| DrawItem::Asteroid {
        id: a.id,
        size: a.size,
        pos: a.body.pos,
        radius: a.body.radius(),
    }));

    items.extend(state.projectiles.iter().map(|p| DrawItem::Projectile {
        id: p.id,
        pos: p.body.pos,
        radius: p.body.radius(),
    }));

    let banner = state.banner();
    if banner.visible {
        items.push(DrawItem::Banner {
            text: &banner.text,
            pos: Vec2::new(state.settings.game_width / 2.0, state.settings.game_height / 2.0),
        });
    }

    items
}
