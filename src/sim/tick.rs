//! Per-frame simulation tick
//!
//! One call advances the wave by one rendered frame. The step order is
//! fixed:
//!
//! 1. steer the ship (turn, thrust)
//! 2. fire gating
//! 3. move projectiles, prune the ones outside the extended bounds
//! 4. move and wrap the ship
//! 5. resolve collisions (detect first, then apply)
//! 6. move and wrap asteroids, including fragments spawned this frame
//! 7. check for a win or loss
//!
//! Ship and asteroids take a fixed per-frame step of their velocity plus a
//! `dt`-scaled step. Projectiles only take the fixed step.

use glam::Vec2;

use super::collision::collides;
use super::state::{Projectile, WaveEvent, WavePhase, WaveState};

/// Logical controls for a single frame, polled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Advance the wave by one frame. Does nothing once the wave is won or lost.
pub fn tick(state: &mut WaveState, input: &TickInput, dt: f32) {
    if !state.is_active() {
        return;
    }

    state.events.clear();
    state.frame += 1;

    steer(state, input);
    handle_fire(state, input);

    let bounds = state.settings.bounds();

    for projectile in &mut state.projectiles {
        projectile.body.translate();
    }
    state.projectiles.retain(|p| bounds.contains(p.body.pos));

    if let Some(ship) = state.ship.as_mut() {
        ship.body.translate();
        ship.body.integrate(dt);
        ship.body.wrap(&bounds);
    }

    resolve_collisions(state);

    for asteroid in &mut state.asteroids {
        asteroid.body.integrate(dt);
        asteroid.body.translate();
        asteroid.body.wrap(&bounds);
    }

    check_outcome(state);
}

impl WaveState {
    /// Advance one frame; see [`tick`]
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        tick(self, input, dt);
    }
}

fn steer(state: &mut WaveState, input: &TickInput) {
    let Some(ship) = state.ship.as_mut() else {
        return;
    };

    let mut turn = 0.0;
    if input.turn_left {
        turn += state.settings.ship_turn_rate;
    }
    if input.turn_right {
        turn -= state.settings.ship_turn_rate;
    }
    if turn != 0.0 {
        ship.turn(turn);
    }

    if input.thrust {
        ship.apply_thrust(state.settings.ship_impulse, state.settings.ship_max_speed);
    }
}

/// Fire once the cooldown has reached the threshold, otherwise count up.
/// Holding fire yields one shot every `bullet_rate + 1` frames.
fn handle_fire(state: &mut WaveState, input: &TickInput) {
    let ready = state.fire_cooldown >= state.settings.bullet_rate;
    match state.ship.filter(|_| ready && input.fire) {
        Some(ship) => {
            let id = state.next_entity_id();
            state
                .projectiles
                .push(Projectile::fire(id, &ship, &state.settings));
            state.fire_cooldown = 0;
            state.events.push(WaveEvent::ProjectileFired { id });
            log::trace!("Projectile {} fired on frame {}", id, state.frame);
        }
        None => state.fire_cooldown = state.fire_cooldown.saturating_add(1),
    }
}

/// Two-phase collision resolution.
///
/// Detection scans asteroids against projectiles, then asteroids against the
/// ship, recording hits without touching any collection. Only afterwards are
/// asteroids fragmented and removed, so each asteroid breaks at most once
/// even when several projectiles and the ship overlap it on the same frame.
/// The strike vector is the velocity of whatever hit it first.
fn resolve_collisions(state: &mut WaveState) {
    if state.ship.is_none() {
        return;
    }

    let mut spent = vec![false; state.projectiles.len()];
    let mut strikes: Vec<Option<Vec2>> = vec![None; state.asteroids.len()];

    for (ai, asteroid) in state.asteroids.iter().enumerate() {
        for (pi, projectile) in state.projectiles.iter().enumerate() {
            if collides(&asteroid.body, &projectile.body) {
                spent[pi] = true;
                strikes[ai].get_or_insert(projectile.body.vel());
            }
        }
    }

    let mut ship_hit = false;
    if let Some(ship) = state.ship.as_ref() {
        // The ship is gone after its first contact
        if let Some(ai) = state
            .asteroids
            .iter()
            .position(|asteroid| collides(&asteroid.body, &ship.body))
        {
            strikes[ai].get_or_insert(ship.body.vel());
            ship_hit = true;
        }
    }

    let mut fragments = Vec::new();
    for (ai, strike) in strikes.iter().enumerate() {
        let Some(strike) = *strike else {
            continue;
        };
        let parent = state.asteroids[ai];
        let children = parent.fragment(strike, &state.settings, &mut state.next_id);
        log::debug!(
            "Asteroid {} ({}) destroyed into {} fragments",
            parent.id,
            parent.size.as_str(),
            children.len()
        );
        state.events.push(WaveEvent::AsteroidDestroyed {
            id: parent.id,
            size: parent.size,
            pos: parent.body.pos,
            fragments: children.len(),
        });
        fragments.extend(children);
    }

    let mut index = 0;
    state.asteroids.retain(|_| {
        let keep = strikes[index].is_none();
        index += 1;
        keep
    });

    let mut index = 0;
    state.projectiles.retain(|_| {
        let keep = !spent[index];
        index += 1;
        keep
    });

    if ship_hit {
        if let Some(ship) = state.ship.take() {
            log::debug!(
                "Ship destroyed at ({:.1}, {:.1}) on frame {}",
                ship.body.pos.x,
                ship.body.pos.y,
                state.frame
            );
            state.events.push(WaveEvent::ShipDestroyed { pos: ship.body.pos });
        }
    }

    state.asteroids.extend(fragments);
}

/// Loss takes priority when the ship dies on the last asteroid
fn check_outcome(state: &mut WaveState) {
    if state.ship.is_none() {
        state.finish(WavePhase::Lost);
    } else if state.asteroids.is_empty() {
        state.finish(WavePhase::Won);
    }
}
