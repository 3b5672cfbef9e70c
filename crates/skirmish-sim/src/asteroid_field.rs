//! The asteroid field: a fixed pool of slowly drifting, shootable asteroids.

use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Asteroid, Destructible};
use skirmish_core::constants::*;
use skirmish_core::enums::{Ordnance, TargetKind};
use skirmish_core::types::Position;

use crate::targetable::{CollisionResult, EntityPool, StrikeProfile, Targetable};
use crate::world_setup;

impl Targetable for Asteroid {
    fn kind(&self) -> TargetKind {
        TargetKind::Asteroid
    }

    fn body(&self) -> &Destructible {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Destructible {
        &mut self.body
    }

    fn radius(&self) -> f64 {
        self.body.size
    }

    fn display_name(&self) -> &str {
        "Asteroid"
    }

    fn status(&self) -> &str {
        "STATIONARY"
    }

    fn strike(ordnance: Ordnance) -> StrikeProfile {
        match ordnance {
            Ordnance::Railgun => StrikeProfile {
                hit_radius: ASTEROID_RAILGUN_HIT_RADIUS,
                damage: ASTEROID_RAILGUN_DAMAGE,
            },
            Ordnance::Missile => StrikeProfile {
                hit_radius: ASTEROID_MISSILE_HIT_RADIUS,
                damage: ASTEROID_MISSILE_DAMAGE,
            },
        }
    }
}

/// Owns every asteroid slot. Destroyed slots stay inert until their
/// replacement is installed.
#[derive(Debug, Clone)]
pub struct AsteroidField {
    pool: EntityPool<Asteroid>,
}

impl AsteroidField {
    pub fn new(respawn_secs: f64) -> Self {
        Self {
            pool: EntityPool::new(respawn_secs),
        }
    }

    /// Append `count` random asteroids.
    pub fn spawn(&mut self, count: usize, rng: &mut ChaCha8Rng, next_id: &mut u64) {
        for _ in 0..count {
            self.pool.push(world_setup::spawn_asteroid(rng, next_id));
        }
    }

    /// Add a specific asteroid. Returns its slot.
    pub fn insert(&mut self, asteroid: Asteroid) -> usize {
        self.pool.push(asteroid)
    }

    pub fn check_collision(&mut self, position: &Position, ordnance: Ordnance, now: f64) -> CollisionResult {
        self.pool.check_collision(position, ordnance, now)
    }

    /// Drift and spin every live asteroid.
    pub fn update(&mut self, dt: f64) {
        for (_, asteroid) in self.pool.live_mut() {
            let drift = asteroid.body.velocity;
            asteroid.body.position.integrate(&drift, dt);
            asteroid.rotation.x += asteroid.spin.x * dt;
            asteroid.rotation.y += asteroid.spin.y * dt;
            asteroid.rotation.z += asteroid.spin.z * dt;
        }
    }

    /// Refill every slot whose respawn time has come with a fresh random
    /// asteroid. Returns the new asteroids' positions.
    pub fn respawn_due(&mut self, now: f64, rng: &mut ChaCha8Rng, next_id: &mut u64) -> Vec<Position> {
        let mut respawned = Vec::new();
        for slot in self.pool.due_respawns(now) {
            let asteroid = world_setup::spawn_asteroid(rng, next_id);
            respawned.push(asteroid.body.position);
            self.pool.replace(slot, asteroid);
        }
        respawned
    }

    pub fn decay_flash(&mut self, dt: f64) {
        self.pool.decay_flash(dt);
    }

    pub fn live_asteroids(&self) -> impl Iterator<Item = (usize, &Asteroid)> {
        self.pool.live()
    }

    pub fn pool(&self) -> &EntityPool<Asteroid> {
        &self.pool
    }
}
