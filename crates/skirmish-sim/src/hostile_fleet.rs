//! The hostile fleet: a fixed pool of AI-driven enemy ships.
//!
//! Per-step behavior (FSM, movement, hostile fire) runs in
//! `systems::fleet_ai`; this module owns the pool and its lifecycle.

use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Destructible, EnemyShip};
use skirmish_core::constants::*;
use skirmish_core::enums::{EnemyClass, Ordnance, TargetKind};
use skirmish_core::types::Position;
use skirmish_hostile_ai::profiles::get_profile;

use crate::targetable::{CollisionResult, EntityPool, StrikeProfile, Targetable};
use crate::world_setup;

impl Targetable for EnemyShip {
    fn kind(&self) -> TargetKind {
        TargetKind::Enemy
    }

    fn body(&self) -> &Destructible {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Destructible {
        &mut self.body
    }

    fn radius(&self) -> f64 {
        self.body.size * ENEMY_RADIUS_PER_SIZE
    }

    fn display_name(&self) -> &str {
        get_profile(self.class).name
    }

    fn status(&self) -> &str {
        self.state.label()
    }

    fn strike(ordnance: Ordnance) -> StrikeProfile {
        match ordnance {
            Ordnance::Railgun => StrikeProfile {
                hit_radius: ENEMY_RAILGUN_HIT_RADIUS,
                damage: ENEMY_RAILGUN_DAMAGE,
            },
            Ordnance::Missile => StrikeProfile {
                hit_radius: ENEMY_MISSILE_HIT_RADIUS,
                damage: ENEMY_MISSILE_DAMAGE,
            },
        }
    }
}

/// Owns every enemy ship slot.
#[derive(Debug, Clone)]
pub struct HostileFleet {
    pool: EntityPool<EnemyShip>,
}

impl HostileFleet {
    pub fn new(respawn_secs: f64) -> Self {
        Self {
            pool: EntityPool::new(respawn_secs),
        }
    }

    /// Append the opening wave of pirates, MCRN patrols and OPA skiffs.
    pub fn spawn_wave(&mut self, rng: &mut ChaCha8Rng, next_id: &mut u64) {
        for ship in world_setup::build_wave(rng, next_id) {
            self.pool.push(ship);
        }
    }

    /// Add a specific ship. Returns its slot.
    pub fn insert(&mut self, ship: EnemyShip) -> usize {
        self.pool.push(ship)
    }

    pub fn check_collision(&mut self, position: &Position, ordnance: Ordnance, now: f64) -> CollisionResult {
        self.pool.check_collision(position, ordnance, now)
    }

    /// Refill due slots with a fresh ship of the same class at a random belt
    /// position. Returns `(class, position)` for each respawn.
    pub fn respawn_due(&mut self, now: f64, rng: &mut ChaCha8Rng, next_id: &mut u64) -> Vec<(EnemyClass, Position)> {
        let mut respawned = Vec::new();
        for slot in self.pool.due_respawns(now) {
            let Some(class) = self.pool.slot(slot).map(|ship| ship.class) else {
                continue;
            };
            let position = world_setup::belt_position(rng);
            let ship = world_setup::spawn_enemy(rng, next_id, class, position);
            self.pool.replace(slot, ship);
            respawned.push((class, position));
        }
        respawned
    }

    pub fn decay_flash(&mut self, dt: f64) {
        self.pool.decay_flash(dt);
    }

    pub fn live_enemies(&self) -> impl Iterator<Item = (usize, &EnemyShip)> {
        self.pool.live()
    }

    pub(crate) fn live_enemies_mut(&mut self) -> impl Iterator<Item = (usize, &mut EnemyShip)> {
        self.pool.live_mut()
    }

    pub fn pool(&self) -> &EntityPool<EnemyShip> {
        &self.pool
    }
}
