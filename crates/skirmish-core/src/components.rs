//! Entity data: destructible bodies, ships and ordnance.
//!
//! These are plain data structs. Behavior lives in the simulation crate's
//! pools and systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position, Velocity};

/// State shared by every destructible body (asteroid or enemy ship).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destructible {
    pub id: EntityId,
    pub position: Position,
    pub velocity: Velocity,
    /// Always within [0, max_health].
    pub health: f64,
    pub max_health: f64,
    /// Scale factor. Drives collision radius and, for asteroids, max health.
    pub size: f64,
    /// Set exactly once, when health reaches zero.
    pub destroyed: bool,
    /// Simulation time at which the slot is refilled. Only set while destroyed.
    pub respawn_at: Option<f64>,
    /// Remaining damage-flash time (seconds).
    pub flash_secs: f64,
}

impl Destructible {
    pub fn new(id: EntityId, position: Position, velocity: Velocity, max_health: f64, size: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            health: max_health,
            max_health,
            size,
            destroyed: false,
            respawn_at: None,
            flash_secs: 0.0,
        }
    }

    /// Health as a fraction of max health, 0.0 when max health is zero.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }
}

/// A shootable asteroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Destructible,
    /// Spin rate per axis (rad/s).
    pub spin: Velocity,
    /// Accumulated orientation (radians per axis).
    pub rotation: Position,
}

/// A hostile ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyShip {
    pub body: Destructible,
    pub class: EnemyClass,
    pub state: BehaviorState,
    pub patrol_center: Position,
    /// Current angle on the patrol circle (radians).
    pub patrol_angle: f64,
    /// Facing (radians, see `Position::heading_to`).
    pub heading: f64,
    pub target_heading: f64,
    /// Seconds until this ship may fire again.
    pub fire_cooldown: f64,
}

/// In-flight player ordnance. Lives in the player ship's ordnance world
/// alongside `Position` and `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub ordnance: Ordnance,
    /// Seconds left before the projectile expires.
    pub lifetime_secs: f64,
    /// Spawn order. Sweeps visit projectiles in ascending serial.
    pub serial: u64,
}
