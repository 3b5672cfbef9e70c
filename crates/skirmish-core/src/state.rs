//! Combat state snapshot: the visible state handed to presentation each step.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{EntityId, Position, SimTime};

/// Complete combat state after one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub asteroids: Vec<AsteroidView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub player: PlayerView,
    pub lock: Option<TargetView>,
    pub score: ScoreView,
    pub events: Vec<CombatEvent>,
}

/// A live asteroid, for visual placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidView {
    pub id: EntityId,
    pub position: Position,
    pub rotation: Position,
    pub size: f64,
    pub health_ratio: f64,
    pub flashing: bool,
}

/// A live enemy ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub class: EnemyClass,
    pub name: String,
    pub position: Position,
    pub heading: f64,
    pub size: f64,
    pub health_ratio: f64,
    pub state: BehaviorState,
    pub flashing: bool,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub ordnance: Ordnance,
    pub position: Position,
    pub heading: f64,
}

/// Player ship combat status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub heading: f64,
    pub hull: f64,
    pub missiles: u32,
    pub pdc_rounds: u32,
    pub pdc_active: bool,
    /// 0.0 when ready to fire.
    pub railgun_cooldown: f64,
    pub missile_cooldown: f64,
    pub damage_flash: bool,
}

/// Target readout for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub id: EntityId,
    pub kind: TargetKind,
    pub name: String,
    pub position: Position,
    pub distance: f64,
    pub health: f64,
    pub max_health: f64,
    /// Enemy behavior label, or "STATIONARY" for asteroids.
    pub status: String,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub asteroids_destroyed: u32,
    pub enemies_destroyed: u32,
    pub railgun_shots: u32,
    pub missiles_launched: u32,
    pub mission_time_secs: f64,
}
