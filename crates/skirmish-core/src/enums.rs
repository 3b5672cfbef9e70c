//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player ordnance type. Determines hit radius and damage against each surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ordnance {
    /// Near-hitscan kinetic round.
    Railgun,
    /// Slow torpedo with a large blast radius.
    Missile,
}

/// Which pool a destructible entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Enemy,
    Asteroid,
}

/// Hostile ship class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Belt pirate raider: sturdy, slow.
    Pirate,
    /// Martian navy patrol: heavy and long-sighted.
    Mcrn,
    /// OPA skiff: fragile, fast, short aggression range.
    Opa,
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Circling a fixed patrol center.
    #[default]
    Patrol,
    /// Closing on the player.
    Chase,
    /// Facing and slowly approaching the player, firing.
    Attack,
    /// Running directly away from the player.
    Flee,
}

impl BehaviorState {
    /// Upper-case status label used by the target readout.
    pub fn label(&self) -> &'static str {
        match self {
            BehaviorState::Patrol => "PATROL",
            BehaviorState::Chase => "CHASE",
            BehaviorState::Attack => "ATTACK",
            BehaviorState::Flee => "FLEE",
        }
    }
}

/// Result of a fire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    Fired,
    CoolingDown,
    OutOfAmmo,
    /// Weapon disabled (PDC toggled off, no target in range, or ship lost).
    Offline,
}

/// Result of applying damage to a destructible entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    Survived,
    Destroyed,
    /// Target was already destroyed; nothing changed.
    Ignored,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// Player hull reached zero. Systems no longer run.
    Defeated,
}
