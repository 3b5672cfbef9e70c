//! Class-specific ship profiles.
//!
//! Consolidates per-class parameters for the behavior FSM and the fleet.
//! Profiles are static and shared read-only by every ship of a class.

use skirmish_core::enums::EnemyClass;

/// Behavioral and durability profile for an enemy class.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipProfile {
    /// Display name used by the target readout and lock notifications.
    pub name: &'static str,
    /// Scale factor. Collision radius is `ENEMY_RADIUS_PER_SIZE * size`.
    pub size: f64,
    pub max_health: f64,
    /// Top speed (units/s) before state multipliers.
    pub max_speed: f64,
    /// Distance at which a patrolling ship starts chasing.
    pub aggression_range: f64,
    /// Hull damage dealt per shot while attacking.
    pub shot_damage: f64,
}

pub static PIRATE: ShipProfile = ShipProfile {
    name: "Pirate Raider",
    size: 0.8,
    max_health: 50.0,
    max_speed: 80.0,
    aggression_range: 300.0,
    shot_damage: 4.0,
};

pub static MCRN: ShipProfile = ShipProfile {
    name: "MCRN Patrol",
    size: 1.2,
    max_health: 100.0,
    max_speed: 120.0,
    aggression_range: 400.0,
    shot_damage: 8.0,
};

pub static OPA: ShipProfile = ShipProfile {
    name: "OPA Skiff",
    size: 0.6,
    max_health: 30.0,
    max_speed: 150.0,
    aggression_range: 200.0,
    shot_damage: 3.0,
};

/// Get the profile for a given class.
pub fn get_profile(class: EnemyClass) -> &'static ShipProfile {
    match class {
        EnemyClass::Pirate => &PIRATE,
        EnemyClass::Mcrn => &MCRN,
        EnemyClass::Opa => &OPA,
    }
}
