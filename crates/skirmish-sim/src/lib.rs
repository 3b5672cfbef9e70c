//! Combat simulation engine for SKIRMISH.
//!
//! Owns the asteroid field, the hostile fleet and the player ship, runs
//! systems once per variable-length step, and produces `CombatSnapshot`s for
//! the presentation layer.

pub mod asteroid_field;
pub mod config;
pub mod engine;
pub mod hostile_fleet;
pub mod player_ship;
pub mod score;
pub mod systems;
pub mod targetable;
pub mod targeting;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use skirmish_core as core;
