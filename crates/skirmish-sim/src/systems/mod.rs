//! Systems that advance the simulation each step.
//!
//! Systems are free functions over the pools and the player ship. They do
//! not own state; everything they touch is owned by `SimulationEngine`.

pub mod combat;
pub mod fleet_ai;
pub mod respawn;
pub mod snapshot;
pub mod weapons;
