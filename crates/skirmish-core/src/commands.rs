//! Player intents sent from the presentation layer to the simulation.
//!
//! Intents are queued and latched at the next step boundary. The core never
//! reads input devices; the host maps keys/buttons to these.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerIntent {
    // --- Weapons ---
    /// Fire the railgun if it has cooled down.
    FireRailgun,
    /// Launch a missile if one is loaded and the tube has cooled down.
    FireMissile,
    /// Fire a PDC burst at the locked target.
    FirePdc,
    /// Switch the point-defense system on or off.
    TogglePdc,

    // --- Targeting ---
    /// Lock the next candidate in distance order (wraps around).
    CycleTarget,
    /// Lock the nearest enemy, or the nearest asteroid if no enemy is in range.
    LockNearest,

    // --- Simulation control ---
    Pause,
    Resume,
}
