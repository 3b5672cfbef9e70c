//! Events emitted by the simulation for effects, audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Something the presentation layer may want to react to.
/// Collected during a step and returned with that step's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A projectile struck an entity (lethal or not).
    Hit {
        position: Position,
        ordnance: Ordnance,
        kind: TargetKind,
    },
    /// An entity was destroyed and credited as a kill.
    Destroyed {
        kind: TargetKind,
        position: Position,
        ordnance: Ordnance,
    },
    /// Missile warhead went off. `impact` is false for lifetime expiry.
    Detonation { position: Position, impact: bool },
    /// Hostile fire reduced the player's hull.
    PlayerDamaged { amount: f64, hull: f64 },
    /// Player hull reached zero.
    PlayerDestroyed { position: Position },
    /// Targeting locked onto an entity.
    LockAcquired { name: String, kind: TargetKind },
    /// The locked entity is gone; the lock was cleared.
    LockLost,
    RailgunFired { position: Position },
    MissileLaunched { position: Position, remaining: u32 },
    /// PDC tracer from the ship to the locked target.
    PdcBurst { from: Position, to: Position },
    /// A destroyed slot was refilled.
    Respawned { kind: TargetKind, position: Position },
}

/// Callback-style bridge for presentation layers. Every method defaults to a
/// no-op; the simulation never requires an observer.
pub trait CombatObserver {
    fn on_hit(&mut self, _position: Position, _ordnance: Ordnance) {}
    fn on_destroyed(&mut self, _kind: TargetKind, _position: Position) {}
    fn on_player_damaged(&mut self, _amount: f64) {}
    fn on_lock_acquired(&mut self, _name: &str) {}
    fn on_detonation(&mut self, _position: Position, _impact: bool) {}
}

/// Forward a step's events to an observer, in emission order.
pub fn dispatch<O: CombatObserver + ?Sized>(events: &[CombatEvent], observer: &mut O) {
    for event in events {
        match event {
            CombatEvent::Hit {
                position, ordnance, ..
            } => observer.on_hit(*position, *ordnance),
            CombatEvent::Destroyed { kind, position, .. } => observer.on_destroyed(*kind, *position),
            CombatEvent::PlayerDamaged { amount, .. } => observer.on_player_damaged(*amount),
            CombatEvent::LockAcquired { name, .. } => observer.on_lock_acquired(name),
            CombatEvent::Detonation { position, impact } => observer.on_detonation(*position, *impact),
            _ => {}
        }
    }
}
