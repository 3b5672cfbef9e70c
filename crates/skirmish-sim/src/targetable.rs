//! The `Targetable` capability and the fixed-slot pools that own targetable
//! entities.
//!
//! Asteroids and enemy ships implement `Targetable`; `EntityPool` gives both
//! the same collision, lookup and respawn bookkeeping. Pool order is slot
//! order, and collision tests take the first live entity in that order that
//! overlaps the strike: never the nearest one.

use serde::{Deserialize, Serialize};

use skirmish_core::components::Destructible;
use skirmish_core::constants::ENTITY_DAMAGE_FLASH_SECS;
use skirmish_core::enums::{DamageOutcome, Ordnance, TargetKind};
use skirmish_core::types::{EntityId, Position, Velocity};

/// How a given ordnance interacts with a collision surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeProfile {
    /// Added to the entity radius for the overlap test.
    pub hit_radius: f64,
    pub damage: f64,
}

/// Outcome of testing one strike position against a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub hit: bool,
    pub destroyed: bool,
    /// Position of the struck entity (origin on a miss).
    pub position: Position,
    pub slot: Option<usize>,
}

impl CollisionResult {
    pub const MISS: CollisionResult = CollisionResult {
        hit: false,
        destroyed: false,
        position: Position {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        slot: None,
    };
}

/// Non-owning reference to a pooled entity. Resolves only while the slot
/// still holds the same live entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetHandle {
    pub kind: TargetKind,
    pub slot: usize,
    pub id: EntityId,
}

/// Anything that can be struck, damaged, destroyed and locked onto.
pub trait Targetable {
    fn kind(&self) -> TargetKind;
    fn body(&self) -> &Destructible;
    fn body_mut(&mut self) -> &mut Destructible;
    /// Collision radius, before the strike's hit radius is added.
    fn radius(&self) -> f64;
    fn display_name(&self) -> &str;
    /// Short status label for the target readout.
    fn status(&self) -> &str;

    /// Hit radius and damage of `ordnance` against this kind of entity.
    fn strike(ordnance: Ordnance) -> StrikeProfile
    where
        Self: Sized;

    fn id(&self) -> EntityId {
        self.body().id
    }

    fn position(&self) -> Position {
        self.body().position
    }

    fn is_live(&self) -> bool {
        !self.body().destroyed
    }

    /// Apply damage, clamping health to [0, max]. The destruction transition
    /// runs exactly once: the entity is flagged destroyed and its respawn is
    /// scheduled for `now + respawn_delay`.
    fn apply_damage(&mut self, amount: f64, now: f64, respawn_delay: f64) -> DamageOutcome {
        let body = self.body_mut();
        debug_assert!(!body.destroyed, "damage applied to destroyed entity {:?}", body.id);
        if body.destroyed {
            return DamageOutcome::Ignored;
        }

        body.health = (body.health - amount).clamp(0.0, body.max_health);
        if body.health > 0.0 {
            body.flash_secs = ENTITY_DAMAGE_FLASH_SECS;
            return DamageOutcome::Survived;
        }

        body.destroyed = true;
        body.respawn_at = Some(now + respawn_delay);
        body.velocity = Velocity::default();
        body.flash_secs = 0.0;
        DamageOutcome::Destroyed
    }
}

/// Fixed-size slot storage for one kind of targetable entity.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    slots: Vec<T>,
    respawn_delay: f64,
}

impl<T: Targetable> EntityPool<T> {
    pub fn new(respawn_delay: f64) -> Self {
        Self {
            slots: Vec::new(),
            respawn_delay,
        }
    }

    /// Append a slot. Returns its index.
    pub fn push(&mut self, entity: T) -> usize {
        self.slots.push(entity);
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn respawn_delay(&self) -> f64 {
        self.respawn_delay
    }

    /// All slots, live or destroyed, in pool order.
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn slot(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)
    }

    pub fn live(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.is_live())
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots.iter_mut().enumerate().filter(|(_, e)| e.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Handle for the entity currently in `slot`, if it is live.
    pub fn handle(&self, slot: usize) -> Option<TargetHandle> {
        self.slots.get(slot).filter(|e| e.is_live()).map(|e| TargetHandle {
            kind: e.kind(),
            slot,
            id: e.id(),
        })
    }

    /// Resolve a handle. `None` once the entity is destroyed or replaced.
    pub fn get(&self, handle: TargetHandle) -> Option<&T> {
        self.slots
            .get(handle.slot)
            .filter(|e| e.kind() == handle.kind && e.id() == handle.id && e.is_live())
    }

    /// Strike the first live entity, in pool order, whose radius plus the
    /// ordnance hit radius strictly contains `position`.
    pub fn check_collision(&mut self, position: &Position, ordnance: Ordnance, now: f64) -> CollisionResult {
        let strike = T::strike(ordnance);
        let respawn_delay = self.respawn_delay;

        for (slot, entity) in self.live_mut() {
            let distance = position.range_to(&entity.position());
            if distance >= entity.radius() + strike.hit_radius {
                continue;
            }

            let struck_at = entity.position();
            let outcome = entity.apply_damage(strike.damage, now, respawn_delay);
            return CollisionResult {
                hit: true,
                destroyed: outcome == DamageOutcome::Destroyed,
                position: struck_at,
                slot: Some(slot),
            };
        }

        CollisionResult::MISS
    }

    /// Destroyed slots whose respawn time has arrived, in pool order.
    pub fn due_respawns(&self, now: f64) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, e)| e.body().destroyed && e.body().respawn_at.is_some_and(|at| at <= now))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Install a replacement entity into a destroyed slot.
    pub fn replace(&mut self, slot: usize, entity: T) {
        if let Some(existing) = self.slots.get_mut(slot) {
            debug_assert!(existing.body().destroyed, "replacing a live entity in slot {slot}");
            *existing = entity;
        }
    }

    /// Count down every live entity's damage flash.
    pub fn decay_flash(&mut self, dt: f64) {
        for (_, entity) in self.live_mut() {
            let body = entity.body_mut();
            body.flash_secs = (body.flash_secs - dt).max(0.0);
        }
    }
}
