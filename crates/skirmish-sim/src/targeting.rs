//! Target lock-on.
//!
//! The targeting system never owns what it locks: it keeps a `TargetHandle`
//! and resolves it against the asteroid field or the hostile fleet on
//! demand. A handle stops resolving the moment its entity is destroyed.

use skirmish_core::constants::{ASTEROID_CANDIDATE_FACTOR, LOCK_ON_RANGE};
use skirmish_core::enums::TargetKind;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::TargetView;
use skirmish_core::types::Position;

use crate::asteroid_field::AsteroidField;
use crate::hostile_fleet::HostileFleet;
use crate::targetable::{EntityPool, TargetHandle, Targetable};

/// The current lock.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetLock {
    pub handle: TargetHandle,
    pub name: String,
}

/// A lockable entity and its distance from the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub handle: TargetHandle,
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct TargetingSystem {
    lock: Option<TargetLock>,
    /// Position in the candidate list of the last cycled lock.
    cycle_index: Option<usize>,
}

impl Default for TargetingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a handle against whichever pool it points into.
pub fn resolve<'a>(
    handle: TargetHandle,
    field: &'a AsteroidField,
    fleet: &'a HostileFleet,
) -> Option<&'a dyn Targetable> {
    match handle.kind {
        TargetKind::Asteroid => field.pool().get(handle).map(|a| a as &dyn Targetable),
        TargetKind::Enemy => fleet.pool().get(handle).map(|e| e as &dyn Targetable),
    }
}

/// Live enemies within lock-on range and live asteroids within the shorter
/// asteroid range, nearest first. Ties keep enemies ahead of asteroids and
/// pool order within a kind.
pub fn candidates(player: &Position, field: &AsteroidField, fleet: &HostileFleet) -> Vec<Candidate> {
    let mut found = Vec::new();
    collect_within(&mut found, fleet.pool(), player, LOCK_ON_RANGE);
    collect_within(&mut found, field.pool(), player, LOCK_ON_RANGE * ASTEROID_CANDIDATE_FACTOR);
    found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    found
}

fn collect_within<T: Targetable>(out: &mut Vec<Candidate>, pool: &EntityPool<T>, player: &Position, range: f64) {
    for (slot, entity) in pool.live() {
        let distance = player.range_to(&entity.position());
        if distance >= range {
            continue;
        }
        if let Some(handle) = pool.handle(slot) {
            out.push(Candidate { handle, distance });
        }
    }
}

/// Nearest live entity strictly within `range`; the earlier slot wins a tie.
fn nearest<T: Targetable>(pool: &EntityPool<T>, player: &Position, range: f64) -> Option<TargetHandle> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, entity) in pool.live() {
        let distance = player.range_to(&entity.position());
        if distance < best.map_or(range, |(_, d)| d) {
            best = Some((slot, distance));
        }
    }
    best.and_then(|(slot, _)| pool.handle(slot))
}

impl TargetingSystem {
    pub fn new() -> Self {
        Self {
            lock: None,
            cycle_index: None,
        }
    }

    pub fn lock(&self) -> Option<&TargetLock> {
        self.lock.as_ref()
    }

    pub fn clear(&mut self) {
        self.lock = None;
        self.cycle_index = None;
    }

    /// Lock the next candidate, wrapping around. With no candidates the lock
    /// is cleared.
    pub fn cycle_target(
        &mut self,
        player: &Position,
        field: &AsteroidField,
        fleet: &HostileFleet,
        events: &mut Vec<CombatEvent>,
    ) -> Option<&TargetLock> {
        let found = candidates(player, field, fleet);
        if found.is_empty() {
            if self.lock.is_some() {
                log::debug!("cycle found no candidates, lock released");
            }
            self.clear();
            return None;
        }

        let index = self.cycle_index.map_or(0, |i| (i + 1) % found.len());
        self.cycle_index = Some(index);
        self.acquire(found[index].handle, field, fleet, events);
        self.lock.as_ref()
    }

    /// Lock the nearest enemy within lock-on range, falling back to the
    /// nearest asteroid within the same range. Leaves the lock alone when
    /// nothing qualifies.
    pub fn lock_nearest(
        &mut self,
        player: &Position,
        field: &AsteroidField,
        fleet: &HostileFleet,
        events: &mut Vec<CombatEvent>,
    ) -> Option<&TargetLock> {
        let handle = nearest(fleet.pool(), player, LOCK_ON_RANGE)
            .or_else(|| nearest(field.pool(), player, LOCK_ON_RANGE));
        if let Some(handle) = handle {
            self.acquire(handle, field, fleet, events);
        }
        self.lock.as_ref()
    }

    /// Drop a lock whose entity is gone. Returns true if the lock was cleared.
    pub fn validate(&mut self, field: &AsteroidField, fleet: &HostileFleet, events: &mut Vec<CombatEvent>) -> bool {
        let Some(lock) = &self.lock else {
            return false;
        };
        if resolve(lock.handle, field, fleet).is_some() {
            return false;
        }

        log::info!("lock lost: {}", lock.name);
        self.clear();
        events.push(CombatEvent::LockLost);
        true
    }

    /// Position of the locked entity, if the lock still resolves.
    pub fn target_position(&self, field: &AsteroidField, fleet: &HostileFleet) -> Option<Position> {
        let lock = self.lock.as_ref()?;
        resolve(lock.handle, field, fleet).map(|t| t.position())
    }

    /// HUD readout for the locked entity.
    pub fn target_info(&self, player: &Position, field: &AsteroidField, fleet: &HostileFleet) -> Option<TargetView> {
        let lock = self.lock.as_ref()?;
        let target = resolve(lock.handle, field, fleet)?;
        let body = target.body();
        Some(TargetView {
            id: body.id,
            kind: lock.handle.kind,
            name: lock.name.clone(),
            position: body.position,
            distance: player.range_to(&body.position),
            health: body.health,
            max_health: body.max_health,
            status: target.status().to_string(),
        })
    }

    fn acquire(
        &mut self,
        handle: TargetHandle,
        field: &AsteroidField,
        fleet: &HostileFleet,
        events: &mut Vec<CombatEvent>,
    ) {
        let Some(target) = resolve(handle, field, fleet) else {
            return;
        };
        let name = target.display_name().to_string();
        log::info!("target locked: {name} ({:?} slot {})", handle.kind, handle.slot);
        events.push(CombatEvent::LockAcquired {
            name: name.clone(),
            kind: handle.kind,
        });
        self.lock = Some(TargetLock { handle, name });
    }
}
