//! Respawn system: refills destroyed slots whose timers have run out and
//! decays damage flashes.

use rand_chacha::ChaCha8Rng;

use skirmish_core::enums::TargetKind;
use skirmish_core::events::CombatEvent;

use crate::asteroid_field::AsteroidField;
use crate::hostile_fleet::HostileFleet;

pub fn run(
    field: &mut AsteroidField,
    fleet: &mut HostileFleet,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    now: f64,
    dt: f64,
    events: &mut Vec<CombatEvent>,
) {
    for position in field.respawn_due(now, rng, next_id) {
        log::debug!("asteroid respawned at ({:.0}, {:.0}, {:.0})", position.x, position.y, position.z);
        events.push(CombatEvent::Respawned {
            kind: TargetKind::Asteroid,
            position,
        });
    }

    for (class, position) in fleet.respawn_due(now, rng, next_id) {
        log::debug!("{class:?} respawned at ({:.0}, {:.0}, {:.0})", position.x, position.y, position.z);
        events.push(CombatEvent::Respawned {
            kind: TargetKind::Enemy,
            position,
        });
    }

    field.decay_flash(dt);
    fleet.decay_flash(dt);
}
