//! Combat resolution: sweeps every in-flight projectile against the asteroid
//! field and then the hostile fleet.

use skirmish_core::enums::{Ordnance, TargetKind};
use skirmish_core::events::CombatEvent;

use crate::asteroid_field::AsteroidField;
use crate::hostile_fleet::HostileFleet;
use crate::player_ship::PlayerShip;
use crate::score::ScoreState;

/// Projectiles are visited in spawn order. Asteroids are tested first and the
/// fleet only when no asteroid was struck, so one projectile strikes at most
/// one entity.
pub fn run(
    player: &mut PlayerShip,
    field: &mut AsteroidField,
    fleet: &mut HostileFleet,
    now: f64,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) {
    for shot in player.projectiles() {
        let ordnance = shot.projectile.ordnance;

        let mut kind = TargetKind::Asteroid;
        let mut result = field.check_collision(&shot.position, ordnance, now);
        if !result.hit {
            kind = TargetKind::Enemy;
            result = fleet.check_collision(&shot.position, ordnance, now);
        }
        if !result.hit {
            continue;
        }

        player.remove_projectile(shot.entity);
        events.push(CombatEvent::Hit {
            position: result.position,
            ordnance,
            kind,
        });
        if ordnance == Ordnance::Missile {
            events.push(CombatEvent::Detonation {
                position: result.position,
                impact: true,
            });
        }

        if result.destroyed {
            score.record_kill(kind);
            log::info!("{kind:?} destroyed by {ordnance:?} in slot {:?}", result.slot);
            events.push(CombatEvent::Destroyed {
                kind,
                position: result.position,
                ordnance,
            });
        }
    }
}
