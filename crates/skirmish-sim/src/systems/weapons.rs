//! Weapons system: cooldowns, latched fire requests and ordnance flight.

use skirmish_core::enums::{FireOutcome, Ordnance};
use skirmish_core::events::CombatEvent;
use skirmish_core::types::Position;

use crate::player_ship::PlayerShip;
use crate::score::ScoreState;

/// Fire requests latched from this step's intents. Any number of requests
/// for one weapon collapse into a single attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireRequests {
    pub railgun: bool,
    pub missile: bool,
    pub pdc: bool,
}

/// Count down cooldowns, honor fire requests, then fly and expire ordnance.
pub fn run(
    player: &mut PlayerShip,
    requests: FireRequests,
    pdc_target: Option<Position>,
    dt: f64,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
) {
    player.tick_cooldowns(dt);

    if requests.railgun {
        match player.fire_railgun() {
            FireOutcome::Fired => {
                score.railgun_shots += 1;
                log::debug!("railgun fired, heading {:.3}", player.heading);
                events.push(CombatEvent::RailgunFired {
                    position: player.position,
                });
            }
            outcome => log::trace!("railgun request ignored: {outcome:?}"),
        }
    }

    if requests.missile {
        match player.fire_missile() {
            FireOutcome::Fired => {
                score.missiles_launched += 1;
                log::debug!("missile launched, {} remaining", player.missiles);
                events.push(CombatEvent::MissileLaunched {
                    position: player.position,
                    remaining: player.missiles,
                });
            }
            outcome => log::trace!("missile request ignored: {outcome:?}"),
        }
    }

    if requests.pdc {
        match (player.fire_pdc(pdc_target), pdc_target) {
            (FireOutcome::Fired, Some(target)) => {
                log::debug!("pdc burst, {} rounds left", player.pdc_rounds);
                events.push(CombatEvent::PdcBurst {
                    from: player.position,
                    to: target,
                });
            }
            (outcome, _) => log::trace!("pdc request ignored: {outcome:?}"),
        }
    }

    for expired in player.advance_ordnance(dt) {
        if expired.projectile.ordnance == Ordnance::Missile {
            log::debug!("missile self-destructed at end of flight");
            events.push(CombatEvent::Detonation {
                position: expired.position,
                impact: false,
            });
        }
    }
}
