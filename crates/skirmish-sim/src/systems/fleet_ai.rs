//! Fleet AI system: runs the behavior FSM for every live enemy, integrates
//! its motion, and resolves hostile fire against the player.

use skirmish_core::constants::ENEMY_FIRE_INTERVAL;
use skirmish_core::events::CombatEvent;
use skirmish_hostile_ai::fsm::{self, ShipContext};
use skirmish_hostile_ai::profiles::get_profile;

use crate::hostile_fleet::HostileFleet;
use crate::player_ship::PlayerShip;

pub fn run(fleet: &mut HostileFleet, player: &mut PlayerShip, dt: f64, events: &mut Vec<CombatEvent>) {
    let player_position = player.position;

    for (slot, ship) in fleet.live_enemies_mut() {
        // Measured before this step's movement.
        let distance = ship.body.position.range_to(&player_position);

        let ctx = ShipContext {
            class: ship.class,
            state: ship.state,
            position: ship.body.position,
            velocity: ship.body.velocity,
            heading: ship.heading,
            health: ship.body.health,
            max_health: ship.body.max_health,
            patrol_center: ship.patrol_center,
            patrol_angle: ship.patrol_angle,
            player_position,
            dt,
        };
        let update = fsm::evaluate(&ctx);

        if update.state_changed {
            log::debug!(
                "{:?} slot {slot}: {:?} -> {:?} at range {distance:.0}",
                ship.class,
                ship.state,
                update.new_state
            );
        }

        ship.state = update.new_state;
        ship.body.velocity = update.new_velocity;
        ship.heading = update.new_heading;
        ship.target_heading = update.target_heading;
        ship.patrol_center = update.patrol_center;
        ship.patrol_angle = update.patrol_angle;

        let velocity = ship.body.velocity;
        ship.body.position.integrate(&velocity, dt);

        ship.fire_cooldown = (ship.fire_cooldown - dt).max(0.0);
        if !player.is_alive() || ship.fire_cooldown > 0.0 || !fsm::wants_to_fire(ship.state, distance) {
            continue;
        }

        ship.fire_cooldown = ENEMY_FIRE_INTERVAL;
        let profile = get_profile(ship.class);
        let applied = player.take_damage(profile.shot_damage);
        if applied <= 0.0 {
            continue;
        }

        log::debug!("{} hit the player for {applied}, hull {}", profile.name, player.hull);
        events.push(CombatEvent::PlayerDamaged {
            amount: applied,
            hull: player.hull,
        });

        if !player.is_alive() {
            log::info!("player ship destroyed by {}", profile.name);
            events.push(CombatEvent::PlayerDestroyed {
                position: player.position,
            });
        }
    }
}
