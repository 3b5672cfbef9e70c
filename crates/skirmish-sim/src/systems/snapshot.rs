//! Snapshot system: reads the pools, the player ship and the targeting
//! system and builds a complete `CombatSnapshot`.
//!
//! This system is read-only.

use skirmish_core::enums::GamePhase;
use skirmish_core::events::CombatEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime};

use crate::asteroid_field::AsteroidField;
use crate::hostile_fleet::HostileFleet;
use crate::player_ship::PlayerShip;
use crate::score::ScoreState;
use crate::targetable::Targetable;
use crate::targeting::TargetingSystem;

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    field: &AsteroidField,
    fleet: &HostileFleet,
    player: &PlayerShip,
    targeting: &TargetingSystem,
    score: &ScoreState,
    events: Vec<CombatEvent>,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        phase,
        asteroids: build_asteroids(field),
        enemies: build_enemies(fleet),
        projectiles: build_projectiles(player),
        player: build_player(player),
        lock: targeting.target_info(&player.position, field, fleet),
        score: score.view(time.elapsed_secs),
        events,
    }
}

fn build_asteroids(field: &AsteroidField) -> Vec<AsteroidView> {
    field
        .live_asteroids()
        .map(|(_, asteroid)| AsteroidView {
            id: asteroid.body.id,
            position: asteroid.body.position,
            rotation: asteroid.rotation,
            size: asteroid.body.size,
            health_ratio: asteroid.body.health_ratio(),
            flashing: asteroid.body.flash_secs > 0.0,
        })
        .collect()
}

fn build_enemies(fleet: &HostileFleet) -> Vec<EnemyView> {
    fleet
        .live_enemies()
        .map(|(_, ship)| EnemyView {
            id: ship.body.id,
            class: ship.class,
            name: ship.display_name().to_string(),
            position: ship.body.position,
            heading: ship.heading,
            size: ship.body.size,
            health_ratio: ship.body.health_ratio(),
            state: ship.state,
            flashing: ship.body.flash_secs > 0.0,
        })
        .collect()
}

fn build_projectiles(player: &PlayerShip) -> Vec<ProjectileView> {
    player
        .projectiles()
        .into_iter()
        .map(|shot| {
            let ahead = Position::from(shot.position.as_dvec3() + shot.velocity.as_dvec3());
            ProjectileView {
                ordnance: shot.projectile.ordnance,
                position: shot.position,
                heading: shot.position.heading_to(&ahead),
            }
        })
        .collect()
}

fn build_player(player: &PlayerShip) -> PlayerView {
    PlayerView {
        position: player.position,
        heading: player.heading,
        hull: player.hull,
        missiles: player.missiles,
        pdc_rounds: player.pdc_rounds,
        pdc_active: player.pdc_active,
        railgun_cooldown: player.railgun_cooldown,
        missile_cooldown: player.missile_cooldown,
        damage_flash: player.damage_flash_secs > 0.0,
    }
}
