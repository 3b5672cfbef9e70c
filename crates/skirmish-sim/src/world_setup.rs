//! Entity factories for populating the asteroid field and the hostile fleet.
//!
//! Random placement draws from the engine's seeded RNG so the same seed
//! always produces the same world.

use std::f64::consts::{PI, TAU};

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::types::{EntityId, Position, Velocity};
use skirmish_hostile_ai::profiles::get_profile;

/// Hand out the next never-reused entity id.
pub fn next_entity_id(next_id: &mut u64) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

/// Random point in an annulus around the origin on the x/z plane, with a
/// random height in `[-half_height, half_height]`.
pub fn ring_position(rng: &mut ChaCha8Rng, min_orbit: f64, max_orbit: f64, half_height: f64) -> Position {
    let angle: f64 = rng.gen_range(0.0..TAU);
    let radius: f64 = rng.gen_range(min_orbit..max_orbit);
    let height: f64 = rng.gen_range(-half_height..=half_height);
    Position::new(angle.cos() * radius, height, angle.sin() * radius)
}

/// A random asteroid somewhere in the exploration volume, drifting slowly.
pub fn spawn_asteroid(rng: &mut ChaCha8Rng, next_id: &mut u64) -> Asteroid {
    let position = ring_position(rng, ASTEROID_MIN_ORBIT, ASTEROID_MAX_ORBIT, ASTEROID_HALF_HEIGHT);
    let size: f64 = rng.gen_range(ASTEROID_MIN_SIZE..ASTEROID_MAX_SIZE);
    let drift = Velocity::new(
        rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
        0.0,
        rng.gen_range(-ASTEROID_MAX_DRIFT..=ASTEROID_MAX_DRIFT),
    );
    let spin = Velocity::new(
        rng.gen_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
        rng.gen_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
        rng.gen_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN),
    );

    let mut asteroid = asteroid_at(next_entity_id(next_id), position, size);
    asteroid.body.velocity = drift;
    asteroid.spin = spin;
    asteroid
}

/// A motionless asteroid of the given size. Max health scales with size.
pub fn asteroid_at(id: EntityId, position: Position, size: f64) -> Asteroid {
    Asteroid {
        body: Destructible::new(id, position, Velocity::default(), size * ASTEROID_HEALTH_PER_SIZE, size),
        spin: Velocity::default(),
        rotation: Position::default(),
    }
}

/// Where a ship of `class` appears in the opening wave.
pub fn wave_position(rng: &mut ChaCha8Rng, class: EnemyClass) -> Position {
    match class {
        EnemyClass::Pirate => belt_position(rng),
        EnemyClass::Mcrn => ring_position(rng, MCRN_MIN_ORBIT, MCRN_MAX_ORBIT, PATROL_SPAWN_HALF_HEIGHT),
        EnemyClass::Opa => ring_position(rng, OPA_MIN_ORBIT, OPA_MAX_ORBIT, PATROL_SPAWN_HALF_HEIGHT),
    }
}

/// Random position in the asteroid belt. Respawned ships of every class
/// reappear here.
pub fn belt_position(rng: &mut ChaCha8Rng) -> Position {
    ring_position(rng, BELT_MIN_ORBIT, BELT_MAX_ORBIT, BELT_HALF_HEIGHT)
}

/// A ship of `class` at `position` with a random heading and patrol phase.
pub fn spawn_enemy(rng: &mut ChaCha8Rng, next_id: &mut u64, class: EnemyClass, position: Position) -> EnemyShip {
    let mut ship = enemy_at(next_entity_id(next_id), class, position);
    ship.heading = rng.gen_range(-PI..PI);
    ship.target_heading = ship.heading;
    ship.patrol_angle = rng.gen_range(0.0..TAU);
    ship
}

/// A stationary ship of `class` patrolling around its own position.
pub fn enemy_at(id: EntityId, class: EnemyClass, position: Position) -> EnemyShip {
    let profile = get_profile(class);
    EnemyShip {
        body: Destructible::new(id, position, Velocity::default(), profile.max_health, profile.size),
        class,
        state: BehaviorState::Patrol,
        patrol_center: position,
        patrol_angle: 0.0,
        heading: 0.0,
        target_heading: 0.0,
        fire_cooldown: 0.0,
    }
}

/// The opening wave: pirates in the belt, MCRN patrols further in, OPA
/// skiffs just inside the belt.
pub fn build_wave(rng: &mut ChaCha8Rng, next_id: &mut u64) -> Vec<EnemyShip> {
    let roster = [
        (EnemyClass::Pirate, PIRATE_WAVE_COUNT),
        (EnemyClass::Mcrn, MCRN_WAVE_COUNT),
        (EnemyClass::Opa, OPA_WAVE_COUNT),
    ];

    let mut ships = Vec::with_capacity(PIRATE_WAVE_COUNT + MCRN_WAVE_COUNT + OPA_WAVE_COUNT);
    for (class, count) in roster {
        for _ in 0..count {
            let position = wave_position(rng, class);
            ships.push(spawn_enemy(rng, next_id, class, position));
        }
    }
    ships
}
