//! Simulation constants and tuning parameters.

/// Nominal frame delta used by hosts that step at a fixed rate (60 Hz).
pub const NOMINAL_DT: f64 = 1.0 / 60.0;

/// Largest delta a single step will integrate. Longer frames are clamped.
pub const MAX_STEP_DT: f64 = 0.25;

// --- Asteroid field ---

/// Default number of destructible asteroids.
pub const ASTEROID_COUNT: usize = 50;

/// Orbital radius band asteroids spawn in.
pub const ASTEROID_MIN_ORBIT: f64 = 200.0;
pub const ASTEROID_MAX_ORBIT: f64 = 1700.0;

/// Half-height of the asteroid spawn slab.
pub const ASTEROID_HALF_HEIGHT: f64 = 50.0;

/// Asteroid size range (scale factor).
pub const ASTEROID_MIN_SIZE: f64 = 0.3;
pub const ASTEROID_MAX_SIZE: f64 = 1.8;

/// Max health per unit of size.
pub const ASTEROID_HEALTH_PER_SIZE: f64 = 10.0;

/// Largest drift speed component on x/z (units/s).
pub const ASTEROID_MAX_DRIFT: f64 = 0.25;

/// Largest spin rate per axis (rad/s).
pub const ASTEROID_MAX_SPIN: f64 = 0.25;

/// Seconds before a destroyed asteroid's slot is refilled.
pub const ASTEROID_RESPAWN_SECS: f64 = 10.0;

pub const ASTEROID_RAILGUN_HIT_RADIUS: f64 = 5.0;
pub const ASTEROID_RAILGUN_DAMAGE: f64 = 30.0;
pub const ASTEROID_MISSILE_HIT_RADIUS: f64 = 15.0;
pub const ASTEROID_MISSILE_DAMAGE: f64 = 100.0;

// --- Hostile fleet ---

pub const PIRATE_WAVE_COUNT: usize = 5;
pub const MCRN_WAVE_COUNT: usize = 2;
pub const OPA_WAVE_COUNT: usize = 3;

/// Belt band pirates spawn and every class respawns in.
pub const BELT_MIN_ORBIT: f64 = 550.0;
pub const BELT_MAX_ORBIT: f64 = 750.0;
pub const BELT_HALF_HEIGHT: f64 = 25.0;

pub const MCRN_MIN_ORBIT: f64 = 400.0;
pub const MCRN_MAX_ORBIT: f64 = 500.0;
pub const OPA_MIN_ORBIT: f64 = 550.0;
pub const OPA_MAX_ORBIT: f64 = 650.0;
pub const PATROL_SPAWN_HALF_HEIGHT: f64 = 15.0;

/// Enemy collision radius per unit of size.
pub const ENEMY_RADIUS_PER_SIZE: f64 = 15.0;

/// Seconds before a destroyed enemy is replaced by one of the same class.
pub const ENEMY_RESPAWN_SECS: f64 = 15.0;

pub const ENEMY_RAILGUN_HIT_RADIUS: f64 = 8.0;
pub const ENEMY_RAILGUN_DAMAGE: f64 = 25.0;
pub const ENEMY_MISSILE_HIT_RADIUS: f64 = 25.0;
pub const ENEMY_MISSILE_DAMAGE: f64 = 80.0;

// --- Hostile AI ---

/// Angular rate around the patrol center (rad/s).
pub const PATROL_ANGULAR_RATE: f64 = 0.2;

/// Radius of the patrol circle.
pub const PATROL_RADIUS: f64 = 50.0;

/// Chase -> Attack below this distance.
pub const ATTACK_ENTER_RANGE: f64 = 150.0;

/// Attack -> Chase above this distance.
pub const ATTACK_EXIT_RANGE: f64 = 200.0;

/// Chase -> Patrol above aggression range times this.
pub const CHASE_GIVE_UP_FACTOR: f64 = 1.5;

/// Flee -> Patrol above aggression range times this.
pub const FLEE_SAFE_FACTOR: f64 = 2.0;

/// Attack -> Flee below this fraction of max health.
pub const FLEE_HEALTH_FRACTION: f64 = 0.2;

pub const ATTACK_SPEED_FACTOR: f64 = 0.3;
pub const FLEE_SPEED_FACTOR: f64 = 1.5;

/// Per-step interpolation factor toward the desired velocity.
pub const VELOCITY_SMOOTHING: f64 = 0.1;

/// Heading correction rate (fraction of the error per second).
pub const TURN_RATE: f64 = 3.0;

/// Seconds between shots of an attacking enemy.
pub const ENEMY_FIRE_INTERVAL: f64 = 2.0;

/// Enemies only fire when the player is at most this far away.
pub const ENEMY_FIRE_RANGE: f64 = ATTACK_EXIT_RANGE;

// --- Player ship ---

pub const PLAYER_MAX_HULL: f64 = 100.0;

/// Seconds the hull damage flash stays visible.
pub const PLAYER_DAMAGE_FLASH_SECS: f64 = 0.3;

/// Seconds a struck entity flashes.
pub const ENTITY_DAMAGE_FLASH_SECS: f64 = 0.1;

pub const RAILGUN_RELOAD_SECS: f64 = 0.5;
pub const RAILGUN_SPEED: f64 = 3000.0;
pub const RAILGUN_LIFETIME_SECS: f64 = 3.0;
pub const RAILGUN_MUZZLE_OFFSET: f64 = 50.0;

pub const MISSILE_RELOAD_SECS: f64 = 3.0;
pub const MISSILE_SPEED: f64 = 300.0;
pub const MISSILE_LIFETIME_SECS: f64 = 15.0;
pub const MISSILE_MUZZLE_OFFSET: f64 = 20.0;
pub const MISSILE_MAGAZINE: u32 = 12;

pub const PDC_MAX_ROUNDS: u32 = 10_000;
pub const PDC_BURST_ROUNDS: u32 = 10;
pub const PDC_FIRE_INTERVAL: f64 = 0.1;
pub const PDC_RANGE: f64 = 200.0;

// --- Targeting ---

/// Maximum lock distance for enemies.
pub const LOCK_ON_RANGE: f64 = 500.0;

/// Asteroids are only cycle candidates within this fraction of the lock range.
pub const ASTEROID_CANDIDATE_FACTOR: f64 = 0.5;
