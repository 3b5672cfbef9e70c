//! Simulation engine: the combat core.
//!
//! `SimulationEngine` owns the asteroid field, the hostile fleet, the player
//! ship and the targeting system, processes player intents, runs all systems
//! once per step, and produces `CombatSnapshot`s. Completely headless, so
//! runs are deterministic for a given seed and sequence of deltas.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::PlayerIntent;
use skirmish_core::constants::MAX_STEP_DT;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::{self, CombatEvent, CombatObserver};
use skirmish_core::state::CombatSnapshot;
use skirmish_core::types::{Position, SimTime};

use crate::asteroid_field::AsteroidField;
use crate::config::{ConfigError, SimConfig, MAX_TIME_SCALE};
use crate::hostile_fleet::HostileFleet;
use crate::player_ship::PlayerShip;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::weapons::FireRequests;
use crate::targeting::{TargetLock, TargetingSystem};

/// Intents latched for the current step.
#[derive(Debug, Default)]
struct LatchedIntents {
    fire: FireRequests,
    /// `CycleTarget` / `LockNearest`, in arrival order.
    targeting: Vec<PlayerIntent>,
}

/// The simulation engine. Owns every pool and all sim state.
pub struct SimulationEngine {
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    next_entity_id: u64,
    intent_queue: VecDeque<PlayerIntent>,
    latched: LatchedIntents,
    events: Vec<CombatEvent>,

    field: AsteroidField,
    fleet: HostileFleet,
    player: PlayerShip,
    targeting: TargetingSystem,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create an engine and populate the world. Out-of-range values are
    /// clamped; use `try_new` to reject them instead.
    pub fn new(config: SimConfig) -> Self {
        let time_scale = clamp_time_scale(config.time_scale);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_entity_id = 0;

        let mut field = AsteroidField::new(config.asteroid_respawn_secs.max(0.0));
        field.spawn(config.asteroid_count, &mut rng, &mut next_entity_id);

        let mut fleet = HostileFleet::new(config.enemy_respawn_secs.max(0.0));
        if config.spawn_enemies {
            fleet.spawn_wave(&mut rng, &mut next_entity_id);
        }

        log::info!(
            "combat started: seed {}, {} asteroids, {} enemies",
            config.seed,
            field.pool().len(),
            fleet.pool().len()
        );

        Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale,
            rng,
            next_entity_id,
            intent_queue: VecDeque::new(),
            latched: LatchedIntents::default(),
            events: Vec::new(),
            field,
            fleet,
            player: PlayerShip::new(),
            targeting: TargetingSystem::new(),
            score: ScoreState::default(),
        }
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player intent for processing at the next step boundary.
    pub fn queue_intent(&mut self, intent: PlayerIntent) {
        self.intent_queue.push_back(intent);
    }

    pub fn queue_intents(&mut self, intents: impl IntoIterator<Item = PlayerIntent>) {
        self.intent_queue.extend(intents);
    }

    /// Update the player ship pose. The presentation layer owns flight.
    pub fn set_player_pose(&mut self, position: Position, heading: f64) {
        self.player.set_pose(position, heading);
    }

    /// A scale of 0 freezes the simulation: steps return snapshots but no
    /// time passes and no system runs.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = clamp_time_scale(scale);
    }

    /// Advance the simulation by `dt` wall-clock seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> CombatSnapshot {
        self.process_intents();

        // A zero-length step (time scale 0) holds the world still, like a pause.
        let dt = self.step_dt(dt);
        if self.phase == GamePhase::Active && dt > 0.0 {
            self.time.advance(dt);
            self.run_systems(dt);
        }

        self.latched = LatchedIntents::default();
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            &self.field,
            &self.fleet,
            &self.player,
            &self.targeting,
            &self.score,
            events,
        )
    }

    /// `tick`, then forward the step's events to `observer`.
    pub fn tick_observed<O: CombatObserver + ?Sized>(&mut self, dt: f64, observer: &mut O) -> CombatSnapshot {
        let snapshot = self.tick(dt);
        events::dispatch(&snapshot.events, observer);
        snapshot
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn asteroid_field(&self) -> &AsteroidField {
        &self.field
    }

    pub fn hostile_fleet(&self) -> &HostileFleet {
        &self.fleet
    }

    pub fn player(&self) -> &PlayerShip {
        &self.player
    }

    pub fn lock(&self) -> Option<&TargetLock> {
        self.targeting.lock()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Place an asteroid of `size` at `position` (for tests).
    #[cfg(test)]
    pub fn spawn_test_asteroid(&mut self, position: Position, size: f64) -> usize {
        let id = crate::world_setup::next_entity_id(&mut self.next_entity_id);
        self.field.insert(crate::world_setup::asteroid_at(id, position, size))
    }

    /// Place a stationary enemy of `class` at `position` (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, class: skirmish_core::enums::EnemyClass, position: Position) -> usize {
        let id = crate::world_setup::next_entity_id(&mut self.next_entity_id);
        self.fleet.insert(crate::world_setup::enemy_at(id, class, position))
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerShip {
        &mut self.player
    }

    /// Process all queued intents. Pause and resume apply at once; weapon
    /// and targeting intents are latched for this step.
    fn process_intents(&mut self) {
        while let Some(intent) = self.intent_queue.pop_front() {
            match intent {
                PlayerIntent::Pause => {
                    if self.phase == GamePhase::Active {
                        self.phase = GamePhase::Paused;
                    }
                }
                PlayerIntent::Resume => {
                    if self.phase == GamePhase::Paused {
                        self.phase = GamePhase::Active;
                    }
                }
                PlayerIntent::FireRailgun => self.latched.fire.railgun = true,
                PlayerIntent::FireMissile => self.latched.fire.missile = true,
                PlayerIntent::FirePdc => self.latched.fire.pdc = true,
                PlayerIntent::TogglePdc => {
                    if self.phase == GamePhase::Active {
                        let active = self.player.toggle_pdc();
                        log::debug!("pdc {}", if active { "online" } else { "offline" });
                    }
                }
                PlayerIntent::CycleTarget | PlayerIntent::LockNearest => {
                    self.latched.targeting.push(intent);
                }
            }
        }
    }

    /// Scale the frame delta and cap it, bounding the integration error of
    /// one long frame.
    fn step_dt(&self, dt: f64) -> f64 {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring invalid step delta {dt}");
            return 0.0;
        }
        let scaled = dt * self.time_scale;
        if scaled > MAX_STEP_DT {
            log::debug!("step delta {scaled:.3}s clamped to {MAX_STEP_DT}s");
            return MAX_STEP_DT;
        }
        scaled
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. Respawns and damage flashes
        systems::respawn::run(
            &mut self.field,
            &mut self.fleet,
            &mut self.rng,
            &mut self.next_entity_id,
            now,
            dt,
            &mut self.events,
        );

        // 2. Player weapons and ordnance flight
        let pdc_target = self.targeting.target_position(&self.field, &self.fleet);
        systems::weapons::run(
            &mut self.player,
            self.latched.fire,
            pdc_target,
            dt,
            &mut self.score,
            &mut self.events,
        );

        // 3. Combat resolution
        systems::combat::run(
            &mut self.player,
            &mut self.field,
            &mut self.fleet,
            now,
            &mut self.score,
            &mut self.events,
        );

        // 4. Asteroid drift
        self.field.update(dt);

        // 5. Fleet AI, movement and hostile fire
        systems::fleet_ai::run(&mut self.fleet, &mut self.player, dt, &mut self.events);

        // 6. Targeting
        self.targeting.validate(&self.field, &self.fleet, &mut self.events);
        let position = self.player.position;
        for intent in std::mem::take(&mut self.latched.targeting) {
            match intent {
                PlayerIntent::CycleTarget => {
                    self.targeting
                        .cycle_target(&position, &self.field, &self.fleet, &mut self.events);
                }
                PlayerIntent::LockNearest => {
                    self.targeting
                        .lock_nearest(&position, &self.field, &self.fleet, &mut self.events);
                }
                _ => {}
            }
        }

        // 7. Defeat
        if !self.player.is_alive() {
            log::info!("mission failed at {:.1}s", now);
            self.phase = GamePhase::Defeated;
        }
    }
}

fn clamp_time_scale(scale: f64) -> f64 {
    if (0.0..=MAX_TIME_SCALE).contains(&scale) {
        return scale;
    }
    let clamped = if scale.is_nan() { 1.0 } else { scale.clamp(0.0, MAX_TIME_SCALE) };
    log::warn!("time scale {scale} out of range, using {clamped}");
    clamped
}
