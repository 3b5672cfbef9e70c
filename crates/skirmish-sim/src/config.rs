//! Simulation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skirmish_core::constants::{ASTEROID_COUNT, ASTEROID_RESPAWN_SECS, ENEMY_RESPAWN_SECS};

pub const MAX_TIME_SCALE: f64 = 4.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("time scale {0} is outside 0..=4")]
    InvalidTimeScale(f64),
    #[error("{name} must be a non-negative number of seconds, got {value}")]
    NegativeDelay { name: &'static str, value: f64 },
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Multiplier applied to every step delta (1.0 = normal).
    pub time_scale: f64,
    pub asteroid_count: usize,
    /// Spawn the opening enemy wave.
    pub spawn_enemies: bool,
    pub asteroid_respawn_secs: f64,
    pub enemy_respawn_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            asteroid_count: ASTEROID_COUNT,
            spawn_enemies: true,
            asteroid_respawn_secs: ASTEROID_RESPAWN_SECS,
            enemy_respawn_secs: ENEMY_RESPAWN_SECS,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::InvalidTimeScale(self.time_scale));
        }
        for (name, value) in [
            ("asteroid_respawn_secs", self.asteroid_respawn_secs),
            ("enemy_respawn_secs", self.enemy_respawn_secs),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeDelay { name, value });
            }
        }
        Ok(())
    }
}
