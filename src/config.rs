//! Tuning constants for a battle, loadable from RON.

use crate::errors::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inclusive range a generated attack's power is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRange {
    pub min: u32,
    pub max: u32,
}

impl PowerRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, power: u32) -> bool {
        (self.min..=self.max).contains(&power)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Ticks per second of the driving game loop.
    pub framerate: u32,
    /// Pause before the opponent side starts resolving.
    pub delay_choose: u32,
    /// How long the outcome stays on screen before the battle ends.
    pub delay_outcome: u32,
    /// Pause before each autonomous opponent attack.
    pub delay_switch_turn: u32,
    pub starting_health: i32,
    pub trainer_power: PowerRange,
    pub opponent_power: PowerRange,
    pub trainer_roster_size: usize,
    pub max_opponent_count: usize,
    /// Fixed seed for replayable battles; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        let framerate = 60;
        Self {
            framerate,
            delay_choose: framerate,
            delay_outcome: framerate * 2,
            delay_switch_turn: framerate / 2,
            starting_health: 200,
            trainer_power: PowerRange::new(40, 80),
            opponent_power: PowerRange::new(30, 60),
            trainer_roster_size: 2,
            max_opponent_count: 1,
            seed: None,
        }
    }
}

impl BattleConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_ron_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for range in [self.trainer_power, self.opponent_power] {
            if range.min > range.max {
                return Err(ConfigError::InvalidPowerRange {
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.trainer_roster_size == 0 {
            return Err(ConfigError::ZeroCount("trainer_roster_size"));
        }
        if self.max_opponent_count == 0 {
            return Err(ConfigError::ZeroCount("max_opponent_count"));
        }
        Ok(())
    }

    pub fn power_range(&self, side: schema::Side) -> PowerRange {
        match side {
            schema::Side::Trainer => self.trainer_power,
            schema::Side::Opponent => self.opponent_power,
        }
    }
}
