//! Data-driven game balance
//!
//! Defaults mirror [`crate::consts`]. A tuning file may override any subset
//! of fields; missing fields keep their defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values read by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scoring ===
    pub egg_points: u64,
    pub golden_egg_points: u64,
    pub delivery_points: u64,
    pub time_bonus_per_second: u64,

    // === Rules ===
    pub power_up_seconds: u32,
    /// 0.0 - 1.0
    pub golden_egg_chance: f64,
    pub chase_radius: i32,
    pub fast_finish_seconds: u32,
    pub starting_lives: u8,

    // === Timers (ms) ===
    pub clock_period_ms: u64,
    pub player_period_ms: u64,
    pub animation_period_ms: u64,
    pub hit_flash_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            egg_points: EGG_POINTS,
            golden_egg_points: GOLDEN_EGG_POINTS,
            delivery_points: DELIVERY_POINTS,
            time_bonus_per_second: TIME_BONUS_PER_SECOND,

            power_up_seconds: POWER_UP_SECONDS,
            golden_egg_chance: GOLDEN_EGG_CHANCE,
            chase_radius: CHASE_RADIUS,
            fast_finish_seconds: FAST_FINISH_SECONDS,
            starting_lives: STARTING_LIVES,

            clock_period_ms: CLOCK_PERIOD_MS,
            player_period_ms: PLAYER_PERIOD_MS,
            animation_period_ms: ANIMATION_PERIOD_MS,
            hit_flash_ms: HIT_FLASH_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into ranges the simulation can run with
    pub fn sanitize(&mut self) {
        self.golden_egg_chance = self.golden_egg_chance.clamp(0.0, 1.0);
        self.starting_lives = self.starting_lives.max(1);
        self.chase_radius = self.chase_radius.max(0);
        self.clock_period_ms = self.clock_period_ms.max(1);
        self.player_period_ms = self.player_period_ms.max(1);
        self.animation_period_ms = self.animation_period_ms.max(1);
    }

    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(self.clock_period_ms)
    }

    pub fn player_period(&self) -> Duration {
        Duration::from_millis(self.player_period_ms)
    }

    pub fn animation_period(&self) -> Duration {
        Duration::from_millis(self.animation_period_ms)
    }

    pub fn hit_flash(&self) -> Duration {
        Duration::from_millis(self.hit_flash_ms)
    }
}
