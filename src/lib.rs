//! Egg Dash - A grid arcade game
//!
//! A snake steals eggs from a pursuing chicken and banks them at the
//! border. Rendering and input live outside this crate; they read
//! [`sim::GameState`] and issue commands against it.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, chicken AI, timers, game flow)
//! - `progress`: Score, lifetime counters and unlock evaluation
//! - `achievements`, `challenges`, `skins`: Progression catalogs
//! - `leaderboard`: Session leaderboard
//! - `tuning`: Data-driven game balance

pub mod achievements;
pub mod challenges;
pub mod leaderboard;
pub mod progress;
pub mod sim;
pub mod skins;
pub mod tuning;

pub use leaderboard::Leaderboard;
pub use progress::{Progress, Unlock};
pub use sim::{Direction, GameEvent, GameMode, GameState, Position, Snapshot};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Clock countdown period (ms)
    pub const CLOCK_PERIOD_MS: u64 = 1000;
    /// Player auto-move period (ms)
    pub const PLAYER_PERIOD_MS: u64 = 300;
    /// Cosmetic animation toggle period (ms)
    pub const ANIMATION_PERIOD_MS: u64 = 500;
    /// How long the "recently hit" flash lasts (ms)
    pub const HIT_FLASH_MS: u64 = 500;

    /// Points for picking up an egg
    pub const EGG_POINTS: u64 = 10;
    /// Points for picking up the golden egg
    pub const GOLDEN_EGG_POINTS: u64 = 50;
    /// Points for banking an egg in the escape zone
    pub const DELIVERY_POINTS: u64 = 20;
    /// Bonus points per second left on the clock at level completion
    pub const TIME_BONUS_PER_SECOND: u64 = 2;

    /// Golden egg power-up duration (seconds)
    pub const POWER_UP_SECONDS: u32 = 10;
    /// Chance a level spawns a golden egg
    pub const GOLDEN_EGG_CHANCE: f64 = 0.3;
    /// Manhattan distance at which the chicken starts chasing
    pub const CHASE_RADIUS: i32 = 3;
    /// Seconds that must remain for a level to count as a fast finish
    pub const FAST_FINISH_SECONDS: u32 = 10;
    /// Lives at the start of every level
    pub const STARTING_LIVES: u8 = 3;

    /// Validity window of a daily challenge (seconds)
    pub const DAILY_CHALLENGE_SECONDS: u64 = 24 * 60 * 60;
}
