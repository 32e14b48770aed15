//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only through `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod chicken;
pub mod grid;
pub mod level;
pub mod lifecycle;
pub mod movement;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use autopilot::suggest_direction;
pub use chicken::pursuit_step;
pub use grid::{Direction, Position, in_bounds, is_escape_zone, manhattan};
pub use level::{LEVEL_COUNT, LEVELS, Level, level};
pub use scheduler::{Due, Scheduler, TimerKind};
pub use state::{
    Chicken, EggField, GameEvent, GameMode, GameOverReason, GameState, Player, Snapshot,
};
pub use tick::tick;
