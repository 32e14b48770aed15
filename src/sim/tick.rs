//! Simulation tick
//!
//! The driver (game loop, test, headless runner) calls [`tick`] with the
//! wall-clock time that passed. Timer events fire in chronological order,
//! so a game over partway through `dt` stops the events after it.

use std::time::Duration;

use super::scheduler::{Due, TimerKind};
use super::state::{GameEvent, GameMode, GameOverReason, GameState};

/// Advance the game by `dt`
pub fn tick(state: &mut GameState, dt: Duration) {
    let mut budget = dt;
    while let Some(due) = state.scheduler.pop_due(&mut budget) {
        match due {
            Due::Timer(TimerKind::Clock) => clock_tick(state),
            Due::Timer(TimerKind::Chicken) => state.step_chicken(),
            Due::Timer(TimerKind::Player) => state.step_player(),
            Due::Timer(TimerKind::Animation) => animation_tick(state),
            Due::HitRecovery { generation } => state.recover_from_hit(generation),
        }
    }
}

/// One second off the level clock and the power-up
fn clock_tick(state: &mut GameState) {
    if state.mode != GameMode::Playing {
        return;
    }
    state.time_left = state.time_left.saturating_sub(1);

    if state.player.powered_up {
        state.player.power_up_remaining = state.player.power_up_remaining.saturating_sub(1);
        if state.player.power_up_remaining == 0 {
            state.player.powered_up = false;
            state.push_event(GameEvent::PowerUpExpired);
        }
    }

    if state.time_left == 0 {
        state.end_game(GameOverReason::TimeUp);
    }
}

fn animation_tick(state: &mut GameState) {
    if state.mode == GameMode::Playing {
        state.chicken.wing_up = !state.chicken.wing_up;
    }
}
