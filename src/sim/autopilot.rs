//! Idle/demo mode - a greedy bot that plays the game
//!
//! Heads for the nearest egg while empty-handed and for the nearest border
//! cell while carrying. Looks one step ahead only.

use glam::IVec2;

use super::grid::{Direction, Position, in_bounds, manhattan};
use super::state::{GameMode, GameState};

/// Direction the bot would steer, or `None` outside play
pub fn suggest_direction(state: &GameState) -> Option<Direction> {
    if state.mode != GameMode::Playing {
        return None;
    }
    let pos = state.player.pos;
    let target = if state.player.carrying_egg {
        // Closest escape-zone cell
        if pos.x <= pos.y {
            IVec2::new(0, pos.y)
        } else {
            IVec2::new(pos.x, 0)
        }
    } else {
        nearest_egg(state, pos)?
    };

    let size = state.grid_size();
    let facing = state.player.facing;
    Direction::ALL
        .into_iter()
        .filter(|d| *d != facing.opposite())
        .filter(|d| in_bounds(pos + d.delta(), size))
        .min_by_key(|d| {
            let next = pos + d.delta();
            let danger = if manhattan(next, state.chicken.pos) <= 1 { 100 } else { 0 };
            (manhattan(next, target) + danger, *d != facing)
        })
}

fn nearest_egg(state: &GameState, from: Position) -> Option<Position> {
    state
        .eggs
        .eggs()
        .iter()
        .copied()
        .chain(state.eggs.golden)
        .min_by_key(|e| manhattan(from, *e))
}
