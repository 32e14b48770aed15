//! Chicken behaviour
//!
//! Inside the chase radius the chicken closes in greedily, one axis at a
//! time; outside it wanders. Moves that would leave the grid are dropped.

use glam::IVec2;
use rand::Rng;

use super::grid::{Direction, in_bounds, manhattan};
use super::state::{GameMode, GameState};

/// One greedy step from `from` toward `to`.
///
/// The axis with the larger gap moves; vertical wins ties.
pub fn pursuit_step(from: IVec2, to: IVec2) -> IVec2 {
    let d = to - from;
    if d.x.abs() > d.y.abs() {
        IVec2::new(d.x.signum(), 0)
    } else {
        IVec2::new(0, d.y.signum())
    }
}

impl GameState {
    /// Advance the chicken one step
    pub fn step_chicken(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        let from = self.chicken.pos;
        let distance = manhattan(from, self.player.pos);

        let step = if distance <= self.tuning.chase_radius {
            self.chicken.attacking = true;
            pursuit_step(from, self.player.pos)
        } else {
            self.chicken.attacking = false;
            let i = self.rng().random_range(0..Direction::ALL.len());
            Direction::ALL[i].delta()
        };

        let candidate = from + step;
        if step != IVec2::ZERO && in_bounds(candidate, self.grid_size()) {
            self.chicken.pos = candidate;
            if let Some(dir) = Direction::from_delta(step) {
                self.chicken.facing = dir;
            }
        }

        self.resolve_contact();
    }
}
