//! Player movement and collision resolution
//!
//! Direction changes apply immediately; the move itself happens on the
//! player auto-move timer. Resolution after a move runs in a fixed order:
//! egg pickup, golden egg, escape-zone delivery, chicken contact.

use super::grid::{Direction, in_bounds, is_escape_zone};
use super::state::{GameEvent, GameMode, GameOverReason, GameState};
use crate::achievements::AchievementId;
use crate::challenges::ChallengeId;

impl GameState {
    /// Turn the player. Reversals and commands outside play are ignored.
    pub fn set_direction(&mut self, dir: Direction) {
        if self.mode != GameMode::Playing {
            log::debug!("set_direction ignored in {:?}", self.mode);
            return;
        }
        if dir == self.player.facing.opposite() {
            return;
        }
        self.player.facing = dir;
    }

    /// Move the player one cell along its facing and resolve what it lands on
    pub fn step_player(&mut self) {
        if self.mode != GameMode::Playing {
            return;
        }
        let candidate = self.player.pos + self.player.facing.delta();
        if !in_bounds(candidate, self.grid_size()) {
            // Blocked by the wall
            return;
        }
        self.player.pos = candidate;

        self.try_pickup_egg();
        self.try_pickup_golden_egg();
        self.try_deliver_egg();
        self.resolve_contact();
    }

    fn try_pickup_egg(&mut self) {
        let pos = self.player.pos;
        if self.player.carrying_egg || !self.eggs.remove(pos) {
            return;
        }
        self.player.carrying_egg = true;
        self.eggs_collected_this_level += 1;
        self.progress.counters.eggs_collected += 1;
        let total = self.progress.counters.eggs_collected;

        self.progress.award(self.tuning.egg_points);
        self.progress
            .update_achievement(AchievementId::EggCollector, total);
        self.progress
            .update_challenge(ChallengeId::QuickCollector, total);
        self.push_event(GameEvent::EggCollected { pos });
    }

    fn try_pickup_golden_egg(&mut self) {
        let pos = self.player.pos;
        if self.eggs.golden != Some(pos) {
            return;
        }
        self.eggs.golden = None;
        self.player.powered_up = true;
        self.player.power_up_remaining = self.tuning.power_up_seconds;
        self.progress.counters.golden_eggs_collected += 1;
        let total = self.progress.counters.golden_eggs_collected;

        self.progress.award(self.tuning.golden_egg_points);
        self.progress
            .update_achievement(AchievementId::GoldenHunter, total);
        self.push_event(GameEvent::GoldenEggCollected { pos });
    }

    fn try_deliver_egg(&mut self) {
        let pos = self.player.pos;
        if !self.player.carrying_egg || !is_escape_zone(pos) {
            return;
        }
        self.player.carrying_egg = false;
        self.eggs.record_delivery(pos);
        self.progress.award(self.tuning.delivery_points);
        self.push_event(GameEvent::EggDelivered { pos });

        if self.eggs.is_cleared() {
            self.complete_level();
        }
    }

    /// Hit the player if it shares a cell with the chicken.
    ///
    /// Called after both player and chicken moves; only acts while playing.
    pub(crate) fn resolve_contact(&mut self) {
        if self.mode == GameMode::Playing && self.player.pos == self.chicken.pos {
            self.on_hit();
        }
    }

    fn on_hit(&mut self) {
        self.player.recently_hit = true;
        self.hit_this_level = true;
        self.scheduler
            .schedule_hit_recovery(self.tuning.hit_flash(), self.player.generation);

        self.player.lives = self.player.lives.saturating_sub(1);
        self.push_event(GameEvent::PlayerHit {
            lives_left: self.player.lives,
        });

        if self.player.carrying_egg {
            self.player.carrying_egg = false;
            if let Some(pos) = self.random_free_cell() {
                self.eggs.insert(pos);
                self.push_event(GameEvent::EggDropped { pos });
            }
        }

        if self.player.lives == 0 {
            self.end_game(GameOverReason::OutOfLives);
        }
    }

    /// Clear the hit flash unless the player has been rebuilt since
    pub(crate) fn recover_from_hit(&mut self, generation: u64) {
        if generation == self.player.generation {
            self.player.recently_hit = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::tuning::Tuning;

    /// Level 1 in play with a known layout: one egg at (2,3), no golden egg
    fn playing() -> GameState {
        let tuning = Tuning {
            golden_egg_chance: 0.0,
            ..Tuning::default()
        };
        let mut state = GameState::with_tuning(7, tuning);
        state.mode = GameMode::Menu;
        state.start_game();
        state.eggs = Default::default();
        state.eggs.insert(IVec2::new(2, 3));
        state.player.pos = IVec2::new(2, 2);
        state.player.facing = Direction::Down;
        state.chicken.pos = IVec2::new(9, 9);
        state.drain_events();
        state
    }

    #[test]
    fn test_no_reverse() {
        let mut state = playing();
        state.player.facing = Direction::Right;
        state.set_direction(Direction::Left);
        assert_eq!(state.player.facing, Direction::Right);
        state.set_direction(Direction::Up);
        assert_eq!(state.player.facing, Direction::Up);
        state.player.facing = Direction::Right;
        state.set_direction(Direction::Down);
        assert_eq!(state.player.facing, Direction::Down);
    }

    #[test]
    fn test_direction_ignored_when_paused() {
        let mut state = playing();
        state.pause_game();
        state.set_direction(Direction::Left);
        assert_eq!(state.player.facing, Direction::Down);
    }

    #[test]
    fn test_basic_pickup() {
        let mut state = playing();
        state.eggs.insert(IVec2::new(6, 6));
        state.step_player();
        assert_eq!(state.player.pos, IVec2::new(2, 3));
        assert!(!state.eggs.contains(IVec2::new(2, 3)));
        assert_eq!(state.eggs.len(), 1);
        assert!(state.player.carrying_egg);
        assert_eq!(state.score(), 10);
        assert_eq!(state.eggs_collected_this_level, 1);
        assert_eq!(state.progress.counters.eggs_collected, 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::EggCollected {
                pos: IVec2::new(2, 3)
            }]
        );
    }

    #[test]
    fn test_carry_limit() {
        let mut state = playing();
        state.eggs.insert(IVec2::new(2, 4));
        state.step_player();
        state.step_player();
        assert_eq!(state.player.pos, IVec2::new(2, 4));
        // Second egg stays on the field while carrying
        assert!(state.eggs.contains(IVec2::new(2, 4)));
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_wall_blocks_move() {
        let mut state = playing();
        state.player.pos = IVec2::new(0, 9);
        state.player.facing = Direction::Down;
        state.step_player();
        assert_eq!(state.player.pos, IVec2::new(0, 9));
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_escape_delivery_completes_level() {
        let mut state = playing();
        state.eggs = Default::default();
        state.player.carrying_egg = true;
        state.player.pos = IVec2::new(1, 3);
        state.player.facing = Direction::Left;
        state.time_left = 42;
        state.step_player();
        assert_eq!(state.player.pos, IVec2::new(0, 3));
        assert!(!state.player.carrying_egg);
        assert_eq!(state.eggs.collected(), &[IVec2::new(0, 3)]);
        assert_eq!(state.mode, GameMode::LevelComplete);
        assert!(!state.is_running());
        // Delivery, time bonus, then speed runner and untouchable rewards
        let expected = 20
            + 42 * 2
            + ChallengeId::SpeedRunner.reward()
            + ChallengeId::Untouchable.reward();
        assert_eq!(state.score(), expected);
    }

    #[test]
    fn test_final_delivery_onto_chicken_is_not_a_hit() {
        let mut state = playing();
        state.eggs = Default::default();
        state.player.carrying_egg = true;
        state.player.pos = IVec2::new(1, 3);
        state.player.facing = Direction::Left;
        state.chicken.pos = IVec2::new(0, 3);
        state.step_player();
        assert_eq!(state.player.pos, state.chicken.pos);
        assert_eq!(state.mode, GameMode::LevelComplete);
        // Level already over when contact is checked
        assert_eq!(state.player.lives, 3);
        assert!(!state.player.recently_hit);
        assert!(!state.hit_this_level);
        let events = state.drain_events();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::PlayerHit { .. }))
        );
        assert!(events.contains(&GameEvent::EggDelivered {
            pos: IVec2::new(0, 3)
        }));
    }

    #[test]
    fn test_delivery_with_eggs_left_keeps_playing() {
        let mut state = playing();
        state.player.carrying_egg = true;
        state.player.pos = IVec2::new(1, 5);
        state.player.facing = Direction::Left;
        state.step_player();
        assert_eq!(state.score(), 20);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_golden_egg_blocks_completion() {
        let mut state = playing();
        state.eggs = Default::default();
        state.eggs.golden = Some(IVec2::new(5, 5));
        state.player.carrying_egg = true;
        state.player.pos = IVec2::new(1, 3);
        state.player.facing = Direction::Left;
        state.step_player();
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_golden_egg_power_up() {
        let mut state = playing();
        state.eggs.remove(IVec2::new(2, 3));
        state.eggs.insert(IVec2::new(6, 6));
        state.eggs.golden = Some(IVec2::new(2, 3));
        state.step_player();
        assert!(state.eggs.golden.is_none());
        assert!(state.player.powered_up);
        assert_eq!(state.player.power_up_remaining, 10);
        assert_eq!(state.score(), 50);
        assert_eq!(state.progress.counters.golden_eggs_collected, 1);
    }

    #[test]
    fn test_contact_drops_carried_egg() {
        let mut state = playing();
        state.player.carrying_egg = true;
        state.eggs = Default::default();
        state.eggs.insert(IVec2::new(7, 7));
        state.chicken.pos = IVec2::new(2, 3);
        state.step_player();
        assert_eq!(state.player.lives, 2);
        assert!(state.player.recently_hit);
        assert!(state.hit_this_level);
        assert!(!state.player.carrying_egg);
        assert_eq!(state.eggs.len(), 2);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_pickup_and_contact_same_step() {
        let mut state = playing();
        state.chicken.pos = IVec2::new(2, 3);
        state.step_player();
        // Egg picked up, then immediately knocked loose
        assert_eq!(state.score(), 10);
        assert_eq!(state.player.lives, 2);
        assert!(!state.player.carrying_egg);
        assert_eq!(state.eggs.len(), 1);
    }

    #[test]
    fn test_lethal_contact_ends_game() {
        let mut state = playing();
        state.player.lives = 1;
        state.chicken.pos = IVec2::new(2, 3);
        state.step_player();
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.mode, GameMode::GameOver);
        assert!(!state.is_running());
    }

    #[test]
    fn test_stale_recovery_is_ignored() {
        let mut state = playing();
        state.player.recently_hit = true;
        let old = state.player.generation;
        state.setup_level();
        state.player.recently_hit = true;
        state.recover_from_hit(old);
        assert!(state.player.recently_hit);
        state.recover_from_hit(state.player.generation);
        assert!(!state.player.recently_hit);
    }
}
