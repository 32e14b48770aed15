//! Game flow: mode transitions and the commands that drive them
//!
//! ```text
//! Splash -> Menu -> Playing <-> Paused
//! Playing -> LevelComplete | GameOver | GameComplete
//! LevelComplete -> Playing (next level) | Menu
//! GameOver -> Playing (restart) | Menu
//! Menu <-> Achievements | Customization
//! ```
//!
//! Commands issued in a mode that does not accept them are ignored.

use super::level::{LEVEL_COUNT, level};
use super::state::{GameEvent, GameMode, GameOverReason, GameState};
use crate::achievements::AchievementId;
use crate::challenges::{ChallengeId, unix_now};
use crate::skins::SkinId;

impl GameState {
    /// Set up the current level and start playing it
    pub fn start_game(&mut self) {
        if !matches!(
            self.mode,
            GameMode::Menu | GameMode::LevelComplete | GameMode::GameOver
        ) {
            log::debug!("start_game ignored in {:?}", self.mode);
            return;
        }
        self.begin_level();
    }

    fn begin_level(&mut self) {
        self.setup_level();
        self.mode = GameMode::Playing;
        self.scheduler.start();
        self.progress.evaluate_unlocks();
        log::info!(
            "Level {} ({}) started",
            self.level,
            self.current_level().name
        );
        self.push_event(GameEvent::LevelStarted { level: self.level });
    }

    /// Bank the time bonus and settle end-of-level progress
    pub(crate) fn complete_level(&mut self) {
        self.scheduler.stop();

        let time_bonus = u64::from(self.time_left) * self.tuning.time_bonus_per_second;
        self.progress.award(time_bonus);
        self.progress.evaluate_unlocks();

        if self.time_left >= self.tuning.fast_finish_seconds {
            self.progress.counters.fast_finishes += 1;
            let fast = self.progress.counters.fast_finishes;
            self.progress
                .update_achievement(AchievementId::SpeedRunner, fast);
            self.progress.update_challenge(ChallengeId::SpeedRunner, fast);
        }
        if !self.hit_this_level {
            self.progress.counters.hitless_levels += 1;
            let hitless = self.progress.counters.hitless_levels;
            self.progress
                .update_achievement(AchievementId::Untouchable, hitless);
            self.progress
                .update_challenge(ChallengeId::Untouchable, hitless);
        }

        log::info!(
            "Level {} complete, time bonus {} (score {})",
            self.level,
            time_bonus,
            self.progress.score
        );
        self.push_event(GameEvent::LevelComplete {
            level: self.level,
            time_bonus,
        });

        if self.level >= LEVEL_COUNT {
            self.finish_game();
        } else {
            self.mode = GameMode::LevelComplete;
        }
    }

    fn finish_game(&mut self) {
        self.scheduler.stop();
        self.mode = GameMode::GameComplete;
        log::info!("All levels cleared (score {})", self.progress.score);
        self.push_event(GameEvent::GameComplete);
    }

    /// Move on from a completed level
    pub fn next_level(&mut self) {
        if self.mode != GameMode::LevelComplete {
            log::debug!("next_level ignored in {:?}", self.mode);
            return;
        }
        if self.level + 1 > LEVEL_COUNT {
            self.finish_game();
            return;
        }
        self.level += 1;
        self.begin_level();
    }

    /// End the round (clock ran out or no lives left)
    pub(crate) fn end_game(&mut self, reason: GameOverReason) {
        self.scheduler.stop();
        self.mode = GameMode::GameOver;
        log::info!(
            "Game over on level {}: {:?} (score {})",
            self.level,
            reason,
            self.progress.score
        );
        self.push_event(GameEvent::GameOver { reason });
    }

    /// Back to level one with score and lifetime counters cleared.
    ///
    /// Achievements, challenges and skins are kept.
    pub fn restart_game(&mut self) {
        if !matches!(
            self.mode,
            GameMode::GameOver | GameMode::GameComplete | GameMode::LevelComplete | GameMode::Paused
        ) {
            log::debug!("restart_game ignored in {:?}", self.mode);
            return;
        }
        self.level = 1;
        self.progress.reset_session();
        self.progress.evaluate_unlocks();
        self.begin_level();
    }

    /// Factory reset of all progression; returns to the menu
    pub fn reset_game(&mut self) {
        self.scheduler.stop();
        self.level = 1;
        self.progress.reset_all(unix_now());
        self.setup_level();
        self.mode = GameMode::Menu;
        log::info!("Progress reset");
    }

    /// Toggle between playing and paused
    pub fn pause_game(&mut self) {
        match self.mode {
            GameMode::Playing => {
                self.scheduler.stop();
                self.mode = GameMode::Paused;
            }
            GameMode::Paused => {
                self.scheduler.start();
                self.mode = GameMode::Playing;
            }
            _ => log::debug!("pause_game ignored in {:?}", self.mode),
        }
    }

    pub fn go_to_menu(&mut self) {
        self.scheduler.stop();
        self.mode = GameMode::Menu;
    }

    pub fn show_achievements(&mut self) {
        if self.mode == GameMode::Menu {
            self.mode = GameMode::Achievements;
        }
    }

    pub fn show_customization(&mut self) {
        if self.mode == GameMode::Menu {
            self.progress.evaluate_unlocks();
            self.mode = GameMode::Customization;
        }
    }

    /// Choose the level the next `start_game` plays
    pub fn select_level(&mut self, number: u32) {
        if self.mode != GameMode::Menu || level(number).is_none() {
            log::debug!("select_level({}) ignored in {:?}", number, self.mode);
            return;
        }
        self.level = number;
    }

    /// Wear a skin (callers only offer unlocked ones)
    pub fn select_skin(&mut self, id: SkinId) {
        self.progress.select_skin(id);
        self.player.skin = id;
    }
}
