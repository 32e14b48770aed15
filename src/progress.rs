//! Score, lifetime counters and unlock evaluation
//!
//! Every score change goes through [`Progress::award`], which refreshes the
//! leaderboard and re-checks skin thresholds. Unlocked/completed flags are
//! sticky: only [`Progress::reset_all`] clears them.

use serde::Serialize;

use crate::achievements::{Achievement, AchievementId, default_achievements};
use crate::challenges::{ChallengeId, DailyChallenge, daily_set};
use crate::leaderboard::Leaderboard;
use crate::skins::{Skin, SkinId, default_skins};

/// Lifetime counters (cleared on restart and reset)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub eggs_collected: u32,
    pub golden_eggs_collected: u32,
    /// Levels finished with no chicken contact
    pub hitless_levels: u32,
    /// Levels finished with enough time left
    pub fast_finishes: u32,
}

/// Something that became unlocked or completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unlock {
    Achievement(AchievementId),
    Challenge(ChallengeId),
    Skin(SkinId),
}

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub score: u64,
    pub counters: Counters,
    pub achievements: Vec<Achievement>,
    pub challenges: Vec<DailyChallenge>,
    pub skins: Vec<Skin>,
    pub selected_skin: SkinId,
    pub leaderboard: Leaderboard,
    /// Unlocks not yet handed to the caller
    #[serde(skip)]
    unlocks: Vec<Unlock>,
}

impl Progress {
    /// Fresh progression with challenges issued at `now` (Unix seconds)
    pub fn new(now: u64) -> Self {
        Self {
            score: 0,
            counters: Counters::default(),
            achievements: default_achievements(),
            challenges: daily_set(now),
            skins: default_skins(),
            selected_skin: SkinId::default(),
            leaderboard: Leaderboard::new(),
            unlocks: Vec::new(),
        }
    }

    /// Add points, refresh the leaderboard and re-check skins
    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
        self.leaderboard.record(self.score);
        self.evaluate_unlocks();
    }

    /// Unlock every skin whose threshold the score has reached
    pub fn evaluate_unlocks(&mut self) {
        for skin in &mut self.skins {
            if !skin.unlocked && skin.threshold <= self.score {
                skin.unlocked = true;
                log::info!("Skin unlocked: {}", skin.name);
                self.unlocks.push(Unlock::Skin(skin.id));
            }
        }
    }

    /// Overwrite an achievement's progress; pays out on first unlock
    pub fn update_achievement(&mut self, id: AchievementId, progress: u32) {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) else {
            return;
        };
        if achievement.record(progress) {
            let reward = achievement.reward;
            log::info!("Achievement unlocked: {} (+{})", achievement.name, reward);
            self.unlocks.push(Unlock::Achievement(id));
            self.award(reward);
        }
    }

    /// Overwrite a daily challenge's progress; pays out on first completion
    pub fn update_challenge(&mut self, id: ChallengeId, progress: u32) {
        let Some(challenge) = self.challenges.iter_mut().find(|c| c.id == id) else {
            return;
        };
        if challenge.record(progress) {
            let reward = challenge.reward;
            log::info!("Daily challenge completed: {} (+{})", challenge.name, reward);
            self.unlocks.push(Unlock::Challenge(id));
            self.award(reward);
        }
    }

    /// Make `id` the only selected skin.
    ///
    /// Lock state is not checked; callers only offer unlocked skins.
    pub fn select_skin(&mut self, id: SkinId) {
        for skin in &mut self.skins {
            skin.selected = skin.id == id;
        }
        self.selected_skin = id;
    }

    /// Clear score and lifetime counters, keeping unlocks.
    ///
    /// The leaderboard follows the score back to zero.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.counters = Counters::default();
        self.leaderboard.record(self.score);
    }

    /// Back to factory defaults with a fresh challenge set issued at `now`
    pub fn reset_all(&mut self, now: u64) {
        self.score = 0;
        self.counters = Counters::default();
        self.achievements = default_achievements();
        self.challenges = daily_set(now);
        self.skins = default_skins();
        self.selected_skin = SkinId::default();
        self.leaderboard.clear();
        self.unlocks.clear();
        self.evaluate_unlocks();
    }

    /// Hand over unlocks recorded since the last call
    pub fn take_unlocks(&mut self) -> Vec<Unlock> {
        std::mem::take(&mut self.unlocks)
    }

    pub fn achievement(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn challenge(&self, id: ChallengeId) -> Option<&DailyChallenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn skin(&self, id: SkinId) -> Option<&Skin> {
        self.skins.iter().find(|s| s.id == id)
    }
}
