//! Achievement catalog
//!
//! Achievements track lifetime counters. Progress is overwritten with the
//! caller's cumulative value; the unlocked flag is sticky until a full reset.

use serde::Serialize;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementId {
    EggCollector, // Collect 50 eggs
    GoldenHunter, // Collect 5 golden eggs
    SpeedRunner,  // Finish 3 levels with time to spare
    Untouchable,  // Finish 3 levels without being pecked
}

impl AchievementId {
    pub const ALL: [AchievementId; 4] = [
        AchievementId::EggCollector,
        AchievementId::GoldenHunter,
        AchievementId::SpeedRunner,
        AchievementId::Untouchable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::EggCollector => "Egg Collector",
            Self::GoldenHunter => "Golden Hunter",
            Self::SpeedRunner => "Speed Runner",
            Self::Untouchable => "Untouchable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::EggCollector => "Collect 50 eggs",
            Self::GoldenHunter => "Collect 5 golden eggs",
            Self::SpeedRunner => "Finish 3 levels with at least 10 seconds left",
            Self::Untouchable => "Finish 3 levels without getting pecked",
        }
    }

    pub fn target(&self) -> u32 {
        match self {
            Self::EggCollector => 50,
            Self::GoldenHunter => 5,
            Self::SpeedRunner => 3,
            Self::Untouchable => 3,
        }
    }

    /// Points awarded on unlock
    pub fn reward(&self) -> u64 {
        match self {
            Self::EggCollector => 100,
            Self::GoldenHunter => 150,
            Self::SpeedRunner => 200,
            Self::Untouchable => 250,
        }
    }
}

/// An achievement and its progress
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub progress: u32,
    pub unlocked: bool,
    pub reward: u64,
}

impl Achievement {
    pub fn new(id: AchievementId) -> Self {
        Self {
            id,
            name: id.name(),
            description: id.description(),
            target: id.target(),
            progress: 0,
            unlocked: false,
            reward: id.reward(),
        }
    }

    /// Record progress; returns true if this call unlocked it
    pub fn record(&mut self, progress: u32) -> bool {
        self.progress = progress;
        if !self.unlocked && self.progress >= self.target {
            self.unlocked = true;
            return true;
        }
        false
    }
}

/// Fresh, locked set of every achievement
pub fn default_achievements() -> Vec<Achievement> {
    AchievementId::ALL.into_iter().map(Achievement::new).collect()
}
