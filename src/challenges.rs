//! Daily challenges
//!
//! A fresh set is generated at startup and on full reset. Each challenge
//! records the window it was issued for; the window is informational and
//! nothing expires a challenge.

use serde::Serialize;

use crate::consts::DAILY_CHALLENGE_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChallengeId {
    QuickCollector, // Collect 10 eggs
    SpeedRunner,    // One fast finish
    Untouchable,    // One hitless level
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 3] = [
        ChallengeId::QuickCollector,
        ChallengeId::SpeedRunner,
        ChallengeId::Untouchable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::QuickCollector => "Quick Collector",
            Self::SpeedRunner => "Beat the Clock",
            Self::Untouchable => "Not a Scratch",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::QuickCollector => "Collect 10 eggs today",
            Self::SpeedRunner => "Finish a level with at least 10 seconds left",
            Self::Untouchable => "Finish a level without getting pecked",
        }
    }

    pub fn target(&self) -> u32 {
        match self {
            Self::QuickCollector => 10,
            Self::SpeedRunner => 1,
            Self::Untouchable => 1,
        }
    }

    pub fn reward(&self) -> u64 {
        match self {
            Self::QuickCollector => 50,
            Self::SpeedRunner => 75,
            Self::Untouchable => 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyChallenge {
    pub id: ChallengeId,
    pub name: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub progress: u32,
    pub reward: u64,
    pub completed: bool,
    /// Unix seconds when the challenge was issued
    pub start: u64,
    /// Length of the window in seconds
    pub duration: u64,
}

impl DailyChallenge {
    pub fn new(id: ChallengeId, start: u64) -> Self {
        Self {
            id,
            name: id.name(),
            description: id.description(),
            target: id.target(),
            progress: 0,
            reward: id.reward(),
            completed: false,
            start,
            duration: DAILY_CHALLENGE_SECONDS,
        }
    }

    /// Record progress; returns true if this call completed it
    pub fn record(&mut self, progress: u32) -> bool {
        self.progress = progress;
        if !self.completed && self.progress >= self.target {
            self.completed = true;
            return true;
        }
        false
    }
}

/// Issue a fresh set of challenges starting at `start`
pub fn daily_set(start: u64) -> Vec<DailyChallenge> {
    ChallengeId::ALL
        .into_iter()
        .map(|id| DailyChallenge::new(id, start))
        .collect()
}

/// Current Unix time in seconds (0 if the clock is before the epoch)
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
