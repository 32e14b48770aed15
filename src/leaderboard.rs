//! Session leaderboard
//!
//! Holds a single entry for the local player, refreshed on every scoring
//! event. No history is kept.

use serde::Serialize;

/// Name shown for the local player
pub const PLAYER_NAME: &str = "you";

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}

/// Leaderboard, sorted by score descending
#[derive(Debug, Clone, Default, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the local player's entry to `score`
    pub fn record(&mut self, score: u64) {
        match self.entries.iter_mut().find(|e| e.name == PLAYER_NAME) {
            Some(entry) => entry.score = score,
            None => self.entries.push(LeaderboardEntry {
                name: PLAYER_NAME.to_string(),
                score,
            }),
        }
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// The local player's current score, if recorded
    pub fn player_score(&self) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.name == PLAYER_NAME)
            .map(|e| e.score)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_entry() {
        let mut board = Leaderboard::new();
        assert!(board.entries.is_empty());
        board.record(10);
        board.record(30);
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.player_score(), Some(30));
    }

    #[test]
    fn test_clear() {
        let mut board = Leaderboard::new();
        board.record(5);
        board.clear();
        assert_eq!(board.player_score(), None);
    }
}
