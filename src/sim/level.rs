//! Static level catalog

use std::time::Duration;

use serde::Serialize;

/// Parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level {
    /// 1-based ordinal
    pub number: u32,
    pub name: &'static str,
    pub egg_count: usize,
    /// Seconds between chicken moves (smaller = faster)
    pub chicken_interval: f32,
    /// Seconds on the clock at level start
    pub time_limit: u32,
    /// Width and height of the square grid
    pub grid_size: i32,
    /// Presentation-only backdrop key
    pub background: &'static str,
}

impl Level {
    pub fn chicken_period(&self) -> Duration {
        Duration::from_millis((self.chicken_interval * 1000.0).round().max(1.0) as u64)
    }
}

pub const LEVEL_COUNT: u32 = 5;

pub static LEVELS: [Level; LEVEL_COUNT as usize] = [
    Level {
        number: 1,
        name: "Farmyard",
        egg_count: 3,
        chicken_interval: 1.0,
        time_limit: 60,
        grid_size: 10,
        background: "farm",
    },
    Level {
        number: 2,
        name: "Red Barn",
        egg_count: 5,
        chicken_interval: 0.8,
        time_limit: 75,
        grid_size: 12,
        background: "barn",
    },
    Level {
        number: 3,
        name: "Meadow",
        egg_count: 7,
        chicken_interval: 0.6,
        time_limit: 90,
        grid_size: 14,
        background: "meadow",
    },
    Level {
        number: 4,
        name: "Hen House",
        egg_count: 9,
        chicken_interval: 0.5,
        time_limit: 100,
        grid_size: 16,
        background: "henhouse",
    },
    Level {
        number: 5,
        name: "Midnight Coop",
        egg_count: 12,
        chicken_interval: 0.4,
        time_limit: 120,
        grid_size: 18,
        background: "night",
    },
];

/// Look up a level by its 1-based ordinal
pub fn level(number: u32) -> Option<&'static Level> {
    number
        .checked_sub(1)
        .and_then(|i| LEVELS.get(i as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered() {
        for (i, lvl) in LEVELS.iter().enumerate() {
            assert_eq!(lvl.number, i as u32 + 1);
            // Interior must fit every egg plus a golden egg and both agents
            let interior = ((lvl.grid_size - 2) * (lvl.grid_size - 2)) as usize;
            assert!(interior > lvl.egg_count + 3);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(level(0).is_none());
        assert_eq!(level(1).map(|l| l.grid_size), Some(10));
        assert_eq!(level(1).map(|l| l.egg_count), Some(3));
        assert!(level(LEVEL_COUNT + 1).is_none());
    }

    #[test]
    fn test_chicken_period() {
        assert_eq!(LEVELS[0].chicken_period(), Duration::from_millis(1000));
        assert_eq!(LEVELS[1].chicken_period(), Duration::from_millis(800));
    }
}
