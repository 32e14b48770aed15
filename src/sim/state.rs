//! Game state and core simulation types
//!
//! Everything the presentation layer observes lives here. Level entities
//! (player, chicken, eggs) are rebuilt by [`GameState::setup_level`];
//! progression lives in [`Progress`] and survives level changes.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::grid::{Direction, Position, interior_cells};
use super::level::{LEVELS, Level, level};
use super::scheduler::{Scheduler, TimerKind};
use crate::achievements::Achievement;
use crate::challenges::{DailyChallenge, unix_now};
use crate::progress::{Counters, Progress, Unlock};
use crate::skins::{Skin, SkinId};
use crate::tuning::Tuning;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    Splash,
    Menu,
    /// Active gameplay; the only mode in which timers run
    Playing,
    Paused,
    LevelComplete,
    GameOver,
    Achievements,
    Customization,
    /// Final level cleared
    GameComplete,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOverReason {
    TimeUp,
    OutOfLives,
}

/// Notable outcomes, queued for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    EggCollected { pos: Position },
    GoldenEggCollected { pos: Position },
    EggDelivered { pos: Position },
    PlayerHit { lives_left: u8 },
    /// A carried egg fell back onto the field
    EggDropped { pos: Position },
    PowerUpExpired,
    LevelComplete { level: u32, time_bonus: u64 },
    GameOver { reason: GameOverReason },
    GameComplete,
    Unlocked(Unlock),
}

/// The snake
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Position,
    pub facing: Direction,
    pub carrying_egg: bool,
    pub powered_up: bool,
    /// Seconds of power-up left
    pub power_up_remaining: u32,
    /// Set for a short flash after chicken contact
    pub recently_hit: bool,
    pub skin: SkinId,
    pub lives: u8,
    /// Bumped whenever the player is rebuilt; stale delayed callbacks compare against it
    pub generation: u64,
}

impl Player {
    pub fn spawn(pos: Position, skin: SkinId, lives: u8, generation: u64) -> Self {
        Self {
            pos,
            facing: Direction::Right,
            carrying_egg: false,
            powered_up: false,
            power_up_remaining: 0,
            recently_hit: false,
            skin,
            lives,
            generation,
        }
    }
}

/// The pursuing chicken
#[derive(Debug, Clone, Serialize)]
pub struct Chicken {
    pub pos: Position,
    /// Presentation only
    pub facing: Direction,
    /// Within chase range of the player
    pub attacking: bool,
    /// Cosmetic animation frame
    pub wing_up: bool,
}

impl Chicken {
    pub fn spawn(pos: Position) -> Self {
        Self {
            pos,
            facing: Direction::Left,
            attacking: false,
            wing_up: false,
        }
    }
}

/// Uncollected eggs, the optional golden egg, and the delivered-egg trail
#[derive(Debug, Clone, Default, Serialize)]
pub struct EggField {
    eggs: Vec<Position>,
    pub golden: Option<Position>,
    collected: Vec<Position>,
}

impl EggField {
    /// Add an egg; false if that cell already holds one
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.eggs.contains(&pos) {
            return false;
        }
        self.eggs.push(pos);
        true
    }

    /// Take the egg at `pos`, if any
    pub fn remove(&mut self, pos: Position) -> bool {
        match self.eggs.iter().position(|&e| e == pos) {
            Some(i) => {
                self.eggs.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.eggs.contains(&pos)
    }

    /// True if `pos` holds a regular or golden egg
    pub fn occupied(&self, pos: Position) -> bool {
        self.contains(pos) || self.golden == Some(pos)
    }

    pub fn eggs(&self) -> &[Position] {
        &self.eggs
    }

    pub fn len(&self) -> usize {
        self.eggs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eggs.is_empty()
    }

    /// No regular eggs and no golden egg left
    pub fn is_cleared(&self) -> bool {
        self.eggs.is_empty() && self.golden.is_none()
    }

    /// Remember a delivery spot for the trail
    pub fn record_delivery(&mut self, pos: Position) {
        self.collected.push(pos);
    }

    pub fn collected(&self) -> &[Position] {
        &self.collected
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub mode: GameMode,
    /// Current level ordinal (1-based)
    pub level: u32,
    /// Seconds left on the level clock
    pub time_left: u32,
    pub player: Player,
    pub chicken: Chicken,
    pub eggs: EggField,
    pub eggs_collected_this_level: u32,
    /// Any chicken contact since the level started
    pub hit_this_level: bool,
    pub progress: Progress,
    pub(crate) scheduler: Scheduler,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.sanitize();
        let first = &LEVELS[0];
        let scheduler = Scheduler::new(
            tuning.clock_period(),
            first.chicken_period(),
            tuning.player_period(),
            tuning.animation_period(),
        );
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Splash,
            level: first.number,
            time_left: first.time_limit,
            player: Player::spawn(IVec2::ZERO, SkinId::default(), tuning.starting_lives, 0),
            chicken: Chicken::spawn(IVec2::ZERO),
            eggs: EggField::default(),
            eggs_collected_this_level: 0,
            hit_this_level: false,
            progress: Progress::new(unix_now()),
            scheduler,
            tuning,
            events: Vec::new(),
        };
        state.setup_level();
        state
    }

    /// Parameters of the current level
    pub fn current_level(&self) -> &'static Level {
        level(self.level).unwrap_or(&LEVELS[0])
    }

    pub fn grid_size(&self) -> i32 {
        self.current_level().grid_size
    }

    pub fn score(&self) -> u64 {
        self.progress.score
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Rebuild level entities for the current level
    pub fn setup_level(&mut self) {
        let lvl = self.current_level();
        let size = lvl.grid_size;

        self.player = Player::spawn(
            IVec2::splat(size / 2),
            self.progress.selected_skin,
            self.tuning.starting_lives,
            self.player.generation + 1,
        );
        self.chicken = Chicken::spawn(IVec2::splat(size - 1));
        self.eggs = EggField::default();
        for _ in 0..lvl.egg_count {
            if let Some(pos) = self.random_free_cell() {
                self.eggs.insert(pos);
            }
        }
        if self.rng.random_bool(self.tuning.golden_egg_chance) {
            self.eggs.golden = self.random_free_cell();
        }

        self.time_left = lvl.time_limit;
        self.eggs_collected_this_level = 0;
        self.hit_this_level = false;
        self.scheduler
            .set_period(TimerKind::Chicken, lvl.chicken_period());
    }

    /// A random interior cell holding no egg and no agent
    pub(crate) fn random_free_cell(&mut self) -> Option<Position> {
        let free: Vec<Position> = interior_cells(self.grid_size())
            .filter(|&c| !self.eggs.occupied(c) && c != self.player.pos && c != self.chicken.pos)
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every queued event (unlocks included)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.events);
        events.extend(
            self.progress
                .take_unlocks()
                .into_iter()
                .map(GameEvent::Unlocked),
        );
        events
    }

    /// Presentation-ready copy of the observable state
    pub fn snapshot(&self) -> Snapshot {
        let lvl = self.current_level();
        Snapshot {
            mode: self.mode,
            level: self.level,
            level_name: lvl.name,
            background: lvl.background,
            grid_size: lvl.grid_size,
            score: self.progress.score,
            time_left: self.time_left,
            player: self.player.clone(),
            chicken: self.chicken.clone(),
            eggs: self.eggs.eggs().to_vec(),
            golden_egg: self.eggs.golden,
            collected_eggs: self.eggs.collected().to_vec(),
            eggs_collected_this_level: self.eggs_collected_this_level,
            counters: self.progress.counters,
            achievements: self.progress.achievements.clone(),
            challenges: self.progress.challenges.clone(),
            skins: self.progress.skins.clone(),
        }
    }
}

/// Flat copy of the observable state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub level: u32,
    pub level_name: &'static str,
    pub background: &'static str,
    pub grid_size: i32,
    pub score: u64,
    pub time_left: u32,
    pub player: Player,
    pub chicken: Chicken,
    pub eggs: Vec<Position>,
    pub golden_egg: Option<Position>,
    pub collected_eggs: Vec<Position>,
    pub eggs_collected_this_level: u32,
    pub counters: Counters,
    pub achievements: Vec<Achievement>,
    pub challenges: Vec<DailyChallenge>,
    pub skins: Vec<Skin>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::in_bounds;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12345);
        assert_eq!(state.mode, GameMode::Splash);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_left, 60);
        assert_eq!(state.eggs.len(), 3);
        assert_eq!(state.player.lives, 3);
        assert!(!state.is_running());
    }

    #[test]
    fn test_setup_places_unique_interior_eggs() {
        for seed in 0..50 {
            let state = GameState::new(seed);
            let size = state.grid_size();
            let eggs = state.eggs.eggs();
            for (i, e) in eggs.iter().enumerate() {
                assert!(e.x >= 1 && e.y >= 1 && e.x < size - 1 && e.y < size - 1);
                assert!(!eggs[i + 1..].contains(e));
                assert_ne!(*e, state.player.pos);
                assert_ne!(*e, state.chicken.pos);
            }
            if let Some(g) = state.eggs.golden {
                assert!(!state.eggs.contains(g));
                assert!(in_bounds(g, size));
            }
        }
    }

    #[test]
    fn test_golden_chance_extremes() {
        let always = Tuning {
            golden_egg_chance: 1.0,
            ..Tuning::default()
        };
        assert!(GameState::with_tuning(1, always).eggs.golden.is_some());
        let never = Tuning {
            golden_egg_chance: 0.0,
            ..Tuning::default()
        };
        assert!(GameState::with_tuning(1, never).eggs.golden.is_none());
    }

    #[test]
    fn test_setup_bumps_generation() {
        let mut state = GameState::new(1);
        let before = state.player.generation;
        state.setup_level();
        assert_eq!(state.player.generation, before + 1);
    }

    #[test]
    fn test_egg_field_set_semantics() {
        let mut field = EggField::default();
        assert!(field.insert(IVec2::new(2, 3)));
        assert!(!field.insert(IVec2::new(2, 3)));
        assert_eq!(field.len(), 1);
        assert!(field.remove(IVec2::new(2, 3)));
        assert!(!field.remove(IVec2::new(2, 3)));
        assert!(field.is_cleared());
        field.golden = Some(IVec2::new(4, 4));
        assert!(!field.is_cleared());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.eggs.eggs(), b.eggs.eggs());
        assert_eq!(a.eggs.golden, b.eggs.golden);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"mode\":\"Splash\""));
        assert!(json.contains("Farmyard"));
    }
}
