//! Egg Dash headless runner
//!
//! Plays the game with the autopilot and prints the final state as JSON.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use egg_dash::Tuning;
use egg_dash::sim::{GameEvent, GameMode, GameState, suggest_direction, tick};

/// Simulated time per driver step
const STEP: Duration = Duration::from_millis(100);

/// Longest run the runner accepts (one simulated day)
const MAX_SECONDS: u64 = 24 * 60 * 60;

/// Egg Dash headless runner - autopilot plays, final state printed as JSON
#[derive(Parser, Debug)]
#[command(name = "egg-dash")]
#[command(about = "Play Egg Dash with the autopilot and print the final snapshot")]
struct Args {
    /// Simulated seconds to run
    #[arg(default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..=MAX_SECONDS))]
    seconds: u64,

    /// Tuning JSON file (defaults are used when omitted)
    tuning: Option<PathBuf>,

    /// RNG seed (defaults to the current Unix time)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    log::info!("Egg Dash (headless) starting with seed {}", seed);

    let mut state = GameState::with_tuning(seed, tuning);
    state.go_to_menu();
    state.start_game();

    for _ in 0..step_count(args.seconds) {
        if let Some(dir) = suggest_direction(&state) {
            state.set_direction(dir);
        }
        tick(&mut state, STEP);

        for event in state.drain_events() {
            log_event(&event);
        }

        match state.mode {
            GameMode::LevelComplete => state.next_level(),
            GameMode::GameOver | GameMode::GameComplete => break,
            _ => {}
        }
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}

/// Driver steps needed to cover `seconds`
fn step_count(seconds: u64) -> u64 {
    Duration::from_secs(seconds).as_millis() as u64 / STEP.as_millis() as u64
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::EggCollected { .. } | GameEvent::EggDelivered { .. } => {
            log::debug!("{:?}", event)
        }
        _ => log::info!("{:?}", event),
    }
}
