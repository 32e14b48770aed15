//! Periodic timers driving the simulation
//!
//! Four independent periodic timers run only while the game is playing.
//! One-shot callbacks (hit recovery) run regardless and carry the player
//! generation they were scheduled for, so a stale one is recognisable.
//!
//! The caller feeds elapsed time through [`Scheduler::pop_due`], which hands
//! back due events one at a time in chronological order. Handling an event
//! may stop or restart the timers before the next one is popped.

use std::time::Duration;

/// Which periodic timer fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Counts down the level clock
    Clock,
    /// Steps the chicken
    Chicken,
    /// Auto-moves the player
    Player,
    /// Flips cosmetic animation frames
    Animation,
}

impl TimerKind {
    /// Tie-break order when several timers fall due together
    pub const ORDER: [TimerKind; 4] = [
        TimerKind::Clock,
        TimerKind::Chicken,
        TimerKind::Player,
        TimerKind::Animation,
    ];
}

/// An event that fell due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    Timer(TimerKind),
    /// Clear the "recently hit" flag if the player is still `generation`
    HitRecovery { generation: u64 },
}

#[derive(Debug, Clone, Copy)]
struct PeriodicTimer {
    period: Duration,
    elapsed: Duration,
}

impl PeriodicTimer {
    fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }
}

#[derive(Debug, Clone, Copy)]
struct OneShot {
    remaining: Duration,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    running: bool,
    /// Indexed in [`TimerKind::ORDER`] order
    timers: [PeriodicTimer; 4],
    one_shots: Vec<OneShot>,
}

impl Scheduler {
    pub fn new(clock: Duration, chicken: Duration, player: Duration, animation: Duration) -> Self {
        Self {
            running: false,
            timers: [
                PeriodicTimer::new(clock),
                PeriodicTimer::new(chicken),
                PeriodicTimer::new(player),
                PeriodicTimer::new(animation),
            ],
            one_shots: Vec::new(),
        }
    }

    fn index(kind: TimerKind) -> usize {
        match kind {
            TimerKind::Clock => 0,
            TimerKind::Chicken => 1,
            TimerKind::Player => 2,
            TimerKind::Animation => 3,
        }
    }

    /// Start all periodic timers from zero
    pub fn start(&mut self) {
        for timer in &mut self.timers {
            timer.elapsed = Duration::ZERO;
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Change a timer's period (takes effect from its current phase)
    pub fn set_period(&mut self, kind: TimerKind, period: Duration) {
        self.timers[Self::index(kind)].period = period.max(Duration::from_millis(1));
    }

    /// Schedule a hit recovery `delay` from now
    pub fn schedule_hit_recovery(&mut self, delay: Duration, generation: u64) {
        self.one_shots.push(OneShot {
            remaining: delay,
            generation,
        });
    }

    /// Next event and the time until it falls due
    fn next_event(&self) -> Option<(Duration, Due)> {
        let mut best: Option<(Duration, Due)> = None;
        if self.running {
            for kind in TimerKind::ORDER {
                let wait = self.timers[Self::index(kind)].remaining();
                if best.is_none_or(|(w, _)| wait < w) {
                    best = Some((wait, Due::Timer(kind)));
                }
            }
        }
        for shot in &self.one_shots {
            if best.is_none_or(|(w, _)| shot.remaining < w) {
                best = Some((
                    shot.remaining,
                    Due::HitRecovery {
                        generation: shot.generation,
                    },
                ));
            }
        }
        best
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.running {
            for timer in &mut self.timers {
                timer.elapsed += elapsed;
            }
        }
        for shot in &mut self.one_shots {
            shot.remaining = shot.remaining.saturating_sub(elapsed);
        }
    }

    fn consume(&mut self, due: Due) {
        match due {
            Due::Timer(kind) => self.timers[Self::index(kind)].elapsed = Duration::ZERO,
            Due::HitRecovery { generation } => {
                if let Some(i) = self
                    .one_shots
                    .iter()
                    .position(|s| s.generation == generation && s.remaining.is_zero())
                {
                    self.one_shots.remove(i);
                }
            }
        }
    }

    /// Pop the next event that falls due within `budget`.
    ///
    /// The time up to the event is taken out of `budget`. Returns `None`
    /// once nothing else falls due; the rest of the budget is then spent.
    pub fn pop_due(&mut self, budget: &mut Duration) -> Option<Due> {
        match self.next_event() {
            Some((wait, due)) if wait <= *budget => {
                self.advance(wait);
                *budget -= wait;
                self.consume(due);
                Some(due)
            }
            _ => {
                self.advance(*budget);
                *budget = Duration::ZERO;
                None
            }
        }
    }
}
