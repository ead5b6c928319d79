// schedule.rs - Fixed-interval gate deciding when the grid may advance

use std::time::{Duration, Instant};

use crate::grid::LifeGrid;

/// Lets at most one step through per `update_interval`.
///
/// Callers poll it as often as they like (e.g. once per frame); polls that
/// arrive before the interval has elapsed change nothing.
#[derive(Debug, Clone)]
pub struct TickGate {
    last_update: Instant,
    update_interval: Duration,
}

impl TickGate {
    /// The first step becomes due one full interval after `now`.
    pub fn new(update_interval: Duration, now: Instant) -> Self {
        Self { last_update: now, update_interval }
    }

    pub fn last_update(&self) -> Instant {
        self.last_update
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_update) >= self.update_interval
    }

    /// Steps the grid if due, stamping `now` as the last update.
    pub fn try_step(&mut self, grid: &mut LifeGrid, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.last_update = now;
        grid.step();
        true
    }
}
