// driver.rs - Frame loop: polls the tick gate, steps the grid, hands it to a presenter

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::grid::LifeGrid;
use crate::history::CycleDetector;
use crate::patterns::{self, Pattern};
use crate::presenter::Presenter;
use crate::schedule::TickGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    /// The grid repeated a recent generation.
    Cycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Owns the grid and everything that decides when it moves.
pub struct Simulation {
    grid: LifeGrid,
    gate: TickGate,
    history: CycleDetector,
    frame_interval: Duration,
    max_generations: Option<u64>,
    stop_on_cycle: bool,
}

impl Simulation {
    pub fn new(grid: LifeGrid, update_interval: Duration, frame_interval: Duration) -> Result<Self> {
        if update_interval.is_zero() {
            return Err(LifeError::InvalidInterval { which: "update" });
        }
        if frame_interval.is_zero() {
            return Err(LifeError::InvalidInterval { which: "frame" });
        }

        Ok(Self {
            grid,
            gate: TickGate::new(update_interval, Instant::now().into_std()),
            history: CycleDetector::new(),
            frame_interval,
            max_generations: None,
            stop_on_cycle: false,
        })
    }

    /// Builds the starting grid from a named pattern, or a (possibly seeded) random fill.
    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;

        let grid = match &config.pattern {
            Some(name) => {
                let pattern = patterns::find_pattern(name)?;
                let mut grid = LifeGrid::empty(config.width, config.height)?;
                patterns::apply_pattern(&mut grid, pattern);
                grid
            }
            None => {
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                LifeGrid::new(config.width, config.height, &mut rng)?
            }
        };

        Ok(Self::new(grid, config.update_interval, config.frame_interval)?
            .with_max_generations(config.max_generations)
            .with_stop_on_cycle(config.stop_on_cycle))
    }

    pub fn with_max_generations(mut self, max_generations: Option<u64>) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn with_stop_on_cycle(mut self, stop_on_cycle: bool) -> Self {
        self.stop_on_cycle = stop_on_cycle;
        self
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn gate(&self) -> &TickGate {
        &self.gate
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.history.reset();
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(rng);
        self.history.reset();
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        patterns::apply_pattern(&mut self.grid, pattern);
        self.history.reset();
    }

    fn limit_reached(&self) -> bool {
        self.max_generations
            .is_some_and(|max| self.grid.generation() >= max)
    }

    fn summary(&self, reason: StopReason) -> RunSummary {
        RunSummary {
            generations: self.grid.generation(),
            population: self.grid.population(),
            reason,
        }
    }

    /// Runs until the generation limit or a cycle stops it.
    ///
    /// The presenter sees the starting grid once, then every new generation.
    /// Without a limit and with cycle stopping off this never returns on its
    /// own; race it against a shutdown signal.
    pub async fn run<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<RunSummary> {
        let mut frames = time::interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.gate = TickGate::new(self.gate.update_interval(), Instant::now().into_std());
        self.history.reset();
        if self.stop_on_cycle {
            self.history.observe(&self.grid);
        }
        presenter.present(&self.grid)?;

        loop {
            if self.limit_reached() {
                return Ok(self.summary(StopReason::GenerationLimit));
            }

            frames.tick().await;
            let now = Instant::now().into_std();
            if !self.gate.try_step(&mut self.grid, now) {
                continue;
            }
            presenter.present(&self.grid)?;

            if self.stop_on_cycle && self.history.observe(&self.grid) {
                return Ok(self.summary(StopReason::Cycle));
            }
        }
    }
}
