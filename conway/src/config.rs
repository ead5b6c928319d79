// config.rs - Startup configuration for a simulation run

use std::time::Duration;

use crate::error::{LifeError, Result};

pub const DEFAULT_WIDTH: usize = 88;
pub const DEFAULT_HEIGHT: usize = 66;
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(250);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);  // ~60 frames/sec

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Minimum wall-clock time between two generations.
    pub update_interval: Duration,
    /// How often the driver polls the gate.
    pub frame_interval: Duration,
    /// Seed for the initial random fill; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub max_generations: Option<u64>,
    pub stop_on_cycle: bool,
    /// Named pattern to start from instead of a random fill.
    pub pattern: Option<String>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            seed: None,
            max_generations: None,
            stop_on_cycle: true,
            pattern: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension { width: self.width, height: self.height });
        }
        if self.update_interval.is_zero() {
            return Err(LifeError::InvalidInterval { which: "update" });
        }
        if self.frame_interval.is_zero() {
            return Err(LifeError::InvalidInterval { which: "frame" });
        }
        Ok(())
    }
}
