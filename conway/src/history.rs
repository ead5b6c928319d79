// history.rs - Detects when the simulation settles into a still life or short cycle

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::LifeGrid;

const HISTORY_LEN: usize = 10;

/// Remembers hashes of the last few generations.
///
/// A repeat means the grid is a still life (or fully dead) or an oscillator
/// with a period of at most ten generations. Hash collisions can in principle
/// report a cycle early.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    grid_history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_grid(grid: &LifeGrid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records the grid; returns `true` if the same state was seen recently.
    pub fn observe(&mut self, grid: &LifeGrid) -> bool {
        let current_hash = Self::hash_grid(grid);
        let seen = self.history_count.min(HISTORY_LEN);
        if self.grid_history[..seen].contains(&current_hash) {
            return true;
        }
        self.grid_history[self.history_count % HISTORY_LEN] = current_hash;
        self.history_count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.grid_history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}
