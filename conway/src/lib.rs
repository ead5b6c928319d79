// lib.rs - Conway's Game of Life on a bounded grid
//
// The engine is `LifeGrid` (seed, count neighbours, step). Around it sit the
// pieces a driver needs: a tick gate for fixed-interval stepping, a cycle
// detector, a pattern catalogue, and the `Presenter` seam for rendering.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod presenter;
pub mod schedule;

pub use config::LifeConfig;
pub use driver::{RunSummary, Simulation, StopReason};
pub use error::{LifeError, Result};
pub use grid::LifeGrid;
pub use history::CycleDetector;
pub use patterns::{Pattern, PATTERNS};
pub use presenter::Presenter;
pub use schedule::TickGate;
