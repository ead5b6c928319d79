// presenter.rs - Read-only seam between the engine and whatever draws it

use crate::error::Result;
use crate::grid::LifeGrid;

/// Renders a generation.
///
/// Implementations may only read the grid (`width`, `height`, `is_alive`,
/// and the derived counters); they are called after a step has completed.
pub trait Presenter {
    fn present(&mut self, grid: &LifeGrid) -> Result<()>;
}
