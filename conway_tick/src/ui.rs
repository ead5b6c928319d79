// ui.rs - Terminal presenters: a character frame per generation, or one stats line

use std::io::Write;

use conway::{LifeGrid, Presenter, Result};

const LIVE_CHAR: char = '#';
const DEAD_CHAR: char = '.';

/// Draws the whole grid, one text row per `y`.
pub struct GridPresenter<W: Write> {
    out: W,
    clear_screen: bool,
}

impl<W: Write> GridPresenter<W> {
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }
}

impl<W: Write> Presenter for GridPresenter<W> {
    fn present(&mut self, grid: &LifeGrid) -> Result<()> {
        let mut frame = String::with_capacity((grid.width() + 1) * grid.height() + 32);
        if self.clear_screen {
            frame.push_str("\x1b[H\x1b[2J");  // home + clear
        }
        frame.push_str(&format!("Generation: {}\n", grid.generation()));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                frame.push(if grid.is_alive(x, y) { LIVE_CHAR } else { DEAD_CHAR });
            }
            frame.push('\n');
        }

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Prints population statistics instead of the grid.
pub struct StatsPresenter<W: Write> {
    out: W,
}

impl<W: Write> StatsPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for StatsPresenter<W> {
    fn present(&mut self, grid: &LifeGrid) -> Result<()> {
        let total = grid.width() * grid.height();
        let live_cells = grid.population();
        writeln!(
            self.out,
            "Generation: {}  Live cells: {}  Dead cells: {}  Population: {:.1}%",
            grid.generation(),
            live_cells,
            total - live_cells,
            (live_cells as f32 / total as f32) * 100.0,
        )?;
        self.out.flush()?;
        Ok(())
    }
}
