// main.rs - Runs the Game of Life in the terminal until it settles or is interrupted

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use conway::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use conway::{LifeConfig, Presenter, Simulation, PATTERNS};

mod ui;

use ui::{GridPresenter, StatsPresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Draw every generation as text
    Grid,
    /// One statistics line per generation
    Stats,
}

#[derive(Debug, Parser)]
#[command(name = "conway_tick", about = "Conway's Game of Life on a bounded grid")]
struct Args {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Milliseconds between frame polls
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Seed for the random starting grid
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern instead of a random grid
    #[arg(long)]
    pattern: Option<String>,

    /// Stop after this many generations
    #[arg(long)]
    generations: Option<u64>,

    /// Keep running after the grid repeats itself
    #[arg(long)]
    keep_going: bool,

    #[arg(long, value_enum, default_value_t = View::Grid)]
    view: View,

    /// Print the available pattern names and exit
    #[arg(long)]
    list_patterns: bool,
}

impl Args {
    fn to_config(&self) -> LifeConfig {
        LifeConfig {
            width: self.width,
            height: self.height,
            update_interval: Duration::from_millis(self.interval_ms),
            frame_interval: Duration::from_millis(self.frame_ms),
            seed: self.seed,
            max_generations: self.generations,
            stop_on_cycle: !self.keep_going,
            pattern: self.pattern.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list_patterns {
        for pattern in PATTERNS {
            println!("{}", pattern.name);
        }
        return Ok(());
    }

    let config = args.to_config();
    let mut sim = Simulation::from_config(&config).context("failed to set up the simulation")?;

    eprintln!(
        "Conway's Game of Life: {}x{}, one generation per {} ms, {} live cells",
        config.width,
        config.height,
        config.update_interval.as_millis(),
        sim.grid().population(),
    );

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut presenter: Box<dyn Presenter> = match args.view {
        View::Grid => Box::new(GridPresenter::new(stdout.lock(), clear_screen)),
        View::Stats => Box::new(StatsPresenter::new(stdout.lock())),
    };

    let summary = tokio::select! {
        result = sim.run(presenter.as_mut()) => Some(result.context("simulation stopped with an error")?),
        _ = tokio::signal::ctrl_c() => None,
    };

    match summary {
        Some(summary) => eprintln!(
            "Stopped ({:?}) at generation {} with {} live cells",
            summary.reason, summary.generations, summary.population,
        ),
        None => eprintln!(
            "Interrupted at generation {} with {} live cells",
            sim.grid().generation(),
            sim.grid().population(),
        ),
    }
    Ok(())
}
