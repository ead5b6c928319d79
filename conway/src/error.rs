// error.rs - Error type for the Game of Life engine

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A grid needs at least one column and one row.
    #[error("invalid grid dimension {width}x{height}: width and height must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Tick and frame intervals must be non-zero.
    #[error("invalid {which} interval: must be greater than zero")]
    InvalidInterval { which: &'static str },

    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),

    /// A presenter failed to write its output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
