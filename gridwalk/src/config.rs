use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{
    grid::Cell,
    maze::{self, MazeError},
    playback::DEFAULT_SPEED,
};

pub const DEFAULT_ROWS: usize = 21;
pub const DEFAULT_COLS: usize = 21;
pub const DEFAULT_START: Cell = Cell::new(1, 1);
pub const DEFAULT_END: Cell = Cell::new(19, 19);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid value")]
    Invalid { key: &'static str, value: String },
    #[error("{which} cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        which: &'static str,
        cell: Cell,
        rows: usize,
        cols: usize,
    },
    #[error("start and end must be rooms at odd coordinates, got {cell}")]
    NotARoom { cell: Cell },
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Geometry and timing for a traversal playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Cell,
    pub end: Cell,
    pub speed: Duration,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            end: DEFAULT_END,
            speed: DEFAULT_SPEED,
        }
    }
}

impl PlaygroundConfig {
    /// Reads overrides from the environment, loading `.env` first if present.
    ///
    /// Recognised keys: `GRID_ROWS`, `GRID_COLS`, `START_ROW`, `START_COL`,
    /// `END_ROW`, `END_COL`, `STEP_SPEED_MS`. Missing keys keep their
    /// defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, then validates it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &'static str, fallback: usize| parse_or(&lookup, key, fallback);

        let config = Self {
            rows: read("GRID_ROWS", defaults.rows)?,
            cols: read("GRID_COLS", defaults.cols)?,
            start: Cell::new(
                read("START_ROW", defaults.start.row)?,
                read("START_COL", defaults.start.col)?,
            ),
            end: Cell::new(
                read("END_ROW", defaults.end.row)?,
                read("END_COL", defaults.end.col)?,
            ),
            speed: Duration::from_millis(parse_or(
                &lookup,
                "STEP_SPEED_MS",
                defaults.speed.as_millis() as u64,
            )?),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that a maze can be generated at this size and that start and
    /// end land on rooms a generated maze always opens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        maze::check_dimensions(self.rows, self.cols)?;

        for (which, cell) in [("start", self.start), ("end", self.end)] {
            if cell.row >= self.rows || cell.col >= self.cols {
                return Err(ConfigError::OutOfBounds {
                    which,
                    cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if cell.row % 2 == 0 || cell.col % 2 == 0 {
                return Err(ConfigError::NotARoom { cell });
            }
        }

        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, fallback: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(fallback),
        Some(value) => {
            let parsed = value.trim().parse().ok();
            parsed.ok_or(ConfigError::Invalid { key, value })
        }
    }
}
