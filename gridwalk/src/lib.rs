//! Perfect-maze generation and replayable breadth-first and depth-first
//! search over wall/open grids.
//!
//! Searches run to completion up front and return one [`TraversalStep`] per
//! processed cell, so a viewer can scrub back and forth through them.

pub mod config;
pub mod grid;
pub mod maze;
pub mod playback;
pub mod playground;
pub mod render;
pub mod search;

pub use config::{ConfigError, PlaygroundConfig};
pub use grid::{Cell, Grid, GridError};
pub use maze::MazeError;
pub use playback::Playback;
pub use playground::{Mode, Playground, PlaygroundError};
pub use search::{Algorithm, SearchError, TraversalStep, VisitedSet};
