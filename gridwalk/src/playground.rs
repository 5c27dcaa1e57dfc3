use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    config::PlaygroundConfig,
    grid::{Cell, Grid, GridError},
    maze::{self, MazeError},
    playback::Playback,
    search::{Algorithm, SearchError, TraversalStep},
};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Bfs,
    Dfs,
    /// Both searches side by side on the same grid.
    Race,
}

impl Mode {
    pub fn shows(self, algorithm: Algorithm) -> bool {
        matches!(
            (self, algorithm),
            (Mode::Race, _) | (Mode::Bfs, Algorithm::Bfs) | (Mode::Dfs, Algorithm::Dfs)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaygroundError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// An editable grid with fixed start and end, both search recordings, and a
/// playback cursor shared between them.
///
/// Any edit to the grid re-records both searches and rewinds playback.
#[derive(Clone, Debug)]
pub struct Playground {
    grid: Grid,
    start: Cell,
    end: Cell,
    mode: Mode,
    bfs_steps: Vec<TraversalStep>,
    dfs_steps: Vec<TraversalStep>,
    playback: Playback,
    visualizing: bool,
}

impl Playground {
    /// Opens on an empty grid of the configured size.
    pub fn new(config: &PlaygroundConfig) -> Result<Self, PlaygroundError> {
        Self::with_grid(
            Grid::new(config.rows, config.cols),
            config.start,
            config.end,
            config.speed,
        )
    }

    pub fn with_grid(
        grid: Grid,
        start: Cell,
        end: Cell,
        speed: Duration,
    ) -> Result<Self, PlaygroundError> {
        let bfs_steps = Algorithm::Bfs.precompute(&grid, start, end)?;
        let dfs_steps = Algorithm::Dfs.precompute(&grid, start, end)?;
        let playback = Playback::new(bfs_steps.len(), speed);

        Ok(Self {
            grid,
            start,
            end,
            mode: Mode::default(),
            bfs_steps,
            dfs_steps,
            playback,
            visualizing: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn is_visualizing(&self) -> bool {
        self.visualizing
    }

    pub fn steps(&self, algorithm: Algorithm) -> &[TraversalStep] {
        match algorithm {
            Algorithm::Bfs => &self.bfs_steps,
            Algorithm::Dfs => &self.dfs_steps,
        }
    }

    /// Length of the sequence being played; the longer one when racing.
    pub fn total_steps(&self) -> usize {
        match self.mode {
            Mode::Bfs => self.bfs_steps.len(),
            Mode::Dfs => self.dfs_steps.len(),
            Mode::Race => self.bfs_steps.len().max(self.dfs_steps.len()),
        }
    }

    /// The step to draw for `algorithm`, if it is on screen.
    ///
    /// While racing, the shorter run holds on its last step once the cursor
    /// passes its end.
    pub fn current_step(&self, algorithm: Algorithm) -> Option<&TraversalStep> {
        if !self.visualizing || !self.mode.shows(algorithm) {
            return None;
        }
        let steps = self.steps(algorithm);
        let index = self
            .playback
            .current_step()
            .min(steps.len().saturating_sub(1));
        steps.get(index)
    }

    /// True once playback sits on the active run's final step and that step
    /// reached the goal. Racing follows the BFS run.
    pub fn found_path(&self) -> bool {
        let algorithm = match self.mode {
            Mode::Bfs | Mode::Race => Algorithm::Bfs,
            Mode::Dfs => Algorithm::Dfs,
        };
        let steps = self.steps(algorithm);
        steps.last().is_some_and(TraversalStep::reached_goal)
            && self.playback.current_step() + 1 == steps.len()
    }

    /// Click edit: flips a wall. Start and end cannot be walled over.
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<(), PlaygroundError> {
        if self.is_endpoint(cell) {
            return Ok(());
        }
        let wall = self.grid.toggle_wall(cell)?;
        trace!(%cell, wall, "toggled wall");
        self.recompute()
    }

    /// Drag edit: always sets a wall. Start and end cannot be walled over.
    pub fn draw_wall(&mut self, cell: Cell) -> Result<(), PlaygroundError> {
        if self.is_endpoint(cell) {
            return Ok(());
        }
        self.grid.set_wall(cell, true)?;
        trace!(%cell, "drew wall");
        self.recompute()
    }

    /// Replaces the grid with a freshly carved maze of the same size.
    pub fn generate_maze<R: Rng>(&mut self, rng: R) -> Result<(), PlaygroundError> {
        let grid = maze::generate(self.grid.rows(), self.grid.cols(), rng)?;
        self.replace_grid(grid)
    }

    pub fn clear_grid(&mut self) -> Result<(), PlaygroundError> {
        let grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.replace_grid(grid)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.stop_visualizing();
    }

    pub fn play(&mut self) {
        self.visualizing = true;
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn step_forward(&mut self) {
        self.visualizing = true;
        self.playback.step_forward();
    }

    pub fn step_backward(&mut self) {
        self.visualizing = true;
        self.playback.step_backward();
    }

    pub fn jump_to(&mut self, step: usize) {
        self.visualizing = true;
        self.playback.jump_to(step);
    }

    pub fn reset(&mut self) {
        self.stop_visualizing();
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.playback.set_speed(speed);
    }

    /// Advances playback by one timer period. See [`Playback::tick`].
    pub fn tick(&mut self) -> bool {
        self.playback.tick()
    }

    fn is_endpoint(&self, cell: Cell) -> bool {
        cell == self.start || cell == self.end
    }

    fn replace_grid(&mut self, grid: Grid) -> Result<(), PlaygroundError> {
        let previous = std::mem::replace(&mut self.grid, grid);
        if let Err(e) = self.recompute() {
            self.grid = previous;
            return Err(e);
        }
        Ok(())
    }

    fn recompute(&mut self) -> Result<(), PlaygroundError> {
        self.bfs_steps = Algorithm::Bfs.precompute(&self.grid, self.start, self.end)?;
        self.dfs_steps = Algorithm::Dfs.precompute(&self.grid, self.start, self.end)?;
        debug!(
            bfs_steps = self.bfs_steps.len(),
            dfs_steps = self.dfs_steps.len(),
            "recorded searches"
        );
        self.stop_visualizing();
        Ok(())
    }

    fn stop_visualizing(&mut self) {
        self.visualizing = false;
        self.playback.set_total_steps(self.total_steps());
        self.playback.reset();
    }
}
