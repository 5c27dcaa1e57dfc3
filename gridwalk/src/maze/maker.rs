pub mod algorithms;

use rand::prelude::{IndexedRandom, Rng};
use thiserror::Error;

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze must be at least 3x3, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("maze dimensions must both be odd, got {rows}x{cols}")]
    EvenDimension { rows: usize, cols: usize },
}

/// Both dimensions must be odd and at least 3, so the border is solid wall.
pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), MazeError> {
    if rows < 3 || cols < 3 {
        return Err(MazeError::TooSmall { rows, cols });
    }
    if rows % 2 == 0 || cols % 2 == 0 {
        return Err(MazeError::EvenDimension { rows, cols });
    }
    Ok(())
}

/// Carving state for one maze: a wall-filled grid plus the random source that
/// picks which passage to open next.
///
/// Rooms sit at odd row and odd column. The cell halfway between two
/// neighbouring rooms is the wall that gets knocked down to join them. A room
/// counts as visited once it is open.
pub struct MazeMaker<R: Rng> {
    grid: Grid,
    rng: R,
}

impl<R: Rng> MazeMaker<R> {
    pub fn new(rows: usize, cols: usize, rng: R) -> Result<Self, MazeError> {
        check_dimensions(rows, cols)?;

        Ok(Self {
            grid: Grid::filled(rows, cols),
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn get_unvisited_neighbors(&self, cell: Cell) -> Vec<Cell> {
        let directions = [(-2, 0), (2, 0), (0, -2), (0, 2)];
        let rows = self.grid.rows() as isize;
        let cols = self.grid.cols() as isize;

        let mut valid_neighbors = Vec::new();
        for &(dr, dc) in &directions {
            let nr = cell.row as isize + dr;
            let nc = cell.col as isize + dc;

            let in_bounds = nr > 0 && nr < rows - 1 && nc > 0 && nc < cols - 1;
            if !in_bounds {
                continue;
            }

            let neighbor = Cell::new(nr as usize, nc as usize);
            if !self.is_visited(neighbor) {
                valid_neighbors.push(neighbor);
            }
        }

        valid_neighbors
    }

    fn pick_unvisited_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let neighbors = self.get_unvisited_neighbors(cell);
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Cell) {
        self.open(cell);
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid.is_open(cell)
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let row = (cell_1.row + cell_2.row) / 2;
        let col = (cell_1.col + cell_2.col) / 2;
        self.open(Cell::new(row, col));
    }

    fn open(&mut self, cell: Cell) {
        self.grid.carve(cell);
    }
}
