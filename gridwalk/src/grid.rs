use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Up, down, left, right. Search exploration order depends on this order, so
// it must never change between runs.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A grid coordinate, 0-indexed, row-major.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    fn offset(&self, dr: isize, dc: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("grid declares {rows} rows but carries {found}")]
    Shape { rows: usize, found: usize },
}

/// Rectangular wall/open occupancy grid. `true` is a wall.
///
/// The shape is fixed at construction; edits only flip cell values. On the
/// wire a grid carries its `rows` and `cols` next to the wall matrix, so
/// zero-row grids keep their width.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr", into = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

impl Grid {
    /// A `rows x cols` grid with every cell open.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: vec![false; rows * cols],
        }
    }

    /// A `rows x cols` grid with every cell a wall.
    pub fn filled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: vec![true; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut walls = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            walls.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            walls,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.walls.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Packed row-major key for `cell`, or `None` when it lies outside.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row * self.cols + cell.col)
    }

    /// Anything outside the grid counts as a wall.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index(cell).is_none_or(|i| self.walls[i])
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> Result<(), GridError> {
        let i = self.checked_index(cell)?;
        self.walls[i] = wall;
        Ok(())
    }

    /// Flips `cell` and returns its new value.
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<bool, GridError> {
        let i = self.checked_index(cell)?;
        self.walls[i] = !self.walls[i];
        Ok(self.walls[i])
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell { row, col }))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|&cell| self.is_open(cell))
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    /// In-bounds open cardinal neighbours of `cell`, always yielded up, down,
    /// left, right.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| cell.offset(dr, dc))
            .filter(|&neighbor| self.is_open(neighbor))
    }

    pub fn log(&self) -> String {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        if self.is_wall(Cell { row, col }) {
                            "██"
                        } else {
                            "  "
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Opens `cell`; a no-op outside the grid.
    pub(crate) fn carve(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.walls[i] = false;
        }
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, GridError> {
        self.index(cell).ok_or(GridError::OutOfBounds {
            cell,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    walls: Vec<Vec<bool>>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if repr.walls.len() != repr.rows {
            return Err(GridError::Shape {
                rows: repr.rows,
                found: repr.walls.len(),
            });
        }

        let mut walls = Vec::with_capacity(repr.walls.iter().map(Vec::len).sum());
        for (i, row) in repr.walls.iter().enumerate() {
            if row.len() != repr.cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: repr.cols,
                    found: row.len(),
                });
            }
            walls.extend_from_slice(row);
        }

        Ok(Self {
            rows: repr.rows,
            cols: repr.cols,
            walls,
        })
    }
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            walls: grid.to_rows(),
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
