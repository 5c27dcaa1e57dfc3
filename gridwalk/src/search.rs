pub mod bfs;
pub mod dfs;
pub mod path;

use roaring::RoaringBitmap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::grid::{Cell, Grid};

pub use path::{ParentMap, reconstruct_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    pub fn precompute(
        self,
        grid: &Grid,
        start: Cell,
        end: Cell,
    ) -> Result<Vec<TraversalStep>, SearchError> {
        match self {
            Algorithm::Bfs => bfs::precompute(grid, start, end),
            Algorithm::Dfs => dfs::precompute(grid, start, end),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("{rows}x{cols} grid has too many cells to index")]
    TooLarge { rows: usize, cols: usize },
    #[error("{endpoint} cell {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        rows: usize,
        cols: usize,
    },
    #[error("{endpoint} cell {cell} is a wall")]
    Blocked { endpoint: Endpoint, cell: Cell },
}

/// Snapshot of search progress right after one cell left the frontier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraversalStep {
    /// The cell just dequeued (BFS) or popped (DFS).
    pub current: Cell,
    /// Pending cells in queue or stack order, front/bottom first.
    pub frontier: Vec<Cell>,
    pub visited: VisitedSet,
    /// Start to goal inclusive, only on the step that reached the goal.
    pub path: Option<Vec<Cell>>,
}

impl TraversalStep {
    /// The first `limit` frontier cells and how many more were left out.
    pub fn frontier_preview(&self, limit: usize) -> (&[Cell], usize) {
        let shown = self.frontier.len().min(limit);
        (&self.frontier[..shown], self.frontier.len() - shown)
    }

    pub fn reached_goal(&self) -> bool {
        self.path.is_some()
    }
}

/// Set of cells keyed by packed row-major index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitedSet {
    cols: usize,
    bits: RoaringBitmap,
}

impl VisitedSet {
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            bits: RoaringBitmap::new(),
        }
    }

    /// Returns `false` when `cell` was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        match self.key(cell) {
            Some(key) => self.bits.insert(key),
            None => false,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.key(cell).is_some_and(|key| self.bits.contains(key))
    }

    pub fn len(&self) -> usize {
        self.bits.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_subset(&self, other: &VisitedSet) -> bool {
        self.cols == other.cols && self.bits.is_subset(&other.bits)
    }

    /// Members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.bits.iter().map(move |key| {
            let key = key as usize;
            Cell::new(key / cols, key % cols)
        })
    }

    fn key(&self, cell: Cell) -> Option<u32> {
        if cell.col >= self.cols {
            return None;
        }
        cell.row
            .checked_mul(self.cols)
            .and_then(|base| base.checked_add(cell.col))
            .and_then(|key| u32::try_from(key).ok())
    }
}

/// Precondition checks shared by both recorders.
pub(crate) fn validate(grid: &Grid, start: Cell, end: Cell) -> Result<(), SearchError> {
    if grid.is_empty() {
        return Err(SearchError::EmptyGrid);
    }
    if u32::try_from(grid.rows() * grid.cols()).is_err() {
        return Err(SearchError::TooLarge {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.in_bounds(cell) {
            return Err(SearchError::OutOfBounds {
                endpoint,
                cell,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        if grid.is_wall(cell) {
            return Err(SearchError::Blocked { endpoint, cell });
        }
    }

    Ok(())
}
