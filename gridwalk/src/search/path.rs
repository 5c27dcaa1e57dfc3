use tracing::warn;

use crate::grid::Cell;

/// Predecessor of each discovered cell, stored densely by packed index.
#[derive(Clone, Debug)]
pub struct ParentMap {
    cols: usize,
    parents: Vec<Option<Cell>>,
}

impl ParentMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            parents: vec![None; rows * cols],
        }
    }

    pub fn set(&mut self, child: Cell, parent: Cell) {
        if let Some(i) = self.index(child) {
            self.parents[i] = Some(parent);
        }
    }

    pub fn get(&self, cell: Cell) -> Option<Cell> {
        self.index(cell).and_then(|i| self.parents[i])
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.col >= self.cols {
            return None;
        }
        cell.row
            .checked_mul(self.cols)
            .and_then(|base| base.checked_add(cell.col))
            .filter(|&i| i < self.parents.len())
    }
}

/// Follows parent links back from `end` and returns the route from `start`
/// to `end` inclusive.
///
/// A broken chain (a cell other than `start` with no parent, or a loop) cuts
/// the walk short: the result is `start` followed by whatever tail of the
/// route could be recovered.
pub fn reconstruct_path(parents: &ParentMap, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        path.push(current);
        if path.len() > parents.parents.len() {
            warn!(%start, %end, "parent chain loops; path truncated");
            break;
        }
        match parents.get(current) {
            Some(parent) => current = parent,
            None => {
                warn!(%start, %end, orphan = %current, "parent chain broken; path truncated");
                break;
            }
        }
    }

    path.push(start);
    path.reverse();
    path
}
