use serde::{Deserialize, Serialize};

use crate::{
    grid::{Cell, Grid},
    search::TraversalStep,
};

/// How a cell should be drawn. Later variants paint over earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Open,
    Wall,
    Visited,
    Frontier,
    Path,
    Current,
    Start,
    End,
}

impl CellKind {
    pub fn glyph(self) -> char {
        match self {
            CellKind::Open => ' ',
            CellKind::Wall => '#',
            CellKind::Visited => '.',
            CellKind::Frontier => '+',
            CellKind::Path => '*',
            CellKind::Current => '@',
            CellKind::Start => 'S',
            CellKind::End => 'E',
        }
    }
}

pub fn classify(
    grid: &Grid,
    start: Cell,
    end: Cell,
    step: Option<&TraversalStep>,
    cell: Cell,
) -> CellKind {
    if cell == end {
        return CellKind::End;
    }
    if cell == start {
        return CellKind::Start;
    }

    if let Some(step) = step {
        if step.current == cell {
            return CellKind::Current;
        }
        if step.path.as_ref().is_some_and(|path| path.contains(&cell)) {
            return CellKind::Path;
        }
        if step.frontier.contains(&cell) {
            return CellKind::Frontier;
        }
        if step.visited.contains(cell) {
            return CellKind::Visited;
        }
    }

    if grid.is_wall(cell) {
        CellKind::Wall
    } else {
        CellKind::Open
    }
}

/// One line per row, one glyph per cell.
pub fn render(grid: &Grid, start: Cell, end: Cell, step: Option<&TraversalStep>) -> String {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| classify(grid, start, end, step, Cell::new(row, col)).glyph())
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
