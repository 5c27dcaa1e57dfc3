use tracing::debug;

use super::{ParentMap, SearchError, TraversalStep, VisitedSet, reconstruct_path, validate};
use crate::grid::{Cell, Grid};

/// Runs depth-first search from `start` to `end` with an explicit stack and
/// records one step per cell taken off it for the first time.
///
/// Cells are marked visited when popped, not when pushed, so a cell can sit
/// on the stack several times. Stale copies are dropped without a step. A
/// cell's parent is whichever neighbour pushed it last before its first pop.
/// The route found is some route, not necessarily a shortest one.
pub fn precompute(grid: &Grid, start: Cell, end: Cell) -> Result<Vec<TraversalStep>, SearchError> {
    validate(grid, start, end)?;

    let mut steps = Vec::new();
    let mut visited = VisitedSet::new(grid.cols());
    let mut parents = ParentMap::new(grid.rows(), grid.cols());
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        if current == end {
            let path = reconstruct_path(&parents, start, end);
            debug!(steps = steps.len() + 1, path_len = path.len(), "dfs reached goal");
            steps.push(TraversalStep {
                current,
                frontier: stack,
                visited,
                path: Some(path),
            });
            return Ok(steps);
        }

        for neighbor in grid.neighbors(current) {
            if !visited.contains(neighbor) {
                parents.set(neighbor, current);
                stack.push(neighbor);
            }
        }

        steps.push(TraversalStep {
            current,
            frontier: stack.clone(),
            visited: visited.clone(),
            path: None,
        });
    }

    debug!(steps = steps.len(), "dfs emptied stack without reaching goal");
    Ok(steps)
}
