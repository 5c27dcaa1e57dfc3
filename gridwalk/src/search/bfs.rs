use std::collections::VecDeque;

use tracing::debug;

use super::{ParentMap, SearchError, TraversalStep, VisitedSet, reconstruct_path, validate};
use crate::grid::{Cell, Grid};

/// Runs breadth-first search from `start` to `end` and records one step per
/// dequeued cell.
///
/// Cells are marked visited when enqueued. The step that dequeues `end`
/// carries the route and ends the sequence; since every move costs one, that
/// route is a shortest one. When `end` is unreachable the sequence ends once
/// the queue drains and no step carries a route.
pub fn precompute(grid: &Grid, start: Cell, end: Cell) -> Result<Vec<TraversalStep>, SearchError> {
    validate(grid, start, end)?;

    let mut steps = Vec::new();
    let mut visited = VisitedSet::new(grid.cols());
    let mut parents = ParentMap::new(grid.rows(), grid.cols());
    let mut queue = VecDeque::from([start]);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            let path = reconstruct_path(&parents, start, end);
            debug!(steps = steps.len() + 1, path_len = path.len(), "bfs reached goal");
            steps.push(TraversalStep {
                current,
                frontier: queue.iter().copied().collect(),
                visited: visited.clone(),
                path: Some(path),
            });
            return Ok(steps);
        }

        for neighbor in grid.neighbors(current) {
            if visited.insert(neighbor) {
                parents.set(neighbor, current);
                queue.push_back(neighbor);
            }
        }

        steps.push(TraversalStep {
            current,
            frontier: queue.iter().copied().collect(),
            visited: visited.clone(),
            path: None,
        });
    }

    debug!(steps = steps.len(), "bfs drained queue without reaching goal");
    Ok(steps)
}
