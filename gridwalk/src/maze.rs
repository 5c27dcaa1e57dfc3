pub mod maker;

use rand::Rng;
use tracing::debug;

use crate::grid::Grid;

pub use maker::{MazeError, MazeMaker, check_dimensions};
use maker::algorithms::backtrack::Backtrack;

/// Generates a perfect maze by randomized recursive backtracking.
///
/// `rows` and `cols` must both be odd and at least 3 so the outer border stays
/// solid wall. Passage cells sit at odd coordinates; every one of them ends up
/// open, joined to the others by exactly one route.
pub fn generate<R: Rng>(rows: usize, cols: usize, rng: R) -> Result<Grid, MazeError> {
    let mut maker = MazeMaker::new(rows, cols, rng)?;
    maker.backtrack();
    let grid = maker.into_grid();

    debug!(
        rows,
        cols,
        open = grid.open_cells().count(),
        "generated maze"
    );

    Ok(grid)
}

/// Like [`generate`], seeded from the thread-local generator.
pub fn generate_random(rows: usize, cols: usize) -> Result<Grid, MazeError> {
    generate(rows, cols, rand::rng())
}
