use std::collections::VecDeque;

use gridwalk::{Algorithm, Cell, Grid, TraversalStep, maze};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn goal_path(steps: &[TraversalStep]) -> Option<&Vec<Cell>> {
    steps.last().and_then(|step| step.path.as_ref())
}

fn assert_valid_path(grid: &Grid, path: &[Cell], start: Cell, end: Cell) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
    assert!(path.iter().all(|&cell| grid.is_open(cell)));
}

/// Edge count of a shortest route, found without the recorders.
fn shortest_distance(grid: &Grid, start: Cell, end: Cell) -> Option<usize> {
    let mut distance = vec![vec![None; grid.cols()]; grid.rows()];
    let mut queue = VecDeque::from([start]);
    distance[start.row][start.col] = Some(0);

    while let Some(cell) = queue.pop_front() {
        let here = distance[cell.row][cell.col]?;
        if cell == end {
            return Some(here);
        }
        for next in grid.neighbors(cell) {
            if distance[next.row][next.col].is_none() {
                distance[next.row][next.col] = Some(here + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

fn assert_visited_grows(steps: &[TraversalStep]) {
    for pair in steps.windows(2) {
        assert!(pair[0].visited.is_subset(&pair[1].visited));
    }
    for step in steps {
        assert!(step.visited.contains(step.current));
    }
}

#[test]
fn single_wall_scenario() {
    init_tracing();
    let mut grid = Grid::new(5, 5);
    grid.set_wall(Cell::new(2, 2), true).expect("cell is in bounds");
    let start = Cell::new(0, 0);
    let end = Cell::new(4, 4);

    let bfs = Algorithm::Bfs.precompute(&grid, start, end).expect("valid endpoints");
    let path = goal_path(&bfs).expect("bfs reaches the corner");
    assert_eq!(path.len() - 1, 8);
    assert_valid_path(&grid, path, start, end);

    let dfs = Algorithm::Dfs.precompute(&grid, start, end).expect("valid endpoints");
    let path = goal_path(&dfs).expect("dfs reaches the corner");
    assert!(path.len() - 1 >= 8);
    assert_valid_path(&grid, path, start, end);

    assert_visited_grows(&bfs);
    assert_visited_grows(&dfs);
}

#[test]
fn start_equal_to_end_is_a_single_step() {
    let grid = Grid::new(4, 4);
    let cell = Cell::new(2, 1);

    for algorithm in Algorithm::iter() {
        let steps = algorithm.precompute(&grid, cell, cell).expect("valid endpoints");
        assert_eq!(steps.len(), 1, "{algorithm}");
        assert_eq!(steps[0].current, cell);
        assert_eq!(steps[0].path, Some(vec![cell]));
    }
}

#[test]
fn walled_in_goal_is_never_reached() {
    init_tracing();
    let mut grid = Grid::new(7, 7);
    for cell in [
        Cell::new(3, 4),
        Cell::new(3, 6),
        Cell::new(2, 5),
        Cell::new(4, 5),
    ] {
        grid.set_wall(cell, true).expect("cell is in bounds");
    }
    let start = Cell::new(0, 0);
    let end = Cell::new(3, 5);

    for algorithm in Algorithm::iter() {
        let steps = algorithm.precompute(&grid, start, end).expect("valid endpoints");
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|step| step.path.is_none()), "{algorithm}");
        assert!(steps.iter().all(|step| step.current != end));

        let last = steps.last().expect("at least one step");
        assert_eq!(last.visited.len(), 49 - 5);
        if algorithm == Algorithm::Bfs {
            assert!(last.frontier.is_empty());
        }
    }
}

#[test]
fn dfs_can_take_the_long_way() {
    // Straight down column 0 is two moves. DFS pops the rightward neighbour
    // first, so it runs along the top, down the far side and back.
    let mut grid = Grid::new(3, 5);
    for cell in [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)] {
        grid.set_wall(cell, true).expect("cell is in bounds");
    }
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 0);

    let bfs = Algorithm::Bfs.precompute(&grid, start, end).expect("valid endpoints");
    let dfs = Algorithm::Dfs.precompute(&grid, start, end).expect("valid endpoints");

    let bfs_path = goal_path(&bfs).expect("reachable");
    let dfs_path = goal_path(&dfs).expect("reachable");
    assert_eq!(bfs_path, &vec![start, Cell::new(1, 0), end]);
    assert_valid_path(&grid, dfs_path, start, end);
    assert_eq!(dfs_path.len(), 11);
}

#[test]
fn bfs_solves_generated_mazes_optimally() {
    init_tracing();
    for seed in 0..16 {
        let grid = maze::generate(21, 21, StdRng::seed_from_u64(seed)).expect("21x21 is valid");
        let start = Cell::new(1, 1);
        let end = Cell::new(19, 19);

        let bfs = Algorithm::Bfs.precompute(&grid, start, end).expect("rooms are open");
        let path = goal_path(&bfs).expect("perfect mazes are connected");
        assert_valid_path(&grid, path, start, end);
        assert_eq!(Some(path.len() - 1), shortest_distance(&grid, start, end));

        // In a perfect maze the only simple route is the shortest one.
        let dfs = Algorithm::Dfs.precompute(&grid, start, end).expect("rooms are open");
        assert_eq!(goal_path(&dfs), Some(path));
    }
}

#[test]
fn steps_serialize_for_a_viewer() {
    let grid = Grid::new(2, 2);
    let steps = Algorithm::Bfs
        .precompute(&grid, Cell::new(0, 0), Cell::new(1, 1))
        .expect("valid endpoints");

    let json = serde_json::to_string(&steps).expect("steps serialize");
    let back: Vec<TraversalStep> = serde_json::from_str(&json).expect("steps deserialize");
    assert_eq!(back, steps);
}

fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::bool::weighted(0.3), rows * cols).prop_map(move |walls| {
            let rows_vec: Vec<Vec<bool>> = walls.chunks(cols).map(<[bool]>::to_vec).collect();
            Grid::from_rows(rows_vec).expect("chunks are equal length")
        })
    })
}

proptest! {
    #[test]
    fn generated_mazes_are_perfect(
        half_rows in 1usize..12,
        half_cols in 1usize..12,
        seed in any::<u64>(),
    ) {
        let rows = 2 * half_rows + 1;
        let cols = 2 * half_cols + 1;
        let grid = maze::generate(rows, cols, StdRng::seed_from_u64(seed)).expect("odd and >= 3");

        let open: Vec<Cell> = grid.open_cells().collect();
        let pairs: usize = open
            .iter()
            .map(|cell| {
                [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)]
                    .into_iter()
                    .filter(|&next| grid.is_open(next))
                    .count()
            })
            .sum();
        prop_assert_eq!(open.len() - 1, pairs);
        prop_assert_eq!(open.len(), 2 * half_rows * half_cols - 1);

        let start = Cell::new(1, 1);
        let end = Cell::new(rows - 2, cols - 2);
        let steps = Algorithm::Bfs.precompute(&grid, start, end).expect("rooms are open");
        prop_assert!(goal_path(&steps).is_some());
    }

    #[test]
    fn recordings_are_consistent(
        grid in arbitrary_grid(),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let open: Vec<Cell> = grid.open_cells().collect();
        prop_assume!(!open.is_empty());
        let start = open[a % open.len()];
        let end = open[b % open.len()];
        let expected = shortest_distance(&grid, start, end);

        for algorithm in Algorithm::iter() {
            let steps = algorithm.precompute(&grid, start, end).expect("open cells are valid endpoints");
            prop_assert!(!steps.is_empty());
            assert_visited_grows(&steps);

            // Only the final step may carry a path, and each cell is processed once.
            for step in &steps[..steps.len() - 1] {
                prop_assert!(step.path.is_none());
            }
            let mut seen: Vec<Cell> = steps.iter().map(|step| step.current).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), steps.len());

            match (goal_path(&steps), expected) {
                (Some(path), Some(distance)) => {
                    assert_valid_path(&grid, path, start, end);
                    if algorithm == Algorithm::Bfs {
                        prop_assert_eq!(path.len() - 1, distance);
                    } else {
                        prop_assert!(path.len() - 1 >= distance);
                    }
                }
                (None, None) => {}
                (found, distance) => {
                    prop_assert!(false, "{algorithm}: path {:?} vs distance {:?}", found, distance);
                }
            }
        }
    }
}
