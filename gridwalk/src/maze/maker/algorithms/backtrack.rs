use rand::Rng;

use super::super::MazeMaker;
use crate::grid::Cell;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng> Backtrack for MazeMaker<R> {
    fn backtrack(&mut self) {
        let mut stack = Vec::new();

        let initial_cell = Cell::new(1, 1);
        self.visit_cell(initial_cell);
        stack.push(initial_cell);

        while let Some(curr) = stack.pop() {
            if let Some(next) = self.pick_unvisited_neighbor(curr) {
                stack.push(curr);
                self.remove_wall_between(curr, next);
                self.visit_cell(next);
                stack.push(next);
            }
        }
    }
}
