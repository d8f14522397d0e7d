use smallvec::SmallVec;

use crate::{maze_grid::MazeGrid, point::Point, solver::GridSolver};

/// Uniform-cost search ordered by distance from the start only.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, u32); 4]>;

    fn successors(&self, grid: &MazeGrid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &MazeGrid, _: &Point, _: &Point) -> u32 {
        0
    }
}
