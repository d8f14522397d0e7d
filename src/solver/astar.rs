use smallvec::SmallVec;

use crate::{maze_grid::MazeGrid, point::Point, solver::GridSolver};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, u32); 4]>;

    fn successors(&self, grid: &MazeGrid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    /// Manhattan distance times the heuristic factor. Paths stay optimal as long as the factor
    /// is at most 1.
    fn heuristic(&self, _: &MazeGrid, p1: &Point, p2: &Point) -> u32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{dijkstra::DijkstraSolver, tests::grid_from_str};

    #[test]
    fn equal_start_goal() {
        let grid = grid_from_str(&["###", "# #", "###"]);
        let start = Point::new(1, 1);
        let solution = AstarSolver::new().solve(&grid, start, start).unwrap();
        assert!(solution.len() == 1);
    }

    #[test]
    fn test_complex() {
        // The wall in the top row forces a detour through the middle.
        let grid = grid_from_str(&[
            "#########",
            "#   #   #",
            "# # # # #",
            "# #   # #",
            "# ##### #",
            "#       #",
            "#########",
        ]);
        let start = Point::new(1, 1);
        let end = Point::new(1, 7);
        let astar = AstarSolver::new().solve(&grid, start, end).unwrap();
        let dijkstra = DijkstraSolver.solve(&grid, start, end).unwrap();
        assert_eq!(astar.cost, dijkstra.cost);
        assert!(astar.is_valid(&grid));
        assert!(astar.expanded <= dijkstra.expanded);
    }
}
