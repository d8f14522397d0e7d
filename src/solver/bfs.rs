use log::{debug, warn};
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze_grid::MazeGrid,
    point::Point,
    solver::{check_endpoints, GridSolver, Solution},
};

/// Breadth-first search. Every edge costs one step, so the first time the goal is dequeued its
/// distance is minimal. Distances and predecessors live in dense arrays indexed like the grid;
/// `usize::MAX` marks an unvisited position.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Successors = SmallVec<[(Point, u32); 4]>;

    fn successors(&self, grid: &MazeGrid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &MazeGrid, _: &Point, _: &Point) -> u32 {
        0
    }

    fn solve(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<Solution> {
        check_endpoints(grid, start, goal)?;
        let n = grid.width * grid.height;
        let mut distance = vec![usize::MAX; n];
        let mut previous = vec![usize::MAX; n];
        let mut queue = VecDeque::new();
        let start_ix = grid.get_ix_point(&start);
        let goal_ix = grid.get_ix_point(&goal);
        distance[start_ix] = 0;
        queue.push_back(start);
        let mut expanded = 0;
        while let Some(current) = queue.pop_front() {
            let current_ix = grid.get_ix_point(&current);
            if current_ix == goal_ix {
                break;
            }
            expanded += 1;
            for (next, _) in self.successors(grid, &current) {
                let next_ix = grid.get_ix_point(&next);
                if distance[next_ix] == usize::MAX {
                    distance[next_ix] = distance[current_ix] + 1;
                    previous[next_ix] = current_ix;
                    queue.push_back(next);
                }
            }
        }
        if distance[goal_ix] == usize::MAX {
            warn!("Breadth-first search exhausted after {} expansions", expanded);
            return Err(MazeError::Unreachable { start, end: goal });
        }
        let mut path = vec![goal];
        let mut ix = goal_ix;
        while ix != start_ix {
            ix = previous[ix];
            path.push(Point::new((ix / grid.width) as i32, (ix % grid.width) as i32));
        }
        path.reverse();
        debug!("Found path of cost {} with {} expansions", distance[goal_ix], expanded);
        Ok(Solution {
            path,
            cost: distance[goal_ix] as u32,
            expanded,
        })
    }
}
