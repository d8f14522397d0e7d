use log::{debug, info};

use crate::{
    error::{MazeError, Result},
    maze_grid::MazeGrid,
    point::Point,
    search::SearchContext,
};

pub mod astar;
pub mod bfs;
pub mod dijkstra;

/// A shortest path from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<Point>,
    /// Number of unit steps taken, one less than the number of positions.
    pub cost: u32,
    /// Number of positions whose neighbours were examined.
    pub expanded: usize,
}

impl Solution {
    /// Number of positions on the path, start and goal included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Checks that every position is open and every step moves exactly one unit along one axis.
    pub fn is_valid(&self, grid: &MazeGrid) -> bool {
        self.path.iter().all(|p| grid.is_open(*p))
            && self.path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, u32)>;

    fn successors(&self, grid: &MazeGrid, node: &Point) -> Self::Successors;

    /// Lower bound on the remaining cost from `p1` to `p2`.
    fn heuristic(&self, grid: &MazeGrid, p1: &Point, p2: &Point) -> u32;

    /// Computes a shortest path from `start` to `goal` on the open positions of `grid`.
    ///
    /// Fails with [MazeError::OutOfBounds] if either endpoint is outside the grid or walled, and
    /// with [MazeError::Unreachable] if no path exists. An unreachable goal is rejected up front
    /// when the grid's components are up to date.
    fn solve(&self, grid: &MazeGrid, start: Point, goal: Point) -> Result<Solution> {
        check_endpoints(grid, start, goal)?;
        if !grid.components_dirty && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(MazeError::Unreachable { start, end: goal });
        }
        let mut ct: SearchContext<Point, u32> = SearchContext::new();
        let (path, cost) = ct
            .astar(
                &start,
                |node| self.successors(grid, node),
                |point| self.heuristic(grid, point, &goal),
                |point| *point == goal,
            )
            .ok_or(MazeError::Unreachable { start, end: goal })?;
        debug!(
            "Found path of cost {} with {} expansions",
            cost,
            ct.expanded()
        );
        Ok(Solution {
            path,
            cost,
            expanded: ct.expanded(),
        })
    }
}

pub(crate) fn check_endpoints(grid: &MazeGrid, start: Point, goal: Point) -> Result<()> {
    for pos in [start, goal] {
        if !grid.is_open(pos) {
            return Err(MazeError::OutOfBounds { pos });
        }
    }
    Ok(())
}
