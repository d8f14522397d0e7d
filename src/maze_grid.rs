use core::fmt;
use fxhash::FxHashSet;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::point::Point;

/// [MazeGrid] is the physical, doubled-resolution maze: a row-major array of [bool] values where
/// [true] is a wall and [false] is open. In addition it maintains the connected components of
/// the open positions in a [UnionFind] structure so reachability can be answered without
/// searching.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    pub width: usize,
    pub height: usize,
    blocked: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl MazeGrid {
    /// Creates a `height` x `width` grid where every position is set to `blocked`.
    pub fn new(width: usize, height: usize, blocked: bool) -> MazeGrid {
        let mut grid = MazeGrid {
            width,
            height,
            blocked: vec![blocked; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        if !blocked {
            grid.generate_components();
        }
        grid
    }

    pub fn point_in_bounds(&self, pos: Point) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    /// Row-major index of a position. The position must be in bounds.
    pub fn get_ix_point(&self, pos: &Point) -> usize {
        debug_assert!(self.point_in_bounds(*pos));
        pos.row as usize * self.width + pos.col as usize
    }

    /// Whether `pos` is a wall. Positions outside the grid count as walls.
    pub fn get(&self, pos: Point) -> bool {
        !self.point_in_bounds(pos) || self.blocked[self.get_ix_point(&pos)]
    }

    pub fn is_open(&self, pos: Point) -> bool {
        !self.get(pos)
    }

    /// Updates a position on the grid. Opening a position joins it to the components of its open
    /// neighbours; blocking an open position flags the components as dirty since it may split
    /// them. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Point, blocked: bool) {
        if !self.point_in_bounds(pos) {
            return;
        }
        let ix = self.get_ix_point(&pos);
        if blocked {
            if !self.blocked[ix] {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbors(pos) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.blocked[ix] = blocked;
    }

    /// Walls every position and resets the components.
    pub fn fill(&mut self) {
        self.blocked.iter_mut().for_each(|b| *b = true);
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
    }

    /// The open positions one step up, down, left or right of `pos`. A position outside the
    /// grid yields only those of its neighbours that happen to be in bounds and open.
    pub fn neighbors(&self, pos: Point) -> SmallVec<[Point; 4]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.is_open(*p))
            .collect()
    }

    /// Open neighbours paired with the unit edge cost of stepping onto them.
    pub fn neighborhood_points_and_cost(&self, pos: &Point) -> SmallVec<[(Point, u32); 4]> {
        self.neighbors(*pos).into_iter().map(|p| (p, 1)).collect()
    }

    /// Checks if start and goal are open and on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start or goal is blocked or if they lie on different components.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_open(*start) && self.is_open(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating components for {}x{} grid", self.height, self.width);
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for (row, col) in (0..self.height as i32).cartesian_product(0..self.width as i32) {
            let point = Point::new(row, col);
            if self.get(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            // Linking down and right covers every edge once.
            for n in [Point::new(row + 1, col), Point::new(row, col + 1)] {
                if self.is_open(n) {
                    let ix = self.get_ix_point(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Every open position reachable from `start` by breadth-first traversal, `start` included.
    /// Unlike [MazeGrid::reachable] this does not depend on the components being up to date.
    pub fn flood_fill(&self, start: Point) -> FxHashSet<Point> {
        let mut seen = FxHashSet::default();
        if self.get(start) {
            return seen;
        }
        seen.insert(start);
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in self.neighbors(p) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    /// Number of open positions that separate two cell interiors, i.e. carved walls.
    pub fn carved_walls(&self) -> usize {
        (1..self.height.saturating_sub(1) as i32)
            .cartesian_product(1..self.width.saturating_sub(1) as i32)
            .filter(|&(row, col)| (row % 2 == 1) != (col % 2 == 1))
            .filter(|&(row, col)| self.is_open(Point::new(row, col)))
            .count()
    }

    /// The grid as rows of binary values, 1 for a wall and 0 for open.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.blocked
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|&b| b as u8).collect())
            .collect()
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for values in self.to_rows() {
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
