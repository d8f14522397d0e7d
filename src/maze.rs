use fxhash::FxHashSet;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::{
    error::{MazeError, Result},
    maze_grid::MazeGrid,
    point::{Cell, Point},
    solver::{dijkstra::DijkstraSolver, GridSolver, Solution},
};

/// A `width` x `height` maze of logical cells laid out on a `(2 * height + 1)` x
/// `(2 * width + 1)` [MazeGrid]. The start is the interior of cell `(0, 0)` and the end the
/// interior of cell `(width - 1, height - 1)`.
#[derive(Clone, Debug)]
pub struct GridMaze {
    width: usize,
    height: usize,
    grid: MazeGrid,
    start: Point,
    end: Point,
}

impl GridMaze {
    /// Creates a fully walled maze. Fails with [MazeError::InvalidDimensions] if either
    /// dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<GridMaze> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(GridMaze {
            width,
            height,
            grid: MazeGrid::new(2 * width + 1, 2 * height + 1, true),
            start: Cell::new(0, 0).center(),
            end: Cell::new(width - 1, height - 1).center(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Mutable access for callers that want to edit a finished maze.
    pub fn grid_mut(&mut self) -> &mut MazeGrid {
        &mut self.grid
    }

    /// Carves a new maze using randomness from the operating system.
    pub fn generate(&mut self) {
        self.generate_with_rng(&mut StdRng::from_entropy());
    }

    /// Carves a new maze that is identical for identical seeds.
    pub fn generate_seeded(&mut self, seed: u64) {
        self.generate_with_rng(&mut StdRng::seed_from_u64(seed));
    }

    /// Carves a perfect maze with a randomized depth-first search over the logical cells.
    ///
    /// The grid is walled up first, so calling this again replaces the previous maze. Every cell
    /// is visited exactly once and each visit to a new cell removes exactly one wall, which
    /// yields a spanning tree with `width * height - 1` carved walls.
    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.fill();
        let mut stack = vec![Cell::new(0, 0)];
        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        let mut carved = 0;
        while let Some(&current) = stack.last() {
            visited.insert(current);
            self.grid.set(current.center(), false);
            let unvisited: SmallVec<[Cell; 4]> = current
                .neighbors(self.width, self.height)
                .into_iter()
                .filter(|c| !visited.contains(c))
                .collect();
            match unvisited.choose(rng) {
                Some(&next) => {
                    let (from, to) = (current.center(), next.center());
                    self.grid.set(from.midpoint(&to), false);
                    self.grid.set(to, false);
                    carved += 1;
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }
        // Both endpoints are cell interiors and already open; this keeps it that way regardless.
        self.grid.set(self.start, false);
        self.grid.set(self.end, false);
        debug!("Visited {} cells", visited.len());
        info!("Generated {}x{} maze with {} carved walls", self.width, self.height, carved);
    }

    /// The open positions next to a physical grid position. See [MazeGrid::neighbors].
    pub fn neighbors(&self, pos: Point) -> SmallVec<[Point; 4]> {
        self.grid.neighbors(pos)
    }

    /// Checks the perfect maze properties: every cell interior is open and connected to the
    /// start, and exactly `width * height - 1` walls were carved. Falls back to a flood fill
    /// when the grid has been edited since its components were last generated.
    pub fn is_perfect(&self) -> bool {
        let filled = self.grid.components_dirty.then(|| self.grid.flood_fill(self.start));
        let all_connected = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Cell::new(col, row)))
            .all(|cell| {
                let p = cell.center();
                match &filled {
                    Some(filled) => filled.contains(&p),
                    None => self.grid.is_open(p) && self.grid.reachable(&self.start, &p),
                }
            });
        all_connected && self.grid.carved_walls() == self.width * self.height - 1
    }

    /// Shortest path from start to end using [DijkstraSolver].
    pub fn solve(&self) -> Result<Solution> {
        self.solve_with(&DijkstraSolver)
    }

    pub fn solve_with<S: GridSolver>(&self, solver: &S) -> Result<Solution> {
        let solution = solver.solve(&self.grid, self.start, self.end)?;
        info!("Solution path length: {} steps", solution.len());
        Ok(solution)
    }
}
