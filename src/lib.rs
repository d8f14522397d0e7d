//! # maze_pathfinding
//!
//! Generates perfect rectangular mazes with a randomized
//! [depth-first search](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! and finds shortest paths through them. A maze of `width` x `height` logical cells is stored
//! as a doubled-resolution grid of walls and open positions, where odd coordinates are cell
//! interiors. Carving visits every cell exactly once, so the open positions always form a
//! spanning tree and any two cells are joined by exactly one path.
//!
//! Solving uses uniform-cost search ([DijkstraSolver]) by default; [BfsSolver] and
//! [AstarSolver] return paths of the same length. Connected components are tracked with a
//! union-find structure so that unreachable goals are rejected without searching.
//!
//! ```
//! use maze_pathfinding::GridMaze;
//!
//! let mut maze = GridMaze::new(15, 15).unwrap();
//! maze.generate_seeded(42);
//! let solution = maze.solve().unwrap();
//! assert_eq!(solution.path.first(), Some(&maze.start()));
//! assert_eq!(solution.path.last(), Some(&maze.end()));
//! ```
pub mod error;
pub mod maze;
pub mod maze_grid;
pub mod player;
pub mod point;
pub mod render;
pub mod search;
pub mod solver;

pub use error::{MazeError, Result};
pub use maze::GridMaze;
pub use maze_grid::MazeGrid;
pub use player::Player;
pub use point::{Cell, Point};
pub use render::TextRenderer;
pub use solver::{
    astar::AstarSolver, bfs::BfsSolver, dijkstra::DijkstraSolver, GridSolver, Solution,
};
