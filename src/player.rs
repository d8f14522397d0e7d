use log::{debug, info};

use crate::{maze::GridMaze, point::Point, solver::Solution};

/// A walker that moves through a maze one position at a time, counting its moves. Once it
/// stands on the end it refuses further moves until [Player::reset].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Point,
    pub moves: u32,
}

impl Player {
    pub fn new(maze: &GridMaze) -> Player {
        Player {
            pos: maze.start(),
            moves: 0,
        }
    }

    /// Puts the player back on the start, e.g. after the maze was regenerated.
    pub fn reset(&mut self, maze: &GridMaze) {
        *self = Player::new(maze);
    }

    /// Tries to move by `(d_row, d_col)`. Only single axis-aligned steps onto open positions are
    /// accepted; anything else leaves the player untouched and returns [false].
    pub fn step(&mut self, maze: &GridMaze, (d_row, d_col): (i32, i32)) -> bool {
        if self.at_end(maze) {
            return false;
        }
        let next = Point::new(self.pos.row + d_row, self.pos.col + d_col);
        if !self.pos.is_adjacent(&next) || !maze.grid().is_open(next) {
            debug!("Rejected move from {} to {}", self.pos, next);
            return false;
        }
        self.pos = next;
        self.moves += 1;
        if self.at_end(maze) {
            info!("Reached the end in {} moves", self.moves);
        }
        true
    }

    pub fn at_end(&self, maze: &GridMaze) -> bool {
        self.pos == maze.end()
    }

    /// True if the player made no more moves than the shortest path has steps.
    pub fn is_optimal(&self, solution: &Solution) -> bool {
        self.moves <= solution.cost
    }
}
