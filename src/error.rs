use thiserror::Error;

use crate::point::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{end} is not reachable from {start}")]
    Unreachable { start: Point, end: Point },

    #[error("{pos} is outside the grid or not open")]
    OutOfBounds { pos: Point },
}

pub type Result<T> = std::result::Result<T, MazeError>;
