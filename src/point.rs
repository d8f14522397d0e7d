use core::fmt;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood as `(d_row, d_col)`, in the order right, down, left, up.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A coordinate in the physical grid. Odd `(row, col)` pairs are cell interiors, every other
/// position is a border wall or a removable wall between two cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Point {
        Point { row, col }
    }

    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four axis-aligned neighbours, without any bounds checks.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dr, dc)| Point::new(self.row + dr, self.col + dc))
            .collect()
    }

    /// True if `other` is exactly one step away along exactly one axis.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The point halfway between two points, rounding towards `self`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(
            self.row + (other.row - self.row) / 2,
            self.col + (other.col - self.col) / 2,
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A logical maze cell. Logical cells are never stored; they index into the physical grid
/// through [Cell::center].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Cell {
        Cell { col, row }
    }

    /// The interior position of this cell in the physical grid.
    pub fn center(&self) -> Point {
        Point::new(2 * self.row as i32 + 1, 2 * self.col as i32 + 1)
    }

    /// Logical neighbours inside a `width` x `height` maze, in [NEUMANN_OFFSETS] order.
    pub fn neighbors(&self, width: usize, height: usize) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let col = self.col.checked_add_signed(dc as isize)?;
                let row = self.row.checked_add_signed(dr as isize)?;
                (col < width && row < height).then_some(Cell::new(col, row))
            })
            .collect()
    }
}
