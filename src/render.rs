//! Text rendering of a finished maze. The renderer only reads a [MazeGrid] and an optional path;
//! it knows nothing about how either was produced.
use fxhash::FxHashSet;

use crate::{maze_grid::MazeGrid, point::Point};

#[derive(Clone, Debug)]
pub struct TextRenderer {
    pub wall: char,
    pub open: char,
    pub path: char,
    pub start: char,
    pub end: char,
}

impl Default for TextRenderer {
    fn default() -> Self {
        TextRenderer {
            wall: '#',
            open: ' ',
            path: '.',
            start: 'S',
            end: 'E',
        }
    }
}

impl TextRenderer {
    /// Draws the grid row by row. Path positions are overlaid when a path is given, and its first
    /// and last positions are marked as start and end. Without a path only the grid is drawn.
    pub fn render(&self, grid: &MazeGrid, path: Option<&[Point]>) -> String {
        let on_path: FxHashSet<Point> = path.unwrap_or_default().iter().copied().collect();
        let first = path.and_then(|p| p.first());
        let last = path.and_then(|p| p.last());
        let mut out = String::with_capacity((grid.width + 1) * grid.height);
        for row in 0..grid.height as i32 {
            for col in 0..grid.width as i32 {
                let p = Point::new(row, col);
                let ch = if first == Some(&p) {
                    self.start
                } else if last == Some(&p) {
                    self.end
                } else if on_path.contains(&p) {
                    self.path
                } else if grid.get(p) {
                    self.wall
                } else {
                    self.open
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    /// One line summary as printed by the command line driver.
    pub fn summary(&self, path: &[Point]) -> String {
        format!("Solution path length: {} steps", path.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> MazeGrid {
        let mut grid = MazeGrid::new(5, 3, true);
        for col in 1..4 {
            grid.set(Point::new(1, col), false);
        }
        grid
    }

    #[test]
    fn renders_grid_without_path() {
        let text = TextRenderer::default().render(&corridor(), None);
        assert_eq!(text, "#####\n#   #\n#####\n");
    }

    #[test]
    fn renders_path_with_endpoints() {
        let path = [Point::new(1, 1), Point::new(1, 2), Point::new(1, 3)];
        let text = TextRenderer::default().render(&corridor(), Some(&path));
        assert_eq!(text, "#####\n#S.E#\n#####\n");
    }

    #[test]
    fn summary_reports_positions() {
        let path = [Point::new(1, 1)];
        assert_eq!(
            TextRenderer::default().summary(&path),
            "Solution path length: 1 steps"
        );
    }
}
