/// Fuzzes maze generation and solving by checking for many random mazes that the maze is perfect
/// and that every solver returns a valid path of the same, breadth-first optimal length.
use maze_pathfinding::{
    AstarSolver, BfsSolver, Cell, DijkstraSolver, GridMaze, GridSolver, MazeGrid, Point,
    TextRenderer,
};
use rand::prelude::*;
use std::collections::{HashSet, VecDeque};

fn random_maze(rng: &mut StdRng, max_side: usize) -> GridMaze {
    let width = rng.gen_range(1..=max_side);
    let height = rng.gen_range(1..=max_side);
    let mut maze = GridMaze::new(width, height).unwrap();
    maze.generate_with_rng(rng);
    maze
}

fn visualize_maze(maze: &GridMaze, path: Option<&[Point]>) {
    println!("{}", TextRenderer::default().render(maze.grid(), path));
}

/// Flood fill over open positions, independent of the grid's own component tracking.
fn flood_fill(grid: &MazeGrid, start: Point) -> HashSet<Point> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        for n in grid.neighbors(p) {
            if seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

#[test]
fn fuzz_generation() {
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng, 12);
        let (w, h) = (maze.width(), maze.height());
        let reached = flood_fill(maze.grid(), maze.start());
        let all_cells_reached = (0..h)
            .flat_map(|row| (0..w).map(move |col| Cell::new(col, row)))
            .all(|cell| reached.contains(&cell.center()));
        if !all_cells_reached || maze.grid().carved_walls() != w * h - 1 {
            visualize_maze(&maze, None);
        }
        assert!(all_cells_reached);
        assert_eq!(maze.grid().carved_walls(), w * h - 1);
        assert!(maze.grid().is_open(maze.start()));
        assert!(maze.grid().is_open(maze.end()));
        assert!(maze.is_perfect());
    }
}

#[test]
fn fuzz_distance() {
    const N_MAZES: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng, 15);
        let bfs = maze.solve_with(&BfsSolver).unwrap();
        let dijkstra = maze.solve_with(&DijkstraSolver).unwrap();
        let astar = maze.solve_with(&astar_solver).unwrap();
        for solution in [&bfs, &dijkstra, &astar] {
            if !solution.is_valid(maze.grid()) || solution.cost != bfs.cost {
                visualize_maze(&maze, Some(&solution.path));
            }
            assert!(solution.is_valid(maze.grid()));
            assert_eq!(solution.cost, bfs.cost);
            assert_eq!(solution.len(), solution.cost as usize + 1);
            assert_eq!(solution.path.first(), Some(&maze.start()));
            assert_eq!(solution.path.last(), Some(&maze.end()));
        }
        // A spanning tree has exactly one path between any two cells.
        assert_eq!(dijkstra.path, bfs.path);
    }
}

/// Random pairs of cell interiors, solved with each solver on the same maze.
#[test]
fn fuzz_arbitrary_endpoints() {
    const N_MAZES: usize = 200;
    const N_QUERIES: usize = 20;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_MAZES {
        let maze = random_maze(&mut rng, 10);
        for _ in 0..N_QUERIES {
            let a = Cell::new(
                rng.gen_range(0..maze.width()),
                rng.gen_range(0..maze.height()),
            )
            .center();
            let b = Cell::new(
                rng.gen_range(0..maze.width()),
                rng.gen_range(0..maze.height()),
            )
            .center();
            let bfs = BfsSolver.solve(maze.grid(), a, b).unwrap();
            let dijkstra = DijkstraSolver.solve(maze.grid(), a, b).unwrap();
            assert_eq!(bfs.cost, dijkstra.cost);
            assert!(dijkstra.is_valid(maze.grid()));
        }
    }
}
