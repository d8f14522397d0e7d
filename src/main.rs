//! Command line driver: generates a maze, solves it and prints both.
use clap::{Parser, ValueEnum};
use log::info;
use maze_pathfinding::{AstarSolver, BfsSolver, DijkstraSolver, GridMaze, Solution, TextRenderer};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SolverKind {
    Dijkstra,
    Bfs,
    Astar,
}

/// Generate a perfect maze and print its shortest solution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Random seed, drawn from the operating system if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Shortest path algorithm
    #[arg(long, value_enum, default_value_t = SolverKind::Dijkstra)]
    solver: SolverKind,

    /// Only print the summary line
    #[arg(long)]
    no_render: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut maze = GridMaze::new(args.width, args.height)?;
    match args.seed {
        Some(seed) => maze.generate_seeded(seed),
        None => maze.generate(),
    }
    let solution: Solution = match args.solver {
        SolverKind::Dijkstra => maze.solve_with(&DijkstraSolver)?,
        SolverKind::Bfs => maze.solve_with(&BfsSolver)?,
        SolverKind::Astar => maze.solve_with(&AstarSolver::new())?,
    };
    info!("{:?} expanded {} positions", args.solver, solution.expanded);

    let renderer = TextRenderer::default();
    if !args.no_render {
        print!("{}", renderer.render(maze.grid(), Some(&solution.path)));
    }
    println!("{}", renderer.summary(&solution.path));
    Ok(())
}
