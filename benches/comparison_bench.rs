use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{AstarSolver, BfsSolver, DijkstraSolver, GridMaze, GridSolver};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [15, 63, 255];

fn generation_bench(c: &mut Criterion) {
    for size in SIZES {
        let mut maze = GridMaze::new(size, size).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        c.bench_function(format!("generate {size}x{size}").as_str(), |b| {
            b.iter(|| {
                maze.generate_with_rng(&mut rng);
                black_box(maze.grid().carved_walls());
            })
        });
    }
}

fn bench_solver<S, FS>(c: &mut Criterion, solver_name: &str, create_solver: FS)
where
    S: GridSolver,
    FS: Fn() -> S,
{
    for size in SIZES {
        let mut maze = GridMaze::new(size, size).unwrap();
        maze.generate_seeded(0);
        let solver = create_solver();
        c.bench_function(format!("{solver_name} {size}x{size}").as_str(), |b| {
            b.iter(|| black_box(solver.solve(maze.grid(), maze.start(), maze.end())))
        });
    }
}

fn solver_bench(c: &mut Criterion) {
    bench_solver(c, "Dijkstra", || DijkstraSolver);
    bench_solver(c, "BFS", || BfsSolver);
    bench_solver(c, "Astar", AstarSolver::new);
}

criterion_group!(benches, generation_bench, solver_bench);
criterion_main!(benches);
