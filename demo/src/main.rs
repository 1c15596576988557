use kruskal_maze::{Coordinates, KruskalGenerator, Maze, MazeBuilder, MultiPathSolver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);

    // three routes straight down a 6x10 maze
    let mut builder = MazeBuilder::with_dims((6, 10));
    builder.randomize_weights(&mut rng, 20);
    for col in [1, 4, 8] {
        builder.add_entrance(Coordinates(-1, col)).add_exit(Coordinates(6, col));
    }
    let mut maze = builder.build().unwrap();

    let report = KruskalGenerator.generate(&mut maze);
    println!("removed {} walls out of {} candidates", report.walls_removed, report.edges_considered);
    print!("{}", maze);

    let solver: MultiPathSolver = MultiPathSolver::default();
    let assignment = solver.solve_registered(&maze).unwrap();
    if !assignment.all_solved {
        println!("no set of non-overlapping paths exists");
        return;
    }

    println!("explored {} cells", assignment.cells_explored);
    print!("{}", maze.render(&assignment.ordered_paths(maze.entrances())));
}
