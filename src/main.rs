use crossterm::style::Stylize;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;
use tile_search::{manhattan_distance, search, DisjointSet, Puzzle};

fn run_solver(name: &str, start: &Puzzle, solver: impl Fn(&Puzzle) -> Option<Puzzle>) {
    let begin = Instant::now();
    let result = solver(start);
    let elapsed = begin.elapsed();

    match result {
        Some(_) => println!("{} solved the puzzle in {:?}", name.green().bold(), elapsed),
        None => println!("{} found no solution ({:?})", name.red().bold(), elapsed),
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let puzzle = Puzzle::shuffled(3, &mut rng).expect("dimension 3 is valid");

    println!("{}", "Shuffled puzzle:".bold());
    println!("{}", puzzle);

    run_solver("DFS       ", &puzzle, search::dfs);
    run_solver("BFS       ", &puzzle, search::bfs);
    run_solver("Best-first", &puzzle, |p| {
        search::best_first(p, manhattan_distance)
    });

    println!();
    println!("{}", "Disjoint set:".bold());
    let mut ds = DisjointSet::new(["ant", "bee", "cat", "dog", "elk"]);
    ds.union(&"ant", &"bee").expect("labels are in the universe");
    ds.union(&"cat", &"dog").expect("labels are in the universe");
    let joined = ds
        .connected(&"ant", &"bee")
        .expect("labels are in the universe");
    println!(
        "after two unions over five labels: {} sets, ant~bee = {}",
        ds.count(),
        joined
    );
}
