//! Example generating and solving a maze from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Fix the dimensions and seed for a reproducible maze:
//!
//! ```sh
//! cargo run --example generate_maze -- --cols 16 --rows 12 --seed 42
//! ```
//!
//! Trace the carve and solve steps:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_maze
//! ```

use std::process;

use clap::Parser;
use mazeweave_core::{CellLayout, RenderContext};
use mazeweave_generator::MazeGenerator;
use mazeweave_solver::MazeSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, value_name = "COUNT", default_value_t = 12)]
    cols: usize,

    /// Number of rows.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    rows: usize,

    /// Seed for deterministic generation; omitted means random.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = args.seed.map_or_else(MazeGenerator::new, MazeGenerator::with_seed);
    let ctx = RenderContext::headless(CellLayout::default());

    let mut maze = match generator.generate(args.cols, args.rows, &ctx) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    println!("Seed:");
    println!("  {}", maze.seed);
    println!();

    println!("Maze:");
    println!("{}", maze.grid);
    println!();

    println!("Solve:");
    match MazeSolver::new().solve(&mut maze.grid, &ctx) {
        Ok(path) => {
            let backtracked = path.iter().filter(|step| step.backtrack).count();
            println!(
                "  reached the exit in {} moves ({backtracked} backtracked)",
                path.len()
            );
        }
        Err(err) => {
            eprintln!("  {err}");
            process::exit(1);
        }
    }
}
