//! CLI for maze generation

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;
use longest_exit::{render, MazeGenerator};

/// Perfect maze with the exit as far from the entrance as possible
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cells on each side
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// File to write SVG output. If unset, ASCII art is printed to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// File to write the SVG with the solution drawn in
    #[arg(long, requires = "out")]
    solution: Option<PathBuf>,
}

/// Generate maze, print or write it out
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let maze = MazeGenerator::new(args.seed).generate(usize::from(args.size));
    info!("Score: {}", maze.score());
    info!("Exit: {}", maze.exit());

    match args.out {
        None => print!("{}", render::ascii(&maze, &maze.solve())),
        Some(out) => {
            fs::write(&out, render::svg(&maze, &[]))
                .with_context(|| format!("Writing SVG file {}", out.display()))?;
            info!("Saved maze to {}", out.display());

            if let Some(solution) = args.solution {
                fs::write(&solution, render::svg(&maze, &maze.solve()))
                    .with_context(|| format!("Writing solution SVG file {}", solution.display()))?;
                info!("Saved solution to {}", solution.display());
            }
        }
    }
    Ok(())
}
