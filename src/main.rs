//! Word Search
//!
//! Generates square word-search puzzles from a word list and solves puzzles
//! read from text. Grids are printed as rows of space-separated letters.

mod logging;

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use wordsearch::{solve, Generator, GeneratorConfig, Grid, Puzzle};

/// Words hidden by the demo puzzle.
const DEMO_WORDS: [&str; 3] = ["HAPPY", "APPLE", "LUCKY"];
const DEMO_SIZE: usize = 15;

/// Generates and solves word-search puzzles.
#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every placement attempt.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Hide the given words in a new random puzzle.
    Generate {
        /// Side length of the square grid.
        #[arg(short, long, default_value_t = 12)]
        size: usize,
        /// Attempts at placing the whole list before giving up.
        #[arg(short = 't', long, default_value_t = 5)]
        max_tries: usize,
        /// Seed for a reproducible puzzle.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print where each word was hidden.
        #[arg(long)]
        solution: bool,
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Find the given words in a grid read from a file.
    Solve {
        /// Grid file with rows of space-separated letters, or `-` for stdin.
        #[arg(short, long)]
        grid: PathBuf,
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let result = match cli.command {
        Some(Command::Generate {
            size,
            max_tries,
            seed,
            solution,
            words,
        }) => {
            let config = GeneratorConfig {
                size,
                max_tries,
                seed,
            };
            run_generate(&words, &config, solution)
        }
        Some(Command::Solve { grid, words }) => run_solve(&grid, &words),
        None => run_demo(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Generates a puzzle and prints it, optionally with its solution.
fn run_generate(
    words: &[String],
    config: &GeneratorConfig,
    show_solution: bool,
) -> Result<(), Box<dyn Error>> {
    let puzzle = Generator::new(words, config)?.generate()?;
    print_puzzle(&puzzle, show_solution);
    Ok(())
}

/// Reads a grid and prints every match found for the words.
fn run_solve(grid_path: &Path, words: &[String]) -> Result<(), Box<dyn Error>> {
    let grid = read_grid(grid_path)?;
    for found in solve(&grid, words)? {
        println!("{found}");
    }
    Ok(())
}

/// Generates the demo puzzle, prints it with its solution, then solves it.
fn run_demo() -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig {
        size: DEMO_SIZE,
        ..GeneratorConfig::default()
    };
    let puzzle = Generator::new(&DEMO_WORDS, &config)?.generate()?;
    print_puzzle(&puzzle, true);

    println!();
    println!("Solver found:");
    let words: Vec<&str> = puzzle.words().collect();
    for found in solve(&puzzle.grid, &words)? {
        println!("{found}");
    }
    Ok(())
}

fn print_puzzle(puzzle: &Puzzle, show_solution: bool) {
    println!("{}", puzzle.grid);
    if show_solution {
        println!();
        for placement in &puzzle.solution {
            println!("{placement}");
        }
    }
}

fn read_grid(path: &Path) -> Result<Grid, Box<dyn Error>> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };
    Ok(text.parse::<Grid>()?)
}
