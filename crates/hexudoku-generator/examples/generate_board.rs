//! Example demonstrating flower-board puzzle generation.
//!
//! Generates a hexudoku puzzle and prints it as an axial grid, along with the
//! seed that reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a specific board:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 42
//! ```
//!
//! Control the number of clue cells (default: 15):
//!
//! ```sh
//! cargo run --example generate_board -- --clues 25
//! ```

use std::process;

use clap::Parser;
use hexudoku_core::{GameBoardState, HexCoordinate};
use hexudoku_generator::{BoardGenerator, DEFAULT_CLUE_COUNT};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for reproducible generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of clue cells to leave filled.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_CLUE_COUNT)]
    clues: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = BoardGenerator::new().target_clues(args.clues);
    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    let generated = match result {
        Ok(generated) => generated,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Board:");
    print_board(&generated.board);
}

/// Prints the board one r-row at a time, q ascending, holes as dots.
fn print_board(board: &GameBoardState) {
    let r_range = min_max(board.cells().map(|cell| cell.coordinate.r));
    let q_range = min_max(board.cells().map(|cell| cell.coordinate.q));
    let (Some((r_min, r_max)), Some((q_min, q_max))) = (r_range, q_range) else {
        return;
    };

    for r in r_min..=r_max {
        // Shift rows so the axial grid reads as a hexagon.
        let indent = usize::try_from(r - r_min).unwrap_or_default();
        print!("{:indent$}", "");
        for q in q_min..=q_max {
            match board.cell(HexCoordinate::new(q, r)) {
                Some(cell) => match cell.value {
                    Some(digit) => print!(" {digit}"),
                    None => print!(" ."),
                },
                None => print!("  "),
            }
        }
        println!();
    }
}

fn min_max(values: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
