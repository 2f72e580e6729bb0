use std::io;
use std::process;
use std::time::Instant;

use clap::Parser;

use sudoku_backtrack::Sudoku;
use sudoku_backtrack::constraint::DefaultConstraint;
use sudoku_backtrack::solver::{BacktrackingSolver, Solution, Solver};

/// Reads a Sudoku board from standard input, solves it by exhaustive
/// backtracking search, and prints the solved board, or reports that no
/// solution exists.
///
/// The board is given as size * size whitespace-separated integers in
/// row-major order, where 0 denotes an empty cell.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {

    /// Grid size (number of rows and columns). Must be a perfect square.
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    size: usize
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin();
    let sudoku = match Sudoku::read_from(args.size, stdin.lock(),
            DefaultConstraint) {
        Ok(sudoku) => sudoku,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    println!("{}", sudoku.grid());
    log::info!("loaded a {0}x{0} board with {1} clues", args.size,
        sudoku.grid().count_clues());

    let start = Instant::now();
    let solution = BacktrackingSolver.solve(&sudoku);
    log::debug!("search finished in {:?}", start.elapsed());

    match solution {
        Solution::Solved(grid) => {
            println!();
            println!("{}", grid);
        },
        Solution::Impossible => {
            println!();
            println!("no solution");
            process::exit(2);
        }
    }
}
