//! # xcover
//!
//! `xcover` is a configurable command-line exact cover solver. It enumerates
//! exact covers of instance files in a simple DIMACS-like text format, and
//! includes a specialized Sudoku solver that encodes puzzles of arbitrary box
//! size as exact cover instances.
//!
//! ## Usage
//!
//! ```sh
//! # Solve an instance file, reporting the first cover found
//! xcover instance.xc
//!
//! # Enumerate every cover of an inline instance
//! xcover text --input "0 1\n2 3\n1 2" --all
//!
//! # Solve a Sudoku puzzle and print the filled grid
//! xcover sudoku --path puzzle.sudoku --print-solution
//!
//! # Solve everything under a directory
//! xcover dir --path ./puzzles
//! ```
//!
//! Common options: `--debug`, `--verify`, `--stats`, `--print-solution`,
//! `-n/--max-solutions`, `--all` and `--column-selection`. See `--help`.

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    command_line::cli::run();
}
