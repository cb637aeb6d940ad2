#![allow(clippy::cast_precision_loss)]
//! Command-line interface: argument parsing, dispatch and result reporting.

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};
use xcover::cover::column_selection::{ColumnSelection, DeclarationOrder, FewestCandidates};
use xcover::cover::matrix::Matrix;
use xcover::cover::parse::{parse_file, parse_instance};
use xcover::cover::search::{Search, SearchStats, Solution};
use xcover::sudoku::solver::{parse_sudoku_file, Sudoku};

/// Defines the command-line interface for the exact cover solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "xcover", version, about = "A configurable exact cover solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to an instance file (or, for a directory, as
    /// a batch of instance and puzzle files) to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `sudoku`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the exact cover solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve an exact cover instance file.
    File {
        /// Path to the instance file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve an exact cover instance provided as plain text.
    Text {
        /// Literal instance input as a string (e.g. "0 1\n2 3\n1 2").
        /// Each line is one candidate row as whitespace-separated column
        /// indices.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a Sudoku puzzle.
    /// The puzzle is encoded as an exact cover instance, which is then
    /// searched.
    Sudoku {
        /// Path to the puzzle file. The format of this file is defined by the
        /// `sudoku::solver::parse_sudoku_file` function.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every instance (`.xc`) and puzzle (`.sudoku`) file under a
    /// directory.
    Dir {
        /// Path to the directory to walk.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the solving
    /// process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of found covers. Every reported solution is
    /// checked to cover each column exactly once.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the found covers (row handles, or the filled grid
    /// for Sudoku).
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_solution: bool,

    /// Stop after this many solutions.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub(crate) max_solutions: usize,

    /// Enumerate every solution, ignoring --max-solutions.
    #[arg(long, default_value_t = false)]
    pub(crate) all: bool,

    /// Specifies the column choice heuristic to branch with.
    #[arg(long, default_value_t = ColumnSelectionType::FewestCandidates)]
    pub(crate) column_selection: ColumnSelectionType,
}

impl CommonOptions {
    fn limit(&self) -> usize {
        if self.all {
            usize::MAX
        } else {
            self.max_solutions
        }
    }
}

/// The column choice heuristics selectable from the command line.
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnSelectionType {
    /// Branch on the column with the fewest remaining candidates.
    #[default]
    FewestCandidates,
    /// Branch on the lowest live column handle.
    DeclarationOrder,
}

impl Display for ColumnSelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FewestCandidates => write!(f, "fewest-candidates"),
            Self::DeclarationOrder => write!(f, "declaration-order"),
        }
    }
}

/// Main entry point: parses the command line and dispatches.
pub(crate) fn run() {
    let cli = Cli::parse();

    // A bare path without a subcommand solves a single instance file, or a
    // whole directory of them.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            if path.is_dir() {
                if let Err(e) = solve_dir(&path, &cli.common) {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            } else {
                solve_instance_file(&path, &cli.common);
            }
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => solve_instance_file(&path, &common),
        Some(Commands::Text { input, common }) => {
            let time = Instant::now();
            let matrix = parse_instance(Cursor::new(input));
            let parse_time = time.elapsed();

            report_instance(matrix, &common, None, parse_time);
        }
        Some(Commands::Sudoku { path, common }) => {
            if let Err(e) = solve_sudoku(&path, &common) {
                eprintln!("Error parsing Sudoku file: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Dir { path, common }) => {
            if let Err(e) = solve_dir(&path, &common) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "xcover", &mut std::io::stdout());
        }
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Solves a directory of instance and puzzle files.
///
/// Walks `path` recursively, solving every `.xc` file as a generic instance
/// and every `.sudoku` file as a puzzle. Other files are skipped.
///
/// # Errors
///
/// The first puzzle that fails to parse aborts the walk.
pub(crate) fn solve_dir(path: &PathBuf, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();
        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_some_and(|ext| ext == "sudoku") {
            solve_sudoku(&file_path, common).map_err(|e| e.to_string())?;
            continue;
        }

        if file_path.extension().is_some_and(|ext| ext == "xc") {
            solve_instance_file(&file_path, common);
        } else {
            eprintln!("Skipping unrecognised file: {}", file_path.display());
        }
    }

    Ok(())
}

/// Parses an instance file, solves it and reports the results.
fn solve_instance_file(path: &Path, common: &CommonOptions) {
    let time = Instant::now();
    let matrix =
        parse_file(path).unwrap_or_else(|e| panic!("Failed to parse file {}: {e}", path.display()));
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    report_instance(matrix, common, Some(path), parse_time);
}

/// Enumerates covers of `matrix` up to the configured limit and prints
/// verification, statistics and the covers themselves as requested.
fn report_instance(matrix: Matrix, common: &CommonOptions, label: Option<&Path>, parse_time: Duration) {
    if common.debug {
        if let Some(name) = label {
            println!("Instance: {}", name.display());
        }
        println!("Columns: {}", matrix.num_columns());
        println!("Rows: {}", matrix.num_rows());
    }

    let (covers, elapsed, search_stats) = enumerate_instance(&matrix, common);
    let (allocated_mib, resident_mib) = memory_mib();

    if common.verify {
        let ok = covers.iter().all(|cover| matrix.verify(cover));
        println!("Verified: {ok:?}");
        assert!(ok, "A reported cover failed verification!");
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            matrix.num_columns(),
            matrix.num_rows(),
            &search_stats,
            allocated_mib,
            resident_mib,
        );
    }

    if common.print_solution {
        for cover in &covers {
            println!(
                "{}",
                cover
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }

    match covers.len() {
        0 => println!("\nNo exact cover"),
        1 => println!("\n1 exact cover"),
        n => println!("\n{n} exact covers"),
    }
}

/// Runs the search over `matrix` with the configured heuristic.
fn enumerate_instance(
    matrix: &Matrix,
    common: &CommonOptions,
) -> (Vec<Solution>, Duration, SearchStats) {
    match common.column_selection {
        ColumnSelectionType::FewestCandidates => {
            enumerate_with(matrix.clone(), FewestCandidates, common)
        }
        ColumnSelectionType::DeclarationOrder => {
            enumerate_with(matrix.clone(), DeclarationOrder, common)
        }
    }
}

fn enumerate_with<C: ColumnSelection>(
    matrix: Matrix,
    selector: C,
    common: &CommonOptions,
) -> (Vec<Solution>, Duration, SearchStats) {
    epoch::advance().unwrap();

    let time = Instant::now();
    let mut search = Search::with_selector(matrix, selector);
    let mut covers = Vec::new();
    while covers.len() < common.limit() {
        match search.next() {
            Some(cover) => covers.push(cover),
            None => break,
        }
    }
    let elapsed = time.elapsed();

    if common.debug {
        println!("Covers: {covers:?}");
        println!("Time: {elapsed:?}");
    }

    (covers, elapsed, search.stats())
}

/// Parses a puzzle file, solves it and reports the results.
///
/// # Errors
///
/// Returns the rendered `PuzzleError` if the file cannot be parsed or the
/// puzzle is malformed.
pub(crate) fn solve_sudoku(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let sudoku = parse_sudoku_file(path).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    println!("Parsed Sudoku:\n{sudoku}");

    let (solved, elapsed, search_stats) = match common.column_selection {
        ColumnSelectionType::FewestCandidates => {
            enumerate_sudoku(&sudoku, FewestCandidates, common)
        }
        ColumnSelectionType::DeclarationOrder => {
            enumerate_sudoku(&sudoku, DeclarationOrder, common)
        }
    };
    let (allocated_mib, resident_mib) = memory_mib();

    if common.verify {
        let ok = solved.iter().all(Sudoku::is_solved);
        println!("Verified: {ok:?}");
        assert!(ok, "A reported grid failed verification!");
    }

    if common.stats {
        let matrix = sudoku.to_exact_cover();
        print_stats(
            parse_time,
            elapsed,
            matrix.num_columns(),
            matrix.num_rows(),
            &search_stats,
            allocated_mib,
            resident_mib,
        );
    }

    for grid in &solved {
        println!("Solution:\n{grid}");
    }
    match solved.len() {
        0 => println!("\nNo solution found"),
        1 => println!("\n1 solution"),
        n => println!("\n{n} solutions"),
    }

    Ok(())
}

fn enumerate_sudoku<C: ColumnSelection>(
    sudoku: &Sudoku,
    selector: C,
    common: &CommonOptions,
) -> (Vec<Sudoku>, Duration, SearchStats) {
    epoch::advance().unwrap();

    let time = Instant::now();
    let mut solutions = sudoku.solutions_with(selector);
    let mut solved = Vec::new();
    while solved.len() < common.limit() {
        match solutions.next() {
            Some(grid) => solved.push(grid),
            None => break,
        }
    }
    let elapsed = time.elapsed();

    if common.debug {
        println!("Givens consistent: {}", !solutions.is_infeasible());
        println!("Time: {elapsed:?}");
    }

    (solved, elapsed, solutions.stats())
}

/// Reads allocator statistics, in MiB, for the stats report.
fn memory_mib() -> (f64, f64) {
    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    (
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    )
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    num_columns: usize,
    num_rows: usize,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Columns", num_columns);
    stat_line("Rows (candidates)", num_rows);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Solutions", s.solutions);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
