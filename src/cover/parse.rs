#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for a plain-text exact cover instance format.
//!
//! The format is deliberately DIMACS-like:
//! - Comment lines start with 'c'.
//! - An optional problem line `p xc <num_columns> <num_rows>` declares the
//!   size of the column universe. (The row count is ignored and derived from
//!   the actual rows found.)
//! - Every other line is one candidate row: the column indices it covers,
//!   whitespace-separated. There is no terminating sentinel, since column
//!   index 0 is valid.
//! - An optional '%' line marks end-of-data.
//!
//! Without a problem line the universe size is inferred as the highest column
//! index seen plus one, so trailing uncoverable columns need an explicit
//! `p xc` line to exist at all.

use crate::cover::matrix::Matrix;
use itertools::Itertools;
use std::io::{self, BufRead};

/// Parses an exact cover instance from a `BufRead` source into a [`Matrix`].
///
/// # Panics
///
/// - If reading a line from the `reader` fails (e.g. I/O error, invalid
///   UTF-8).
/// - If a token where a column index is expected does not parse as `usize`,
///   or a problem line is malformed. This implies a malformed instance file.
pub fn parse_instance<R: BufRead>(reader: R) -> Matrix {
    let mut lines = reader
        .lines()
        .map(|line_result| line_result.unwrap_or_else(|e| panic!("Failed to read line: {e}")));

    let mut declared_columns: Option<usize> = None;
    let mut rows: Vec<Vec<usize>> = Vec::new();

    for line_str in &mut lines {
        let mut parts = line_str.split_whitespace().peekable();

        match parts.peek() {
            Some(&"%") => break,
            None | Some(&"c") => {}
            Some(&"p") => {
                // p xc <columns> <rows>
                let mut fields = parts.skip(1);
                match fields.next() {
                    Some("xc") => {}
                    other => panic!("Expected problem line 'p xc', got 'p {}'", other.unwrap_or("")),
                }
                let columns = fields
                    .next()
                    .unwrap_or_else(|| panic!("Problem line is missing the column count"));
                declared_columns = Some(columns.parse::<usize>().unwrap_or_else(|e| {
                    panic!("Failed to parse column count '{columns}' as usize: {e}")
                }));
            }
            Some(_) => {
                let row: Vec<usize> = parts
                    .map(|s| {
                        s.parse::<usize>().unwrap_or_else(|e| {
                            panic!("Failed to parse column index '{s}' as usize: {e}")
                        })
                    })
                    .collect_vec();
                rows.push(row);
            }
        }
    }

    let num_columns = declared_columns.unwrap_or_else(|| {
        rows.iter()
            .flatten()
            .max()
            .map_or(0, |&max_column| max_column + 1)
    });

    Matrix::new(num_columns, rows)
}

/// Parses an exact cover instance file specified by its path.
///
/// # Errors
///
/// Returns `io::Result::Err` if the file cannot be opened. Panics from
/// [`parse_instance`] (malformed content) propagate.
pub fn parse_file(file_path: &std::path::Path) -> io::Result<Matrix> {
    let file = std::fs::File::open(file_path)?;
    let reader = io::BufReader::new(file);
    Ok(parse_instance(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple_instance() {
        let content = "c a comment\n\
                       p xc 4 3\n\
                       0 1\n\
                       2 3\n\
                       1 2\n";
        let matrix = parse_instance(Cursor::new(content));

        assert_eq!(matrix.num_columns(), 4);
        assert_eq!(matrix.num_rows(), 3);
        assert_eq!(matrix.row(0), &[0, 1]);
        assert_eq!(matrix.row(2), &[1, 2]);
    }

    #[test]
    fn test_parse_infers_universe_without_problem_line() {
        let content = "0 2\n1\n";
        let matrix = parse_instance(Cursor::new(content));

        assert_eq!(matrix.num_columns(), 3);
        assert_eq!(matrix.num_rows(), 2);
    }

    #[test]
    fn test_parse_with_empty_lines_and_end_marker() {
        let content = "p xc 2 2\n\
                       \n\
                       0\n\
                       \n\
                       1\n\
                       %\n\
                       c this should be ignored\n\
                       0 1\n";
        let matrix = parse_instance(Cursor::new(content));

        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.row(1), &[1]);
    }

    #[test]
    fn test_parse_empty_input() {
        let matrix = parse_instance(Cursor::new(""));
        assert_eq!(matrix.num_columns(), 0);
        assert_eq!(matrix.num_rows(), 0);
    }

    #[test]
    #[should_panic(expected = "Failed to parse column index 'abc' as usize")]
    fn test_parse_malformed_index() {
        let content = "0 abc 2\n";
        let _matrix = parse_instance(Cursor::new(content));
    }

    #[test]
    #[should_panic(expected = "Expected problem line 'p xc'")]
    fn test_parse_wrong_problem_kind() {
        let content = "p cnf 3 2\n";
        let _matrix = parse_instance(Cursor::new(content));
    }
}
