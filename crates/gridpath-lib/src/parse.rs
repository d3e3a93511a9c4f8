//! Parser for the textual problem description.
//!
//! ```text
//! R C
//! <R lines of C whitespace-separated weights>
//! start_row start_col
//! end_row end_col
//! ```
//!
//! Blank lines are skipped and anything after the end line is ignored.

use std::io::Read;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grid::{Coordinate, Grid};

/// A parsed query: the grid plus both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Problem {
    /// Read the whole of `reader` and parse it.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        parse_problem(&input)
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_problem(input)
    }
}

/// Parse a complete problem description.
pub fn parse_problem(input: &str) -> Result<Problem> {
    let mut lines = Lines::new(input);

    let (line, header) = lines.next_required("grid dimensions")?;
    let [rows, cols] = parse_pair::<usize>(line, header, "grid dimension")?;
    if rows == 0 || cols == 0 {
        return Err(Error::malformed(format!(
            "grid dimensions must be positive, got {rows}x{cols}"
        )));
    }

    let mut weights = Vec::new();
    for row in 0..rows {
        let (line, text) = lines.next_required(&format!("weights for row {row}"))?;
        let values = parse_values::<u32>(line, text, "weight")?;
        if values.len() != cols {
            return Err(Error::malformed(format!(
                "row {row} on line {line} has {} columns, expected {cols}",
                values.len()
            )));
        }
        weights.push(values);
    }
    let grid = Grid::new(rows, cols, weights)?;

    let (line, text) = lines.next_required("start coordinate")?;
    let start = parse_coordinate(line, text)?;
    let (line, text) = lines.next_required("end coordinate")?;
    let end = parse_coordinate(line, text)?;

    tracing::debug!(rows, cols, %start, %end, "parsed problem");
    Ok(Problem { grid, start, end })
}

/// Non-blank lines paired with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
            last: 0,
        }
    }

    fn next_required(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        for (index, text) in self.inner.by_ref() {
            self.last = index + 1;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok((index + 1, trimmed));
            }
        }
        Err(Error::parse(
            self.last + 1,
            format!("unexpected end of input, expected {expected}"),
        ))
    }
}

fn parse_values<T: FromStr>(line: usize, text: &str, what: &str) -> Result<Vec<T>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| Error::parse(line, format!("invalid {what} '{token}'")))
        })
        .collect()
}

fn parse_pair<T: FromStr>(line: usize, text: &str, what: &str) -> Result<[T; 2]> {
    let values = parse_values::<T>(line, text, what)?;
    let count = values.len();
    <[T; 2]>::try_from(values)
        .map_err(|_| Error::parse(line, format!("expected 2 values, found {count}")))
}

fn parse_coordinate(line: usize, text: &str) -> Result<Coordinate> {
    let [row, col] = parse_pair::<i64>(line, text, "coordinate")?;
    let row = to_index(line, row)?;
    let col = to_index(line, col)?;
    Ok(Coordinate::new(row, col))
}

fn to_index(line: usize, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::NegativeCoordinate { line, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 3\n1 1 1\n1 0 1\n1 1 1\n0 0\n2 2\n";

    #[test]
    fn parses_sample_problem() {
        let problem = parse_problem(SAMPLE).unwrap();
        assert_eq!(problem.grid.rows(), 3);
        assert_eq!(problem.grid.cols(), 3);
        assert!(!problem.grid.is_passable(Coordinate::new(1, 1)));
        assert_eq!(problem.start, Coordinate::new(0, 0));
        assert_eq!(problem.end, Coordinate::new(2, 2));
    }

    #[test]
    fn tolerates_blank_lines_and_extra_whitespace() {
        let input = "\n2  2\n\n 1 2 \n3 4\n\n0 1\n1 0\ntrailing content\n";
        let problem: Problem = input.parse().unwrap();
        assert_eq!(problem.grid.weight_at(Coordinate::new(1, 1)), Some(4));
        assert_eq!(problem.end, Coordinate::new(1, 0));
    }

    #[test]
    fn reads_from_any_reader() {
        let problem = Problem::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(problem.grid.len(), 9);
    }

    #[test]
    fn short_row_is_a_malformed_grid() {
        let error = parse_problem("2 3\n1 1 1\n1 1\n0 0\n1 1\n").unwrap_err();
        assert!(matches!(error, Error::MalformedGrid { .. }));
    }

    #[test]
    fn huge_declared_row_count_fails_cleanly() {
        let error = parse_problem("1000000000000000000 1\n1\n0 0\n0 0\n").unwrap_err();
        assert!(matches!(error, Error::MalformedGrid { .. }));
        assert!(error.to_string().contains("row 1 on line 3 has 2 columns"));
    }

    #[test]
    fn huge_declared_row_count_with_short_input_reports_end_of_input() {
        let error = parse_problem("1000000000000000000 1\n1\n").unwrap_err();
        assert!(matches!(error, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn missing_end_line_reports_position() {
        let error = parse_problem("1 2\n1 1\n0 0\n").unwrap_err();
        match error {
            Error::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("end coordinate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let error = parse_problem("1 2\n1 x\n0 0\n0 1\n").unwrap_err();
        assert!(matches!(error, Error::Parse { line: 2, .. }));
        assert!(error.to_string().contains("invalid weight 'x'"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let error = parse_problem("1 2\n1 -3\n0 0\n0 1\n").unwrap_err();
        assert!(matches!(error, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn negative_coordinate_is_reported() {
        let error = parse_problem("1 2\n1 1\n0 -1\n0 1\n").unwrap_err();
        assert!(matches!(
            error,
            Error::NegativeCoordinate { line: 3, value: -1 }
        ));
    }

    #[test]
    fn zero_dimensions_are_malformed() {
        let error = parse_problem("0 3\n0 0\n0 0\n").unwrap_err();
        assert!(matches!(error, Error::MalformedGrid { .. }));
    }

    #[test]
    fn coordinate_needs_two_values() {
        let error = parse_problem("1 1\n1\n0\n0 0\n").unwrap_err();
        assert!(error.to_string().contains("expected 2 values, found 1"));
    }
}
