use thiserror::Error;

use crate::grid::Coordinate;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or end coordinate lies outside the grid.
    #[error("coordinate {coordinate} is outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },

    /// Raised when the end cell cannot be reached from the start cell.
    #[error("path not found from {start} to {end}")]
    PathNotFound { start: Coordinate, end: Coordinate },

    /// Raised when grid dimensions or row lengths are inconsistent.
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },

    /// Raised when the predecessor chain cannot be walked back to the start.
    ///
    /// This indicates a bug in the search, never a problem with the input.
    #[error("internal error: inconsistent predecessor chain at {at}")]
    InconsistentPredecessors { at: Coordinate },

    /// Raised when the textual problem description cannot be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Raised when an input coordinate is negative and so cannot address a cell.
    #[error("coordinate value {value} on line {line} is negative")]
    NegativeCoordinate { line: usize, value: i64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than a fault
    /// in the engine or the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinate { .. }
                | Error::PathNotFound { .. }
                | Error::MalformedGrid { .. }
                | Error::Parse { .. }
                | Error::NegativeCoordinate { .. }
        )
    }

    /// Whether the error reports a broken invariant inside the search engine.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::InconsistentPredecessors { .. })
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedGrid {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
