use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cardinal offsets as `(row, col)` deltas, in expansion order.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Zero-based `(row, col)` position of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of cardinal steps between `self` and `other`.
    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one cardinal step away.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Immutable rectangular grid of cell weights.
///
/// A weight of `0` marks the cell as impassable; any other weight is the cost
/// paid to enter the cell. Weights are stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    weights: Vec<u32>,
}

impl Grid {
    /// Build a grid with declared dimensions, validating that `weights` holds
    /// exactly `rows` rows of `cols` entries each.
    pub fn new(rows: usize, cols: usize, weights: Vec<Vec<u32>>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::malformed(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        if weights.len() != rows {
            return Err(Error::malformed(format!(
                "expected {rows} rows, found {}",
                weights.len()
            )));
        }
        let ragged = weights
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != cols);
        if let Some((index, row)) = ragged {
            return Err(Error::malformed(format!(
                "row {index} has {} columns, expected {cols}",
                row.len()
            )));
        }
        if rows.checked_mul(cols).is_none() {
            return Err(Error::malformed(format!(
                "grid dimensions {rows}x{cols} overflow the cell count"
            )));
        }
        let flat: Vec<u32> = weights.into_iter().flatten().collect();

        Ok(Self {
            rows,
            cols,
            weights: flat,
        })
    }

    /// Build a grid whose column count is taken from the first row.
    pub fn from_rows(weights: Vec<Vec<u32>>) -> Result<Self> {
        let rows = weights.len();
        let cols = weights.first().map(Vec::len).unwrap_or(0);
        Self::new(rows, cols, weights)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Flat row-major index of `coord`, or `None` when out of bounds.
    pub fn index_of(&self, coord: Coordinate) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// Inverse of [`Grid::index_of`].
    pub fn coordinate_at(&self, index: usize) -> Option<Coordinate> {
        (index < self.weights.len()).then(|| Coordinate::new(index / self.cols, index % self.cols))
    }

    pub fn weight_at(&self, coord: Coordinate) -> Option<u32> {
        self.index_of(coord).map(|index| self.weights[index])
    }

    /// `true` when `coord` is inside the grid and has a non-zero weight.
    pub fn is_passable(&self, coord: Coordinate) -> bool {
        self.weight_at(coord).is_some_and(|weight| weight > 0)
    }

    /// In-bounds cardinal neighbours of `coord`. Impassable cells are included;
    /// callers decide whether they may be entered.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(coord, dr, dc))
    }

    /// Iterate over the rows of the grid as weight slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.weights.chunks(self.cols)
    }

    fn offset(&self, coord: Coordinate, dr: isize, dc: isize) -> Option<Coordinate> {
        let row = coord.row.checked_add_signed(dr)?;
        let col = coord.col.checked_add_signed(dc)?;
        let next = Coordinate::new(row, col);
        self.contains(next).then_some(next)
    }
}
