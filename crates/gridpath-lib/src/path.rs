use serde::Serialize;

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::grid::{Coordinate, Grid};

/// Distance recorded for cells that have not been reached.
pub const UNREACHABLE: u64 = u64::MAX;

/// Minimum-cost route between two cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    steps: Vec<Coordinate>,
    cost: u64,
}

impl Path {
    /// Cells from start to end inclusive.
    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }

    /// Sum of the weights of every entered cell; the start cell is free.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn start(&self) -> Coordinate {
        self.steps[0]
    }

    pub fn end(&self) -> Coordinate {
        self.steps[self.steps.len() - 1]
    }

    /// Number of cardinal moves in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Counters collected while running a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Entries removed from the frontier.
    pub pops: usize,
    /// Popped entries discarded because a cheaper cost had been recorded.
    pub stale_pops: usize,
    /// Distance improvements recorded.
    pub relaxations: usize,
}

/// Find a minimum-cost path from `start` to `end`.
///
/// Entering a cell costs its weight; zero-weight cells are never entered.
/// Fails with [`Error::InvalidCoordinate`] when either endpoint lies outside
/// the grid and with [`Error::PathNotFound`] when `end` cannot be reached.
pub fn shortest_path(grid: &Grid, start: Coordinate, end: Coordinate) -> Result<Path> {
    shortest_path_with_stats(grid, start, end).map(|(path, _)| path)
}

/// Same as [`shortest_path`], also returning the search counters.
pub fn shortest_path_with_stats(
    grid: &Grid,
    start: Coordinate,
    end: Coordinate,
) -> Result<(Path, SearchStats)> {
    let start_index = checked_index(grid, start)?;
    let end_index = checked_index(grid, end)?;

    let mut stats = SearchStats::default();
    if start == end {
        let path = Path {
            steps: vec![start],
            cost: 0,
        };
        return Ok((path, stats));
    }

    let mut distances = vec![UNREACHABLE; grid.len()];
    let mut predecessors: Vec<Option<Coordinate>> = vec![None; grid.len()];
    let mut frontier = Frontier::with_capacity(grid.len());

    distances[start_index] = 0;
    frontier.insert(start, 0);

    while let Some(entry) = frontier.extract_min() {
        stats.pops += 1;
        if entry.coordinate == end {
            break;
        }

        let Some(current_index) = grid.index_of(entry.coordinate) else {
            continue;
        };
        let current_distance = distances[current_index];
        if entry.cost > current_distance {
            stats.stale_pops += 1;
            continue;
        }

        for next in grid.neighbors(entry.coordinate) {
            let Some(weight) = grid.weight_at(next).filter(|&weight| weight > 0) else {
                continue;
            };
            let Some(next_index) = grid.index_of(next) else {
                continue;
            };

            let candidate = current_distance.saturating_add(u64::from(weight));
            if candidate < distances[next_index] {
                distances[next_index] = candidate;
                predecessors[next_index] = Some(entry.coordinate);
                frontier.insert(next, candidate);
                stats.relaxations += 1;
            }
        }
    }

    tracing::debug!(
        pops = stats.pops,
        stale_pops = stats.stale_pops,
        relaxations = stats.relaxations,
        pending = frontier.len(),
        "search finished"
    );

    let cost = distances[end_index];
    if cost == UNREACHABLE {
        return Err(Error::PathNotFound { start, end });
    }

    let steps = reconstruct_path(grid, &predecessors, start, end)?;
    Ok((Path { steps, cost }, stats))
}

/// Walk `predecessors` back from `end` and return the route in forward order.
///
/// `predecessors` is indexed like the grid's flat buffer. The walk fails with
/// [`Error::InconsistentPredecessors`] on a cycle, on a chain longer than the
/// grid, or when the chain stops anywhere other than `start`.
pub fn reconstruct_path(
    grid: &Grid,
    predecessors: &[Option<Coordinate>],
    start: Coordinate,
    end: Coordinate,
) -> Result<Vec<Coordinate>> {
    let mut visited = vec![false; grid.len()];
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(node) = current {
        let index = grid
            .index_of(node)
            .ok_or(Error::InconsistentPredecessors { at: node })?;
        if visited[index] || path.len() >= grid.len() {
            return Err(Error::InconsistentPredecessors { at: node });
        }
        visited[index] = true;
        path.push(node);
        current = predecessors.get(index).copied().flatten();
    }

    match path.last() {
        Some(&last) if last == start => {}
        Some(&last) => return Err(Error::InconsistentPredecessors { at: last }),
        None => return Err(Error::InconsistentPredecessors { at: end }),
    }

    path.reverse();
    Ok(path)
}

fn checked_index(grid: &Grid, coordinate: Coordinate) -> Result<usize> {
    grid.index_of(coordinate).ok_or(Error::InvalidCoordinate {
        coordinate,
        rows: grid.rows(),
        cols: grid.cols(),
    })
}
