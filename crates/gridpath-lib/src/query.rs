use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::Result;
use crate::grid::{Coordinate, Grid};
use crate::parse::Problem;
use crate::path::{shortest_path_with_stats, Path, SearchStats};

/// A single start→end query against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathRequest {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl PathRequest {
    pub fn new(start: impl Into<Coordinate>, end: impl Into<Coordinate>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl From<&Problem> for PathRequest {
    fn from(problem: &Problem) -> Self {
        Self {
            start: problem.start,
            end: problem.end,
        }
    }
}

/// Answered query returned by [`plan_path`].
#[derive(Debug, Clone)]
pub struct PathPlan {
    pub request: PathRequest,
    pub path: Path,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl PathPlan {
    /// Number of moves in the planned path.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    pub fn cost(&self) -> u64 {
        self.path.cost()
    }
}

/// Answer `request` against `grid`, timing the search.
pub fn plan_path(grid: &Grid, request: &PathRequest) -> Result<PathPlan> {
    let started = Instant::now();
    let (path, stats) = shortest_path_with_stats(grid, request.start, request.end)?;
    let elapsed = started.elapsed();

    tracing::info!(
        start = %request.start,
        end = %request.end,
        cost = path.cost(),
        hops = path.hop_count(),
        elapsed_us = elapsed.as_micros() as u64,
        "path found"
    );

    Ok(PathPlan {
        request: *request,
        path,
        stats,
        elapsed,
    })
}

/// Convenience wrapper answering the query embedded in `problem`.
pub fn solve(problem: &Problem) -> Result<PathPlan> {
    plan_path(&problem.grid, &PathRequest::from(problem))
}
