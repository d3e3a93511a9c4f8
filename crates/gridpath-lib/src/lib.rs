//! gridpath library entry points.
//!
//! This crate parses weighted grid problems, runs Dijkstra's algorithm to find
//! the cheapest cardinal path between two cells, and produces summaries for
//! rendering. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod frontier;
pub mod grid;
pub mod output;
pub mod parse;
pub mod path;
pub mod query;

pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierEntry};
pub use grid::{Coordinate, Grid};
pub use output::{PathStep, PathSummary, PATH_TERMINATOR};
pub use parse::{parse_problem, Problem};
pub use path::{
    reconstruct_path, shortest_path, shortest_path_with_stats, Path, SearchStats, UNREACHABLE,
};
pub use query::{plan_path, solve, PathPlan, PathRequest};
