use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::grid::{Coordinate, Grid};
use crate::path::SearchStats;
use crate::query::PathPlan;

/// Line printed after the last step in the basic rendering.
pub const PATH_TERMINATOR: &str = ".";

/// Step taken along a planned path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    /// Weight of the cell itself.
    pub weight: u32,
    /// Total cost paid up to and including this step.
    pub cumulative: u64,
}

/// Structured representation of a planned path that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub start: Coordinate,
    pub end: Coordinate,
    pub cost: u64,
    pub hops: usize,
    pub steps: Vec<PathStep>,
    pub stats: SearchStats,
}

impl PathSummary {
    /// Convert a [`PathPlan`] into a summary with per-step weights.
    pub fn from_plan(grid: &Grid, plan: &PathPlan) -> Self {
        let mut cumulative = 0u64;
        let steps = plan
            .path
            .steps()
            .iter()
            .enumerate()
            .map(|(index, &coordinate)| {
                let weight = grid.weight_at(coordinate).unwrap_or(0);
                if index > 0 {
                    cumulative += u64::from(weight);
                }
                PathStep {
                    index,
                    coordinate,
                    weight,
                    cumulative,
                }
            })
            .collect();

        Self {
            start: plan.request.start,
            end: plan.request.end,
            cost: plan.cost(),
            hops: plan.hop_count(),
            steps,
            stats: plan.stats,
        }
    }

    /// One `row col` line per step followed by the terminator line.
    pub fn render_basic(&self) -> String {
        let mut buffer = String::new();
        for step in &self.steps {
            let _ = writeln!(buffer, "{}", step.coordinate);
        }
        buffer.push_str(PATH_TERMINATOR);
        buffer.push('\n');
        buffer
    }

    /// Human-friendly listing with running costs.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path from ({}) to ({}) ({} moves; cost: {}):",
            self.start, self.end, self.hops, self.cost
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>4}. ({}) weight {} total {}",
                step.index, step.coordinate, step.weight, step.cumulative
            );
        }
        buffer
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
