//! Output formatting for planned paths.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;

use gridpath_lib::{Coordinate, Grid, PathSummary};

use crate::terminal::ColorPalette;

/// Supported stdout renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `row col` line per step followed by a `.` line.
    #[default]
    Basic,
    /// Numbered steps with running cost.
    Text,
    /// Pretty-printed JSON summary.
    Json,
    /// The grid drawn with the path marked.
    Map,
}

/// Render `summary` in the requested format.
pub fn render(
    format: OutputFormat,
    grid: &Grid,
    summary: &PathSummary,
    palette: &ColorPalette,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Basic => summary.render_basic(),
        OutputFormat::Text => summary.render_text(),
        OutputFormat::Json => {
            let mut json = summary.to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Map => render_map(grid, summary, palette),
    };
    Ok(rendered)
}

/// Draw the grid: `#` impassable, `.` open, `*` path, `S`/`E` endpoints.
pub fn render_map(grid: &Grid, summary: &PathSummary, palette: &ColorPalette) -> String {
    let on_path: HashSet<Coordinate> = summary.steps.iter().map(|s| s.coordinate).collect();
    let mut buffer = String::with_capacity(grid.len() * 2);

    for (row, weights) in grid.iter_rows().enumerate() {
        for (col, &weight) in weights.iter().enumerate() {
            let cell = Coordinate::new(row, col);
            let (color, glyph) = if cell == summary.start {
                (palette.start, 'S')
            } else if cell == summary.end {
                (palette.end, 'E')
            } else if on_path.contains(&cell) {
                (palette.path, '*')
            } else if weight > 0 {
                (palette.open, '.')
            } else {
                (palette.wall, '#')
            };
            let _ = write!(buffer, "{color}{glyph}{}", palette.reset);
        }
        buffer.push('\n');
    }
    let _ = writeln!(buffer, "cost: {}", summary.cost);
    buffer
}
