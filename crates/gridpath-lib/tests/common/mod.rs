//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: fixture loading, a tiny deterministic
//! grid generator, and an exhaustive reference search for small grids.

use std::path::PathBuf;

use gridpath_lib::{Coordinate, Grid, Path, Problem};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load and parse a fixture problem by file name.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> Problem {
    let path = fixtures_dir().join(name);
    let file = std::fs::File::open(&path)
        .unwrap_or_else(|e| panic!("open fixture {}: {}", path.display(), e));
    Problem::from_reader(file).expect("fixture parses")
}

/// Linear congruential generator; good enough to vary test grids.
#[allow(dead_code)]
pub struct Lcg(u64);

#[allow(dead_code)]
impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }
}

/// Random grid with roughly one impassable cell in `1 / wall_odds`.
#[allow(dead_code)]
pub fn random_grid(rng: &mut Lcg, rows: usize, cols: usize, wall_odds: u32) -> Grid {
    let weights = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.next_below(wall_odds) == 0 {
                        0
                    } else {
                        1 + rng.next_below(9)
                    }
                })
                .collect()
        })
        .collect();
    Grid::new(rows, cols, weights).expect("generated grid is rectangular")
}

/// Cheapest cost over every simple cardinal path, found by exhaustive search.
#[allow(dead_code)]
pub fn brute_force_cost(grid: &Grid, start: Coordinate, end: Coordinate) -> Option<u64> {
    fn walk(
        grid: &Grid,
        at: Coordinate,
        end: Coordinate,
        cost: u64,
        visited: &mut Vec<bool>,
        best: &mut Option<u64>,
    ) {
        if at == end {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for next in grid.neighbors(at) {
            let index = grid.index_of(next).unwrap();
            if visited[index] || !grid.is_passable(next) {
                continue;
            }
            visited[index] = true;
            let weight = u64::from(grid.weight_at(next).unwrap());
            walk(grid, next, end, cost + weight, visited, best);
            visited[index] = false;
        }
    }

    let mut visited = vec![false; grid.len()];
    visited[grid.index_of(start)?] = true;
    let mut best = None;
    walk(grid, start, end, 0, &mut visited, &mut best);
    best
}

/// Assert the structural path properties: endpoints, cardinal steps, cost.
#[allow(dead_code)]
pub fn assert_valid_path(grid: &Grid, path: &Path, start: Coordinate, end: Coordinate) {
    let steps = path.steps();
    assert_eq!(steps.first(), Some(&start), "path starts at start");
    assert_eq!(steps.last(), Some(&end), "path ends at end");
    for pair in steps.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} -> {} is not a cardinal step",
            pair[0],
            pair[1]
        );
    }
    let entered: u64 = steps[1..]
        .iter()
        .map(|&step| {
            let weight = grid.weight_at(step).expect("step inside grid");
            assert!(weight > 0, "path enters impassable cell {step}");
            u64::from(weight)
        })
        .sum();
    assert_eq!(entered, path.cost(), "cost equals entered weights");
}
