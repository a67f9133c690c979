use std::fmt;
use std::str::FromStr;

use gridpath_core::{Grid, Point};
use thiserror::Error;

use crate::error::SearchError;
use crate::search::Search;

/// The search strategies, all sharing the same run contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Algorithm {
    /// Unweighted breadth-first search.
    Bfs,
    /// Depth-first search, discovery order.
    Dfs,
    /// Weighted shortest path.
    Dijkstra,
    /// Heuristic shortest path, Manhattan estimate.
    Astar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Run the search from `start` to `finish`.
    ///
    /// The grid's search state is reset first; afterwards it holds the
    /// distances and predecessor links of this run.
    pub fn run(self, grid: &mut Grid, start: Point, finish: Point) -> Result<Search, SearchError> {
        match self {
            Algorithm::Bfs => crate::bfs(grid, start, finish),
            Algorithm::Dfs => crate::dfs(grid, start, finish),
            Algorithm::Dijkstra => crate::dijkstra(grid, start, finish),
            Algorithm::Astar => crate::astar(grid, start, finish),
        }
    }

    /// Run the search between the grid's own start and finish markers.
    pub fn solve(self, grid: &mut Grid) -> Result<Search, SearchError> {
        let (start, finish) = (grid.start(), grid.finish());
        self.run(grid, start, finish)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Astar => "A*",
        }
    }

    /// Whether cell weights affect the search.
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }

    /// Whether the returned path is promised to be a shortest one: fewest
    /// cells for BFS, lowest cost for Dijkstra. A* only keeps that promise
    /// on unit-weight boards, DFS never.
    pub fn guarantees_shortest(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d} (expected bfs, dfs, dijkstra or astar)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::Astar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ParseAlgorithmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
