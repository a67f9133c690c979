use gridpath_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::best_first;
use crate::search::Search;

/// Heuristic shortest-path search (A*) from `start` to `finish`.
///
/// Same relaxation as [`dijkstra`](crate::dijkstra), but cells are selected
/// by `distance + manhattan(cell, finish)`.
///
/// The path is only promised to be the cheapest when every weight is 1.
/// Weighted boards are searched with the same unweighted heuristic and carry
/// no optimality promise; use [`dijkstra`](crate::dijkstra) when the cheapest
/// path matters on a weighted board.
pub fn astar(grid: &mut Grid, start: Point, finish: Point) -> Result<Search, SearchError> {
    best_first(Algorithm::Astar, grid, start, finish, |p| manhattan(p, finish))
}
