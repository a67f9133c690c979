//! Path reconstruction from the predecessor links a run leaves in the grid.

use gridpath_core::{Grid, Point};

use crate::error::SearchError;

/// Walk the predecessor chain from `finish` back to the root of the search
/// tree and return it in start-to-finish order.
///
/// This is the raw walk: when the finish was never reached it has no
/// predecessor and the result is the single cell `[finish]`, which looks
/// like a one-cell path. Use [`shortest_path`] or check
/// [`Search::reached`](crate::Search::reached) to tell the two apart. An
/// out-of-bounds `finish` yields an empty path.
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = grid.idx(finish);
    // The links form a tree; the bound only guards against a corrupted grid.
    while let Some(ci) = cur {
        if path.len() == grid.len() {
            break;
        }
        path.push(grid.point(ci));
        cur = grid.state_at(ci).previous;
    }
    path.reverse();
    path
}

/// The path to `finish` found by the last run on `grid`.
///
/// Fails with [`SearchError::Unreachable`] when the run did not reach
/// `finish`, instead of returning the degenerate `[finish]`.
pub fn shortest_path(grid: &Grid, finish: Point) -> Result<Vec<Point>, SearchError> {
    let state = grid.state(finish)?;
    if !state.visited {
        return Err(SearchError::Unreachable { finish });
    }
    Ok(reconstruct_path(grid, finish))
}

/// Total cost of walking `path`: the sum of the weights of every cell
/// entered, i.e. all cells but the first.
pub fn path_cost(grid: &Grid, path: &[Point]) -> i32 {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.get(p).ok())
        .map(|c| c.weight())
        .sum()
}
