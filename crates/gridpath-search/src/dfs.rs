use gridpath_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::search::{Run, Search};

/// Depth-first search from `start` to `finish` with an explicit stack.
///
/// Cells are marked visited, linked to their predecessor and appended to the
/// visited order when they are *discovered* (pushed), not when popped. The
/// run stops once the finish is popped. Neighbors are pushed top, right,
/// bottom, left, so the last of them is explored first.
///
/// The path found is whatever the discovery tree yields; it is not a
/// shortest path.
pub fn dfs(grid: &mut Grid, start: Point, finish: Point) -> Result<Search, SearchError> {
    let mut run = Run::begin(Algorithm::Dfs, grid, start, finish)?;

    let mut stack: Vec<usize> = Vec::new();
    let mut nb = Neighbors::new();

    {
        let s = grid.state_at_mut(run.start_idx);
        s.visited = true;
        s.distance = 0;
    }
    run.visited.push(start);
    stack.push(run.start_idx);

    while let Some(ci) = stack.pop() {
        if ci == run.finish_idx {
            break;
        }
        let cp = grid.point(ci);
        let depth = grid.state_at(ci).distance;

        for &np in nb.of(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if grid.state_at(ni).visited || grid.cell_at(ni).is_wall() {
                continue;
            }
            let n = grid.state_at_mut(ni);
            n.visited = true;
            n.distance = depth + 1;
            n.previous = Some(ci);
            run.visited.push(np);
            stack.push(ni);
        }
    }

    Ok(run.finish_run(grid))
}
