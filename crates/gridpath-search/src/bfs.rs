use std::collections::VecDeque;

use gridpath_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::search::{Run, Search};

/// Unweighted breadth-first search from `start` to `finish`.
///
/// Each cell is enqueued at most once; its hop count and predecessor are
/// recorded when it is enqueued and it is marked visited when dequeued.
/// Stops when the finish is dequeued or the frontier runs dry. Weights are
/// ignored, so the resulting path has the fewest cells, not the lowest cost.
pub fn bfs(grid: &mut Grid, start: Point, finish: Point) -> Result<Search, SearchError> {
    let mut run = Run::begin(Algorithm::Bfs, grid, start, finish)?;

    let mut seen = vec![false; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nb = Neighbors::new();

    seen[run.start_idx] = true;
    grid.state_at_mut(run.start_idx).distance = 0;
    queue.push_back(run.start_idx);

    while let Some(ci) = queue.pop_front() {
        let cp = grid.point(ci);
        let current = grid.state_at_mut(ci);
        current.visited = true;
        let current_dist = current.distance;
        run.visited.push(cp);

        if ci == run.finish_idx {
            break;
        }

        for &np in nb.of(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if seen[ni] || grid.cell_at(ni).is_wall() {
                continue;
            }
            seen[ni] = true;
            let n = grid.state_at_mut(ni);
            n.distance = current_dist + 1;
            n.previous = Some(ci);
            queue.push_back(ni);
        }
    }

    Ok(run.finish_run(grid))
}
