//! Priority-queue search shared by Dijkstra and A*.

use std::collections::BinaryHeap;

use gridpath_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::search::{Run, Search};

/// Reference into the grid arena, ordered by `key` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and on
        // equal keys the lowest row-major index.
        other.key.cmp(&self.key).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search selecting the unvisited cell with the smallest
/// `distance + estimate`.
///
/// Entering a cell costs its weight. Walls are never queued. The run stops
/// when the finish is selected or when no reachable cell is left. Stale heap
/// entries (cells already finalized through a cheaper entry) are skipped.
///
/// Cells with equal keys are selected lowest row-major index first, not in
/// the order they reached that key.
pub(crate) fn best_first(
    algorithm: Algorithm,
    grid: &mut Grid,
    start: Point,
    finish: Point,
    estimate: impl Fn(Point) -> i32,
) -> Result<Search, SearchError> {
    let mut run = Run::begin(algorithm, grid, start, finish)?;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut nb = Neighbors::new();

    let h = estimate(start);
    {
        let s = grid.state_at_mut(run.start_idx);
        s.distance = 0;
        s.heuristic = h;
        s.total = h;
    }
    open.push(NodeRef {
        idx: run.start_idx,
        key: h,
    });

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if grid.state_at(ci).visited {
            continue;
        }
        let cp = grid.point(ci);
        let c = grid.state_at_mut(ci);
        c.visited = true;
        let current_g = c.distance;
        run.visited.push(cp);

        if ci == run.finish_idx {
            break;
        }

        for &np in nb.of(grid, cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            let cell = grid.cell_at(ni);
            if cell.is_wall() || grid.state_at(ni).visited {
                continue;
            }
            let tentative = current_g + cell.weight();
            let n = grid.state_at_mut(ni);
            if tentative >= n.distance {
                continue;
            }
            let h = estimate(np);
            n.distance = tentative;
            n.heuristic = h;
            n.total = tentative + h;
            n.previous = Some(ci);
            log::trace!("{algorithm}: relaxed {np} to {tentative} via {cp}");
            open.push(NodeRef {
                idx: ni,
                key: n.total,
            });
        }
    }

    Ok(run.finish_run(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ref_pops_smallest_key_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 4, key: 3 });
        heap.push(NodeRef { idx: 2, key: 3 });
        heap.push(NodeRef { idx: 9, key: 1 });
        heap.push(NodeRef { idx: 0, key: 7 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![9, 2, 4, 0]);
    }
}
