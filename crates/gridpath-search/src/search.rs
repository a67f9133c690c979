use gridpath_core::{ConfigIssue, Grid, GridError, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::path::shortest_path;

/// Outcome of one search run.
///
/// The visited order drives step-by-step playback; the path itself lives in
/// the predecessor links the run wrote into the grid, see [`Search::path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    algorithm: Algorithm,
    start: Point,
    finish: Point,
    visited: Vec<Point>,
    reached: bool,
}

impl Search {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Cells in the order the run visited them.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }

    /// Take the visited order out of the result.
    pub fn into_visited(self) -> Vec<Point> {
        self.visited
    }

    /// Whether the run reached the finish.
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// The start-to-finish path found by the run.
    ///
    /// `grid` must be the grid the run was made on, with no search or reset
    /// in between. Fails with [`SearchError::Unreachable`] when the finish
    /// was not reached.
    pub fn path(&self, grid: &Grid) -> Result<Vec<Point>, SearchError> {
        if !self.reached {
            return Err(SearchError::Unreachable {
                finish: self.finish,
            });
        }
        shortest_path(grid, self.finish)
    }
}

/// A run in progress: validated endpoints and the visited order so far.
pub(crate) struct Run {
    pub(crate) algorithm: Algorithm,
    pub(crate) start: Point,
    pub(crate) finish: Point,
    pub(crate) start_idx: usize,
    pub(crate) finish_idx: usize,
    pub(crate) visited: Vec<Point>,
}

impl Run {
    /// Validate the endpoints and clear the grid's search state.
    ///
    /// Both endpoints must be in bounds, non-wall and distinct.
    pub(crate) fn begin(
        algorithm: Algorithm,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Self, SearchError> {
        let start_idx = grid.idx(start).ok_or(GridError::OutOfBounds(start))?;
        let finish_idx = grid.idx(finish).ok_or(GridError::OutOfBounds(finish))?;
        if start_idx == finish_idx {
            return Err(GridError::from(ConfigIssue::StartIsFinish(start)).into());
        }
        for (i, p) in [(start_idx, start), (finish_idx, finish)] {
            if grid.cell_at(i).is_wall() {
                return Err(GridError::from(ConfigIssue::Wall(p)).into());
            }
        }
        grid.reset_search_state();
        Ok(Self {
            algorithm,
            start,
            finish,
            start_idx,
            finish_idx,
            visited: Vec::new(),
        })
    }

    pub(crate) fn finish_run(self, grid: &Grid) -> Search {
        let reached = grid.state_at(self.finish_idx).visited;
        log::debug!(
            "{}: visited {} cells from {} to {}, finish {}",
            self.algorithm,
            self.visited.len(),
            self.start,
            self.finish,
            if reached { "reached" } else { "unreachable" }
        );
        Search {
            algorithm: self.algorithm,
            start: self.start,
            finish: self.finish,
            visited: self.visited,
            reached,
        }
    }
}
