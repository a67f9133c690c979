//! The [`Grid`] type: a dense, row-major arena of [`Cell`]s with their
//! [`SearchState`].
//!
//! Structural data (walls, weights, markers) and volatile search data live in
//! two parallel vectors indexed by the same flat index, so a reset only
//! rewrites the second one.

use crate::cell::{Cell, MAX_WEIGHT, MIN_WEIGHT, SearchState};
use crate::error::{ConfigIssue, GridError};
use crate::geom::{Point, Range};

/// A fixed-size rectangular grid with exactly one start and one finish cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
    state: Vec<SearchState>,
    start: Point,
    finish: Point,
}

impl Grid {
    /// Create an open `rows`×`cols` grid with the given markers.
    pub fn new(rows: i32, cols: i32, start: Point, finish: Point) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(ConfigIssue::EmptyGrid.into());
        }
        let bounds = Range::sized(rows, cols);
        let start_idx = bounds.index_of(start).ok_or(GridError::OutOfBounds(start))?;
        let finish_idx = bounds.index_of(finish).ok_or(GridError::OutOfBounds(finish))?;
        if start_idx == finish_idx {
            return Err(ConfigIssue::StartIsFinish(start).into());
        }
        let mut cells: Vec<Cell> = bounds.iter().map(Cell::open).collect();
        cells[start_idx].start = true;
        cells[finish_idx].finish = true;
        Ok(Self {
            bounds,
            state: vec![SearchState::RESET; cells.len()],
            cells,
            start,
            finish,
        })
    }

    // -----------------------------------------------------------------------
    // Dimensions and coordinates
    // -----------------------------------------------------------------------

    /// The bounding range, `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point_at(idx)
    }

    fn checked_idx(&self, p: Point) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::OutOfBounds(p))
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The cell at `p`.
    pub fn get(&self, p: Point) -> Result<&Cell, GridError> {
        let i = self.checked_idx(p)?;
        Ok(&self.cells[i])
    }

    /// The search state at `p`.
    pub fn state(&self, p: Point) -> Result<&SearchState, GridError> {
        let i = self.checked_idx(p)?;
        Ok(&self.state[i])
    }

    /// The cell at flat index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// The search state at flat index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`.
    #[inline]
    pub fn state_at(&self, idx: usize) -> &SearchState {
        &self.state[idx]
    }

    /// Mutable search state at flat index `idx`. Search runs write through
    /// this; structural fields are out of reach.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`.
    #[inline]
    pub fn state_at_mut(&mut self, idx: usize) -> &mut SearchState {
        &mut self.state[idx]
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Point {
        self.finish
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Row-major iterator over `(Cell, SearchState)` pairs.
    pub fn iter_state(&self) -> impl Iterator<Item = (&Cell, &SearchState)> + '_ {
        self.cells.iter().zip(self.state.iter())
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Put every cell's search state back to [`SearchState::RESET`].
    ///
    /// Walls, weights and markers are left untouched.
    pub fn reset_search_state(&mut self) {
        self.state.fill(SearchState::RESET);
    }

    // -----------------------------------------------------------------------
    // Structural edits
    // -----------------------------------------------------------------------

    /// Flip the wall flag at `p` and return the new value.
    ///
    /// Walling a weighted cell drops its weight back to 1.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_idx(p)?;
        let cell = &mut self.cells[i];
        if cell.is_marker() {
            log::trace!("refusing to wall marker cell {p}");
            return Err(ConfigIssue::Marker(p).into());
        }
        cell.wall = !cell.wall;
        if cell.wall {
            cell.weight = MIN_WEIGHT;
        }
        Ok(cell.wall)
    }

    /// Set the traversal weight of the open, unmarked cell at `p`.
    pub fn set_weight(&mut self, p: Point, weight: i32) -> Result<(), GridError> {
        let i = self.checked_idx(p)?;
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(ConfigIssue::WeightOutOfRange(weight).into());
        }
        let cell = &mut self.cells[i];
        if cell.wall {
            return Err(ConfigIssue::Wall(p).into());
        }
        if cell.is_marker() {
            return Err(ConfigIssue::Marker(p).into());
        }
        cell.weight = weight;
        Ok(())
    }

    /// Move the start marker to `p`.
    ///
    /// Returns `Ok(false)` without changing anything when `p` is a wall, the
    /// finish, or already the start.
    pub fn relocate_start(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_idx(p)?;
        let target = self.cells[i];
        if target.wall || target.finish || target.start {
            log::trace!("start relocation to {p} ignored");
            return Ok(false);
        }
        let old = self.checked_idx(self.start)?;
        self.cells[old].start = false;
        let cell = &mut self.cells[i];
        cell.start = true;
        cell.weight = MIN_WEIGHT;
        self.start = p;
        Ok(true)
    }

    /// Move the finish marker to `p`.
    ///
    /// Returns `Ok(false)` without changing anything when `p` is a wall, the
    /// start, or already the finish.
    pub fn relocate_finish(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.checked_idx(p)?;
        let target = self.cells[i];
        if target.wall || target.start || target.finish {
            log::trace!("finish relocation to {p} ignored");
            return Ok(false);
        }
        let old = self.checked_idx(self.finish)?;
        self.cells[old].finish = false;
        let cell = &mut self.cells[i];
        cell.finish = true;
        cell.weight = MIN_WEIGHT;
        self.finish = p;
        Ok(true)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            c.wall = false;
        }
    }

    /// Set every weight back to 1.
    pub fn clear_weights(&mut self) {
        for c in self.cells.iter_mut() {
            c.weight = MIN_WEIGHT;
        }
    }

    /// Remove walls and weights and reset search state; markers stay put.
    pub fn clear(&mut self) {
        self.clear_walls();
        self.clear_weights();
        self.reset_search_state();
    }

    /// Check the structural invariants: one start, one finish, neither on a
    /// wall, never on the same cell.
    pub fn validate(&self) -> Result<(), GridError> {
        let mut starts = self.cells.iter().filter(|c| c.start);
        let start = starts.next().ok_or(ConfigIssue::MissingStart)?;
        if starts.next().is_some() {
            return Err(ConfigIssue::DuplicateStart.into());
        }
        let mut finishes = self.cells.iter().filter(|c| c.finish);
        let finish = finishes.next().ok_or(ConfigIssue::MissingFinish)?;
        if finishes.next().is_some() {
            return Err(ConfigIssue::DuplicateFinish.into());
        }
        if start.pos == finish.pos {
            return Err(ConfigIssue::StartIsFinish(start.pos).into());
        }
        for c in [start, finish] {
            if c.wall {
                return Err(ConfigIssue::Wall(c.pos).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::UNREACHABLE;

    fn grid3() -> Grid {
        Grid::new(3, 3, Point::at(0, 0), Point::at(2, 2)).unwrap()
    }

    #[test]
    fn new_places_markers() {
        let g = grid3();
        assert_eq!(g.len(), 9);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert!(g.get(Point::at(0, 0)).unwrap().is_start());
        assert!(g.get(Point::at(2, 2)).unwrap().is_finish());
        assert!(g.validate().is_ok());
    }

    #[test]
    fn new_rejects_bad_configurations() {
        assert_eq!(
            Grid::new(0, 3, Point::ZERO, Point::new(1, 0)),
            Err(GridError::InvalidConfiguration(ConfigIssue::EmptyGrid))
        );
        assert_eq!(
            Grid::new(2, 2, Point::ZERO, Point::ZERO),
            Err(GridError::InvalidConfiguration(ConfigIssue::StartIsFinish(Point::ZERO)))
        );
        assert_eq!(
            Grid::new(2, 2, Point::ZERO, Point::at(2, 0)),
            Err(GridError::OutOfBounds(Point::at(2, 0)))
        );
    }

    #[test]
    fn get_out_of_bounds() {
        let g = grid3();
        assert_eq!(
            g.get(Point::at(3, 0)).unwrap_err(),
            GridError::OutOfBounds(Point::at(3, 0))
        );
        assert!(g.get(Point::at(0, -1)).is_err());
        assert!(g.state(Point::at(-1, 0)).is_err());
    }

    #[test]
    fn idx_point_round_trip() {
        let g = Grid::new(2, 4, Point::ZERO, Point::at(1, 3)).unwrap();
        for i in 0..g.len() {
            assert_eq!(g.idx(g.point(i)), Some(i));
        }
        assert_eq!(g.idx(Point::at(1, 0)), Some(4));
        assert_eq!(g.idx(Point::at(0, 4)), None);
    }

    #[test]
    fn toggle_wall_refuses_markers() {
        let mut g = grid3();
        assert!(g.toggle_wall(Point::at(0, 0)).is_err());
        assert!(g.toggle_wall(Point::at(2, 2)).is_err());
        assert_eq!(g.toggle_wall(Point::at(1, 1)), Ok(true));
        assert!(g.get(Point::at(1, 1)).unwrap().is_wall());
        assert_eq!(g.toggle_wall(Point::at(1, 1)), Ok(false));
    }

    #[test]
    fn walling_drops_weight() {
        let mut g = grid3();
        g.set_weight(Point::at(1, 1), 4).unwrap();
        g.toggle_wall(Point::at(1, 1)).unwrap();
        assert_eq!(g.get(Point::at(1, 1)).unwrap().weight(), 1);
    }

    #[test]
    fn set_weight_validation() {
        let mut g = grid3();
        let p = Point::at(0, 1);
        assert_eq!(
            g.set_weight(p, 0),
            Err(GridError::InvalidConfiguration(ConfigIssue::WeightOutOfRange(0)))
        );
        assert_eq!(
            g.set_weight(p, 6),
            Err(GridError::InvalidConfiguration(ConfigIssue::WeightOutOfRange(6)))
        );
        assert_eq!(
            g.set_weight(Point::at(0, 0), 2),
            Err(GridError::InvalidConfiguration(ConfigIssue::Marker(Point::at(0, 0))))
        );
        g.toggle_wall(p).unwrap();
        assert_eq!(g.set_weight(p, 2), Err(GridError::InvalidConfiguration(ConfigIssue::Wall(p))));
        g.set_weight(Point::at(1, 0), 5).unwrap();
        assert_eq!(g.get(Point::at(1, 0)).unwrap().weight(), 5);
    }

    #[test]
    fn relocate_start_moves_marker_atomically() {
        let mut g = grid3();
        g.set_weight(Point::at(1, 0), 3).unwrap();
        assert_eq!(g.relocate_start(Point::at(1, 0)), Ok(true));
        assert_eq!(g.start(), Point::at(1, 0));
        assert!(!g.get(Point::at(0, 0)).unwrap().is_start());
        let c = g.get(Point::at(1, 0)).unwrap();
        assert!(c.is_start());
        assert_eq!(c.weight(), 1);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn relocate_noops() {
        let mut g = grid3();
        g.toggle_wall(Point::at(1, 1)).unwrap();
        assert_eq!(g.relocate_start(Point::at(1, 1)), Ok(false));
        assert_eq!(g.relocate_start(Point::at(2, 2)), Ok(false));
        assert_eq!(g.relocate_finish(Point::at(0, 0)), Ok(false));
        assert_eq!(g.relocate_finish(Point::at(1, 1)), Ok(false));
        assert_eq!(g.start(), Point::at(0, 0));
        assert_eq!(g.finish(), Point::at(2, 2));
        assert!(g.relocate_finish(Point::at(5, 5)).is_err());
        assert!(g.validate().is_ok());
    }

    #[test]
    fn relocate_finish_moves_marker() {
        let mut g = grid3();
        assert_eq!(g.relocate_finish(Point::at(0, 2)), Ok(true));
        assert_eq!(g.finish(), Point::at(0, 2));
        assert!(!g.get(Point::at(2, 2)).unwrap().is_finish());
        assert_eq!(g.iter().filter(|c| c.is_finish()).count(), 1);
    }

    #[test]
    fn reset_search_state_keeps_structure() {
        let mut g = grid3();
        g.toggle_wall(Point::at(1, 1)).unwrap();
        g.set_weight(Point::at(0, 1), 3).unwrap();
        {
            let s = g.state_at_mut(1);
            s.visited = true;
            s.distance = 4;
            s.heuristic = 2;
            s.total = 6;
            s.previous = Some(0);
        }
        g.reset_search_state();
        let s = g.state(Point::at(0, 1)).unwrap();
        assert!(!s.visited);
        assert_eq!(s.distance, UNREACHABLE);
        assert_eq!(s.heuristic, 0);
        assert_eq!(s.total, UNREACHABLE);
        assert_eq!(s.previous, None);
        assert!(g.get(Point::at(1, 1)).unwrap().is_wall());
        assert_eq!(g.get(Point::at(0, 1)).unwrap().weight(), 3);
    }

    #[test]
    fn clear_keeps_markers() {
        let mut g = grid3();
        g.toggle_wall(Point::at(1, 1)).unwrap();
        g.set_weight(Point::at(0, 1), 3).unwrap();
        g.clear();
        assert!(g.iter().all(|c| !c.is_wall() && c.weight() == 1));
        assert_eq!(g.start(), Point::at(0, 0));
        assert_eq!(g.finish(), Point::at(2, 2));
    }
}
