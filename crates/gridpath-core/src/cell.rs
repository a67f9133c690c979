//! The [`Cell`] type and its per-run [`SearchState`].

use crate::geom::Point;

/// Smallest weight a cell can carry.
pub const MIN_WEIGHT: i32 = 1;
/// Largest weight a cell can carry.
pub const MAX_WEIGHT: i32 = 5;

/// Sentinel distance meaning "not reached (yet)".
pub const UNREACHABLE: i32 = i32::MAX;

/// Structural description of one grid position.
///
/// Only [`Grid`](crate::Grid) can change a cell, so the start/finish and
/// wall/weight invariants hold for every cell handed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Point,
    pub(crate) wall: bool,
    pub(crate) weight: i32,
    pub(crate) start: bool,
    pub(crate) finish: bool,
}

impl Cell {
    pub(crate) const fn open(pos: Point) -> Self {
        Self {
            pos,
            wall: false,
            weight: MIN_WEIGHT,
            start: false,
            finish: false,
        }
    }

    /// Position of the cell.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.x
    }

    /// Whether the cell is impassable.
    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.wall
    }

    /// Cost of entering the cell, in `[MIN_WEIGHT, MAX_WEIGHT]`.
    #[inline]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub const fn is_finish(&self) -> bool {
        self.finish
    }

    /// Whether the cell holds the start or the finish marker.
    #[inline]
    pub const fn is_marker(&self) -> bool {
        self.start || self.finish
    }
}

/// Volatile per-cell state written by a search run.
///
/// `previous` is the flat index of the predecessor cell (see
/// [`Grid::idx`](crate::Grid::idx)), never a reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub visited: bool,
    pub distance: i32,
    pub heuristic: i32,
    pub total: i32,
    pub previous: Option<usize>,
}

impl SearchState {
    /// The state every cell holds before a run.
    pub const RESET: Self = Self {
        visited: false,
        distance: UNREACHABLE,
        heuristic: 0,
        total: UNREACHABLE,
        previous: None,
    };

    /// Whether a finite distance has been recorded.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

impl Default for SearchState {
    #[inline]
    fn default() -> Self {
        Self::RESET
    }
}
