//! **gridpath-core**: the grid model shared by every gridpath search.
//!
//! A [`Grid`] is a dense row-major arena of [`Cell`]s. Each cell carries its
//! structural flags (wall, weight, start/finish marker) and, in a parallel
//! column, the volatile [`SearchState`] a run writes: visited flag,
//! distances and the flat index of its predecessor.
//!
//! Structural edits go through the grid so its invariants always hold:
//! exactly one start and one finish, never on a wall, never the same cell,
//! weights within `[1, 5]`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod scatter;

pub use cell::{Cell, MAX_WEIGHT, MIN_WEIGHT, SearchState, UNREACHABLE};
pub use error::{ConfigIssue, GridError};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::{LAYOUT_RUNES, LayoutError, layout_rune};
pub use scatter::{ScatterConfig, scatter};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::at(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn scatter_config_defaults_missing_fields() {
        let cfg: ScatterConfig = serde_json::from_str(r#"{"walls":0.25}"#).unwrap();
        assert_eq!(cfg.walls, 0.25);
        assert_eq!(cfg.weights, 0.0);
    }
}
