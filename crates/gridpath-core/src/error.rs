//! Errors raised by grid construction and editing.

use thiserror::Error;

use crate::geom::Point;

/// Errors returned by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position lies outside the grid.
    #[error("{0} is outside the grid")]
    OutOfBounds(Point),
    /// The requested state would break a grid invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

/// The specific invariant an [`GridError::InvalidConfiguration`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    #[error("no start cell")]
    MissingStart,
    #[error("no finish cell")]
    MissingFinish,
    #[error("more than one start cell")]
    DuplicateStart,
    #[error("more than one finish cell")]
    DuplicateFinish,
    #[error("start and finish are the same cell {0}")]
    StartIsFinish(Point),
    #[error("cell {0} is a wall")]
    Wall(Point),
    #[error("cell {0} holds the start or finish marker")]
    Marker(Point),
    #[error("weight {0} is outside [1, 5]")]
    WeightOutOfRange(i32),
}

impl From<ConfigIssue> for GridError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GridError::OutOfBounds(Point::at(3, 4));
        assert_eq!(e.to_string(), "(row 3, col 4) is outside the grid");
        let e: GridError = ConfigIssue::WeightOutOfRange(9).into();
        assert_eq!(e.to_string(), "invalid configuration: weight 9 is outside [1, 5]");
    }
}
