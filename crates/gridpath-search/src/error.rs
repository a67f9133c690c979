use gridpath_core::{GridError, Point};
use thiserror::Error;

/// Errors returned by searches and path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Bad coordinates or an invalid start/finish pair.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The run exhausted every cell reachable from the start without
    /// finding the finish.
    #[error("no path reaches the finish at {finish}")]
    Unreachable { finish: Point },
}
