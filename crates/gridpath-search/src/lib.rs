//! Replayable grid searches.
//!
//! This crate runs the classic grid searches over a
//! [`gridpath_core::Grid`] and reports, for each run, the order in which
//! cells were visited together with the predecessor links needed to rebuild
//! the start-to-finish path:
//!
//! - **BFS** unweighted breadth-first search ([`bfs`])
//! - **DFS** depth-first search in discovery order ([`dfs`])
//! - **Dijkstra** weighted shortest path ([`dijkstra`])
//! - **A\*** heuristic shortest path with a Manhattan estimate ([`astar`])
//!
//! All four share one contract, selected through [`Algorithm`]. A run takes
//! the grid by exclusive reference, resets its search state, and leaves
//! distances and predecessor links behind for [`reconstruct_path`] /
//! [`shortest_path`].
//!
//! Neighbors are always enumerated top, right, bottom, left, which makes
//! every run deterministic.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod search;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use error::SearchError;
pub use neighbors::{Neighbors, neighbors};
pub use path::{path_cost, reconstruct_path, shortest_path};
pub use search::Search;
