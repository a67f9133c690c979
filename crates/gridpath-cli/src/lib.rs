//! Terminal front end for gridpath searches.
//!
//! The binary loads a [`config::Config`], builds a board, runs one of the
//! searches and replays it cell by cell: visited cells first, then the path.

pub mod app;
pub mod config;
pub mod playback;
pub mod render;

pub use app::{AppError, Cli, run};
