//! TOML configuration for the `gridpath` binary.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults below.
//!
//! ```toml
//! algorithm = "astar"
//!
//! [grid]
//! rows = 20
//! cols = 50
//! start = [10, 15]   # row, col
//! finish = [10, 35]
//!
//! [playback]
//! visit_delay_ms = 10
//! path_delay_ms = 50
//!
//! [scatter]
//! walls = 0.3
//! weights = 0.1
//! seed = 42
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use gridpath_core::{Grid, GridError, Point, ScatterConfig};
use gridpath_search::Algorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub algorithm: Algorithm,
    pub grid: GridConfig,
    pub playback: PlaybackConfig,
    pub scatter: ScatterSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            grid: GridConfig::default(),
            playback: PlaybackConfig::default(),
            scatter: ScatterSettings::default(),
        }
    }
}

impl Config {
    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded configuration from {}", path.display());
        Ok(cfg)
    }
}

/// Board dimensions and initial markers. Coordinates are `[row, col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: [i32; 2],
    pub finish: [i32; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: [10, 15],
            finish: [10, 35],
        }
    }
}

impl GridConfig {
    /// Build an open grid with these dimensions and markers.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::new(
            self.rows,
            self.cols,
            Point::at(self.start[0], self.start[1]),
            Point::at(self.finish[0], self.finish[1]),
        )
    }
}

/// Reveal delays used by the playback driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub visit_delay_ms: u64,
    pub path_delay_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            visit_delay_ms: 10,
            path_delay_ms: 50,
        }
    }
}

impl PlaybackConfig {
    pub fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

/// Random walls and weights added to the board before searching.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterSettings {
    pub walls: f64,
    pub weights: f64,
    /// Seed for a reproducible board; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl ScatterSettings {
    /// Whether anything would be scattered.
    pub fn is_active(&self) -> bool {
        self.walls > 0.0 || self.weights > 0.0
    }

    pub fn densities(&self) -> ScatterConfig {
        ScatterConfig {
            walls: self.walls,
            weights: self.weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let cfg = Config::default();
        let g = cfg.grid.build().unwrap();
        assert_eq!(g.rows(), 20);
        assert_eq!(g.cols(), 50);
        assert_eq!(g.start(), Point::at(10, 15));
        assert_eq!(g.finish(), Point::at(10, 35));
        assert_eq!(cfg.playback.visit_delay(), Duration::from_millis(10));
        assert_eq!(cfg.playback.path_delay(), Duration::from_millis(50));
        assert!(!cfg.scatter.is_active());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            algorithm = "bfs"

            [grid]
            rows = 5
            finish = [4, 9]

            [scatter]
            walls = 0.2
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Bfs);
        assert_eq!(cfg.grid.rows, 5);
        assert_eq!(cfg.grid.cols, 50);
        assert_eq!(cfg.grid.start, [10, 15]);
        assert_eq!(cfg.grid.finish, [4, 9]);
        assert_eq!(cfg.playback, PlaybackConfig::default());
        assert_eq!(cfg.scatter.seed, Some(7));
        assert!(cfg.scatter.is_active());
    }

    #[test]
    fn out_of_bounds_marker() {
        let cfg: Config = toml::from_str("[grid]\nrows = 5\n").unwrap();
        // The default start row 10 does not fit five rows.
        assert_eq!(
            cfg.grid.build(),
            Err(GridError::OutOfBounds(Point::at(10, 15)))
        );
    }

    #[test]
    fn algorithm_accepts_command_line_spellings() {
        for name in ["AStar", "a*", "breadth-first", "Dijkstra"] {
            let cfg: Config = toml::from_str(&format!("algorithm = \"{name}\"")).unwrap();
            assert_eq!(Ok(cfg.algorithm), name.parse::<Algorithm>());
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(toml::from_str::<Config>("algorithm = \"greedy\"").is_err());
    }
}
