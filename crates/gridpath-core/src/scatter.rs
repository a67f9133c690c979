//! Random boards: scatter walls and weights over a [`Grid`].

use rand::Rng;

use crate::cell::{MAX_WEIGHT, MIN_WEIGHT};
use crate::grid::Grid;

/// Densities used by [`scatter`]. Both are probabilities in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterConfig {
    /// Chance for each cell to become a wall.
    pub walls: f64,
    /// Chance for each remaining open cell to get a random weight in `[2, 5]`.
    pub weights: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            walls: 0.0,
            weights: 0.0,
        }
    }
}

/// Randomly place walls and weights on the unmarked cells of `grid`.
///
/// Existing walls and weights are kept; cells are visited in row-major order
/// so a seeded `rng` always yields the same board. Returns the number of
/// walls and weighted cells added.
pub fn scatter(grid: &mut Grid, rng: &mut impl Rng, cfg: ScatterConfig) -> (usize, usize) {
    let walls = cfg.walls.clamp(0.0, 1.0);
    let weights = cfg.weights.clamp(0.0, 1.0);
    let (mut n_walls, mut n_weights) = (0, 0);

    for i in 0..grid.len() {
        let p = grid.point(i);
        let cell = *grid.cell_at(i);
        if cell.is_marker() || cell.is_wall() {
            continue;
        }
        if rng.random_bool(walls) {
            if grid.toggle_wall(p).is_ok() {
                n_walls += 1;
            }
            continue;
        }
        if rng.random_bool(weights) {
            let w = rng.random_range(MIN_WEIGHT + 1..=MAX_WEIGHT);
            if grid.set_weight(p, w).is_ok() {
                n_weights += 1;
            }
        }
    }
    log::debug!("scattered {n_walls} walls and {n_weights} weights over {} cells", grid.len());
    (n_walls, n_weights)
}
