use gridpath_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::frontier::best_first;
use crate::search::Search;

/// Weighted shortest-path search (Dijkstra) from `start` to `finish`.
///
/// Repeatedly finalizes the unvisited cell with the smallest distance, ties
/// going to the lowest row-major index. Entering a cell costs its weight.
/// When the finish is reached, the reconstructed path has the minimum total
/// weight among all wall-avoiding paths.
pub fn dijkstra(grid: &mut Grid, start: Point, finish: Point) -> Result<Search, SearchError> {
    best_first(Algorithm::Dijkstra, grid, start, finish, |_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{path_cost, shortest_path};

    #[test]
    fn goes_around_heavy_cells() {
        let mut g = Grid::from_layout("S5F\n...").unwrap();
        let (start, finish) = (g.start(), g.finish());
        let s = dijkstra(&mut g, start, finish).unwrap();
        assert!(s.reached());
        let path = shortest_path(&g, g.finish()).unwrap();
        assert_eq!(
            path,
            vec![
                Point::at(0, 0),
                Point::at(1, 0),
                Point::at(1, 1),
                Point::at(1, 2),
                Point::at(0, 2),
            ]
        );
        assert_eq!(path_cost(&g, &path), 4);
        assert_eq!(g.state(g.finish()).unwrap().distance, 4);
    }

    #[test]
    fn takes_heavy_cell_when_cheaper() {
        let mut g = Grid::from_layout("S2F\n...").unwrap();
        let (start, finish) = (g.start(), g.finish());
        dijkstra(&mut g, start, finish).unwrap();
        let path = shortest_path(&g, g.finish()).unwrap();
        assert_eq!(path_cost(&g, &path), 3);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn visited_distances_never_decrease() {
        let mut g = Grid::from_layout("S.3.\n.4..\n..2F").unwrap();
        let (start, finish) = (g.start(), g.finish());
        let s = dijkstra(&mut g, start, finish).unwrap();
        let d: Vec<i32> = s
            .visited()
            .iter()
            .map(|&p| g.state(p).unwrap().distance)
            .collect();
        assert!(d.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn equal_distances_break_ties_row_major() {
        let mut g = Grid::from_layout("...\n.S.\n..F").unwrap();
        let (start, finish) = (g.start(), g.finish());
        let s = dijkstra(&mut g, start, finish).unwrap();
        // All four neighbors sit at distance 1; row-major order decides.
        assert_eq!(
            &s.visited()[..5],
            &[
                Point::at(1, 1),
                Point::at(0, 1),
                Point::at(1, 0),
                Point::at(1, 2),
                Point::at(2, 1),
            ]
        );
    }
}
