use gridpath_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the in-bounds 4-connected neighbors of a cell in a fixed
/// order: top, right, bottom, left. Depth-first visit order depends on it.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the neighbors of `p` that lie inside `grid`, walls included.
    pub fn of(&mut self, grid: &Grid, p: Point) -> &[Point] {
        self.cardinal(p, |n| grid.contains(n))
    }
}

/// In-bounds 4-connected neighbors of `p`, top, right, bottom, left.
pub fn neighbors(grid: &Grid, p: Point) -> Vec<Point> {
    p.neighbors_4()
        .into_iter()
        .filter(|&n| grid.contains(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(3, 3, Point::at(0, 0), Point::at(2, 2)).unwrap()
    }

    #[test]
    fn center_has_four_in_order() {
        let g = grid();
        assert_eq!(
            neighbors(&g, Point::at(1, 1)),
            vec![Point::at(0, 1), Point::at(1, 2), Point::at(2, 1), Point::at(1, 0)]
        );
    }

    #[test]
    fn corners_are_clipped() {
        let g = grid();
        assert_eq!(
            neighbors(&g, Point::at(0, 0)),
            vec![Point::at(0, 1), Point::at(1, 0)]
        );
        assert_eq!(
            neighbors(&g, Point::at(2, 2)),
            vec![Point::at(1, 2), Point::at(2, 1)]
        );
    }

    #[test]
    fn walls_are_still_neighbors() {
        let mut g = grid();
        g.toggle_wall(Point::at(0, 1)).unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(nb.of(&g, Point::at(0, 0)), &[Point::at(0, 1), Point::at(1, 0)]);
    }

    #[test]
    fn cardinal_filter() {
        let mut nb = Neighbors::new();
        let out = nb.cardinal(Point::new(5, 5), |p| p.x >= 5);
        assert_eq!(out, &[Point::new(5, 4), Point::new(6, 5), Point::new(5, 6)]);
    }
}
