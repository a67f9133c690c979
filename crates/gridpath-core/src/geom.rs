//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A point's `x` is the column and `y` the row. Rows grow downwards, so "up"
//! is `y - 1`.

use std::fmt;
use std::ops::Add;

/// A grid position. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit steps up, right, down, left. Neighbor enumeration and therefore
    /// every visit order follow this table.
    pub const CARDINALS: [Point; 4] = [
        Point::new(0, -1),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(-1, 0),
    ];

    /// Point from a column and a row.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point from a row and a column.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// `self` plus each of [`Point::CARDINALS`], unclipped.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, d: Self) -> Self {
        Self::new(self.x + d.x, self.y + d.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: by row, then by column.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.y, self.x)
    }
}

/// The half-open rectangle `[min, max)` and its row-major numbering.
///
/// Cell `p` has flat index `(p.y - min.y) * width + (p.x - min.x)`; grids
/// use that index to address their cell and search-state vectors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// `rows` × `cols` cells with the origin at (0, 0). Negative sizes give
    /// an empty range.
    pub fn sized(rows: i32, cols: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(cols.max(0), rows.max(0)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Flat row-major index of `p`, if inside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            (p.y - self.min.y) as usize * self.width() as usize + (p.x - self.min.x) as usize
        })
    }

    /// The point with flat index `idx`. Indexes past [`len`](Self::len) map
    /// to rows below the range.
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.width().max(1) as usize;
        Point::new(self.min.x + (idx % w) as i32, self.min.y + (idx / w) as i32)
    }

    /// Every point in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
        }
    }
}

/// Rows by columns, e.g. `20x50`.
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height(), self.width())
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next == self.end {
            return None;
        }
        let p = self.range.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_row_col() {
        let p = Point::at(2, 5);
        assert_eq!(p, Point::new(5, 2));
        assert_eq!(p.row(), 2);
        assert_eq!(p.col(), 5);
        assert_eq!(p.to_string(), "(row 2, col 5)");
    }

    #[test]
    fn neighbors_follow_cardinal_table() {
        let p = Point::at(1, 1);
        assert_eq!(
            p.neighbors_4(),
            [Point::at(0, 1), Point::at(1, 2), Point::at(2, 1), Point::at(1, 0)]
        );
        for (n, d) in p.neighbors_4().into_iter().zip(Point::CARDINALS) {
            assert_eq!(n, p + d);
        }
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::at(0, 2), Point::at(1, 0), Point::at(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::at(0, 1), Point::at(0, 2), Point::at(1, 0)]);
    }

    #[test]
    fn sized_range() {
        let r = Range::sized(2, 3);
        assert_eq!((r.height(), r.width(), r.len()), (2, 3, 6));
        assert!(r.contains(Point::at(1, 2)));
        assert!(!r.contains(Point::at(2, 0)));
        assert!(!r.contains(Point::at(0, 3)));
        assert!(!r.contains(Point::at(0, -1)));
        assert_eq!(r.to_string(), "2x3");
        assert!(Range::sized(0, 4).is_empty());
        assert!(Range::sized(-2, 4).is_empty());
    }

    #[test]
    fn index_and_point_agree() {
        let r = Range::sized(3, 4);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
            assert_eq!(r.point_at(i), p);
        }
        assert_eq!(r.index_of(Point::at(3, 0)), None);
        assert_eq!(r.index_of(Point::at(0, 4)), None);
    }

    #[test]
    fn iter_is_row_major_and_exact() {
        let r = Range::sized(2, 3);
        let it = r.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<Point> = it.collect();
        assert_eq!(pts[0], Point::at(0, 0));
        assert_eq!(pts[2], Point::at(0, 2));
        assert_eq!(pts[3], Point::at(1, 0));
        assert!(pts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Range::sized(0, 0).iter().count(), 0);
    }
}
