//! Boards written as ASCII art.
//!
//! Each character is one cell, lines are rows and must all have the same
//! width:
//!
//! | char | cell |
//! |---|---|
//! | `.` | open, weight 1 |
//! | `#` | wall |
//! | `S` | start |
//! | `F` | finish |
//! | `1`–`5` | open cell with that weight |
//!
//! Surrounding whitespace of the whole text is trimmed, individual lines
//! are not.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::error::{ConfigIssue, GridError};
use crate::geom::Point;
use crate::grid::Grid;

/// Characters accepted by [`Grid::from_layout`].
pub const LAYOUT_RUNES: &str = ".#SF12345";

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Lines have inconsistent widths. `line` counts from 1.
    #[error("layout: line {line} is {found} cells wide, expected {expected}")]
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character not in [`LAYOUT_RUNES`] was found.
    #[error("layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },
    /// The text parsed but does not describe a valid grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl Grid {
    /// Build a grid from ASCII art. See the [module docs](self) for the
    /// format.
    pub fn from_layout(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        let mut weights = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentSize {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' if start.is_some() => return Err(dup(ConfigIssue::DuplicateStart)),
                    'S' => start = Some(pos),
                    'F' if finish.is_some() => return Err(dup(ConfigIssue::DuplicateFinish)),
                    'F' => finish = Some(pos),
                    '1'..='5' => {
                        let w = ch as i32 - '0' as i32;
                        if w > 1 {
                            weights.push((pos, w));
                        }
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                }
            }
        }

        if width == 0 {
            return Err(dup(ConfigIssue::EmptyGrid));
        }
        let start = start.ok_or_else(|| dup(ConfigIssue::MissingStart))?;
        let finish = finish.ok_or_else(|| dup(ConfigIssue::MissingFinish))?;
        let mut grid = Grid::new(lines.len() as i32, width as i32, start, finish)?;
        for p in walls {
            grid.toggle_wall(p)?;
        }
        for (p, w) in weights {
            grid.set_weight(p, w)?;
        }
        Ok(grid)
    }

    /// Render the structural part of the grid as ASCII art, one line per
    /// row, each line ending with `'\n'`.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows() as usize);
        for (i, c) in self.iter().enumerate() {
            out.push(layout_rune(c));
            if (i + 1) % self.cols() as usize == 0 {
                out.push('\n');
            }
        }
        out
    }
}

fn dup(issue: ConfigIssue) -> LayoutError {
    LayoutError::Grid(issue.into())
}

/// The layout character for a cell.
pub fn layout_rune(c: &Cell) -> char {
    if c.is_start() {
        'S'
    } else if c.is_finish() {
        'F'
    } else if c.is_wall() {
        '#'
    } else if c.weight() > 1 {
        char::from_digit(c.weight() as u32, 10).unwrap_or('?')
    } else {
        '.'
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout())
    }
}
