//! Board shading and terminal output.
//!
//! [`Board`] tracks how each cell should look while a search is replayed and
//! which cells changed since the last flush. [`Terminal`] draws those
//! changes with crossterm; [`Board::to_ascii`] renders the whole board as
//! plain text.

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Cell, Grid, Point, Range, layout_rune};

use crate::playback::{Step, StepKind};

/// How a cell is drawn: its layout rune until playback reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Cell(char),
    Visited,
    Path,
}

impl Shade {
    pub fn of(cell: &Cell) -> Self {
        Shade::Cell(layout_rune(cell))
    }

    /// Plain-text rune: the layout character, `o` when visited, `*` on the
    /// path.
    pub fn rune(self) -> char {
        match self {
            Shade::Cell(c) => c,
            Shade::Visited => 'o',
            Shade::Path => '*',
        }
    }

    fn is_marker(self) -> bool {
        matches!(self, Shade::Cell('S' | 'F'))
    }

    fn colors(self) -> (Color, Color) {
        match self {
            Shade::Cell('.') => (Color::DarkGrey, Color::Reset),
            Shade::Cell('#') => (Color::Black, Color::Rgb { r: 12, g: 53, b: 71 }),
            Shade::Cell('S') => (Color::Black, Color::Green),
            Shade::Cell('F') => (Color::Black, Color::Red),
            Shade::Cell(_) => (Color::White, Color::Rgb { r: 90, g: 60, b: 30 }),
            Shade::Visited => (Color::Black, Color::Rgb { r: 0, g: 190, b: 218 }),
            Shade::Path => (Color::Black, Color::Rgb { r: 255, g: 254, b: 106 }),
        }
    }
}

/// The visible state of every cell, with change tracking.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: Range,
    shades: Vec<Shade>,
    dirty: Vec<usize>,
}

impl Board {
    /// Shade every cell from its structure. All cells start dirty.
    pub fn from_grid(grid: &Grid) -> Self {
        let shades: Vec<Shade> = grid.iter().map(Shade::of).collect();
        Self {
            bounds: grid.bounds(),
            dirty: (0..shades.len()).collect(),
            shades,
        }
    }

    pub fn shade(&self, p: Point) -> Option<Shade> {
        self.bounds.index_of(p).map(|i| self.shades[i])
    }

    /// Reveal one playback step. Start and finish keep their marker shade.
    pub fn apply(&mut self, step: &Step) {
        let Some(i) = self.bounds.index_of(step.pos) else {
            return;
        };
        if self.shades[i].is_marker() {
            return;
        }
        let shade = match step.kind {
            StepKind::Visit => Shade::Visited,
            StepKind::Path => Shade::Path,
        };
        if self.shades[i] != shade {
            self.shades[i] = shade;
            self.dirty.push(i);
        }
    }

    pub fn apply_all<'a>(&mut self, steps: impl IntoIterator<Item = &'a Step>) {
        for s in steps {
            self.apply(s);
        }
    }

    /// Cells changed since the last call, with their shade.
    pub fn take_changes(&mut self) -> Vec<(Point, Shade)> {
        let bounds = self.bounds;
        self.dirty
            .drain(..)
            .map(|i| (bounds.point_at(i), self.shades[i]))
            .collect()
    }

    /// The whole board as text, one line per row.
    pub fn to_ascii(&self) -> String {
        let cols = self.bounds.width() as usize;
        let mut out = String::with_capacity(self.shades.len() + self.bounds.height() as usize);
        for row in self.shades.chunks(cols) {
            out.extend(row.iter().map(|s| s.rune()));
            out.push('\n');
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Alternate-screen terminal output. Dropping it restores the terminal.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Draw every changed cell; each cell is two columns wide.
    pub fn flush(&mut self, board: &mut Board) -> io::Result<()> {
        for (p, shade) in board.take_changes() {
            let (fg, bg) = shade.colors();
            queue!(
                self.out,
                cursor::MoveTo((p.x * 2) as u16, p.y as u16),
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(shade.rune()),
                Print(' '),
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Print a status line below the board.
    pub fn status(&mut self, row: i32, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine),
            Print(text),
        )?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn step(row: i32, col: i32, kind: StepKind) -> Step {
        Step {
            at: Duration::ZERO,
            pos: Point::at(row, col),
            kind,
        }
    }

    #[test]
    fn board_from_grid() {
        let g = Grid::from_layout("S#3\n..F").unwrap();
        let board = Board::from_grid(&g);
        assert_eq!(board.to_ascii(), "S#3\n..F\n");
        assert_eq!(board.shade(Point::at(0, 2)), Some(Shade::Cell('3')));
        assert_eq!(board.shade(Point::at(2, 0)), None);
    }

    #[test]
    fn unrevealed_board_matches_layout() {
        let layout = "S.2#\n5#..\n..4F";
        let mut g = Grid::from_layout(layout).unwrap();
        g.set_weight(Point::at(1, 2), 3).unwrap();
        let board = Board::from_grid(&g);
        assert_eq!(board.to_ascii(), g.to_layout());
        assert_eq!(board.shade(Point::at(1, 2)), Some(Shade::Cell('3')));
    }

    #[test]
    fn markers_keep_their_shade() {
        let g = Grid::from_layout("S..F").unwrap();
        let mut board = Board::from_grid(&g);
        board.take_changes();
        board.apply_all(&[
            step(0, 0, StepKind::Visit),
            step(0, 1, StepKind::Visit),
            step(0, 3, StepKind::Visit),
            step(0, 0, StepKind::Path),
            step(0, 1, StepKind::Path),
            step(0, 2, StepKind::Path),
            step(0, 3, StepKind::Path),
        ]);
        assert_eq!(board.to_ascii(), "S**F\n");
    }

    #[test]
    fn changes_are_drained() {
        let g = Grid::from_layout("S.F").unwrap();
        let mut board = Board::from_grid(&g);
        assert_eq!(board.take_changes().len(), 3);
        board.apply(&step(0, 1, StepKind::Visit));
        board.apply(&step(0, 1, StepKind::Visit));
        assert_eq!(
            board.take_changes(),
            vec![(Point::at(0, 1), Shade::Visited)]
        );
        assert!(board.take_changes().is_empty());
    }
}
