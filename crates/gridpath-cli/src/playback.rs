//! Timed reveal of a search: visited cells first, then the path.

use std::time::Duration;

use gridpath_core::Point;
use gridpath_search::Search;

use crate::config::PlaybackConfig;

/// What a step reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Visit,
    Path,
}

/// One cell to reveal at offset `at` from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub at: Duration,
    pub pos: Point,
    pub kind: StepKind,
}

/// A time-ordered schedule of [`Step`]s with a cursor.
///
/// Visited cell `i` is revealed at `i * visit_delay`. The path follows once
/// every visited cell is out, at `len * visit_delay`, with path cell `j`
/// another `j * path_delay` later.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    cursor: usize,
}

impl Playback {
    /// Schedule `search`'s visited order followed by `path`, if any.
    pub fn new(search: &Search, path: Option<&[Point]>, cfg: PlaybackConfig) -> Self {
        let visit = cfg.visit_delay();
        let step = cfg.path_delay();
        let visited = search.visited();
        let path = path.unwrap_or(&[]);

        let mut steps = Vec::with_capacity(visited.len() + path.len());
        steps.extend(visited.iter().enumerate().map(|(i, &pos)| Step {
            at: visit * i as u32,
            pos,
            kind: StepKind::Visit,
        }));
        let path_start = visit * visited.len() as u32;
        steps.extend(path.iter().enumerate().map(|(j, &pos)| Step {
            at: path_start + step * j as u32,
            pos,
            kind: StepKind::Path,
        }));
        Self { steps, cursor: 0 }
    }

    /// Every scheduled step.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Offset of the last step.
    pub fn duration(&self) -> Duration {
        self.steps.last().map_or(Duration::ZERO, |s| s.at)
    }

    /// Steps due at `elapsed` that were not returned before.
    pub fn due(&mut self, elapsed: Duration) -> &[Step] {
        let from = self.cursor;
        while self.cursor < self.steps.len() && self.steps[self.cursor].at <= elapsed {
            self.cursor += 1;
        }
        &self.steps[from..self.cursor]
    }

    /// Return every step not yet returned.
    pub fn rest(&mut self) -> &[Step] {
        let from = self.cursor;
        self.cursor = self.steps.len();
        &self.steps[from..]
    }

    pub fn is_done(&self) -> bool {
        self.cursor == self.steps.len()
    }
}
