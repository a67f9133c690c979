//! Command line front end: build a board, run a search, play it back.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use gridpath_core::{Grid, GridError, LayoutError, scatter};
use gridpath_search::{Algorithm, Search, SearchError, path_cost};

use crate::config::{Config, ConfigError};
use crate::playback::Playback;
use crate::render::{Board, Terminal};

/// Watch grid searches unfold in the terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "gridpath", version, about)]
pub struct Cli {
    /// Search to run: bfs, dfs, dijkstra or astar.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Load the board from a layout file (`.#SF` and weights `2`-`5`).
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fraction of open cells to turn into walls.
    #[arg(long)]
    pub walls: Option<f64>,

    /// Fraction of open cells to give a random weight.
    #[arg(long)]
    pub weights: Option<f64>,

    /// Seed for the random board.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final board as text instead of animating it.
    #[arg(long)]
    pub plain: bool,

    /// Run every algorithm on the same board and print a summary table.
    #[arg(long, conflicts_with = "plain")]
    pub compare: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overlay command line values on a loaded configuration.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(a) = self.algorithm {
            cfg.algorithm = a;
        }
        if let Some(w) = self.walls {
            cfg.scatter.walls = w;
        }
        if let Some(w) = self.weights {
            cfg.scatter.weights = w;
        }
        if self.seed.is_some() {
            cfg.scatter.seed = self.seed;
        }
    }

    /// Log level for the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot read layout {path}: {source}")]
    LayoutIo { path: PathBuf, source: io::Error },
    #[error("invalid layout {path}: {source}")]
    Layout { path: PathBuf, source: LayoutError },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
}

/// The outcome of one run, as listed by `--compare`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub visited: usize,
    /// Path cells and cost, when the finish was reached.
    pub path: Option<(usize, i32)>,
}

impl Summary {
    pub fn new(grid: &Grid, search: &Search) -> Self {
        Self {
            algorithm: search.algorithm(),
            visited: search.visited().len(),
            path: search
                .path(grid)
                .ok()
                .map(|p| (p.len(), path_cost(grid, &p))),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9}{:>8}", self.algorithm.name(), self.visited)?;
        match self.path {
            Some((len, cost)) => write!(f, "{len:>8}{cost:>8}{:>9}", "yes"),
            None => write!(f, "{:>8}{:>8}{:>9}", "-", "-", "no"),
        }
    }
}

/// Build the board described by `cfg`, or read it from `layout`.
pub fn build_grid(cfg: &Config, layout: Option<&PathBuf>) -> Result<Grid, AppError> {
    let mut grid = match layout {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| AppError::LayoutIo {
                path: path.clone(),
                source,
            })?;
            Grid::from_layout(&text).map_err(|source| AppError::Layout {
                path: path.clone(),
                source,
            })?
        }
        None => cfg.grid.build()?,
    };
    if cfg.scatter.is_active() {
        let mut rng = match cfg.scatter.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let (walls, weights) = scatter(&mut grid, &mut rng, cfg.scatter.densities());
        log::info!("scattered {walls} walls and {weights} weights");
    }
    Ok(grid)
}

/// Run every algorithm on `grid`, in menu order.
pub fn compare(grid: &mut Grid) -> Result<Vec<Summary>, AppError> {
    Algorithm::ALL
        .iter()
        .map(|a| {
            let search = a.solve(grid)?;
            Ok(Summary::new(grid, &search))
        })
        .collect()
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    cli.apply(&mut cfg);
    let mut grid = build_grid(&cfg, cli.layout.as_ref())?;
    log::info!(
        "board {} start {} finish {}",
        grid.bounds(),
        grid.start(),
        grid.finish()
    );

    if cli.compare {
        println!(
            "{:<9}{:>8}{:>8}{:>8}{:>9}",
            "", "visited", "path", "cost", "reached"
        );
        for s in compare(&mut grid)? {
            println!("{s}");
        }
        return Ok(());
    }

    let search = cfg.algorithm.solve(&mut grid)?;
    let path = search.path(&grid).ok();
    let summary = Summary::new(&grid, &search);
    let mut playback = Playback::new(&search, path.as_deref(), cfg.playback);
    let mut board = Board::from_grid(&grid);

    if cli.plain {
        board.apply_all(playback.rest());
        print!("{}", board.to_ascii());
    } else {
        animate(&grid, &mut board, &mut playback, &summary)?;
    }
    println!("{summary}");
    Ok(())
}

fn animate(
    grid: &Grid,
    board: &mut Board,
    playback: &mut Playback,
    summary: &Summary,
) -> Result<(), AppError> {
    let mut term = Terminal::enter()?;
    let status_row = grid.rows() + 1;
    term.flush(board)?;
    term.status(status_row, &format!("{}  (q to quit)", summary.algorithm))?;

    let started = Instant::now();
    while !playback.is_done() {
        board.apply_all(playback.due(started.elapsed()));
        term.flush(board)?;
        if quit_requested(Duration::from_millis(16))? {
            return Ok(());
        }
    }
    term.status(status_row, &format!("{summary}  (press any key)"))?;
    loop {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(());
            }
        }
    }
}

fn quit_requested(wait: Duration) -> io::Result<bool> {
    if !event::poll(wait)? {
        return Ok(false);
    }
    Ok(match event::read()? {
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        }) => true,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    })
}
