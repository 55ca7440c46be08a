//! Command-line arguments and the top-level run.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lexgrid::dict::{Lexicon, DEFAULT_WORDS_PATH};
use lexgrid::engine::{SearchConfig, SearchReport, Solver, WriterSink};
use lexgrid::grid::{roll_board, Grid};

/// lexgrid - find every dictionary word on a letter grid
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word list, one word per line
    #[arg(long, default_value = DEFAULT_WORDS_PATH)]
    pub dict: PathBuf,

    /// Board letters, rows separated by '/' (e.g. "CAT/DOG/EMU").
    /// A board is rolled from the classic dice when omitted.
    #[arg(long)]
    pub board: Option<String>,

    /// Side length of a rolled board
    #[arg(long, default_value_t = 6)]
    pub size: usize,

    /// Seed for the rolled board (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to one per available core)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Shortest word to report
    #[arg(long, default_value_t = 1)]
    pub min_len: usize,

    /// Do not print the board before the results
    #[arg(long)]
    pub no_board: bool,

    /// Print a run summary to stderr
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    /// The search configuration these arguments describe.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            worker_count: self.workers,
            min_word_len: self.min_len,
        }
    }

    /// Build the board from `--board`, or roll one from `--size`/`--seed`.
    pub fn board(&self) -> Result<Grid, Box<dyn Error>> {
        if let Some(text) = &self.board {
            let letters: String = text.chars().map(upper_letter).collect();
            return Ok(Grid::parse(&letters)?);
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, size = self.size, "rolling board");
        Ok(roll_board(self.size, seed)?)
    }
}

/// Upper-case one board letter without changing the cell count: letters
/// whose upper case is more than one character (`ß`) are kept as typed.
fn upper_letter(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Load inputs, print the board, and run the search, streaming every
/// found word to stdout.
///
/// Every precondition (config, board, dictionary) is checked before any
/// search work is seeded.
pub fn run(cli: &Cli) -> Result<SearchReport, Box<dyn Error>> {
    let config = cli.search_config();
    config.validate()?;
    let grid = cli.board()?;
    let lexicon = Lexicon::load(&cli.dict)?;

    if !cli.no_board {
        let mut out = io::stdout().lock();
        writeln!(out, "{grid}")?;
        out.flush()?;
    }

    let sink = Arc::new(WriterSink::stdout());
    let mut solver = Solver::new(grid, Arc::new(lexicon), config)?;
    let report = solver.run(sink.clone())?;
    sink.flush()?;
    if sink.write_errors() > 0 {
        tracing::warn!(failed = sink.write_errors(), "some results could not be written");
    }

    if cli.summary {
        eprintln!("{report}");
    }
    Ok(report)
}
