//! Mutant classification: does any line of a grid hold a run of four
//! identical bases?
//!
//! The [`Scanner`] walks every row, column and diagonal that is long enough
//! to hold a run, and stops at the first one that does. Scanning is a pure
//! function of the grid: it never allocates, never panics on ragged input,
//! and is safe to call from any number of threads at once.

use std::fmt;
use std::marker::PhantomData;

use mutascan_core::{Result, ScanError};

use crate::alphabet::{Alphabet, NucleotideAlphabet};
use crate::grid::Grid;
use crate::line::LineFamily;
use crate::run::find_run;

/// Run length that classifies a grid as mutant.
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Configuration for the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanConfig {
    /// Number of identical consecutive symbols that makes a run (default 4).
    pub run_length: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

/// Where a run was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMatch {
    /// Direction family of the line holding the run.
    pub family: LineFamily,
    /// Grid coordinates `(row, col)` of the line's first cell.
    pub origin: (usize, usize),
    /// Position of the run's first cell within the line.
    pub offset: usize,
    /// The repeated symbol.
    pub symbol: char,
}

impl RunMatch {
    /// Grid coordinates `(row, col)` of the run's first cell.
    pub fn start(&self) -> Option<(usize, usize)> {
        self.family.step(self.origin, self.offset)
    }
}

impl fmt::Display for RunMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.start().unwrap_or(self.origin);
        write!(
            f,
            "run of '{}' in {} at ({}, {})",
            self.symbol, self.family, row, col
        )
    }
}

/// Run-of-N scanner over grids, parameterized by the accepted alphabet.
pub struct Scanner<A: Alphabet = NucleotideAlphabet> {
    config: ScanConfig,
    _alphabet: PhantomData<A>,
}

impl Scanner {
    /// A nucleotide scanner with the default run length of four.
    pub fn new() -> Self {
        Self::default()
    }

    /// A nucleotide scanner with a custom configuration.
    pub fn with_config(config: ScanConfig) -> Result<Self> {
        Self::for_alphabet(config)
    }
}

impl<A: Alphabet> Scanner<A> {
    /// A scanner over alphabet `A`.
    ///
    /// Returns an error if `config.run_length` is zero.
    pub fn for_alphabet(config: ScanConfig) -> Result<Self> {
        if config.run_length == 0 {
            return Err(ScanError::InvalidInput(
                "run length must be at least 1".into(),
            ));
        }
        Ok(Self {
            config,
            _alphabet: PhantomData,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Find the first run in the grid, if any.
    pub fn find_run<R: AsRef<str>>(&self, grid: &Grid<'_, R>) -> Option<RunMatch> {
        let run_length = self.config.run_length;
        grid.lines(run_length).find_map(|line| {
            let family = line.family();
            let origin = line.origin();
            find_run::<A, _>(line, run_length).map(|(offset, symbol)| RunMatch {
                family,
                origin,
                offset,
                symbol,
            })
        })
    }

    /// Whether the grid holds at least one run.
    pub fn is_mutant<R: AsRef<str>>(&self, grid: &Grid<'_, R>) -> bool {
        self.find_run(grid).is_some()
    }
}

impl<A: Alphabet> Default for Scanner<A> {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
            _alphabet: PhantomData,
        }
    }
}

impl<A: Alphabet> Clone for Scanner<A> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _alphabet: PhantomData,
        }
    }
}

impl<A: Alphabet> fmt::Debug for Scanner<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("alphabet", &A::NAME)
            .field("run_length", &self.config.run_length)
            .finish()
    }
}

/// Whether the rows form a mutant grid: four identical `A`, `C`, `G` or `T`
/// in a row, column or diagonal.
///
/// ```
/// let dna = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
/// assert!(mutascan_seq::is_mutant(&dna));
/// ```
pub fn is_mutant<R: AsRef<str>>(rows: &[R]) -> bool {
    Scanner::new().is_mutant(&Grid::new(rows))
}

/// Locate the first run of four identical bases, if any.
pub fn find_mutant_run<R: AsRef<str>>(rows: &[R]) -> Option<RunMatch> {
    Scanner::new().find_run(&Grid::new(rows))
}
