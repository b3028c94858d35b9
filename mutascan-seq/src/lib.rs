//! Mutant detection over nucleotide sequence grids.
//!
//! A grid is an N×N matrix of bases given as N strings. It is *mutant* when
//! any row, column or diagonal holds four identical bases from `ACGT` in a
//! row.
//!
//! - **Alphabets**: [`Alphabet`], [`NucleotideAlphabet`]
//! - **Grids**: [`Grid`] with bounds-checked [`Grid::cell_at`]
//! - **Lines**: [`Line`] iterators over each [`LineFamily`]
//! - **Runs**: single-pass [`find_run`]
//! - **Scanning**: [`Scanner`], [`is_mutant`], [`find_mutant_run`]
//!
//! # Example
//!
//! ```
//! use mutascan_seq::{find_mutant_run, is_mutant, LineFamily};
//!
//! let human = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"];
//! assert!(!is_mutant(&human));
//!
//! let mutant = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
//! let m = find_mutant_run(&mutant).unwrap();
//! assert_eq!(m.family, LineFamily::Row);
//! assert_eq!(m.start(), Some((4, 0)));
//! ```

pub mod alphabet;
pub mod grid;
pub mod line;
pub mod run;
pub mod scanner;

pub use alphabet::{Alphabet, NucleotideAlphabet};
pub use grid::Grid;
pub use line::{Line, LineFamily};
pub use run::{find_run, find_run_in};
pub use scanner::{
    find_mutant_run, is_mutant, RunMatch, ScanConfig, Scanner, DEFAULT_RUN_LENGTH,
};
