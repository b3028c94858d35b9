//! Borrowed view over a grid of sequence rows.
//!
//! A [`Grid`] wraps the caller's rows without copying them. Rows are expected
//! to be equal length (an N×N matrix) but ragged input is tolerated: any read
//! past the end of a row is absent rather than a panic.

use std::fmt;

use mutascan_core::Summarizable;

use crate::line::{Line, LineFamily};

/// A read-only grid of single-character symbols.
///
/// `R` is any string-like row: `String`, `&str`, `Box<str>`. Cells are
/// `char`s, so a multi-byte character occupies exactly one column.
pub struct Grid<'a, R> {
    rows: &'a [R],
    ascii: bool,
}

impl<'a, R: AsRef<str>> Grid<'a, R> {
    /// Wrap a slice of rows.
    pub fn new(rows: &'a [R]) -> Self {
        let ascii = rows.iter().all(|r| r.as_ref().is_ascii());
        Self { rows, ascii }
    }

    /// Length of row `r` in characters.
    fn row_len(&self, r: usize) -> Option<usize> {
        let row = self.rows.get(r)?.as_ref();
        Some(if self.ascii { row.len() } else { row.chars().count() })
    }

    /// Number of rows (N).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        (0..self.size()).filter_map(|r| self.row_len(r)).max().unwrap_or(0)
    }

    /// Whether every row is exactly N characters long.
    pub fn is_square(&self) -> bool {
        let n = self.size();
        (0..n).all(|r| self.row_len(r) == Some(n))
    }

    /// Whether rows differ in length.
    pub fn is_ragged(&self) -> bool {
        match self.row_len(0) {
            Some(len) => (1..self.size()).any(|r| self.row_len(r) != Some(len)),
            None => false,
        }
    }

    /// The character at `(row, col)`, or `None` if either index is out of
    /// range.
    ///
    /// Constant time when every row is ASCII; otherwise walks the row's
    /// characters up to `col`.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<char> {
        let row = self.rows.get(row)?.as_ref();
        if self.ascii {
            row.as_bytes().get(col).map(|&b| char::from(b))
        } else {
            row.chars().nth(col)
        }
    }

    /// Row `r`, verbatim. An out-of-range row is an empty line.
    pub fn row(&self, r: usize) -> Line<'a, R> {
        let len = self.row_len(r).unwrap_or(0);
        Line::new(*self, LineFamily::Row, (r, 0), len)
    }

    /// Column `c`, one cell per row.
    pub fn column(&self, c: usize) -> Line<'a, R> {
        Line::new(*self, LineFamily::Column, (0, c), self.size())
    }

    /// The down-right diagonal starting at `(row, col)`, bounded by an N×N
    /// frame.
    pub fn diagonal_down_right(&self, row: usize, col: usize) -> Line<'a, R> {
        let n = self.size();
        let len = n.saturating_sub(row).min(n.saturating_sub(col));
        Line::new(*self, LineFamily::DiagonalDownRight, (row, col), len)
    }

    /// The down-left diagonal starting at `(row, col)`, bounded by an N×N
    /// frame.
    pub fn diagonal_down_left(&self, row: usize, col: usize) -> Line<'a, R> {
        let n = self.size();
        let len = if col < n {
            n.saturating_sub(row).min(col + 1)
        } else {
            0
        };
        Line::new(*self, LineFamily::DiagonalDownLeft, (row, col), len)
    }

    /// Every line that could hold a run of `min_len` cells.
    ///
    /// Rows first, then columns, then diagonals of both directions. Rows
    /// shorter than `min_len` are skipped, as are columns when the grid has
    /// fewer than `min_len` rows, and diagonals shorter than `min_len`.
    ///
    /// Columns deliberately reach past the N×N frame: they cover the wider of
    /// N and the longest row, so a wide, non-square grid keeps all of its
    /// columns. For square grids this is exactly `0..N`.
    pub fn lines(&self, min_len: usize) -> impl Iterator<Item = Line<'a, R>> + 'a
    where
        R: 'a,
    {
        let grid = *self;
        let n = grid.size();
        let min_len = min_len.max(1);

        let column_count = if n >= min_len { n.max(grid.width()) } else { 0 };
        // Number of diagonal start offsets whose line reaches `min_len`.
        let diagonal_starts = (n + 1).saturating_sub(min_len);

        let rows = (0..n)
            .map(move |r| grid.row(r))
            .filter(move |line| line.span() >= min_len);
        let columns = (0..column_count).map(move |c| grid.column(c));
        let on_or_below_main = (0..diagonal_starts).flat_map(move |i| {
            [
                grid.diagonal_down_right(i, 0),
                grid.diagonal_down_left(i, n - 1),
            ]
        });
        let right_of_main = (1..diagonal_starts).flat_map(move |i| {
            [
                grid.diagonal_down_right(0, i),
                grid.diagonal_down_left(0, n - 1 - i),
            ]
        });

        rows.chain(columns).chain(on_or_below_main).chain(right_of_main)
    }
}

impl<'a, R> Clone for Grid<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R> Copy for Grid<'a, R> {}

impl<'a, R: AsRef<str>> Summarizable for Grid<'a, R> {
    fn summary(&self) -> String {
        let mut out = format!("grid {}x{}", self.size(), self.width());
        if self.is_ragged() {
            out.push_str(" (ragged)");
        }
        if let Some(first) = self.rows.first() {
            let first = first.as_ref();
            out.push_str(": ");
            out.extend(first.chars().take(20));
            if first.chars().nth(20).is_some() || self.size() > 1 {
                out.push_str("...");
            }
        }
        out
    }
}

impl<'a, R: AsRef<str>> fmt::Debug for Grid<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rows.iter().map(|r| r.as_ref()))
            .finish()
    }
}
