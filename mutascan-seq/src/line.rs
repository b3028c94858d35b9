//! Lines: rows, columns and diagonals walked lazily over a [`Grid`].

use std::fmt;

use crate::grid::Grid;

/// The direction family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineFamily {
    /// Left to right along one row.
    Row,
    /// Top to bottom along one column.
    Column,
    /// Down and to the right (`row + k`, `col + k`).
    DiagonalDownRight,
    /// Down and to the left (`row + k`, `col - k`).
    DiagonalDownLeft,
}

impl LineFamily {
    /// Grid coordinates of the `k`-th cell of a line starting at `origin`.
    ///
    /// Returns `None` when a down-left walk would step past column zero.
    pub fn step(self, origin: (usize, usize), k: usize) -> Option<(usize, usize)> {
        let (row, col) = origin;
        match self {
            LineFamily::Row => Some((row, col + k)),
            LineFamily::Column => Some((row + k, col)),
            LineFamily::DiagonalDownRight => Some((row + k, col + k)),
            LineFamily::DiagonalDownLeft => col.checked_sub(k).map(|c| (row + k, c)),
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineFamily::Row => "row",
            LineFamily::Column => "column",
            LineFamily::DiagonalDownRight => "down-right diagonal",
            LineFamily::DiagonalDownLeft => "down-left diagonal",
        };
        f.write_str(name)
    }
}

/// A line of cells extracted from a grid.
///
/// Yields `Option<char>` per position: `None` where the underlying row is too
/// short to hold the cell. Nothing is copied out of the grid.
pub struct Line<'a, R> {
    grid: Grid<'a, R>,
    family: LineFamily,
    origin: (usize, usize),
    pos: usize,
    len: usize,
}

impl<'a, R: AsRef<str>> Line<'a, R> {
    pub(crate) fn new(
        grid: Grid<'a, R>,
        family: LineFamily,
        origin: (usize, usize),
        len: usize,
    ) -> Self {
        Self {
            grid,
            family,
            origin,
            pos: 0,
            len,
        }
    }

    /// Which family this line belongs to.
    pub fn family(&self) -> LineFamily {
        self.family
    }

    /// Grid coordinates of the first cell.
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    /// Total number of positions in the line, absent cells included.
    pub fn span(&self) -> usize {
        self.len
    }
}

impl<'a, R> Clone for Line<'a, R> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            family: self.family,
            origin: self.origin,
            pos: self.pos,
            len: self.len,
        }
    }
}

impl<'a, R: AsRef<str>> Iterator for Line<'a, R> {
    type Item = Option<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.len {
            return None;
        }
        let cell = self
            .family
            .step(self.origin, self.pos)
            .and_then(|(row, col)| self.grid.cell_at(row, col));
        self.pos += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a, R: AsRef<str>> ExactSizeIterator for Line<'a, R> {}

impl<'a, R> fmt::Debug for Line<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("family", &self.family)
            .field("origin", &self.origin)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_each_family() {
        assert_eq!(LineFamily::Row.step((2, 0), 3), Some((2, 3)));
        assert_eq!(LineFamily::Column.step((0, 1), 3), Some((3, 1)));
        assert_eq!(LineFamily::DiagonalDownRight.step((1, 0), 2), Some((3, 2)));
        assert_eq!(LineFamily::DiagonalDownLeft.step((0, 5), 2), Some((2, 3)));
    }

    #[test]
    fn down_left_never_underflows() {
        assert_eq!(LineFamily::DiagonalDownLeft.step((0, 1), 2), None);
    }

    #[test]
    fn line_yields_absent_cells_in_place() {
        let rows = ["AC", "G", "TTT"];
        let grid = Grid::new(&rows);
        let cells: Vec<Option<char>> = grid.column(1).collect();
        assert_eq!(cells, vec![Some('C'), None, Some('T')]);
    }

    #[test]
    fn exact_size_and_cells() {
        let rows = ["ACGT", "CGTA", "GTAC", "TACG"];
        let grid = Grid::new(&rows);
        let line = grid.diagonal_down_right(0, 0);
        assert_eq!(line.len(), 4);
        let cells: Vec<Option<char>> = line.collect();
        assert_eq!(cells, vec![Some('A'), Some('G'), Some('A'), Some('G')]);
    }

    #[test]
    fn multibyte_cells_stay_in_their_column() {
        let rows = ["éA", "xxA"];
        let grid = Grid::new(&rows);
        let cells: Vec<Option<char>> = grid.column(1).collect();
        assert_eq!(cells, vec![Some('A'), Some('x')]);
        let cells: Vec<Option<char>> = grid.row(0).collect();
        assert_eq!(cells, vec![Some('é'), Some('A')]);
    }

    #[test]
    fn family_display() {
        assert_eq!(LineFamily::DiagonalDownLeft.to_string(), "down-left diagonal");
    }
}
