//! Single-pass run detection over a line of cells.

use crate::alphabet::Alphabet;

/// Find the first run of `run_length` identical symbols from `A`.
///
/// Cells are `Option<char>`; an absent cell (`None`) breaks any run in
/// progress. Symbols outside the alphabet can repeat freely without ever
/// matching. Returns `(offset, symbol)` where `offset` is the position of the
/// first cell of the run, or `None` if no run exists. A `run_length` of zero
/// never matches.
///
/// O(n) in the number of cells, stopping at the first match.
pub fn find_run<A, I>(cells: I, run_length: usize) -> Option<(usize, char)>
where
    A: Alphabet,
    I: IntoIterator<Item = Option<char>>,
{
    if run_length == 0 {
        return None;
    }

    let mut current: Option<char> = None;
    let mut count = 0usize;

    for (pos, cell) in cells.into_iter().enumerate() {
        let c = match cell {
            Some(c) => c,
            None => {
                current = None;
                count = 0;
                continue;
            }
        };

        if current == Some(c) {
            count += 1;
        } else {
            current = Some(c);
            count = 1;
        }

        if count >= run_length && A::is_valid(c) {
            return Some((pos + 1 - run_length, c));
        }
    }
    None
}

/// Convenience wrapper over a string, one cell per `char`.
pub fn find_run_in<A: Alphabet>(line: &str, run_length: usize) -> Option<(usize, char)> {
    find_run::<A, _>(line.chars().map(Some), run_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::NucleotideAlphabet;

    fn run4(line: &str) -> Option<(usize, char)> {
        find_run_in::<NucleotideAlphabet>(line, 4)
    }

    #[test]
    fn finds_run_at_start() {
        assert_eq!(run4("AAAAT"), Some((0, 'A')));
    }

    #[test]
    fn finds_run_at_end() {
        assert_eq!(run4("TGCCCC"), Some((2, 'C')));
    }

    #[test]
    fn longer_run_reports_first_window() {
        assert_eq!(run4("GGGGGGG"), Some((0, 'G')));
    }

    #[test]
    fn three_is_not_enough() {
        assert_eq!(run4("AAATTTCCCGGG"), None);
        assert_eq!(run4("ATGCGA"), None);
    }

    #[test]
    fn empty_and_short_lines() {
        assert_eq!(run4(""), None);
        assert_eq!(run4("AAA"), None);
    }

    #[test]
    fn symbols_outside_alphabet_never_match() {
        assert_eq!(run4("XXXX"), None);
        assert_eq!(run4("aaaa"), None);
        assert_eq!(run4("1111"), None);
        assert_eq!(run4("NNNNNN"), None);
    }

    #[test]
    fn invalid_run_does_not_hide_later_valid_run() {
        assert_eq!(run4("xxxxxTTTT"), Some((5, 'T')));
    }

    #[test]
    fn mixed_case_breaks_run() {
        assert_eq!(run4("AAaA"), None);
    }

    #[test]
    fn absent_cell_breaks_run() {
        let cells = [Some('A'), Some('A'), None, Some('A'), Some('A')];
        assert_eq!(find_run::<NucleotideAlphabet, _>(cells, 4), None);

        let cells = [None, Some('T'), Some('T'), Some('T'), Some('T')];
        assert_eq!(find_run::<NucleotideAlphabet, _>(cells, 4), Some((1, 'T')));
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        assert_eq!(run4("ééGGGG"), Some((2, 'G')));
        assert_eq!(run4("AAéAA"), None);
    }

    #[test]
    fn custom_run_length() {
        assert_eq!(find_run_in::<NucleotideAlphabet>("ACCG", 2), Some((1, 'C')));
        assert_eq!(find_run_in::<NucleotideAlphabet>("G", 1), Some((0, 'G')));
        assert_eq!(find_run_in::<NucleotideAlphabet>("ACCG", 0), None);
    }
}
