//! Alphabet definitions for run detection.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of symbols allowed to form a run.

/// Trait for symbol alphabets.
///
/// Membership is exact-case: a lowercase `a` is not the same symbol as `A`.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "nucleotide").
    const NAME: &'static str;

    /// The set of valid symbols.
    const SYMBOLS: &'static [char];

    /// Check whether a symbol is a member of the alphabet.
    fn is_valid(c: char) -> bool {
        Self::SYMBOLS.contains(&c)
    }
}

/// Unambiguous nucleotide alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleotideAlphabet;

impl Alphabet for NucleotideAlphabet {
    const NAME: &'static str = "nucleotide";
    const SYMBOLS: &'static [char] = &['A', 'C', 'G', 'T'];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_bases() {
        for c in "ACGT".chars() {
            assert!(NucleotideAlphabet::is_valid(c), "should accept {}", c);
        }
    }

    #[test]
    fn rejects_lowercase() {
        for c in "acgt".chars() {
            assert!(!NucleotideAlphabet::is_valid(c), "should reject {}", c);
        }
    }

    #[test]
    fn rejects_iupac_ambiguity_codes() {
        for c in "NRYSWKMBDHVU".chars() {
            assert!(!NucleotideAlphabet::is_valid(c));
        }
    }

    #[test]
    fn rejects_non_letters() {
        assert!(!NucleotideAlphabet::is_valid('1'));
        assert!(!NucleotideAlphabet::is_valid(' '));
        assert!(!NucleotideAlphabet::is_valid('-'));
        assert!(!NucleotideAlphabet::is_valid('Å'));
    }
}
