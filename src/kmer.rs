//! K-mer length validation and window extraction.
//!
//! A window of a sequence is counted only when every byte in it belongs to the
//! permitted symbol set `{A, C, G, T}`. [`ValidWindows`] walks a sequence and
//! yields exactly those windows, jumping past invalid bytes instead of
//! re-checking every overlapping window.

use std::fmt;

use bio::alphabets::Alphabet;

use crate::error::{KmerLengthError, MIN_KMER_LENGTH};

/// The four canonical nucleotides, uppercase.
pub const PERMITTED_SYMBOLS: &[u8; 4] = b"ACGT";

/// Default k-mer length used by the command line.
pub const DEFAULT_KMER_LENGTH: usize = 3;

/// A validated k-mer length (`k >= 1`).
///
/// # Example
///
/// ```rust
/// use kmertab::kmer::KmerLength;
///
/// let k = KmerLength::new(3)?;
/// assert_eq!(k.get(), 3);
/// assert!(KmerLength::new(0).is_err());
/// # Ok::<(), kmertab::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(usize);

impl KmerLength {
    /// Validates `k`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    pub const fn new(k: usize) -> Result<Self, KmerLengthError> {
        if k < MIN_KMER_LENGTH {
            return Err(KmerLengthError {
                k,
                min: MIN_KMER_LENGTH,
            });
        }
        Ok(Self(k))
    }

    /// Returns the length as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for KmerLength {
    fn default() -> Self {
        Self(DEFAULT_KMER_LENGTH)
    }
}

impl fmt::Display for KmerLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of bytes allowed inside a counted k-mer.
#[derive(Debug, Clone)]
pub struct PermittedSymbols(Alphabet);

impl PermittedSymbols {
    /// Uppercase DNA: `A`, `C`, `G`, `T`.
    #[must_use]
    pub fn dna() -> Self {
        Self(Alphabet::new(PERMITTED_SYMBOLS))
    }

    /// Returns `true` if `byte` may appear in a counted k-mer.
    #[must_use]
    pub fn contains(&self, byte: u8) -> bool {
        self.0.symbols.contains(usize::from(byte))
    }

    /// Returns `true` if every byte of `window` is permitted.
    #[must_use]
    pub fn is_word(&self, window: &[u8]) -> bool {
        self.0.is_word(window)
    }

    /// Position of the last byte in `window` that is not permitted.
    #[must_use]
    pub fn find_invalid(&self, window: &[u8]) -> Option<usize> {
        window.iter().rposition(|&b| !self.contains(b))
    }
}

/// Iterator over the windows of length `k` made only of permitted symbols.
///
/// The sequence is expected to be uppercase already; lowercase bytes are not
/// permitted symbols.
///
/// # Example
///
/// ```rust
/// use kmertab::kmer::{KmerLength, ValidWindows};
///
/// let k = KmerLength::new(3)?;
/// let windows: Vec<&[u8]> = ValidWindows::new(b"ACGNACGT", k).collect();
/// assert_eq!(windows, vec![&b"ACG"[..], &b"ACG"[..], &b"CGT"[..]]);
/// # Ok::<(), kmertab::error::KmerLengthError>(())
/// ```
#[derive(Debug)]
pub struct ValidWindows<'a> {
    seq: &'a [u8],
    k: usize,
    pos: usize,
    symbols: PermittedSymbols,
}

impl<'a> ValidWindows<'a> {
    /// Creates the iterator for `seq`.
    #[must_use]
    pub fn new(seq: &'a [u8], k: KmerLength) -> Self {
        Self {
            seq,
            k: k.get(),
            pos: 0,
            symbols: PermittedSymbols::dna(),
        }
    }
}

impl<'a> Iterator for ValidWindows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos + self.k <= self.seq.len() {
            let window = &self.seq[self.pos..self.pos + self.k];

            match self.symbols.find_invalid(window) {
                // Every window starting at or before the invalid byte contains it
                Some(invalid) => self.pos += invalid + 1,
                None => {
                    self.pos += 1;
                    return Some(window);
                }
            }
        }
        None
    }
}

/// Number of windows of length `k` in a sequence of length `len`.
#[must_use]
pub const fn window_count(len: usize, k: KmerLength) -> usize {
    (len + 1).saturating_sub(k.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(k: usize) -> KmerLength {
        KmerLength::new(k).unwrap()
    }

    fn windows(seq: &[u8], len: usize) -> Vec<String> {
        ValidWindows::new(seq, k(len))
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    #[test]
    fn kmer_length_rejects_zero() {
        let err = KmerLength::new(0).unwrap_err();
        assert_eq!(err, KmerLengthError { k: 0, min: 1 });
    }

    #[test]
    fn kmer_length_has_no_upper_bound() {
        assert_eq!(KmerLength::new(1000).unwrap().get(), 1000);
    }

    #[test]
    fn kmer_length_default_is_three() {
        assert_eq!(KmerLength::default().get(), 3);
    }

    #[test]
    fn permitted_symbols_are_uppercase_acgt() {
        let symbols = PermittedSymbols::dna();
        for b in b"ACGT" {
            assert!(symbols.contains(*b));
        }
        for b in b"acgtNRY-. \n" {
            assert!(!symbols.contains(*b), "{} should be rejected", *b as char);
        }
        assert!(symbols.is_word(b"GATTACA"));
        assert!(!symbols.is_word(b"GATNACA"));
    }

    #[test]
    fn find_invalid_returns_last_invalid_position() {
        let symbols = PermittedSymbols::dna();
        assert_eq!(symbols.find_invalid(b"NACNN"), Some(4));
        assert_eq!(symbols.find_invalid(b"NACNG"), Some(3));
        assert_eq!(symbols.find_invalid(b"NANTG"), Some(2));
        assert_eq!(symbols.find_invalid(b"NNCTG"), Some(1));
        assert_eq!(symbols.find_invalid(b"NACTG"), Some(0));
        assert_eq!(symbols.find_invalid(b"AACTG"), None);
    }

    #[test]
    fn windows_of_clean_sequence() {
        assert_eq!(
            windows(b"ACGTACGT", 3),
            ["ACG", "CGT", "GTA", "TAC", "ACG", "CGT"]
        );
    }

    #[test]
    fn windows_skip_ambiguity_codes() {
        assert_eq!(windows(b"ACGNACGT", 3), ["ACG", "ACG", "CGT"]);
    }

    #[test]
    fn windows_skip_trailing_invalid() {
        assert_eq!(windows(b"ACGTN", 2), ["AC", "CG", "GT"]);
    }

    #[test]
    fn windows_of_all_invalid_sequence() {
        assert!(windows(b"NNNNNN", 2).is_empty());
    }

    #[test]
    fn windows_shorter_than_k() {
        assert!(windows(b"AC", 3).is_empty());
        assert!(windows(b"", 1).is_empty());
    }

    #[test]
    fn windows_reject_lowercase() {
        assert_eq!(windows(b"ACgT", 2), ["AC"]);
    }

    #[test]
    fn windows_equal_to_sequence_length() {
        assert_eq!(windows(b"GATTACA", 7), ["GATTACA"]);
    }

    #[test]
    fn window_count_matches_offsets() {
        assert_eq!(window_count(8, k(3)), 6);
        assert_eq!(window_count(3, k(3)), 1);
        assert_eq!(window_count(2, k(3)), 0);
        assert_eq!(window_count(0, k(1)), 0);
    }
}
