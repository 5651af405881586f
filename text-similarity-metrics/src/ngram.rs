//! Tokenization and n-gram multisets shared by every scorer.

use std::collections::HashMap;
use std::hash::Hash;

/// Marker substituted for spaces before character n-grams are taken, so
/// grams that cross a word boundary differ from grams inside a word.
pub const WORD_BOUNDARY: char = '_';

/// Split text into whitespace-separated tokens.
///
/// Leading and trailing whitespace is ignored; empty or whitespace-only
/// input yields an empty sequence. Tokens are kept verbatim.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Characters of `text` with every space replaced by [`WORD_BOUNDARY`].
pub fn boundary_marked_chars(text: &str) -> Vec<char> {
    text.chars()
        .map(|ch| if ch == ' ' { WORD_BOUNDARY } else { ch })
        .collect()
}

/// Overlapping windows of width `n`, in order, with stride 1.
///
/// A sequence of length `L` yields `max(0, L - n + 1)` windows. A width of
/// zero yields nothing.
pub fn ngrams<T>(sequence: &[T], n: usize) -> impl Iterator<Item = &[T]> {
    // windows() panics on zero; a width past the end yields no windows
    let width = if n == 0 { sequence.len() + 1 } else { n };
    sequence.windows(width)
}

/// Occurrence counts of n-grams drawn from one or more sequences.
#[derive(Debug, Clone)]
pub struct NgramCounts<'a, T: Eq + Hash> {
    counts: HashMap<&'a [T], usize>,
    total: usize,
}

impl<'a, T: Eq + Hash> Default for NgramCounts<'a, T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<'a, T: Eq + Hash> NgramCounts<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the n-grams of a single order.
    pub fn from_sequence(sequence: &'a [T], n: usize) -> Self {
        let mut counts = Self::new();
        counts.add_order(sequence, n);
        counts
    }

    /// Pool the n-grams of every order in `1..=max_n` into one multiset.
    ///
    /// Orders longer than the sequence contribute nothing and are skipped.
    pub fn pooled(sequence: &'a [T], max_n: usize) -> Self {
        let mut counts = Self::new();
        for n in 1..=max_n.min(sequence.len()) {
            counts.add_order(sequence, n);
        }
        counts
    }

    /// Add the n-grams of order `n` taken from `sequence`.
    pub fn add_order(&mut self, sequence: &'a [T], n: usize) {
        for gram in ngrams(sequence, n) {
            *self.counts.entry(gram).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Number of n-grams counted, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct n-grams.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn get(&self, gram: &[T]) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Multiset intersection size: the sum over shared n-grams of the
    /// smaller of the two counts. Never exceeds either total.
    pub fn overlap(&self, other: &Self) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .map(|(gram, count)| (*count).min(large.get(gram)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_trims_and_splits() {
        assert_eq!(tokenize("  the  cat\tsat\n"), vec!["the", "cat", "sat"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_tokenize_is_case_sensitive() {
        assert_eq!(tokenize("The the"), vec!["The", "the"]);
    }

    #[test]
    fn test_ngram_window_count() {
        let tokens = ["a", "b", "c", "d"];
        assert_eq!(ngrams(&tokens, 1).count(), 4);
        assert_eq!(ngrams(&tokens, 2).count(), 3);
        assert_eq!(ngrams(&tokens, 4).count(), 1);
        assert_eq!(ngrams(&tokens, 5).count(), 0);
        assert_eq!(ngrams(&tokens, 0).count(), 0);
    }

    #[test]
    fn test_ngram_windows_in_order() {
        let tokens = ["a", "b", "c"];
        let grams: Vec<_> = ngrams(&tokens, 2).collect();
        assert_eq!(grams, vec![&["a", "b"][..], &["b", "c"][..]]);
    }

    #[test]
    fn test_boundary_marking() {
        assert_eq!(boundary_marked_chars("a b"), vec!['a', '_', 'b']);
        // only U+0020 is replaced
        assert_eq!(boundary_marked_chars("a\tb"), vec!['a', '\t', 'b']);
    }

    #[test]
    fn test_counts_and_overlap_are_clipped() {
        let candidate = ["the", "the", "the", "cat"];
        let reference = ["the", "cat", "the"];

        let cand = NgramCounts::from_sequence(&candidate, 1);
        let refs = NgramCounts::from_sequence(&reference, 1);

        assert_eq!(cand.total(), 4);
        assert_eq!(cand.distinct(), 2);
        assert_eq!(cand.get(&["the"]), 3);
        assert_eq!(cand.overlap(&refs), 3);
        assert_eq!(refs.overlap(&cand), 3);
    }

    #[test]
    fn test_pooled_counts_every_order() {
        let chars = boundary_marked_chars("abc");
        let counts = NgramCounts::pooled(&chars, 3);
        // 3 unigrams + 2 bigrams + 1 trigram
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_pooled_stops_at_sequence_length() {
        let chars = boundary_marked_chars("ab");
        let counts = NgramCounts::pooled(&chars, usize::MAX);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.total(), NgramCounts::pooled(&chars, 2).total());
    }

    #[test]
    fn test_empty_counts() {
        let empty: [&str; 0] = [];
        let counts = NgramCounts::from_sequence(&empty, 1);
        assert!(counts.is_empty());
        assert_eq!(counts.overlap(&NgramCounts::new()), 0);
    }
}
