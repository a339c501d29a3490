// ============================================================
// Layer 4 — Bag-of-Words Vectorizer
// ============================================================
// Turns a token list into a fixed-length vector with one slot
// per vocabulary word.
//
//   vocab  = { bad: 0, good: 1, movie: 2 }
//   tokens = ["good", "good", "movie", "plot"]
//
//   Count  → [0.0, 2.0, 1.0]
//   Binary → [0.0, 1.0, 1.0]
//
// "plot" is not in the vocabulary and is dropped without error.
// Values are stored as f32 so the vector can go straight into
// a burn tensor; every stored value is integral.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::vocabulary::Vocabulary;

/// What each vector slot records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BowMode {
    /// Number of occurrences of the word
    #[default]
    Count,
    /// 1 if the word occurs at least once, else 0
    Binary,
}

/// `true` selects binary mode, `false` count mode
impl From<bool> for BowMode {
    fn from(binary: bool) -> Self {
        if binary {
            BowMode::Binary
        } else {
            BowMode::Count
        }
    }
}

/// Vectorise `tokens` against `vocab`.
///
/// The result always has length `vocab.len()`. Neither input is modified.
/// Counts are tallied as integers and converted once; an f32 holds every
/// count up to 2^24 exactly.
pub fn bag_of_words<S: AsRef<str>>(tokens: &[S], vocab: &Vocabulary, mode: BowMode) -> Vec<f32> {
    let mut counts = vec![0u32; vocab.len()];

    for token in tokens {
        if let Some(idx) = vocab.get(token.as_ref()) {
            match mode {
                BowMode::Binary => counts[idx] = 1,
                BowMode::Count => counts[idx] = counts[idx].saturating_add(1),
            }
        }
    }

    counts.into_iter().map(|c| c as f32).collect()
}

/// Indices and values of the non-zero slots, in index order
pub fn non_zero(bow: &[f32]) -> impl Iterator<Item = (usize, f32)> + '_ {
    bow.iter()
        .copied()
        .enumerate()
        .filter(|&(_, v)| v != 0.0)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(["bad", "good", "movie"])
    }

    #[test]
    fn test_binary_marks_presence() {
        let v = bag_of_words(&["good", "movie"], &vocab(), BowMode::Binary);
        assert_eq!(v, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_binary_ignores_repeats() {
        let v = bag_of_words(&["good", "good", "good"], &vocab(), BowMode::Binary);
        assert_eq!(v, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_count_mode() {
        let tokens = ["good", "good", "movie", "good"];
        let v = bag_of_words(&tokens, &vocab(), BowMode::Count);
        assert_eq!(v, vec![0.0, 3.0, 1.0]);
    }

    #[test]
    fn test_unknown_words_dropped() {
        let v = bag_of_words(&["plot", "twist", "bad"], &vocab(), BowMode::Count);
        assert_eq!(v, vec![1.0, 0.0, 0.0]);

        let v = bag_of_words(&["plot", "twist"], &vocab(), BowMode::Binary);
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_length_matches_vocab() {
        let vocab = Vocabulary::from_words((0..50).map(|i| format!("w{i}")));
        let v = bag_of_words(&["w3", "nope"], &vocab, BowMode::Count);
        assert_eq!(v.len(), 50);
    }

    #[test]
    fn test_empty_vocab_gives_empty_vector() {
        let empty = Vocabulary::default();
        assert!(bag_of_words(&["good", "movie"], &empty, BowMode::Count).is_empty());
        assert!(bag_of_words(&["good"], &empty, BowMode::Binary).is_empty());
    }

    #[test]
    fn test_empty_tokens() {
        let v = bag_of_words::<&str>(&[], &vocab(), BowMode::Count);
        assert_eq!(v, vec![0.0; 3]);
    }

    #[test]
    fn test_idempotent() {
        let tokens = vec!["good".to_string(), "bad".to_string(), "good".to_string()];
        let vocab = vocab();
        for mode in [BowMode::Count, BowMode::Binary] {
            assert_eq!(
                bag_of_words(&tokens, &vocab, mode),
                bag_of_words(&tokens, &vocab, mode)
            );
        }
    }

    #[test]
    fn test_binary_entries_are_zero_or_one() {
        let tokens = ["movie", "movie", "bad", "x", "movie"];
        let v = bag_of_words(&tokens, &vocab(), BowMode::Binary);
        assert!(v.iter().all(|&x| x == 0.0 || x == 1.0));
        for (word, i) in vocab().iter() {
            assert_eq!(v[i] == 1.0, tokens.contains(&word));
        }
    }

    #[test]
    fn test_large_counts_stay_exact() {
        let vocab = Vocabulary::from_words(["w", "x"]);
        let mut tokens = vec!["w"; 250_001];
        tokens.push("x");
        assert_eq!(bag_of_words(&tokens, &vocab, BowMode::Count), vec![250_001.0, 1.0]);
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(BowMode::from(true), BowMode::Binary);
        assert_eq!(BowMode::from(false), BowMode::Count);
        assert_eq!(BowMode::default(), BowMode::Count);
    }

    #[test]
    fn test_non_zero() {
        let entries: Vec<_> = non_zero(&[0.0, 2.0, 0.0, 1.0]).collect();
        assert_eq!(entries, vec![(1, 2.0), (3, 1.0)]);
    }
}
