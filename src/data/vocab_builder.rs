// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Collects every distinct word across a set of examples and
// gives each one a dense, unique index.
//
// Only the bijection is guaranteed by contract; which word gets
// which index depends on the VocabOrder:
//
//   Lexicographic (default) — words sorted, reproducible across runs
//   FirstSeen               — order of first appearance in the examples
//
// Examples: ["good movie", "bad movie"]
//   Lexicographic → { bad: 0, good: 1, movie: 2 }
//   FirstSeen     → { good: 0, movie: 1, bad: 2 }

use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::example::SentimentExample;
use crate::domain::vocabulary::Vocabulary;

/// How indices are assigned to distinct words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VocabOrder {
    #[default]
    #[serde(rename = "sorted", alias = "lexicographic")]
    #[value(name = "sorted", alias = "lexicographic")]
    Lexicographic,
    FirstSeen,
}

/// Build a vocabulary with words sorted lexicographically.
pub fn build_vocab(examples: &[SentimentExample]) -> Vocabulary {
    build_vocab_with(examples, VocabOrder::default())
}

/// Build a vocabulary using the given index order.
pub fn build_vocab_with(examples: &[SentimentExample], order: VocabOrder) -> Vocabulary {
    let all_words = examples.iter().flat_map(|ex| ex.words().iter().map(String::as_str));

    let vocab = match order {
        VocabOrder::Lexicographic => {
            let distinct: BTreeSet<&str> = all_words.collect();
            Vocabulary::from_words(distinct)
        }
        VocabOrder::FirstSeen => Vocabulary::from_words(all_words),
    };

    tracing::debug!(
        "Built vocabulary of {} words from {} examples ({:?} order)",
        vocab.len(),
        examples.len(),
        order
    );
    vocab
}
