// ============================================================
// Layer 3 — SentimentExample Domain Type
// ============================================================
// One line of the corpus after tokenisation:
//
//   "good movie\t1"  →  SentimentExample { words: ["good", "movie"], label: 1 }
//
// Fields are private so an example cannot be changed once the
// reader has produced it.

use serde::{Deserialize, Serialize};

/// A tokenised text with its integer label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentExample {
    words: Vec<String>,
    label: i32,
}

impl SentimentExample {
    pub fn new(words: Vec<String>, label: i32) -> Self {
        Self { words, label }
    }

    /// Tokens in their original order, duplicates included
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn label(&self) -> i32 {
        self.label
    }

    /// Consume the example, handing back its parts
    pub fn into_parts(self) -> (Vec<String>, i32) {
        (self.words, self.label)
    }
}
