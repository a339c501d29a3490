// ============================================================
// Layer 3 — Vocabulary Domain Type
// ============================================================
// Maps each known word to its position in a feature vector.
//
// Invariant: indices form the dense range [0, len) and the
// mapping is one-to-one in both directions. The only way to
// build a Vocabulary is from a word list that gets
// de-duplicated here, so the invariant cannot be broken from
// outside. There is no insert or remove after construction.
//
//   words:  ["bad", "good", "movie"]
//   index:  { "bad": 0, "good": 1, "movie": 2 }

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// word → index
    index: HashMap<String, usize>,
    /// index → word (position i holds the word with index i)
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary assigning indices in iteration order.
    /// Repeated words keep the index of their first occurrence.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for word in words {
            let word = word.into();
            if !vocab.index.contains_key(&word) {
                vocab.index.insert(word.clone(), vocab.words.len());
                vocab.words.push(word);
            }
        }
        vocab
    }

    /// Index of `word`, or None for out-of-vocabulary words
    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// The word sitting at `index`
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words, which is also the feature vector length
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// (word, index) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.words.iter().enumerate().map(|(i, w)| (w.as_str(), i))
    }

    /// Borrow the underlying word → index map
    pub fn as_map(&self) -> &HashMap<String, usize> {
        &self.index
    }
}
