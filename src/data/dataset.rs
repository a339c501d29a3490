use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::vectorizer::{bag_of_words, BowMode};
use crate::domain::example::SentimentExample;
use crate::domain::vocabulary::Vocabulary;

/// One vectorised example. `features.len()` equals the vocabulary size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowSample {
    pub features: Vec<f32>,
    pub label:    i32,
}

impl BowSample {
    /// Number of vocabulary words present in this sample
    pub fn active_features(&self) -> usize {
        self.features.iter().filter(|&&v| v != 0.0).count()
    }
}

/// Vectorise every example against `vocab`, keeping example order.
pub fn vectorize_examples(
    examples: &[SentimentExample],
    vocab:    &Vocabulary,
    mode:     BowMode,
) -> Vec<BowSample> {
    examples
        .iter()
        .map(|ex| BowSample {
            features: bag_of_words(ex.words(), vocab, mode),
            label:    ex.label(),
        })
        .collect()
}

pub struct BowDataset {
    samples: Vec<BowSample>,
}

impl BowDataset {
    pub fn new(samples: Vec<BowSample>) -> Self { Self { samples } }

    pub fn from_examples(examples: &[SentimentExample], vocab: &Vocabulary, mode: BowMode) -> Self {
        Self::new(vectorize_examples(examples, vocab, mode))
    }

    pub fn samples(&self) -> &[BowSample] { &self.samples }
}

impl Dataset<BowSample> for BowDataset {
    fn get(&self, index: usize) -> Option<BowSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
