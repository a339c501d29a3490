// ============================================================
// Layer 2 — FeaturizeUseCase
// ============================================================
// Runs the whole pipeline over one corpus:
//
//   Step 1: Pick the tokenizer            (Layer 4 / Layer 6)
//   Step 2: Read the corpus               (Layer 4 - loader)
//   Step 3: Build the vocabulary          (Layer 4 - vocab_builder)
//   Step 4: Vectorise every example       (Layer 4 - dataset)
//
// The result is kept in memory; nothing is written to disk.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

use crate::data::{
    dataset::BowDataset,
    loader::read_sentiment_examples,
    tokenizer::WhitespaceTokenizer,
    vectorizer::{bag_of_words, BowMode},
    vocab_builder::{build_vocab_with, VocabOrder},
};
use crate::domain::{
    example::SentimentExample,
    traits::TextTokenizer,
    vocabulary::Vocabulary,
};
use crate::infra::hf_tokenizer::HfTokenizer;

// ─── Configuration ───────────────────────────────────────────────────────────
// Everything a featurisation run needs. Serialisable so a run
// can be described by a JSON file instead of CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizeConfig {
    /// Tab-separated corpus: `<text>\t<label>` per line
    pub corpus:            String,
    pub mode:              BowMode,
    pub vocab_order:       VocabOrder,
    /// Whitespace tokenizer: lowercase every token
    pub lowercase:         bool,
    /// Whitespace tokenizer: trim punctuation from token edges
    pub strip_punctuation: bool,
    /// Optional HuggingFace tokenizer.json, replaces the whitespace tokenizer
    pub tokenizer:         Option<String>,
}

impl Default for FeaturizeConfig {
    fn default() -> Self {
        Self {
            corpus:            "data/train.tsv".to_string(),
            mode:              BowMode::Count,
            vocab_order:       VocabOrder::Lexicographic,
            lowercase:         true,
            strip_punctuation: false,
            tokenizer:         None,
        }
    }
}

impl FeaturizeConfig {
    /// Read a config from JSON. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

        tracing::debug!("Loaded config from '{}'", path.display());
        Ok(cfg)
    }
}

// ─── Report ───────────────────────────────────────────────────────────────────
/// Everything produced by one run.
pub struct FeaturizeReport {
    pub examples: Vec<SentimentExample>,
    pub vocab:    Vocabulary,
    pub dataset:  BowDataset,
}

impl FeaturizeReport {
    /// Number of examples per label, ordered by label
    pub fn label_counts(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for ex in &self.examples {
            *counts.entry(ex.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Average number of non-zero features per example
    pub fn mean_active_features(&self) -> f64 {
        let samples = self.dataset.samples();
        if samples.is_empty() {
            return 0.0;
        }
        let total: usize = samples.iter().map(|s| s.active_features()).sum();
        total as f64 / samples.len() as f64
    }
}

// ─── FeaturizeUseCase ─────────────────────────────────────────────────────────
pub struct FeaturizeUseCase {
    config:    FeaturizeConfig,
    tokenizer: Box<dyn TextTokenizer>,
}

impl FeaturizeUseCase {
    /// Fails only if a HuggingFace tokenizer was configured and cannot be loaded
    pub fn new(config: FeaturizeConfig) -> Result<Self> {
        let tokenizer: Box<dyn TextTokenizer> = match &config.tokenizer {
            Some(path) => Box::new(HfTokenizer::from_file(path)?),
            None => Box::new(
                WhitespaceTokenizer::new()
                    .with_lowercase(config.lowercase)
                    .with_strip_punctuation(config.strip_punctuation),
            ),
        };
        Ok(Self { config, tokenizer })
    }

    pub fn config(&self) -> &FeaturizeConfig {
        &self.config
    }

    /// Run the pipeline end to end
    pub fn execute(&self) -> Result<FeaturizeReport> {
        let cfg = &self.config;

        // ── Step 1: Read and tokenise the corpus ─────────────────────────────
        tracing::info!("Reading corpus '{}'", cfg.corpus);
        let examples = read_sentiment_examples(&cfg.corpus, self.tokenizer.as_ref())
            .with_context(|| format!("Failed to load corpus '{}'", cfg.corpus))?;

        // ── Step 2: Build the vocabulary ─────────────────────────────────────
        let vocab = build_vocab_with(&examples, cfg.vocab_order);
        tracing::info!("Vocabulary has {} words", vocab.len());

        // ── Step 3: Vectorise every example ──────────────────────────────────
        let dataset = BowDataset::from_examples(&examples, &vocab, cfg.mode);

        Ok(FeaturizeReport { examples, vocab, dataset })
    }

    /// Tokenise `text` the same way the corpus was and vectorise it
    pub fn vectorize_text(&self, text: &str, vocab: &Vocabulary) -> Result<Vec<f32>> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .with_context(|| format!("Cannot tokenise '{text}'"))?;
        Ok(bag_of_words(&tokens, vocab, self.config.mode))
    }
}
