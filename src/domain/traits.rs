// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the pipeline:
//
//   TextTokenizer  — raw text → ordered tokens
//                    (WhitespaceTokenizer, HfTokenizer, or any closure)
//   ExampleSource  — somewhere labelled examples come from
//                    (CorpusReader reads a tab-separated file)
//
// Code that consumes these only sees the trait, so a new
// tokenizer or source plugs in without touching the rest.

use crate::domain::example::SentimentExample;
use crate::error::{Result, TokenizeError};

// ─── TextTokenizer ────────────────────────────────────────────────────────────
/// Splits raw text into an ordered sequence of normalised tokens.
///
/// Implementations must be deterministic and free of side effects:
/// the same input always yields the same tokens. An error aborts
/// whatever load is in progress.
pub trait TextTokenizer {
    fn tokenize(&self, text: &str) -> std::result::Result<Vec<String>, TokenizeError>;
}

/// Any plain function or closure can act as an infallible tokenizer
impl<F> TextTokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> std::result::Result<Vec<String>, TokenizeError> {
        Ok(self(text))
    }
}

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can produce the full list of labelled examples.
pub trait ExampleSource {
    /// Load every example, in source order, or fail as a whole.
    fn load_all(&self) -> Result<Vec<SentimentExample>>;
}
