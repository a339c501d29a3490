// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a raw corpus file to model-ready tensors.
//
//   corpus.tsv
//       │
//       ▼
//   loader          → "text\tlabel" lines → SentimentExample
//       │              (text split by a TextTokenizer)
//       ▼
//   vocab_builder   → distinct words → Vocabulary
//       │
//       ▼
//   vectorizer      → tokens + Vocabulary → Vec<f32>
//       │
//       ▼
//   dataset         → BowSample / burn Dataset
//       │
//       ▼
//   batcher         → burn tensors [batch, vocab_size]
//
// Data only flows forward; no step depends on a later one.

/// Reads tab-separated corpus files
pub mod loader;

/// Default whitespace tokenizer
pub mod tokenizer;

/// Distinct words → dense indices
pub mod vocab_builder;

/// Bag-of-words vectors (count or binary)
pub mod vectorizer;

/// Vectorised samples and burn's Dataset trait
pub mod dataset;

/// burn's Batcher trait for bag-of-words samples
pub mod batcher;
