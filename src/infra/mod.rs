// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Adapters around third-party crates that the rest of the
// system only sees through domain traits.
//
//   hf_tokenizer.rs — wraps a HuggingFace `tokenizers` model
//                     loaded from tokenizer.json so it can be
//                     used as a TextTokenizer by the loader

/// HuggingFace tokenizer adapter
pub mod hf_tokenizer;
