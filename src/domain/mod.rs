// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the system
// works with: labelled examples, the vocabulary, and the
// seams (tokenizer, example source) other layers plug into.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only plain structs, enums, and traits

// A tokenised, labelled line of the corpus
pub mod example;

// The word ↔ index bijection
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
