//! Bag-of-words features for a tab-separated sentiment corpus.
//!
//! ```no_run
//! use sentiment_bow::{bag_of_words, build_vocab, read_sentiment_examples, BowMode, WhitespaceTokenizer};
//!
//! let examples = read_sentiment_examples("train.tsv", &WhitespaceTokenizer::new())?;
//! let vocab = build_vocab(&examples);
//! let features = bag_of_words(examples[0].words(), &vocab, BowMode::Binary);
//! assert_eq!(features.len(), vocab.len());
//! # Ok::<(), sentiment_bow::CorpusError>(())
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use data::loader::{parse_sentiment_examples, read_sentiment_examples, CorpusReader};
pub use data::tokenizer::WhitespaceTokenizer;
pub use data::vectorizer::{bag_of_words, BowMode};
pub use data::vocab_builder::{build_vocab, build_vocab_with, VocabOrder};
pub use domain::example::SentimentExample;
pub use domain::traits::{ExampleSource, TextTokenizer};
pub use domain::vocabulary::Vocabulary;
pub use error::{CorpusError, TokenizeError};
