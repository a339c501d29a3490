// ============================================================
// Corpus Errors
// ============================================================
// Every way a corpus load can fail. A single bad line aborts
// the whole read, so each variant carries enough context
// (path or 1-based line number) to point at the culprit.
//
// A tokenizer that cannot split a line reports TokenizeError,
// which the loader wraps with the line number.
//
// Vocabulary building and vectorisation never fail, so they
// have no error type of their own.

use std::{num::ParseIntError, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("cannot read corpus '{}': {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing tab between text and label")]
    MissingSeparator { line: usize },

    #[error("line {line}: expected exactly two tab-separated fields")]
    ExtraField { line: usize },

    #[error("line {line}: label '{value}' is not a 32-bit integer: {source}")]
    InvalidLabel {
        line:   usize,
        value:  String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {source}")]
    Tokenize {
        line:   usize,
        #[source]
        source: TokenizeError,
    },
}

/// Raised by a TextTokenizer that cannot split its input
#[derive(Error, Debug)]
#[error("tokenizer failed: {0}")]
pub struct TokenizeError(pub String);

impl CorpusError {
    /// The 1-based line that caused the failure, if the error is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            CorpusError::Io { .. } => None,
            CorpusError::MissingSeparator { line }
            | CorpusError::ExtraField { line }
            | CorpusError::InvalidLabel { line, .. }
            | CorpusError::Tokenize { line, .. } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, CorpusError>;
