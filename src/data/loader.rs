// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Reads a tab-separated sentiment corpus into labelled examples.
//
// File format, one example per line, no header:
//
//   <text>\t<integer label>\n
//
//   good movie\t1
//   bad movie\t0
//
// Rules:
//   - Empty lines are skipped
//   - Every other line must have exactly one tab
//   - The label is trimmed, then parsed as a base-10 i32
//     (values outside i32 are rejected, never truncated)
//   - A tokenizer error fails the line like any other parse error
//   - Any bad line aborts the whole load (no skip-and-continue)
//   - Output order is file order
//
// Line numbers in errors are 1-based and count skipped empty
// lines too, so they match what an editor shows.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::example::SentimentExample;
use crate::domain::traits::{ExampleSource, TextTokenizer};
use crate::error::{CorpusError, Result};

/// Read every example from the corpus file at `path`.
pub fn read_sentiment_examples<T>(path: impl AsRef<Path>, tokenizer: &T) -> Result<Vec<SentimentExample>>
where
    T: TextTokenizer + ?Sized,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from '{}'", text.len(), path.display());

    let examples = parse_sentiment_examples(&text, tokenizer)?;

    tracing::info!(
        "Loaded {} examples from '{}'",
        examples.len(),
        path.display()
    );
    Ok(examples)
}

/// Parse corpus text that is already in memory.
pub fn parse_sentiment_examples<T>(text: &str, tokenizer: &T) -> Result<Vec<SentimentExample>>
where
    T: TextTokenizer + ?Sized,
{
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| parse_line(line, i + 1, tokenizer))
        .collect()
}

/// Parse a single non-empty line into an example.
fn parse_line<T>(line: &str, line_no: usize, tokenizer: &T) -> Result<SentimentExample>
where
    T: TextTokenizer + ?Sized,
{
    let (text, label) = line
        .split_once('\t')
        .ok_or(CorpusError::MissingSeparator { line: line_no })?;

    if label.contains('\t') {
        return Err(CorpusError::ExtraField { line: line_no });
    }

    let label = label.trim();
    let label = label.parse::<i32>().map_err(|source| CorpusError::InvalidLabel {
        line:  line_no,
        value: label.to_string(),
        source,
    })?;

    let words = tokenizer
        .tokenize(text)
        .map_err(|source| CorpusError::Tokenize { line: line_no, source })?;

    Ok(SentimentExample::new(words, label))
}

/// An ExampleSource backed by a corpus file and a tokenizer.
pub struct CorpusReader<T> {
    path:      PathBuf,
    tokenizer: T,
}

impl<T: TextTokenizer> CorpusReader<T> {
    pub fn new(path: impl Into<PathBuf>, tokenizer: T) -> Self {
        Self {
            path: path.into(),
            tokenizer,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: TextTokenizer> ExampleSource for CorpusReader<T> {
    fn load_all(&self) -> Result<Vec<SentimentExample>> {
        read_sentiment_examples(&self.path, &self.tokenizer)
    }
}
