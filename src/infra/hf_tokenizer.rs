// ============================================================
// Layer 6 — HuggingFace Tokenizer Adapter
// ============================================================
// Lets a tokenizer.json produced by the `tokenizers` ecosystem
// stand in for the default whitespace tokenizer.
//
// The tokens handed back are the model's token strings
// (Encoding::get_tokens), not ids, so they can go through the
// same vocabulary builder as any other tokenizer's output.
// Special tokens are not added. An encode failure is returned
// as a TokenizeError so the corpus load stops on that line.

use anyhow::Result;
use std::path::Path;
use tokenizers::Tokenizer;

use crate::domain::traits::TextTokenizer;
use crate::error::TokenizeError;

pub struct HfTokenizer {
    inner: Tokenizer,
}

impl HfTokenizer {
    /// Load a tokenizer from a tokenizer.json file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;

        tracing::info!("Loaded tokenizer from '{}'", path.display());
        Ok(Self { inner })
    }

    pub fn new(inner: Tokenizer) -> Self {
        Self { inner }
    }
}

impl TextTokenizer for HfTokenizer {
    fn tokenize(&self, text: &str) -> std::result::Result<Vec<String>, TokenizeError> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| TokenizeError(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal word-level tokenizer in the HuggingFace JSON format
    const WORD_LEVEL_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": { "type": "Lowercase" },
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": { "[UNK]": 0, "good": 1, "movie": 2 },
            "unk_token": "[UNK]"
        }
    }"#;

    fn write_tokenizer(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("tokenizer.json");
        std::fs::write(&path, WORD_LEVEL_JSON).unwrap();
        path
    }

    #[test]
    fn test_tokens_from_json_model() {
        let dir = tempfile::tempdir().unwrap();
        let tok = HfTokenizer::from_file(write_tokenizer(dir.path())).unwrap();

        assert_eq!(tok.tokenize("Good movie").unwrap(), vec!["good", "movie"]);
        assert_eq!(tok.tokenize("good plot").unwrap(), vec!["good", "[UNK]"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HfTokenizer::from_file(dir.path().join("absent.json"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Cannot load tokenizer"));
    }
}
