// ============================================================
// Layer 4 — Whitespace Tokenizer
// ============================================================
// The default tokenizer collaborator for the corpus reader.
//
// Steps (applied per call):
//   1. Map Unicode whitespace variants and control characters
//      to a plain space
//   2. Split on whitespace
//   3. Optionally lowercase each token
//   4. Optionally trim punctuation from the edges of each token,
//      dropping tokens that end up empty
//
// "Good movie!!" → ["good", "movie!!"]       (defaults)
// "Good movie!!" → ["good", "movie"]         (with_strip_punctuation(true))

use crate::domain::traits::TextTokenizer;
use crate::error::TokenizeError;

#[derive(Debug, Clone)]
pub struct WhitespaceTokenizer {
    lowercase:         bool,
    strip_punctuation: bool,
}

impl WhitespaceTokenizer {
    /// Lowercasing on, punctuation left in place
    pub fn new() -> Self {
        Self {
            lowercase:         true,
            strip_punctuation: false,
        }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = strip;
        self
    }

    fn normalise_char(c: char) -> char {
        match c {
            '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            c if c.is_control() => ' ',
            c => c,
        }
    }
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let cleaned: String = text.chars().map(Self::normalise_char).collect();

        let tokens = cleaned
            .split_whitespace()
            .filter_map(|raw| {
                let word = if self.strip_punctuation {
                    raw.trim_matches(|c: char| !c.is_alphanumeric())
                } else {
                    raw
                };
                if word.is_empty() {
                    return None;
                }
                Some(if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                })
            })
            .collect();
        Ok(tokens)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("good   movie").unwrap(), vec!["good", "movie"]);
    }

    #[test]
    fn test_lowercases_by_default() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("Good MOVIE").unwrap(), vec!["good", "movie"]);
    }

    #[test]
    fn test_preserves_case_when_asked() {
        let t = WhitespaceTokenizer::new().with_lowercase(false);
        assert_eq!(t.tokenize("Good MOVIE").unwrap(), vec!["Good", "MOVIE"]);
    }

    #[test]
    fn test_strip_punctuation() {
        let t = WhitespaceTokenizer::new().with_strip_punctuation(true);
        assert_eq!(t.tokenize("\"Great\" film!! ...").unwrap(), vec!["great", "film"]);
    }

    #[test]
    fn test_keeps_punctuation_by_default() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("great!").unwrap(), vec!["great!"]);
    }

    #[test]
    fn test_unicode_spaces_and_control_chars() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("a\u{00A0}b\u{200B}c\x01d").unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_string() {
        let t = WhitespaceTokenizer::new();
        assert!(t.tokenize("").unwrap().is_empty());
        assert!(t.tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_deterministic() {
        let t = WhitespaceTokenizer::new();
        assert_eq!(t.tokenize("same text here").unwrap(), t.tokenize("same text here").unwrap());
    }
}
