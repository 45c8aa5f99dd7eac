//! Keyword extraction for catalog suggestion queries.
//!
//! This module turns a free-text message into the ordered keyword set the
//! resolution cascade hands to the gateway's keyword-OR lookup. Extraction
//! scans for runs of word characters, lower-cases them, drops tokens
//! shorter than two characters, and removes a fixed Spanish stopword list.
//!
//! # Examples
//!
//! ```
//! use tendero::analysis::keyword::KeywordExtractor;
//!
//! let extractor = KeywordExtractor::default();
//! let keywords = extractor.extract("¿Qué stock hay del Mouse Inalámbrico?");
//!
//! // "qué" and "del" are stopwords; "stock" and "hay" are not.
//! assert_eq!(keywords, vec!["stock", "hay", "mouse", "inalámbrico"]);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{Result, TenderoError};

/// Default Spanish stopword list.
///
/// Grammatical words (articles, prepositions, conjunctions) that carry no
/// signal for product lookup. Domain words such as "stock" or "hay" are
/// deliberately absent.
const DEFAULT_SPANISH_STOP_WORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "y", "o", "a", "en", "con",
    "por", "para", "es", "son", "que", "qué",
];

/// Default Spanish stopwords as a HashSet.
pub static DEFAULT_SPANISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_SPANISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Minimum number of characters a token must have to survive extraction.
const MIN_TOKEN_CHARS: usize = 2;

/// Extracts suggestion keywords from free-text messages.
///
/// Tokens are matched with a `\w+` scan (letters, digits, underscore,
/// Unicode-aware so accented Spanish words stay whole), lower-cased, then
/// filtered by length and against the stopword set. Surviving keywords keep
/// their order of first appearance; repeated words are reported once.
///
/// # Examples
///
/// ```
/// use tendero::analysis::keyword::KeywordExtractor;
///
/// let extractor = KeywordExtractor::from_words(vec!["por", "favor"]);
/// assert_eq!(extractor.extract("por favor teclado"), vec!["teclado"]);
/// ```
#[derive(Clone, Debug)]
pub struct KeywordExtractor {
    /// The regex pattern used to scan for tokens.
    pattern: Arc<Regex>,
    /// The set of stopwords to remove.
    stop_words: Arc<HashSet<String>>,
}

impl KeywordExtractor {
    /// Create a new extractor with the default Spanish stopwords.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(DEFAULT_SPANISH_STOP_WORDS_SET.clone())
    }

    /// Create a new extractor with a custom stopword set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        let pattern = Regex::new(r"\w+")
            .map_err(|e| TenderoError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(KeywordExtractor {
            pattern: Arc::new(pattern),
            stop_words: Arc::new(stop_words),
        })
    }

    /// Create a new extractor from a list of stopwords.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words).expect("default token pattern should be valid")
    }

    /// Check if a word is a stopword.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract keywords from a raw message.
    ///
    /// Returns an empty vector for empty or whitespace-only input. Never
    /// fails.
    pub fn extract(&self, raw: &str) -> Vec<String> {
        let text = raw.to_lowercase();
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for mat in self.pattern.find_iter(&text) {
            let token = mat.as_str();
            if token.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            if self.stop_words.contains(token) {
                continue;
            }
            if seen.insert(token.to_string()) {
                keywords.push(token.to_string());
            }
        }

        keywords
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new().expect("default keyword extractor should be valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filters_stopwords_and_short_tokens() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("el teclado y la pantalla");

        assert_eq!(keywords, vec!["teclado", "pantalla"]);
    }

    #[test]
    fn test_extract_keeps_domain_words() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("¿Qué stock hay del Mouse Inalámbrico?");

        // "stock" and "hay" are not grammatical stopwords and must survive.
        assert_eq!(keywords, vec!["stock", "hay", "mouse", "inalámbrico"]);
    }

    #[test]
    fn test_extract_preserves_first_occurrence_order() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract("mouse gamer mouse pad");

        assert_eq!(keywords, vec!["mouse", "gamer", "pad"]);
    }

    #[test]
    fn test_extract_empty_input() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \t ").is_empty());
    }

    #[test]
    fn test_extract_drops_single_char_tokens() {
        let extractor = KeywordExtractor::from_words(Vec::<String>::new());
        let keywords = extractor.extract("a b cd");

        assert_eq!(keywords, vec!["cd"]);
    }

    #[test]
    fn test_is_stop_word() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.is_stop_word("del"));
        assert!(extractor.is_stop_word("qué"));
        assert!(!extractor.is_stop_word("stock"));
    }
}
