//! Stock-intent detection.
//!
//! A lightweight keyword-based detector that decides whether a message is
//! asking about product availability. Matching is substring containment
//! over the normalized text, so "hay" also triggers inside a longer word;
//! the trigger vocabulary is chosen so that this stays useful in practice.

use crate::analysis::normalizer::normalize;

/// Default trigger vocabulary for stock inquiries.
const DEFAULT_STOCK_TRIGGER_WORDS: &[&str] = &["stock", "disponible", "hay", "quedan", "cantidad"];

/// Detects whether a message carries stock-inquiry intent.
///
/// # Examples
///
/// ```
/// use tendero::analysis::intent::StockIntentDetector;
///
/// let detector = StockIntentDetector::new();
/// assert!(detector.is_stock_intent("¿cuántas unidades quedan?"));
/// assert!(!detector.is_stock_intent("teclado mecánico"));
/// ```
#[derive(Clone, Debug)]
pub struct StockIntentDetector {
    triggers: Vec<String>,
}

impl StockIntentDetector {
    /// Create a new detector with the default trigger vocabulary.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_STOCK_TRIGGER_WORDS.iter().copied())
    }

    /// Create a new detector from a custom trigger list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StockIntentDetector {
            triggers: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Check whether normalized text contains any trigger word.
    ///
    /// The input is expected to be normalized already (see
    /// [`normalize`]); pure and total.
    pub fn is_stock_intent(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }

    /// Normalize raw text and check it for stock intent.
    pub fn detect(&self, raw: &str) -> bool {
        self.is_stock_intent(&normalize(raw))
    }
}

impl Default for StockIntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_words() {
        let detector = StockIntentDetector::new();
        assert!(detector.is_stock_intent("tienen stock de mouse"));
        assert!(detector.is_stock_intent("está disponible el teclado"));
        assert!(detector.is_stock_intent("hay monitores"));
        assert!(detector.is_stock_intent("cuántos quedan"));
        assert!(detector.is_stock_intent("qué cantidad tienen"));
    }

    #[test]
    fn test_non_trigger_text() {
        let detector = StockIntentDetector::new();
        assert!(!detector.is_stock_intent("teclado mecánico rgb"));
        assert!(!detector.is_stock_intent(""));
    }

    #[test]
    fn test_substring_containment() {
        // Containment is by substring, not word boundary.
        let detector = StockIntentDetector::new();
        assert!(detector.is_stock_intent("restockear"));
    }

    #[test]
    fn test_detect_normalizes_first() {
        let detector = StockIntentDetector::new();
        assert!(detector.detect("  ¿Tienen STOCK?  "));
    }

    #[test]
    fn test_custom_triggers() {
        let detector = StockIntentDetector::from_words(vec!["inventario"]);
        assert!(detector.is_stock_intent("revisa el inventario"));
        assert!(!detector.is_stock_intent("tienen stock"));
    }
}
