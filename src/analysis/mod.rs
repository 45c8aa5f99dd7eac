//! Text analysis module for Tendero.
//!
//! This module provides the text-side building blocks of query resolution:
//! normalization, keyword extraction with stopword filtering, and
//! stock-intent detection. Everything here is pure and total: analysis
//! never performs I/O and never fails on user input.

pub mod intent;
pub mod keyword;
pub mod normalizer;

// Re-export commonly used types
pub use intent::StockIntentDetector;
pub use keyword::KeywordExtractor;
pub use normalizer::normalize;
