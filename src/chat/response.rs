//! Chat response types.
//!
//! A [`ChatResponse`] is what a resolution call hands back: the reply
//! text, an ordered list of suggested products, and an optional intent
//! tag. The tag labels which cascade branch produced the response; it is
//! diagnostic only and never feeds back into resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of the cascade branch that produced a response.
///
/// Exactly one intent is attached per resolved response (none for the
/// empty-input prompt). Serialized under the stable tag names below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Stock question answered from a matched product.
    StockInquiry,
    /// Stock question where no product matched; related items suggested.
    #[serde(rename = "StockInquiry-NotFound")]
    StockInquiryNotFound,
    /// Direct product match by name or description.
    ProductFound,
    /// Products listed from a category equal to the message.
    CategoryMatch,
    /// Products listed from a section equal to the message.
    SectionMatch,
    /// Keyword-based suggestions with no exact match.
    GeneralSuggestion,
    /// Nothing matched at any stage.
    NoResult,
}

impl Intent {
    /// The stable tag name for this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::StockInquiry => "StockInquiry",
            Intent::StockInquiryNotFound => "StockInquiry-NotFound",
            Intent::ProductFound => "ProductFound",
            Intent::CategoryMatch => "CategoryMatch",
            Intent::SectionMatch => "SectionMatch",
            Intent::GeneralSuggestion => "GeneralSuggestion",
            Intent::NoResult => "NoResult",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lightweight product projection for suggestion lists.
///
/// Created fresh for every response; carries the single representative
/// image reference (the record's first slot, empty when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Catalog identifier.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Units currently in stock.
    pub stock: u32,
    /// Representative image reference, possibly empty.
    pub image_url: String,
}

/// The structured result of resolving one chat query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text for the user.
    pub message: String,
    /// Ordered product suggestions, capped by the producing branch.
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    /// Which branch produced this response, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

impl ChatResponse {
    /// Create a response with message text only.
    pub fn message_only<S: Into<String>>(message: S) -> Self {
        ChatResponse {
            message: message.into(),
            products: Vec::new(),
            intent: None,
        }
    }

    /// Create a response with a message, suggestions, and an intent tag.
    pub fn with_products<S: Into<String>>(
        message: S,
        products: Vec<ProductSummary>,
        intent: Intent,
    ) -> Self {
        ChatResponse {
            message: message.into(),
            products,
            intent: Some(intent),
        }
    }
}
