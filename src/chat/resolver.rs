//! The product resolution cascade.
//!
//! [`ChatResolver`] turns a free-text message into a [`ChatResponse`] by
//! running an ordered sequence of lookup stages against the catalog
//! gateway. The first stage that produces a terminal result short-circuits
//! all later stages:
//!
//! 0. Empty input → prompt for a question.
//! 1. Stock intent → answer from a matched product, or suggest related
//!    items (limit 10, returned as-is).
//! 2. Direct match by exact name, then by name/description substring.
//! 3. Category listing, capped at 6.
//! 4. Section listing, capped at 6.
//! 5. Keyword suggestions, limit 5.
//! 6. No-result fallback.
//!
//! Stages run strictly in order and each gateway call is awaited before
//! the next one is issued: later stages are entered only based on earlier
//! stages' emptiness, so the sequential dependency is intentional.
//! Gateway faults propagate unchanged to the caller; every plain input,
//! however malformed, maps to a terminal response.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use tendero::catalog::memory::MemoryCatalog;
//! use tendero::catalog::product::ProductRecord;
//! use tendero::chat::query::ChatQuery;
//! use tendero::chat::resolver::ChatResolver;
//! use tendero::chat::response::Intent;
//!
//! # async fn example() -> tendero::error::Result<()> {
//! let catalog = MemoryCatalog::new();
//! catalog.add_product(ProductRecord::new(1, "Mouse Inalámbrico").with_stock(5));
//!
//! let resolver = ChatResolver::new(Arc::new(catalog));
//! let response = resolver
//!     .resolve(&ChatQuery::new("tienen stock de Mouse Inalámbrico"))
//!     .await?;
//!
//! assert_eq!(response.intent, Some(Intent::StockInquiry));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::intent::StockIntentDetector;
use crate::analysis::keyword::KeywordExtractor;
use crate::analysis::normalizer::normalize;
use crate::catalog::gateway::CatalogGateway;
use crate::catalog::product::ProductRecord;
use crate::chat::composer;
use crate::chat::query::ChatQuery;
use crate::chat::response::{ChatResponse, Intent};
use crate::error::Result;

/// Keyword suggestions requested when a stock question matches nothing.
/// Returned to the caller without further capping.
const STOCK_SUGGESTION_LIMIT: usize = 10;

/// Records fetched for category and section listings before capping.
const LISTING_FETCH_LIMIT: usize = 10;

/// Suggestions shown in a category or section listing.
const LISTING_RESPONSE_CAP: usize = 6;

/// Keyword suggestions requested and shown by the general stage.
const GENERAL_SUGGESTION_LIMIT: usize = 5;

/// Outcome of a single cascade stage.
enum StageOutcome {
    /// The stage produced the final response; no later stage runs.
    Resolved(ChatResponse),
    /// The stage did not apply; try the next one.
    Continue,
}

/// Resolves chat queries against a catalog gateway.
///
/// Stateless between calls: concurrent resolutions share nothing mutable,
/// so a single resolver can serve any number of callers.
pub struct ChatResolver {
    gateway: Arc<dyn CatalogGateway>,
    keywords: KeywordExtractor,
    stock_intent: StockIntentDetector,
}

impl ChatResolver {
    /// Create a resolver over the given gateway with default analysis.
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        ChatResolver {
            gateway,
            keywords: KeywordExtractor::default(),
            stock_intent: StockIntentDetector::new(),
        }
    }

    /// Resolve one chat query into a response.
    ///
    /// The only error this returns is a gateway fault; every input has a
    /// terminal response otherwise.
    pub async fn resolve(&self, query: &ChatQuery) -> Result<ChatResponse> {
        let text = query.message().trim();
        if text.is_empty() {
            debug!("empty input, prompting for a question");
            return Ok(ChatResponse::message_only(composer::EMPTY_INPUT_REPLY));
        }

        let normalized = normalize(text);

        if let StageOutcome::Resolved(response) =
            self.resolve_stock_inquiry(text, &normalized).await?
        {
            return Ok(response);
        }
        if let StageOutcome::Resolved(response) = self.resolve_direct_match(text).await? {
            return Ok(response);
        }
        if let StageOutcome::Resolved(response) = self.resolve_category(text).await? {
            return Ok(response);
        }
        if let StageOutcome::Resolved(response) = self.resolve_section(text).await? {
            return Ok(response);
        }
        if let StageOutcome::Resolved(response) = self.resolve_general_suggestions(text).await? {
            return Ok(response);
        }

        debug!("no stage matched {text:?}");
        Ok(ChatResponse::with_products(
            composer::NO_RESULT_REPLY,
            Vec::new(),
            Intent::NoResult,
        ))
    }

    /// Stage 1: stock questions.
    ///
    /// When the message carries stock intent it is answered here even if
    /// the text is itself a product name a later stage would match.
    async fn resolve_stock_inquiry(&self, text: &str, normalized: &str) -> Result<StageOutcome> {
        if !self.stock_intent.is_stock_intent(normalized) {
            return Ok(StageOutcome::Continue);
        }
        debug!("stock intent triggered for {text:?}");

        if let Some(product) = self.lookup_product(text).await? {
            return Ok(StageOutcome::Resolved(ChatResponse::with_products(
                composer::stock_reply(&product),
                vec![composer::summarize(&product)],
                Intent::StockInquiry,
            )));
        }

        // No product in the phrase: suggest related items. Terminal even
        // when the suggestion list comes back empty.
        let keywords = self.keywords.extract(text);
        let suggested = self
            .gateway
            .find_by_any_keyword(&keywords, STOCK_SUGGESTION_LIMIT)
            .await?;
        debug!("stock inquiry unmatched, {} related items", suggested.len());

        Ok(StageOutcome::Resolved(ChatResponse::with_products(
            composer::STOCK_NOT_FOUND_REPLY,
            composer::summarize_all(&suggested),
            Intent::StockInquiryNotFound,
        )))
    }

    /// Stage 2: direct product match by exact name, then substring.
    async fn resolve_direct_match(&self, text: &str) -> Result<StageOutcome> {
        match self.lookup_product(text).await? {
            Some(product) => {
                debug!("direct match: {}", product.name);
                Ok(StageOutcome::Resolved(ChatResponse::with_products(
                    composer::product_found_reply(&product),
                    vec![composer::summarize(&product)],
                    Intent::ProductFound,
                )))
            }
            None => Ok(StageOutcome::Continue),
        }
    }

    /// Stage 3: the message names a category.
    async fn resolve_category(&self, text: &str) -> Result<StageOutcome> {
        let found = self
            .gateway
            .find_by_category_name(text, LISTING_FETCH_LIMIT)
            .await?;
        if found.is_empty() {
            return Ok(StageOutcome::Continue);
        }
        debug!("category match with {} products", found.len());

        let capped = composer::cap(found, LISTING_RESPONSE_CAP);
        Ok(StageOutcome::Resolved(ChatResponse::with_products(
            composer::CATEGORY_REPLY,
            composer::summarize_all(&capped),
            Intent::CategoryMatch,
        )))
    }

    /// Stage 4: the message names a section.
    async fn resolve_section(&self, text: &str) -> Result<StageOutcome> {
        let found = self
            .gateway
            .find_by_section(text, LISTING_FETCH_LIMIT)
            .await?;
        if found.is_empty() {
            return Ok(StageOutcome::Continue);
        }
        debug!("section match with {} products", found.len());

        let capped = composer::cap(found, LISTING_RESPONSE_CAP);
        Ok(StageOutcome::Resolved(ChatResponse::with_products(
            composer::SECTION_REPLY,
            composer::summarize_all(&capped),
            Intent::SectionMatch,
        )))
    }

    /// Stage 5: keyword suggestions, only terminal when something matched.
    async fn resolve_general_suggestions(&self, text: &str) -> Result<StageOutcome> {
        let keywords = self.keywords.extract(text);
        let suggested = self
            .gateway
            .find_by_any_keyword(&keywords, GENERAL_SUGGESTION_LIMIT)
            .await?;
        if suggested.is_empty() {
            return Ok(StageOutcome::Continue);
        }
        debug!("general suggestions: {} products", suggested.len());

        Ok(StageOutcome::Resolved(ChatResponse::with_products(
            composer::GENERAL_SUGGESTION_REPLY,
            composer::summarize_all(&suggested),
            Intent::GeneralSuggestion,
        )))
    }

    /// Exact-name lookup, falling back to name/description substring.
    async fn lookup_product(&self, text: &str) -> Result<Option<ProductRecord>> {
        if let Some(product) = self.gateway.find_by_exact_name(text).await? {
            return Ok(Some(product));
        }
        self.gateway.find_by_name_or_description(text).await
    }
}
