//! # Tendero
//!
//! A conversational product-catalog query resolution engine for Rust.
//!
//! Given a free-text message, Tendero detects a likely intent, runs a
//! deterministic cascade of lookup strategies against a product catalog,
//! and returns a structured response: reply text, an ordered list of
//! suggested products, and an optional intent tag.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic, ordered resolution cascade with short-circuiting
//! - Text normalization and keyword extraction with stopword filtering
//! - Keyword-based stock-intent detection
//! - Pluggable catalog backends behind an async gateway trait
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tendero::catalog::memory::MemoryCatalog;
//! use tendero::catalog::product::ProductRecord;
//! use tendero::chat::query::ChatQuery;
//! use tendero::chat::resolver::ChatResolver;
//!
//! # fn main() -> tendero::error::Result<()> {
//! # tokio_test::block_on(async {
//! let catalog = MemoryCatalog::new();
//! catalog.add_product(
//!     ProductRecord::new(1, "Mouse Inalámbrico")
//!         .with_price(25.0)
//!         .with_stock(5),
//! );
//!
//! let resolver = ChatResolver::new(Arc::new(catalog));
//! let response = resolver.resolve(&ChatQuery::new("Mouse Inalámbrico")).await?;
//! assert_eq!(response.products.len(), 1);
//! # Ok(())
//! # })
//! # }
//! ```

pub mod analysis;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
