//! The catalog query gateway capability trait.
//!
//! The resolution cascade never talks to storage directly; it consumes the
//! read-only capability set below. Production adapters construct whatever
//! query idiom their storage engine supports (SQL `LIKE` chains, a
//! full-text index, an in-memory scan) behind this boundary, which keeps
//! the cascade's decision logic fully unit-testable against
//! [`MemoryCatalog`](crate::catalog::memory::MemoryCatalog).
//!
//! All operations are asynchronous and may suspend on I/O. Faults are
//! reported as [`TenderoError`](crate::error::TenderoError) values and
//! propagate through the cascade unchanged; the gateway owns any timeout
//! or retry policy.

use async_trait::async_trait;

use crate::catalog::product::ProductRecord;
use crate::error::Result;

/// Read-only query capabilities over the product catalog.
///
/// All matching is case- and surrounding-whitespace-insensitive.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Find the product whose name matches `name` exactly.
    async fn find_by_exact_name(&self, name: &str) -> Result<Option<ProductRecord>>;

    /// Find the first product related to `text` by substring: the name or
    /// description contains `text`, or the name occurs within `text` (so a
    /// whole phrase still resolves the product it mentions).
    ///
    /// The adapter decides the tie-break when several products match.
    async fn find_by_name_or_description(&self, text: &str) -> Result<Option<ProductRecord>>;

    /// Find products whose category name equals `name`, capped at `limit`.
    async fn find_by_category_name(&self, name: &str, limit: usize) -> Result<Vec<ProductRecord>>;

    /// Find products whose section tag equals `section`, capped at `limit`.
    async fn find_by_section(&self, section: &str, limit: usize) -> Result<Vec<ProductRecord>>;

    /// Find products whose name or description contains any of `keywords`,
    /// capped at `limit`.
    ///
    /// An empty keyword set yields an empty result without querying.
    async fn find_by_any_keyword(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<ProductRecord>>;

    /// Get the name of this gateway (for debugging and configuration).
    fn name(&self) -> &'static str;
}
