//! In-memory catalog implementation for testing and small deployments.

use std::path::Path;

use ahash::AHashMap;
use log::trace;
use parking_lot::RwLock;

use crate::analysis::normalizer::normalize;
use crate::catalog::gateway::CatalogGateway;
use crate::catalog::product::ProductRecord;
use crate::error::Result;

#[derive(Debug, Default)]
struct CatalogInner {
    /// Products in insertion order. Lookup tie-breaks resolve to the
    /// earliest inserted match.
    products: Vec<ProductRecord>,
    /// Product id to position in `products`.
    by_id: AHashMap<u64, usize>,
}

/// An in-memory catalog.
///
/// Backs the gateway with a plain product list, which is enough for the
/// CLI, for tests, and for catalogs that fit comfortably in memory.
/// Reads take a shared lock, so concurrent resolution calls need no
/// coordination of their own.
///
/// # Examples
///
/// ```
/// use tendero::catalog::memory::MemoryCatalog;
/// use tendero::catalog::product::ProductRecord;
///
/// let catalog = MemoryCatalog::new();
/// catalog.add_product(ProductRecord::new(1, "Mouse Inalámbrico").with_stock(5));
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<CatalogInner>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        MemoryCatalog {
            inner: RwLock::new(CatalogInner::default()),
        }
    }

    /// Create a catalog from a list of products, keeping their order.
    pub fn with_products<I>(products: I) -> Self
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        let catalog = Self::new();
        for product in products {
            catalog.add_product(product);
        }
        catalog
    }

    /// Load a catalog from a JSON file containing an array of products.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Load a catalog from a JSON string containing an array of products.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let products: Vec<ProductRecord> = serde_json::from_str(data)?;
        Ok(Self::with_products(products))
    }

    /// Add a product, replacing any existing record with the same id.
    pub fn add_product(&self, product: ProductRecord) {
        let mut inner = self.inner.write();
        if let Some(&pos) = inner.by_id.get(&product.id) {
            inner.products[pos] = product;
        } else {
            let pos = inner.products.len();
            inner.by_id.insert(product.id, pos);
            inner.products.push(product);
        }
    }

    /// Get a product by id.
    pub fn get(&self, id: u64) -> Option<ProductRecord> {
        let inner = self.inner.read();
        inner.by_id.get(&id).map(|&pos| inner.products[pos].clone())
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.inner.read().products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().products.is_empty()
    }

    /// Snapshot of every product, in insertion order.
    pub fn products(&self) -> Vec<ProductRecord> {
        self.inner.read().products.clone()
    }
}

#[async_trait::async_trait]
impl CatalogGateway for MemoryCatalog {
    async fn find_by_exact_name(&self, name: &str) -> Result<Option<ProductRecord>> {
        let needle = normalize(name);
        trace!("memory catalog: exact-name lookup for {needle:?}");

        let inner = self.inner.read();
        Ok(inner
            .products
            .iter()
            .find(|p| normalize(&p.name) == needle)
            .cloned())
    }

    async fn find_by_name_or_description(&self, text: &str) -> Result<Option<ProductRecord>> {
        let needle = normalize(text);
        if needle.is_empty() {
            return Ok(None);
        }
        trace!("memory catalog: name-or-description lookup for {needle:?}");

        let inner = self.inner.read();
        Ok(inner
            .products
            .iter()
            .find(|p| {
                let name = normalize(&p.name);
                // Containment goes both ways for the name so that a phrase
                // like "tienen stock de mouse inalámbrico" still resolves
                // the product it mentions.
                name.contains(&needle)
                    || (!name.is_empty() && needle.contains(&name))
                    || normalize(&p.description).contains(&needle)
            })
            .cloned())
    }

    async fn find_by_category_name(&self, name: &str, limit: usize) -> Result<Vec<ProductRecord>> {
        let needle = normalize(name);
        trace!("memory catalog: category lookup for {needle:?} (limit {limit})");

        let inner = self.inner.read();
        Ok(inner
            .products
            .iter()
            .filter(|p| normalize(&p.category) == needle && !needle.is_empty())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_section(&self, section: &str, limit: usize) -> Result<Vec<ProductRecord>> {
        let needle = normalize(section);
        trace!("memory catalog: section lookup for {needle:?} (limit {limit})");

        let inner = self.inner.read();
        Ok(inner
            .products
            .iter()
            .filter(|p| normalize(&p.section) == needle && !needle.is_empty())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_any_keyword(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<ProductRecord>> {
        let words: Vec<String> = keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(Vec::new());
        }
        trace!("memory catalog: keyword-OR lookup for {words:?} (limit {limit})");

        let inner = self.inner.read();
        Ok(inner
            .products
            .iter()
            .filter(|p| {
                let name = normalize(&p.name);
                let description = normalize(&p.description);
                words
                    .iter()
                    .any(|w| name.contains(w.as_str()) || description.contains(w.as_str()))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
