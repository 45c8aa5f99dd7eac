//! Product records as read from the catalog.

use serde::{Deserialize, Serialize};

/// A product as the catalog stores it.
///
/// Read-only from the resolution engine's perspective: records are created
/// by whatever owns the catalog (an admin surface, a JSON fixture file) and
/// only queried here. A record carries up to three image references; the
/// first slot is the representative one used in summaries.
///
/// # Examples
///
/// ```
/// use tendero::catalog::product::ProductRecord;
///
/// let product = ProductRecord::new(1, "Mouse Inalámbrico")
///     .with_description("Mouse óptico 2.4GHz")
///     .with_price(25.0)
///     .with_stock(5);
///
/// assert_eq!(product.primary_image(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Catalog identifier.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Units currently in stock.
    #[serde(default)]
    pub stock: u32,
    /// Store section tag (e.g. "ofertas").
    #[serde(default)]
    pub section: String,
    /// Category name the product belongs to.
    #[serde(default)]
    pub category: String,
    /// Image references, first slot is the representative image.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductRecord {
    /// Create a new product record with the given id and name.
    pub fn new<S: Into<String>>(id: u64, name: S) -> Self {
        ProductRecord {
            id,
            name: name.into(),
            description: String::new(),
            price: 0.0,
            stock: 0,
            section: String::new(),
            category: String::new(),
            images: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Set the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the section tag.
    pub fn with_section<S: Into<String>>(mut self, section: S) -> Self {
        self.section = section.into();
        self
    }

    /// Set the category name.
    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = category.into();
        self
    }

    /// Add an image reference.
    pub fn with_image<S: Into<String>>(mut self, image: S) -> Self {
        self.images.push(image.into());
        self
    }

    /// The representative image reference: the first slot, or an empty
    /// string when the record carries no images.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }

    /// Whether the product has units in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
