//! Response composition: product summaries, list capping, reply texts.
//!
//! The composer is the last hop of the pipeline. It projects catalog
//! records into [`ProductSummary`] values, truncates suggestion lists to
//! each branch's cap, and owns every user-facing reply string.

use crate::catalog::product::ProductRecord;
use crate::chat::response::ProductSummary;

/// Reply when the incoming message is empty or whitespace-only.
pub const EMPTY_INPUT_REPLY: &str =
    "Por favor, ingresa una pregunta o comentario para que pueda ayudarte.";

/// Reply when a stock question matched no product and related items are
/// suggested instead.
pub const STOCK_NOT_FOUND_REPLY: &str = "No pude encontrar el producto específico que mencionaste. \
     Sin embargo, aquí tienes algunos productos relacionados que podrían interesarte.";

/// Reply heading a category listing.
pub const CATEGORY_REPLY: &str =
    "Aquí tienes algunos productos que encontré en la categoría que mencionastes:";

/// Reply heading a section listing.
pub const SECTION_REPLY: &str =
    "Aquí tienes algunos productos que encontré en la sección que mencionastes:";

/// Reply heading keyword-based suggestions.
pub const GENERAL_SUGGESTION_REPLY: &str = "No pude encontrar un producto específico, pero aquí \
     tienes algunas sugerencias basadas en tu consulta:";

/// Reply when every stage came up empty.
pub const NO_RESULT_REPLY: &str = "Lo siento, no pude encontrar información relevante para tu \
     consulta. Prueba buscar por nombre, categoría o preguntar por stock. ¿Podrías proporcionar \
     más detalles o especificar el producto que estás buscando?";

/// Project a catalog record into a suggestion summary.
///
/// Pure: takes the first image slot verbatim, empty string when the record
/// has no images.
pub fn summarize(product: &ProductRecord) -> ProductSummary {
    ProductSummary {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        stock: product.stock,
        image_url: product.primary_image().to_string(),
    }
}

/// Project a list of records, preserving order.
pub fn summarize_all(products: &[ProductRecord]) -> Vec<ProductSummary> {
    products.iter().map(summarize).collect()
}

/// Truncate to the first `n` elements, preserving order.
pub fn cap<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.truncate(n);
    items
}

/// Reply text for an answered stock question.
pub fn stock_reply(product: &ProductRecord) -> String {
    if product.in_stock() {
        format!(
            "Sí, tenemos '{}' unidades disponibles del producto: '{}'.",
            product.stock, product.name
        )
    } else {
        format!(
            "Lo siento, el producto: '{}' está agotado en este momento.",
            product.name
        )
    }
}

/// Reply text for a direct product match.
pub fn product_found_reply(product: &ProductRecord) -> String {
    format!(
        "Encontré el producto que mencionastes: '{}'. Actualmente tenemos '{}' unidades \
         disponibles. Tiene un precio de: '{:.2}'.",
        product.name, product.stock, product.price
    )
}
