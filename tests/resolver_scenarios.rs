//! End-to-end resolution scenarios over an in-memory catalog.

use std::sync::Arc;

use tendero::catalog::memory::MemoryCatalog;
use tendero::catalog::product::ProductRecord;
use tendero::chat::query::ChatQuery;
use tendero::chat::resolver::ChatResolver;
use tendero::chat::response::{ChatResponse, Intent};

fn store_catalog() -> MemoryCatalog {
    MemoryCatalog::with_products(vec![
        ProductRecord::new(1, "Mouse Inalámbrico")
            .with_description("Mouse óptico inalámbrico 2.4GHz")
            .with_price(25.0)
            .with_stock(5)
            .with_category("Periféricos")
            .with_section("ofertas")
            .with_image("img/mouse-1.jpg")
            .with_image("img/mouse-2.jpg"),
        ProductRecord::new(2, "Teclado Compacto")
            .with_description("Teclado de membrana silencioso")
            .with_price(19.5)
            .with_stock(12)
            .with_category("Periféricos")
            .with_section("oficina"),
        ProductRecord::new(3, "Alfombrilla XL")
            .with_description("Superficie amplia para teclado y mouse")
            .with_price(12.0)
            .with_stock(0)
            .with_category("Accesorios")
            .with_section("ofertas"),
    ])
}

fn resolver() -> ChatResolver {
    ChatResolver::new(Arc::new(store_catalog()))
}

async fn resolve(resolver: &ChatResolver, message: &str) -> ChatResponse {
    resolver
        .resolve(&ChatQuery::new(message))
        .await
        .expect("memory gateway never faults")
}

#[tokio::test]
async fn empty_and_whitespace_input_prompts_for_a_question() {
    let resolver = resolver();

    for input in ["", "   ", " \t \n "] {
        let response = resolve(&resolver, input).await;
        assert_eq!(response.intent, None);
        assert!(response.products.is_empty());
        assert!(response.message.contains("ingresa una pregunta"));
    }
}

#[tokio::test]
async fn stock_question_about_an_existing_product_reports_units() {
    let resolver = resolver();

    let response = resolve(&resolver, "tienen stock de Mouse Inalámbrico").await;

    assert_eq!(response.intent, Some(Intent::StockInquiry));
    assert!(response.message.contains("'5'"));
    assert!(response.message.contains("Mouse Inalámbrico"));
    assert_eq!(response.products.len(), 1);
    assert_eq!(response.products[0].id, 1);
    assert_eq!(response.products[0].image_url, "img/mouse-1.jpg");
}

#[tokio::test]
async fn stock_question_about_a_sold_out_product_says_agotado() {
    let resolver = resolver();

    let response = resolve(&resolver, "¿hay Alfombrilla XL disponible?").await;

    assert_eq!(response.intent, Some(Intent::StockInquiry));
    assert!(response.message.contains("agotado"));
    assert!(response.message.contains("Alfombrilla XL"));
    assert_eq!(response.products.len(), 1);
}

#[tokio::test]
async fn stock_intent_beats_direct_match_for_a_literal_product_name() {
    // A product literally named after a trigger word: the stock stage must
    // claim it before the direct-match stage can.
    let catalog = store_catalog();
    catalog.add_product(
        ProductRecord::new(50, "Stock Car Racing")
            .with_price(49.0)
            .with_stock(2),
    );
    let resolver = ChatResolver::new(Arc::new(catalog));

    let response = resolve(&resolver, "Stock Car Racing").await;

    assert_eq!(response.intent, Some(Intent::StockInquiry));
    assert_ne!(response.intent, Some(Intent::ProductFound));
    assert_eq!(response.products.len(), 1);
    assert_eq!(response.products[0].id, 50);
}

#[tokio::test]
async fn unmatched_stock_question_suggests_related_products() {
    let resolver = resolver();

    let response = resolve(&resolver, "¿hay teclado ergonómico en stock?").await;

    assert_eq!(response.intent, Some(Intent::StockInquiryNotFound));
    // The "teclado" keyword matches the membrane keyboard's name and the
    // mouse pad's description.
    assert!(!response.products.is_empty());
    assert!(response.message.contains("productos relacionados"));
}

#[tokio::test]
async fn direct_name_match_reports_stock_and_price() {
    let resolver = resolver();

    let response = resolve(&resolver, "Teclado Compacto").await;

    assert_eq!(response.intent, Some(Intent::ProductFound));
    assert!(response.message.contains("Teclado Compacto"));
    assert!(response.message.contains("'12'"));
    assert!(response.message.contains("'19.50'"));
    assert_eq!(response.products.len(), 1);
}

#[tokio::test]
async fn category_name_lists_up_to_six_products() {
    let resolver = resolver();

    let response = resolve(&resolver, "periféricos").await;

    assert_eq!(response.intent, Some(Intent::CategoryMatch));
    assert_eq!(response.products.len(), 2);
    // Gateway order is preserved, never re-sorted.
    assert_eq!(response.products[0].id, 1);
    assert_eq!(response.products[1].id, 2);
}

#[tokio::test]
async fn oversized_category_is_truncated_to_six() {
    let catalog = MemoryCatalog::with_products((1..=9).map(|i| {
        ProductRecord::new(i, format!("Lámpara {i}"))
            .with_category("Iluminación")
            .with_stock(1)
    }));
    let resolver = ChatResolver::new(Arc::new(catalog));

    let response = resolve(&resolver, "iluminación").await;

    assert_eq!(response.intent, Some(Intent::CategoryMatch));
    assert_eq!(response.products.len(), 6);
    let ids: Vec<u64> = response.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn section_tag_lists_matching_products() {
    let resolver = resolver();

    let response = resolve(&resolver, "ofertas").await;

    assert_eq!(response.intent, Some(Intent::SectionMatch));
    assert_eq!(response.products.len(), 2);
    assert_eq!(response.products[0].id, 1);
    assert_eq!(response.products[1].id, 3);
}

#[tokio::test]
async fn keyword_fallback_suggests_up_to_five() {
    // No product, category, or section equals this message, but "teclado"
    // appears in two descriptions.
    let resolver = resolver();

    let response = resolve(&resolver, "teclado mecánico rgb").await;

    assert_eq!(response.intent, Some(Intent::GeneralSuggestion));
    assert!(!response.products.is_empty());
    assert!(response.products.len() <= 5);
}

#[tokio::test]
async fn unresolvable_message_falls_back_to_no_result() {
    let resolver = resolver();

    let response = resolve(&resolver, "xyzzy123").await;

    assert_eq!(response.intent, Some(Intent::NoResult));
    assert!(response.products.is_empty());
    assert!(response.message.contains("Lo siento"));
}

#[tokio::test]
async fn resolution_is_idempotent() {
    let resolver = resolver();

    for message in ["tienen stock de Mouse Inalámbrico", "ofertas", "xyzzy123"] {
        let first = resolve(&resolver, message).await;
        let second = resolve(&resolver, message).await;

        assert_eq!(first.intent, second.intent);
        assert_eq!(first.message, second.message);
        let ids = |r: &ChatResponse| r.products.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }
}
