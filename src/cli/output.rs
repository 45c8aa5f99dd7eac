//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::chat::response::ChatResponse;
use crate::cli::args::{OutputFormat, TenderoArgs};
use crate::error::Result;

/// Catalog statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock_products: usize,
    pub distinct_categories: usize,
    pub distinct_sections: usize,
}

/// Output a chat response in the configured format.
pub fn output_response(response: &ChatResponse, args: &TenderoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_response_human(response, args),
        OutputFormat::Json => output_json(response, args),
    }
}

/// Output catalog statistics in the configured format.
pub fn output_stats(stats: &CatalogStats, args: &TenderoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Catalog Statistics:");
            println!("═══════════════════");
            println!("Total products:      {}", stats.total_products);
            println!("In stock:            {}", stats.in_stock_products);
            println!("Distinct categories: {}", stats.distinct_categories);
            println!("Distinct sections:   {}", stats.distinct_sections);
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output a chat response in human format.
fn output_response_human(response: &ChatResponse, args: &TenderoArgs) -> Result<()> {
    println!("{}", response.message);

    if !response.products.is_empty() {
        println!();
        for (i, product) in response.products.iter().enumerate() {
            println!(
                "  {}. {} - {:.2} ({} en stock)",
                i + 1,
                product.name,
                product.price,
                product.stock
            );
        }
    }

    if args.verbosity() > 1
        && let Some(intent) = response.intent
    {
        println!();
        println!("[intent: {intent}]");
    }

    Ok(())
}

/// Output any serializable value as JSON.
fn output_json<T: Serialize>(value: &T, args: &TenderoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
