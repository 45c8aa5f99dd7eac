//! Command implementations for the Tendero CLI.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use crate::catalog::memory::MemoryCatalog;
use crate::chat::query::ChatQuery;
use crate::chat::resolver::ChatResolver;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub async fn execute_command(args: TenderoArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args.clone(), &args).await,
        Command::Repl(repl_args) => repl(repl_args.clone(), &args).await,
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Resolve a single message.
async fn ask(args: AskArgs, cli_args: &TenderoArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;
    let resolver = ChatResolver::new(Arc::new(catalog));

    let response = resolver.resolve(&ChatQuery::new(&args.message)).await?;
    output_response(&response, cli_args)
}

/// Run an interactive conversation loop until EOF or "salir".
async fn repl(args: ReplArgs, cli_args: &TenderoArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;
    let resolver = ChatResolver::new(Arc::new(catalog));

    if cli_args.verbosity() > 0 {
        println!("Escribe tu consulta (\"salir\" para terminar).");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("salir") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = resolver.resolve(&ChatQuery::new(line)).await?;
        output_response(&response, cli_args)?;
        println!();
    }

    Ok(())
}

/// Show catalog statistics.
fn stats(args: StatsArgs, cli_args: &TenderoArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalog, cli_args)?;
    let products = catalog.products();

    let categories: HashSet<&str> = products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    let sections: HashSet<&str> = products
        .iter()
        .map(|p| p.section.as_str())
        .filter(|s| !s.is_empty())
        .collect();

    output_stats(
        &CatalogStats {
            total_products: products.len(),
            in_stock_products: products.iter().filter(|p| p.in_stock()).count(),
            distinct_categories: categories.len(),
            distinct_sections: sections.len(),
        },
        cli_args,
    )
}

/// Load a catalog file.
fn load_catalog(path: &Path, cli_args: &TenderoArgs) -> Result<MemoryCatalog> {
    if cli_args.verbosity() > 1 {
        println!("Loading catalog from: {}", path.display());
    }
    MemoryCatalog::from_json_file(path)
}
