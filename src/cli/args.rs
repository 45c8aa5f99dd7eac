//! Command line argument parsing for the Tendero CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tendero - a conversational product-catalog query engine
#[derive(Parser, Debug, Clone)]
#[command(name = "tendero")]
#[command(about = "A conversational product-catalog query engine for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TenderoArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TenderoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a single message against a catalog
    Ask(AskArgs),

    /// Start an interactive conversation loop
    Repl(ReplArgs),

    /// Show catalog statistics
    Stats(StatsArgs),
}

/// Arguments for resolving one message
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The message to resolve
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Catalog file path (JSON array of products)
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Catalog file path (JSON array of products)
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

/// Arguments for catalog statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Catalog file path (JSON array of products)
    #[arg(short, long, value_name = "CATALOG_FILE")]
    pub catalog: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_command() {
        let args = TenderoArgs::parse_from([
            "tendero",
            "ask",
            "tienen stock de mouse",
            "--catalog",
            "catalog.json",
        ]);

        assert_eq!(args.verbosity(), 1);
        match args.command {
            Command::Ask(ask) => {
                assert_eq!(ask.message, "tienen stock de mouse");
                assert_eq!(ask.catalog, PathBuf::from("catalog.json"));
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = TenderoArgs::parse_from([
            "tendero", "-q", "-vvv", "stats", "--catalog", "catalog.json",
        ]);
        assert_eq!(args.verbosity(), 0);
    }
}
