//! Error types for the Tendero library.
//!
//! All errors are represented by the [`TenderoError`] enum. Query
//! resolution itself never produces errors of its own: every input maps to
//! a terminal response. The variants below exist for the collaborators a
//! resolution call depends on (catalog gateway, analysis setup, catalog
//! files) and propagate unchanged through the cascade.
//!
//! # Examples
//!
//! ```
//! use tendero::error::{Result, TenderoError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TenderoError::gateway("catalog unavailable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tendero operations.
#[derive(Error, Debug)]
pub enum TenderoError {
    /// I/O errors (catalog files, terminal I/O).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog gateway faults (connectivity, storage-side failures).
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Analysis-related errors (tokenization setup, invalid patterns).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TenderoError.
pub type Result<T> = std::result::Result<T, TenderoError>;

impl TenderoError {
    /// Create a new gateway error.
    pub fn gateway<S: Into<String>>(msg: S) -> Self {
        TenderoError::Gateway(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TenderoError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TenderoError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TenderoError::Other(msg.into())
    }
}
