//! Error types for the docsim library.
//!
//! All errors are represented by the [`DocsimError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use docsim::error::{DocsimError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocsimError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for docsim operations.
///
/// This enum represents all possible errors that can occur in the docsim
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum DocsimError {
    /// I/O errors (reading document files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Vector-related errors (dimension mismatches, missing weights)
    #[error("Vector error: {0}")]
    Vector(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DocsimError.
pub type Result<T> = std::result::Result<T, DocsimError>;

impl DocsimError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocsimError::Analysis(msg.into())
    }

    /// Create a new vector error.
    pub fn vector<S: Into<String>>(msg: S) -> Self {
        DocsimError::Vector(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DocsimError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DocsimError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        DocsimError::Other(format!("Internal error: {}", msg.into()))
    }
}
