//! Error types for the hunstem library.
//!
//! All errors are represented by the [`HunstemError`] enum. Two variants are
//! fatal by nature and never retried:
//!
//! - [`HunstemError::ResourceNotFound`] aborts analyzer initialization.
//! - [`HunstemError::Precondition`] aborts registration with a host before any
//!   host state is touched.
//!
//! A word the analyzer cannot stem is *not* an error; see
//! [`StemOutcome`](crate::analysis::token_filter::stem::StemOutcome).
//!
//! # Examples
//!
//! ```
//! use hunstem::error::{HunstemError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HunstemError::dictionary("missing SFX header"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for hunstem operations.
#[derive(Error, Debug)]
pub enum HunstemError {
    /// I/O errors not tied to a named dictionary resource
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required dictionary resource could not be read
    #[error("Resource not found: {name} at {}: {source}", .path.display())]
    ResourceNotFound {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host lacks a capability the registrar depends on
    #[error("Precondition failed: host is missing {}", .missing.join(", "))]
    Precondition { missing: Vec<String> },

    /// Malformed affix/dictionary data or engine misuse
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Host pipeline errors (unregistered labels, bad serialized pipelines)
    #[error("Pipeline error: {0}")]
    Pipeline(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with HunstemError.
pub type Result<T> = std::result::Result<T, HunstemError>;

impl HunstemError {
    /// Create a new resource-not-found error.
    pub fn resource_not_found<S, P>(name: S, path: P, source: io::Error) -> Self
    where
        S: Into<String>,
        P: Into<PathBuf>,
    {
        HunstemError::ResourceNotFound {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new precondition error listing every missing dependency.
    pub fn precondition<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HunstemError::Precondition {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        HunstemError::Dictionary(msg.into())
    }

    /// Create a new pipeline error.
    pub fn pipeline<S: Into<String>>(msg: S) -> Self {
        HunstemError::Pipeline(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HunstemError::Config(msg.into())
    }

    /// True for errors that abort initialization or registration outright.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HunstemError::ResourceNotFound { .. } | HunstemError::Precondition { .. }
        )
    }
}
