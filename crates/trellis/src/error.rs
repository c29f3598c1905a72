//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps
//! the error conditions that can occur while extracting and rendering a
//! model graph.

use std::io;

use thiserror::Error;

use trellis_parser::ParseError;

/// The main error type for Trellis operations.
///
/// The `Parse` variant keeps the offending source next to the structured
/// parse error so callers can produce rich reports.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// The external rendering backend signalled failure. Propagated to the
    /// caller unchanged; retries belong to the caller.
    #[error("Render error: {0}")]
    Render(Box<dyn std::error::Error>),
}

impl TrellisError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
