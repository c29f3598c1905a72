//! Error and diagnostic system for the Trellis parser.
//!
//! The system is built around the [`Diagnostic`] type: a single error or
//! warning with an optional code, the block and source line it refers to,
//! and optional help text. Fatal conditions abort parsing through
//! [`ParseError`]; advisory conditions (skipped declarations, duplicate
//! names, unresolved statement targets) accumulate in a collector and are
//! handed back alongside the parse result, so callers wanting strictness
//! can inspect them without the parser ever swallowing a failure silently.
//!
//! # Example
//!
//! ```
//! # use trellis_parser::error::{Diagnostic, ErrorCode};
//! # use trellis_core::Block;
//! let diag = Diagnostic::error("no matching `}` for block")
//!     .with_code(ErrorCode::E001)
//!     .with_block(Block::Model)
//!     .with_help("check for an unclosed brace earlier in the block");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use severity::Severity;
