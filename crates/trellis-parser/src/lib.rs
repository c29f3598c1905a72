//! Line-oriented parser for Stan-like model sources.
//!
//! The parser recovers a model's declared variables and dependency edges in
//! four stages: comment stripping, block segmentation, declaration
//! extraction, and dependency extraction. The entry point is [`parse`].
//!
//! The grammar is deliberately shallow. Declarations and top-level `~`/`<-`
//! statements are recognized; nested expressions, control flow, and function
//! calls are scanned for identifier references only. Lines outside the
//! grammar are skipped and reported through the diagnostic channel on the
//! returned [`ParsedModel`].

mod declaration;
mod dependency;
pub mod error;
mod lexer;
mod segment;
mod tokens;


use indexmap::IndexMap;
use log::{debug, info};

use trellis_core::{Edge, Node};

pub use crate::error::{Diagnostic, ErrorCode, ParseError, Severity};

/// The result of parsing a model source.
#[derive(Debug)]
pub struct ParsedModel {
    /// Declared variables keyed by name, in declaration order.
    pub nodes: IndexMap<String, Node>,
    /// Dependency edges, deduplicated, in first-occurrence order.
    pub edges: Vec<Edge>,
    /// Advisory diagnostics collected along the way: skipped declaration
    /// lines, duplicate names, unresolved statement targets. Fatal
    /// conditions surface as [`ParseError`] instead.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a model source into nodes, edges, and diagnostics.
///
/// The only fatal condition is an unbalanced block ([`ErrorCode::E001`]).
/// Everything else degrades to a partial result with diagnostics attached,
/// so callers decide how strict to be.
///
/// # Example
///
/// ```
/// let source = "
///     parameters {
///         real mu;
///         real y;
///     }
///     model { y ~ normal(mu, 1); }
/// ";
/// let model = trellis_parser::parse(source)?;
///
/// assert!(model.nodes.contains_key("mu"));
/// assert_eq!(model.edges.len(), 1);
/// # Ok::<(), trellis_parser::ParseError>(())
/// ```
pub fn parse(source: &str) -> Result<ParsedModel, ParseError> {
    debug!(bytes = source.len(); "Parsing model source");

    let stripped = segment::strip_comments(source);
    let blocks = segment::segment(&stripped)?;

    let mut collector = error::DiagnosticCollector::new();
    let mut nodes = declaration::extract_declarations(&blocks, &mut collector);
    let edges = dependency::extract_dependencies(&blocks, &mut nodes, &mut collector);
    let diagnostics = collector.into_diagnostics();

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        diagnostics = diagnostics.len();
        "Parsed model source"
    );

    Ok(ParsedModel {
        nodes,
        edges,
        diagnostics,
    })
}
