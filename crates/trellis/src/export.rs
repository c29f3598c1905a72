//! Rendering backends for assembled model graphs.
//!
//! The [`Renderer`] trait is the capability boundary to image-producing
//! backends. The [`dot`] submodule serializes a graph to Graphviz DOT
//! source as plain text; the [`graphviz`] submodule implements [`Renderer`]
//! on top of the external `dot` binary and is compiled only with the
//! `graphviz` feature so the core pipeline stays free of process spawning.

use std::path::Path;

use crate::assemble::ModelGraph;
use crate::error::TrellisError;

/// Capability interface for image-producing rendering backends.
///
/// A renderer receives the assembled graph, with node styles, plate
/// membership, and edges already resolved, and writes an image artifact to
/// `path`. Any graph-layout library can sit behind this trait.
pub trait Renderer {
    /// Renders `graph` to an image file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Render`] when the backend fails.
    fn render(&self, graph: &ModelGraph, path: &Path) -> Result<(), TrellisError>;
}

pub(crate) mod dot;

#[cfg(feature = "graphviz")]
pub mod graphviz;
