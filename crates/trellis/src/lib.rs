//! Trellis - model-structure extraction for Stan-like probabilistic programs.
//!
//! Parsing, graph assembly, and rendering for Stan-like model sources. A
//! source file is parsed into declared variables and dependency edges, then
//! assembled into a plate-grouped directed graph ready for DOT export.

pub mod config;

mod assemble;
mod error;
mod export;

pub use trellis_core::{Block, DataType, Edge, Node, NodeStyle, Shape, StyleRule, StyleTable};
pub use trellis_parser::{Diagnostic, ErrorCode, ParsedModel, Severity};

pub use assemble::{ModelGraph, Plate, StyledNode};
pub use error::TrellisError;
pub use export::Renderer;

#[cfg(feature = "graphviz")]
pub use export::graphviz::GraphvizRenderer;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for extracting and assembling model graphs.
///
/// This provides an API for processing model sources through parsing and
/// graph assembly stages.
///
/// # Examples
///
/// ```rust
/// use trellis::{GraphBuilder, config::AppConfig};
///
/// let source = "
///     parameters {
///         real mu;
///         real y;
///     }
///     model { y ~ normal(mu, 1); }
/// ";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = GraphBuilder::new(config);
///
/// // Parse source to a model
/// let model = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Assemble the model into a renderable graph
/// let graph = builder.assemble(&model);
/// assert_eq!(graph.node_count(), 2);
///
/// // Or use default config
/// let builder = GraphBuilder::default();
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including graph and style settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis::{GraphBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = GraphBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a model source into declared variables and dependency edges.
    ///
    /// This performs comment stripping, block segmentation, declaration
    /// extraction, and dependency extraction to produce a [`ParsedModel`].
    /// Recoverable problems are reported on
    /// [`ParsedModel::diagnostics`] rather than failing the parse.
    ///
    /// # Arguments
    ///
    /// * `source` - Model source code as a string
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Parse`] when a block is opened but never
    /// closed, the only unrecoverable condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis::{GraphBuilder, config::AppConfig};
    ///
    /// let source = "parameters {
    ///     real mu;
    /// }";
    /// let builder = GraphBuilder::new(AppConfig::default());
    /// let model = builder.parse(source)
    ///     .expect("Failed to parse model");
    ///
    /// assert!(model.nodes.contains_key("mu"));
    /// ```
    pub fn parse(&self, source: &str) -> Result<ParsedModel, TrellisError> {
        info!("Parsing model source");

        let model = trellis_parser::parse(source)
            .map_err(|err| TrellisError::new_parse_error(err, source))?;

        debug!("Model parsed successfully");
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Assemble a parsed model into a renderable graph.
    ///
    /// Index-only variables are excluded, remaining referenced variables are
    /// styled from the configured style table, and array-indexed variables
    /// are grouped into plates. The graph label comes from the
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis::{GraphBuilder, config::AppConfig};
    ///
    /// let source = "
    ///     parameters {
    ///         real mu;
    ///         real y;
    ///     }
    ///     model { y ~ normal(mu, 1); }
    /// ";
    /// let builder = GraphBuilder::new(AppConfig::default());
    ///
    /// let model = builder.parse(source)
    ///     .expect("Failed to parse");
    ///
    /// let graph = builder.assemble(&model);
    /// println!("{}", graph.to_dot());
    /// ```
    pub fn assemble(&self, model: &ParsedModel) -> ModelGraph {
        info!(nodes = model.nodes.len(); "Assembling model graph");

        assemble::assemble(
            &model.nodes,
            &model.edges,
            self.config.graph().label(),
            self.config.style(),
        )
    }

    /// Parse and assemble in one step.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Parse`] when parsing fails fatally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis::GraphBuilder;
    ///
    /// let source = "parameters {
    ///     real mu;
    /// }";
    /// let graph = GraphBuilder::default().build(source)
    ///     .expect("Failed to build graph");
    ///
    /// assert_eq!(graph.label(), "Stan Graph");
    /// ```
    pub fn build(&self, source: &str) -> Result<ModelGraph, TrellisError> {
        let model = self.parse(source)?;
        Ok(self.assemble(&model))
    }
}
