//! Configuration types for graph assembly and rendering.
//!
//! This module provides configuration structures that control how extracted
//! model graphs are labeled and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining graph and style settings.
//! - [`GraphConfig`] - Display options for the assembled graph.
//! - [`StyleTable`] - The block × determinism → shape/fill lookup table,
//!   re-exported from `trellis-core`.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.graph().label(), "Stan Graph");
//! ```

use serde::Deserialize;

use trellis_core::StyleTable;

/// Top-level configuration combining graph and style settings.
///
/// Groups [`GraphConfig`] and [`StyleTable`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Graph display configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Node style lookup table.
    #[serde(default)]
    style: StyleTable,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified graph and style
    /// configurations.
    pub fn new(graph: GraphConfig, style: StyleTable) -> Self {
        Self { graph, style }
    }

    /// Returns the graph display configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the style lookup table.
    pub fn style(&self) -> &StyleTable {
        &self.style
    }
}

/// Display options for the assembled graph.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphConfig {
    /// Graph label used only for display; `None` falls back to the default.
    #[serde(default)]
    label: Option<String>,
}

impl GraphConfig {
    const DEFAULT_LABEL: &'static str = "Stan Graph";

    /// Creates a new [`GraphConfig`] with the given label.
    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }

    /// Returns the configured graph label, or the default.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(Self::DEFAULT_LABEL)
    }
}
