//! Trellis Core Types and Definitions
//!
//! This crate provides the foundational types for the Trellis model-graph
//! pipeline. It includes:
//!
//! - **Blocks**: The named sections of a model source ([`block::Block`])
//! - **Datatypes**: The fixed set of variable datatypes ([`datatype::DataType`])
//! - **Nodes and edges**: Declared variables and their dependency edges
//!   ([`node`] module)
//! - **Styles**: Visual classification for rendering ([`style`] module)

pub mod block;
pub mod datatype;
pub mod node;
pub mod style;

pub use block::Block;
pub use datatype::DataType;
pub use node::{Edge, Node};
pub use style::{NodeStyle, Shape, StyleRule, StyleTable};
