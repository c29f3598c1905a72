//! Graph assembly: plates, index-only filtering, and the renderable graph.

use std::fmt::Write as _;

use indexmap::{IndexMap, IndexSet};
use log::{debug, info};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef as _;

use trellis_core::{Block, Edge, Node, NodeStyle, StyleTable};

/// A visible node prepared for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode {
    pub name: String,
    pub block: Block,
    pub deterministic: bool,
    /// Dimension tokens, copied from the declaration.
    pub dims: Vec<String>,
    /// Resolved shape and fill; `None` when the style table has no row for
    /// the node's block.
    pub style: Option<NodeStyle>,
    /// Index into [`ModelGraph::plates`] for array-indexed nodes.
    pub plate: Option<usize>,
}

/// A rendering cluster of nodes sharing one dimension signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plate {
    /// The shared dimension tokens, in declaration order.
    pub dims: Vec<String>,
    /// Names of visible member nodes, in node order.
    pub members: Vec<String>,
}

impl Plate {
    /// Display label for the cluster, e.g. `(J)` or `(N, K)`.
    pub fn label(&self) -> String {
        format!("({})", self.dims.join(", "))
    }
}

/// The assembled, renderable dependency graph.
///
/// Construction is a pure transformation of the parsed node and edge
/// collections; the graph is immutable afterwards. Node and edge iteration
/// order follows first appearance in the source, so two assemblies of the
/// same parse are identical.
#[derive(Debug)]
pub struct ModelGraph {
    label: String,
    graph: DiGraph<StyledNode, ()>,
    plates: Vec<Plate>,
    index_only: Vec<String>,
}

/// Builds a [`ModelGraph`] from parsed nodes and edges.
///
/// Declared names used as dimension tokens of any node become index-only
/// and are excluded from rendering along with their edges. Remaining nodes
/// are visible iff `included` is set; array-indexed ones are grouped into
/// plates by exact `dims` equality.
pub(crate) fn assemble(
    nodes: &IndexMap<String, Node>,
    edges: &[Edge],
    label: impl Into<String>,
    styles: &StyleTable,
) -> ModelGraph {
    let index_only = collect_index_only(nodes);

    // One plate per distinct non-empty dims tuple, in first-appearance order.
    let mut plates: Vec<Plate> = Vec::new();
    for node in nodes.values() {
        if node.dims.is_empty() {
            continue;
        }
        if !plates.iter().any(|plate| plate.dims == node.dims) {
            plates.push(Plate {
                dims: node.dims.clone(),
                members: Vec::new(),
            });
        }
    }

    let mut graph = DiGraph::new();
    let mut indices: IndexMap<&str, NodeIndex> = IndexMap::new();
    for node in nodes.values() {
        if !node.included || index_only.contains(&node.name) {
            continue;
        }

        let plate = if node.dims.is_empty() {
            None
        } else {
            plates.iter().position(|plate| plate.dims == node.dims)
        };
        if let Some(plate) = plate {
            plates[plate].members.push(node.name.clone());
        }

        let index = graph.add_node(StyledNode {
            name: node.name.clone(),
            block: node.block,
            deterministic: node.deterministic,
            dims: node.dims.clone(),
            style: styles.lookup(node.block, node.deterministic).cloned(),
            plate,
        });
        indices.insert(node.name.as_str(), index);
    }

    // Edges touching an excluded endpoint drop out; the rest dedup again.
    let mut seen: IndexSet<(NodeIndex, NodeIndex)> = IndexSet::new();
    for edge in edges {
        let Some(&from) = indices.get(edge.from.as_str()) else {
            continue;
        };
        let Some(&to) = indices.get(edge.to.as_str()) else {
            continue;
        };
        if seen.insert((from, to)) {
            graph.add_edge(from, to, ());
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        plates = plates.len();
        "Assembled model graph"
    );

    ModelGraph {
        label: label.into(),
        graph,
        plates,
        index_only: index_only.into_iter().collect(),
    }
}

/// Declared names occurring as dimension tokens of any node.
fn collect_index_only(nodes: &IndexMap<String, Node>) -> IndexSet<String> {
    let mut index_only = IndexSet::new();
    for node in nodes.values() {
        for dim in &node.dims {
            for token in dim_identifiers(dim) {
                if nodes.contains_key(token) {
                    debug!(name = token; "Excluding index-only name");
                    index_only.insert(token.to_string());
                }
            }
        }
    }
    index_only
}

/// Identifier tokens inside a dimension entry, so `N+1` yields `N`.
fn dim_identifiers(dim: &str) -> impl Iterator<Item = &str> {
    dim.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| {
            !token.is_empty() && !token.starts_with(|c: char| c.is_ascii_digit())
        })
}

impl ModelGraph {
    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of visible nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of rendered edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Visible nodes, in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &StyledNode> {
        self.graph.node_weights()
    }

    /// Looks up a visible node by name.
    pub fn node(&self, name: &str) -> Option<&StyledNode> {
        self.graph.node_weights().find(|node| node.name == name)
    }

    /// Rendered edges as `(from, to)` name pairs, in first-appearance order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].name.as_str(),
                self.graph[edge.target()].name.as_str(),
            )
        })
    }

    /// The derived plates.
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Names excluded from rendering as pure index bounds.
    pub fn index_only(&self) -> &[String] {
        &self.index_only
    }

    /// Stable textual serialization for inspection and golden-file tests.
    ///
    /// Line-oriented and independent of any rendering backend: the graph
    /// label, one line per node (with plate and style), one per plate, one
    /// per edge.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "graph \"{}\"", self.label);

        for node in self.nodes() {
            let _ = write!(out, "node {} block={}", node.name, node.block);
            if node.deterministic {
                let _ = write!(out, " deterministic");
            }
            if let Some(plate) = node.plate {
                let _ = write!(out, " plate={}", self.plates[plate].label());
            }
            if let Some(style) = &node.style {
                let _ = write!(out, " shape={} fill={}", style.shape.as_dot(), style.fill);
            }
            let _ = writeln!(out);
        }

        for plate in &self.plates {
            let _ = writeln!(out, "plate {}: {}", plate.label(), plate.members.join(", "));
        }

        for (from, to) in self.edges() {
            let _ = writeln!(out, "edge {from} -> {to}");
        }

        out
    }

    /// Renders the graph as Graphviz DOT source.
    ///
    /// Pure text generation; no rendering backend is involved.
    pub fn to_dot(&self) -> String {
        crate::export::dot::write_dot(self)
    }

    /// Renders the graph to an image file through the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Render`](crate::TrellisError::Render) when
    /// the backend fails (missing binary, unwritable path).
    pub fn render_with(
        &self,
        renderer: &dyn crate::export::Renderer,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), crate::TrellisError> {
        renderer.render(self, path.as_ref())
    }

    /// Renders the graph to a PNG image at `path` via the Graphviz backend.
    ///
    /// Convenience wrapper around [`render_with`](Self::render_with) and
    /// [`GraphvizRenderer`](crate::export::graphviz::GraphvizRenderer).
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Render`](crate::TrellisError::Render) when
    /// the backend fails (missing `dot` binary, unwritable path).
    #[cfg(feature = "graphviz")]
    pub fn render_to_file(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), crate::TrellisError> {
        self.render_with(&crate::export::graphviz::GraphvizRenderer, path)
    }
}
