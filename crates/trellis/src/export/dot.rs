//! Graphviz DOT serialization.
//!
//! Emits the assembled graph as DOT source text. Plates become
//! `subgraph cluster_N` blocks so Graphviz draws them as labelled boxes,
//! the plate-notation convention for repeated variables.

use std::fmt::Write as _;

use crate::assemble::{ModelGraph, StyledNode};

/// Serializes `graph` to DOT source.
///
/// Output is deterministic: nodes, plates, and edges appear in graph
/// iteration order, so the same graph always yields the same text.
pub(crate) fn write_dot(graph: &ModelGraph) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "digraph \"{}\" {{", escape(graph.label()));
    let _ = writeln!(out, "    label=\"{}\";", escape(graph.label()));
    let _ = writeln!(out, "    labelloc=\"t\";");

    for node in graph.nodes().filter(|node| node.plate.is_none()) {
        let _ = writeln!(out, "    {};", node_statement(node));
    }

    for (cluster, plate) in graph.plates().iter().enumerate() {
        if plate.members.is_empty() {
            continue;
        }
        let _ = writeln!(out, "    subgraph cluster_{cluster} {{");
        let _ = writeln!(out, "        label=\"{}\";", escape(&plate.label()));
        let _ = writeln!(out, "        fontsize=18;");
        let _ = writeln!(out, "        labeljust=\"l\";");
        let _ = writeln!(out, "        labelloc=\"b\";");
        for node in graph.nodes().filter(|node| node.plate == Some(cluster)) {
            let _ = writeln!(out, "        {};", node_statement(node));
        }
        let _ = writeln!(out, "    }}");
    }

    for (from, to) in graph.edges() {
        let _ = writeln!(out, "    \"{}\" -> \"{}\";", escape(from), escape(to));
    }

    let _ = writeln!(out, "}}");
    out
}

/// A single node statement, with shape and fill attributes when styled.
fn node_statement(node: &StyledNode) -> String {
    match &node.style {
        Some(style) => format!(
            "\"{}\" [shape={}, style=filled, fillcolor=\"{}\"]",
            escape(&node.name),
            style.shape.as_dot(),
            escape(&style.fill),
        ),
        None => format!("\"{}\"", escape(&node.name)),
    }
}

/// Escapes a string for use inside a double-quoted DOT identifier.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use trellis_core::{Block, DataType, Edge, Node, StyleTable};

    use crate::assemble::assemble;

    fn node(name: &str, dims: &[&str], block: Block) -> Node {
        let mut node = Node::new(
            name,
            DataType::Real,
            None,
            dims.iter().map(|d| d.to_string()).collect(),
            block,
        );
        node.included = true;
        node
    }

    fn node_table(nodes: Vec<Node>) -> IndexMap<String, Node> {
        nodes.into_iter().map(|n| (n.name.clone(), n)).collect()
    }

    #[test]
    fn test_top_level_nodes_precede_clusters() {
        let nodes = node_table(vec![
            node("mu", &[], Block::Parameters),
            node("theta", &["J"], Block::Parameters),
        ]);
        let graph = assemble(&nodes, &[], "demo", &StyleTable::default());
        let dot = graph.to_dot();

        let mu = dot.find("\"mu\"").unwrap();
        let cluster = dot.find("subgraph cluster_0").unwrap();
        assert!(mu < cluster);
        assert!(dot.contains("label=\"(J)\";"));
    }

    #[test]
    fn test_styled_node_attributes() {
        let nodes = node_table(vec![node("y", &[], Block::Data)]);
        let graph = assemble(&nodes, &[], "demo", &StyleTable::default());
        let dot = graph.to_dot();

        assert!(
            dot.contains("\"y\" [shape=rect, style=filled, fillcolor=\"slategray\"];")
        );
    }

    #[test]
    fn test_edges_are_quoted() {
        let nodes = node_table(vec![
            node("mu", &[], Block::Parameters),
            node("y", &[], Block::Data),
        ]);
        let edges = vec![Edge::new("mu", "y")];
        let graph = assemble(&nodes, &edges, "demo", &StyleTable::default());

        assert!(graph.to_dot().contains("\"mu\" -> \"y\";"));
    }

    #[test]
    fn test_empty_plates_are_skipped() {
        // `z` derives a plate but is itself invisible, leaving it empty.
        let mut invisible = node("z", &["K"], Block::Parameters);
        invisible.included = false;
        let nodes = node_table(vec![node("mu", &[], Block::Parameters), invisible]);
        let graph = assemble(&nodes, &[], "demo", &StyleTable::default());

        assert!(!graph.to_dot().contains("subgraph"));
    }

    #[test]
    fn test_label_quotes_are_escaped() {
        let nodes = node_table(vec![node("mu", &[], Block::Parameters)]);
        let graph = assemble(&nodes, &[], "a \"b\"", &StyleTable::default());

        assert!(graph.to_dot().contains("digraph \"a \\\"b\\\"\" {"));
    }
}
