//! Integration tests for the GraphBuilder API
//!
//! These tests verify that the public API works and is usable.

use std::path::Path;

use trellis::{Block, GraphBuilder, ModelGraph, Renderer, Shape, TrellisError, config::AppConfig};

const EIGHT_SCHOOLS: &str = "
data {
    int<lower=0> J;
    real y[J];
    real<lower=0> sigma[J];
}
parameters {
    real mu;
    real<lower=0> tau;
    real theta[J];
}
model {
    theta ~ normal(mu, tau);
    y ~ normal(theta, sigma);
}
";

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = GraphBuilder::default();
}

#[test]
fn test_parse_simple_model() {
    let source = r#"
        parameters {
            real mu;
        }
    "#;

    let builder = GraphBuilder::default();
    let result = builder.parse(source);
    assert!(
        result.is_ok(),
        "Should parse valid model: {:?}",
        result.err()
    );
}

#[test]
fn test_eight_schools_end_to_end() {
    let builder = GraphBuilder::default();
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");

    // `J` only ever appears as an index bound and must not be drawn.
    assert_eq!(graph.index_only(), ["J"]);
    assert!(graph.node("J").is_none());

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(
        edges,
        [
            ("mu", "theta"),
            ("tau", "theta"),
            ("theta", "y"),
            ("sigma", "y"),
        ]
    );

    // The three J-indexed variables share one plate; scalars stay outside.
    assert_eq!(graph.plates().len(), 1);
    assert_eq!(graph.plates()[0].label(), "(J)");
    assert_eq!(graph.plates()[0].members, ["y", "sigma", "theta"]);
    assert!(graph.node("mu").unwrap().plate.is_none());
    assert!(graph.node("tau").unwrap().plate.is_none());

    let y = graph.node("y").unwrap();
    assert_eq!(y.block, Block::Data);
    assert_eq!(y.style.as_ref().unwrap().shape, Shape::Rectangle);
    assert_eq!(y.style.as_ref().unwrap().fill, "slategray");

    let theta = graph.node("theta").unwrap();
    assert_eq!(theta.block, Block::Parameters);
    assert_eq!(theta.style.as_ref().unwrap().shape, Shape::Circle);
}

#[test]
fn test_dump_reports_structure() {
    let builder = GraphBuilder::default();
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");
    let dump = graph.dump();

    assert!(dump.starts_with("graph \"Stan Graph\"\n"));
    assert!(dump.contains("plate (J): y, sigma, theta"));
    assert!(dump.contains("edge theta -> y"));
}

#[test]
fn test_dot_output_contains_cluster() {
    let builder = GraphBuilder::default();
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph \"Stan Graph\" {"));
    assert!(dot.contains("subgraph cluster_0"));
    assert!(dot.contains("\"theta\" -> \"y\";"));
}

#[test]
fn test_builder_with_config() {
    // Configs arrive from serialized settings in embedding applications.
    let config: AppConfig = toml::from_str(
        r#"
        [graph]
        label = "Eight Schools"
        "#,
    )
    .expect("config should deserialize");

    let builder = GraphBuilder::new(config);
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");

    assert_eq!(graph.label(), "Eight Schools");
}

#[test]
fn test_parse_unbalanced_block_returns_error() {
    let invalid_source = "model { y ~ normal(0, 1);";

    let builder = GraphBuilder::default();
    let result = builder.parse(invalid_source);
    assert!(result.is_err(), "Should return error for unbalanced block");
}

#[test]
fn test_builder_reusability() {
    let source1 = "parameters {\nreal a;\nreal b;\n}\nmodel { b ~ normal(a, 1); }";
    let source2 = "parameters {\nreal c;\nreal d;\n}\nmodel { d ~ normal(c, 1); }";

    let builder = GraphBuilder::default();

    let graph1 = builder.build(source1).expect("Failed to build graph1");
    let graph2 = builder.build(source2).expect("Failed to build graph2");

    assert!(graph1.node("a").is_some());
    assert!(graph2.node("c").is_some());
}

#[test]
fn test_render_with_custom_backend() {
    /// Backend that writes the textual dump instead of an image.
    struct DumpRenderer;

    impl Renderer for DumpRenderer {
        fn render(&self, graph: &ModelGraph, path: &Path) -> Result<(), TrellisError> {
            std::fs::write(path, graph.dump()).map_err(TrellisError::Io)
        }
    }

    let builder = GraphBuilder::default();
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("eight_schools.txt");
    graph
        .render_with(&DumpRenderer, &path)
        .expect("Failed to render dump");

    let written = std::fs::read_to_string(&path).expect("Failed to read dump");
    assert_eq!(written, graph.dump());
}

#[cfg(feature = "graphviz")]
#[test]
#[ignore = "requires a Graphviz installation"]
fn test_render_to_png_file() {
    let builder = GraphBuilder::default();
    let graph = builder.build(EIGHT_SCHOOLS).expect("Failed to build graph");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("eight_schools.png");
    graph.render_to_file(&path).expect("Failed to render PNG");

    let bytes = std::fs::read(&path).expect("Failed to read PNG");
    assert!(!bytes.is_empty(), "Rendered PNG should not be empty");
}
