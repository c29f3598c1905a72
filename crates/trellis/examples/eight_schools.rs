//! Example: Extracting the graph of the eight schools model
//!
//! This example demonstrates the full pipeline from model source to DOT
//! output: parse the source, inspect the parsed variables, assemble the
//! plate-grouped graph, and write the Graphviz DOT file.

use trellis::{GraphBuilder, config::AppConfig};

const EIGHT_SCHOOLS: &str = "
data {
    int<lower=0> J;          // number of schools
    real y[J];               // estimated treatment effects
    real<lower=0> sigma[J];  // standard errors
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Parsing the eight schools model...\n");

    let builder = GraphBuilder::new(AppConfig::default());

    // Parse source into variables, edges, and diagnostics
    let model = builder.parse(EIGHT_SCHOOLS)?;

    println!("Parsed model:");
    println!("  Variables: {}", model.nodes.len());
    println!("  Edges: {}", model.edges.len());
    for diagnostic in &model.diagnostics {
        println!("  Diagnostic: {diagnostic}");
    }
    println!();

    // Assemble the renderable graph
    let graph = builder.assemble(&model);

    println!("Assembled graph:");
    println!("{}", graph.dump());

    // Write the DOT source
    let dot = graph.to_dot();
    let output_path = "eight_schools.dot";
    std::fs::write(output_path, &dot)?;
    println!("DOT written to: {output_path}");

    // With the `graphviz` feature enabled, a PNG can be produced directly:
    #[cfg(feature = "graphviz")]
    {
        graph.render_to_file("eight_schools.png")?;
        println!("PNG written to: eight_schools.png");
    }

    Ok(())
}
