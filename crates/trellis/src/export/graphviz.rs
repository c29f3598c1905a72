//! Image rendering through the external Graphviz `dot` binary.

use std::path::Path;

use graphviz_rust::cmd::{CommandArg, Format};
use log::{debug, info};

use super::Renderer;
use crate::assemble::ModelGraph;
use crate::error::TrellisError;

/// [`Renderer`] backed by a local Graphviz installation.
///
/// The `dot` binary must be on `PATH`. Output format is PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphvizRenderer;

impl Renderer for GraphvizRenderer {
    fn render(&self, graph: &ModelGraph, path: &Path) -> Result<(), TrellisError> {
        let output = path.to_string_lossy().into_owned();
        info!(path = output.as_str(); "Rendering graph via Graphviz");

        graphviz_rust::exec_dot(
            graph.to_dot(),
            vec![CommandArg::Format(Format::Png), CommandArg::Output(output)],
        )
        .map_err(|err| TrellisError::Render(Box::new(err)))?;

        debug!("Graphviz rendering finished");
        Ok(())
    }
}
