//! Visual classification for rendered nodes.
//!
//! The renderer receives shape and fill metadata per node, keyed by the
//! node's declaring block and whether it is deterministic. The mapping is
//! an injected configuration value ([`StyleTable`]), never module-level
//! state, and the default reproduces the reference palette: data blocks as
//! gray filled rectangles, parameters as white circles (double-bordered
//! when deterministic), generated quantities as blue double octagons.

use serde::Deserialize;

use crate::Block;

/// Node outline shape, in the renderer's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Rectangle,
    Circle,
    DoubleCircle,
    DoubleOctagon,
}

impl Shape {
    /// Returns the Graphviz shape name.
    pub fn as_dot(&self) -> &'static str {
        match self {
            Shape::Rectangle => "rect",
            Shape::Circle => "circle",
            Shape::DoubleCircle => "doublecircle",
            Shape::DoubleOctagon => "doubleoctagon",
        }
    }
}

/// Resolved style metadata for a single rendered node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeStyle {
    pub shape: Shape,
    /// Fill color name, passed through to the renderer untouched.
    pub fill: String,
}

/// One row of the style lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRule {
    pub block: Block,
    #[serde(default)]
    pub deterministic: bool,
    #[serde(flatten)]
    pub style: NodeStyle,
}

/// The block × determinism → shape/fill lookup table.
///
/// Lookup first tries the exact `(block, deterministic)` pair, then falls
/// back to the block's non-deterministic row, so a table only needs
/// deterministic rows where the double-bordered variant differs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    rules: Vec<StyleRule>,
}

impl StyleTable {
    /// Creates a table from explicit rules.
    pub fn new(rules: Vec<StyleRule>) -> Self {
        StyleTable { rules }
    }

    /// Resolves the style for a node declared in `block`.
    ///
    /// Returns `None` when the table has no row for the block at all; such
    /// nodes render unstyled.
    pub fn lookup(&self, block: Block, deterministic: bool) -> Option<&NodeStyle> {
        self.rule(block, deterministic)
            .or_else(|| self.rule(block, false))
    }

    fn rule(&self, block: Block, deterministic: bool) -> Option<&NodeStyle> {
        self.rules
            .iter()
            .find(|rule| rule.block == block && rule.deterministic == deterministic)
            .map(|rule| &rule.style)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        fn rule(block: Block, deterministic: bool, shape: Shape, fill: &str) -> StyleRule {
            StyleRule {
                block,
                deterministic,
                style: NodeStyle {
                    shape,
                    fill: fill.to_string(),
                },
            }
        }

        StyleTable::new(vec![
            rule(Block::Data, false, Shape::Rectangle, "slategray"),
            rule(Block::TransformedData, false, Shape::Rectangle, "slategray"),
            rule(Block::Parameters, false, Shape::Circle, "white"),
            rule(Block::Parameters, true, Shape::DoubleCircle, "white"),
            rule(Block::TransformedParameters, false, Shape::Circle, "white"),
            rule(Block::TransformedParameters, true, Shape::DoubleCircle, "white"),
            rule(
                Block::GeneratedQuantities,
                false,
                Shape::DoubleOctagon,
                "deepskyblue2",
            ),
            rule(
                Block::GeneratedQuantities,
                true,
                Shape::DoubleOctagon,
                "deepskyblue2",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_declarative_blocks() {
        let table = StyleTable::default();
        for block in Block::DECLARATIVE {
            assert!(
                table.lookup(block, false).is_some(),
                "missing style for {block}"
            );
        }
    }

    #[test]
    fn test_deterministic_parameters_are_double_bordered() {
        let table = StyleTable::default();
        let plain = table.lookup(Block::Parameters, false).unwrap();
        let deterministic = table.lookup(Block::Parameters, true).unwrap();
        assert_eq!(plain.shape, Shape::Circle);
        assert_eq!(deterministic.shape, Shape::DoubleCircle);
    }

    #[test]
    fn test_lookup_falls_back_to_non_deterministic_row() {
        let table = StyleTable::default();
        // No explicit deterministic row for transformed data.
        let style = table.lookup(Block::TransformedData, true).unwrap();
        assert_eq!(style.shape, Shape::Rectangle);
        assert_eq!(style.fill, "slategray");
    }

    #[test]
    fn test_model_block_has_no_style() {
        let table = StyleTable::default();
        assert!(table.lookup(Block::Model, false).is_none());
    }
}
