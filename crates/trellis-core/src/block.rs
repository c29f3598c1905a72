//! The named, brace-delimited sections of a model source.

use std::fmt;

use serde::Deserialize;

/// A named section of a model program.
///
/// Model sources are organized into up to six brace-delimited blocks, each
/// corresponding to a phase of the probabilistic program. Declarations live
/// in the declarative blocks; sampling and assignment statements live in the
/// executable blocks. The two sets overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Block {
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "transformed data")]
    TransformedData,
    #[serde(rename = "parameters")]
    Parameters,
    #[serde(rename = "transformed parameters")]
    TransformedParameters,
    #[serde(rename = "model")]
    Model,
    #[serde(rename = "generated quantities")]
    GeneratedQuantities,
}

impl Block {
    /// All blocks, in canonical source order.
    pub const ALL: [Block; 6] = [
        Block::Data,
        Block::TransformedData,
        Block::Parameters,
        Block::TransformedParameters,
        Block::Model,
        Block::GeneratedQuantities,
    ];

    /// Blocks that may contain variable declarations.
    ///
    /// The `model` block contains no declarations by language convention.
    pub const DECLARATIVE: [Block; 5] = [
        Block::Data,
        Block::TransformedData,
        Block::Parameters,
        Block::TransformedParameters,
        Block::GeneratedQuantities,
    ];

    /// Blocks that may contain sampling or assignment statements.
    pub const EXECUTABLE: [Block; 4] = [
        Block::TransformedData,
        Block::TransformedParameters,
        Block::Model,
        Block::GeneratedQuantities,
    ];

    /// Returns the source keyword that opens this block.
    pub fn keyword(&self) -> &'static str {
        match self {
            Block::Data => "data",
            Block::TransformedData => "transformed data",
            Block::Parameters => "parameters",
            Block::TransformedParameters => "transformed parameters",
            Block::Model => "model",
            Block::GeneratedQuantities => "generated quantities",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for block in Block::ALL {
            assert!(!block.keyword().is_empty());
            assert_eq!(block.to_string(), block.keyword());
        }
    }

    #[test]
    fn test_block_partitions() {
        assert!(!Block::DECLARATIVE.contains(&Block::Model));
        assert!(!Block::EXECUTABLE.contains(&Block::Data));
        assert!(!Block::EXECUTABLE.contains(&Block::Parameters));
        assert!(Block::EXECUTABLE.contains(&Block::Model));
        assert!(Block::DECLARATIVE.contains(&Block::GeneratedQuantities));
    }
}
