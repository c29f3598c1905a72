//! Declared variables and their dependency edges.

use crate::{Block, DataType};

/// A declared program variable.
///
/// `dims` is the ordered sequence of dimension tokens indexing the variable:
/// explicit bracketed size dimensions first, then trailing array dimensions,
/// exactly as written in the source. `matrix[N,M] x[2,2]` yields
/// `["N", "M", "2", "2"]`. Scalars have no tokens.
///
/// Two nodes belong to the same plate only when their `dims` sequences are
/// element-wise equal, so ordering is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Variable name; unique key across all blocks.
    pub name: String,
    /// Datatype from the fixed set.
    pub datatype: DataType,
    /// Optional bound specification, carried verbatim without the angle
    /// brackets (e.g. `lower=0`).
    pub constraint: Option<String>,
    /// Ordered dimension tokens; empty for scalars.
    pub dims: Vec<String>,
    /// Block where the variable was declared.
    pub block: Block,
    /// True iff the variable is ever the target of a `<-` definition.
    pub deterministic: bool,
    /// True iff the variable appears on either side of a `~` or `<-`
    /// statement. Declared-but-unreferenced variables stay out of the
    /// rendered graph.
    pub included: bool,
}

impl Node {
    /// Creates a freshly declared node. The `deterministic` and `included`
    /// flags start false and flip during dependency extraction.
    pub fn new(
        name: impl Into<String>,
        datatype: DataType,
        constraint: Option<String>,
        dims: Vec<String>,
        block: Block,
    ) -> Self {
        Node {
            name: name.into(),
            datatype,
            constraint,
            dims,
            block,
            deterministic: false,
            included: false,
        }
    }

    /// Returns true when the variable carries no dimension tokens.
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }
}

/// A directed dependency: `to`'s value or distribution depends on `from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
        }
    }
}
