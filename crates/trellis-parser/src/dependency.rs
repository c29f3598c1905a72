//! Dependency extraction over the executable blocks.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use trellis_core::{Block, Edge, Node};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    lexer,
    segment::Blocks,
    tokens::Token,
};

/// Extracts dependency edges from all executable blocks.
///
/// Every statement containing `~` or `<-` contributes edges from each
/// declared name on its right-hand side to the target on its left. Targets
/// get `included` (and `deterministic` for `<-`) set; sources get
/// `included` set. Duplicate ordered pairs collapse to the first
/// occurrence.
pub(crate) fn extract_dependencies(
    blocks: &Blocks,
    nodes: &mut IndexMap<String, Node>,
    collector: &mut DiagnosticCollector,
) -> Vec<Edge> {
    let mut edges: IndexSet<Edge> = IndexSet::new();

    for block in Block::EXECUTABLE {
        for statement in collapse_statements(blocks.lines(block)) {
            scan_statement(&statement, block, nodes, &mut edges, collector);
        }
    }

    debug!(count = edges.len(); "Extracted dependency edges");
    edges.into_iter().collect()
}

/// Selects dependency statements, merging continuation lines.
///
/// A statement starts at a line containing `~` or `<-` and absorbs
/// following lines until one carries a `;`. The merge is a best-effort
/// heuristic; a missing terminator swallows the rest of the block.
fn collapse_statements(lines: &[String]) -> Vec<String> {
    let mut statements = Vec::new();
    let mut iter = lines.iter();

    while let Some(line) = iter.next() {
        if !(line.contains('~') || line.contains("<-")) {
            continue;
        }

        let mut statement = line.clone();
        while !statement.contains(';') {
            let Some(continuation) = iter.next() else {
                break;
            };
            trace!(continuation:% = continuation; "Merging continuation line");
            statement.push(' ');
            statement.push_str(continuation);
        }
        statements.push(statement);
    }

    statements
}

/// Records the edges and node flags implied by a single statement.
fn scan_statement(
    statement: &str,
    block: Block,
    nodes: &mut IndexMap<String, Node>,
    edges: &mut IndexSet<Edge>,
    collector: &mut DiagnosticCollector,
) {
    let tokens = lexer::tokenize(statement);

    let Some(op_index) = tokens
        .iter()
        .position(|token| matches!(token, Token::Tilde | Token::Assign))
    else {
        // Line selection saw an operator but the lexer folded it into a
        // constraint clause; nothing to extract.
        return;
    };
    let deterministic = matches!(tokens[op_index], Token::Assign);

    let target = tokens[..op_index]
        .iter()
        .find_map(Token::as_identifier)
        .map(str::to_string);
    let Some(target) = target else {
        collector.push(
            Diagnostic::error("statement has no target identifier")
                .with_code(ErrorCode::E200)
                .with_block(block)
                .with_line(statement.to_string()),
        );
        return;
    };

    let Some(node) = nodes.get_mut(&target) else {
        collector.push(
            Diagnostic::error(format!("target `{target}` is not declared"))
                .with_code(ErrorCode::E200)
                .with_block(block)
                .with_line(statement.to_string())
                .with_help("declare the variable in a declarative block"),
        );
        return;
    };
    node.included = true;
    if deterministic {
        node.deterministic = true;
    }

    for token in &tokens[op_index + 1..] {
        let Some(name) = token.as_identifier() else {
            continue;
        };
        let Some(source) = nodes.get_mut(name) else {
            continue;
        };
        source.included = true;
        let inserted = edges.insert(Edge::new(name, &target));
        if inserted {
            trace!(from = name, to = target.as_str(), deterministic = deterministic; "Recorded edge");
        }
    }
}
