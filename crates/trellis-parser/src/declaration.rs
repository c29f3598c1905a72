//! Declaration extraction over the declarative blocks.

use std::fmt::Write as _;

use indexmap::IndexMap;
use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::opt,
    error::{ContextError, ErrMode},
    stream::TokenSlice,
    token::any,
};

use trellis_core::{Block, DataType, Node};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    lexer,
    segment::Blocks,
    tokens::Token,
};

type Input<'src> = TokenSlice<'src, Token<'src>>;
type IResult<O> = Result<O, ErrMode<ContextError>>;

/// A declaration line reduced to its grammar components.
#[derive(Debug)]
struct RawDeclaration<'src> {
    datatype: DataType,
    constraint: Option<String>,
    dims: Vec<String>,
    name: &'src str,
}

/// Parse a datatype keyword.
fn datatype(input: &mut Input<'_>) -> IResult<DataType> {
    any.verify_map(|token: &Token<'_>| match token {
        Token::Identifier(name) => DataType::from_keyword(name),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a constraint clause, yielding the clause text without brackets.
fn constraint(input: &mut Input<'_>) -> IResult<String> {
    any.verify_map(|token: &Token<'_>| match token {
        Token::Constraint(clause) => Some(clause.trim().to_string()),
        _ => None,
    })
    .parse_next(input)
}

/// Parse an identifier token.
fn identifier<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    any.verify_map(|token: &Token<'src>| match token {
        Token::Identifier(name) => Some(*name),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a bracketed dimension list into its comma-separated entries.
///
/// Entries are reassembled textually from their tokens, so `N + 1` becomes
/// the single dimension token `N+1`. Commas inside nested brackets do not
/// split entries. `[]` yields no entries.
fn dim_group(input: &mut Input<'_>) -> IResult<Vec<String>> {
    any.verify(|token: &Token<'_>| matches!(token, Token::LeftBracket))
        .void()
        .parse_next(input)?;

    let mut entries = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    loop {
        let token = any.parse_next(input)?;
        match token {
            Token::RightBracket if depth == 0 => break,
            Token::Comma if depth == 0 => entries.push(std::mem::take(&mut current)),
            _ => {
                match token {
                    Token::LeftBracket => depth += 1,
                    Token::RightBracket => depth -= 1,
                    _ => {}
                }
                let _ = write!(current, "{token}");
            }
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }
    Ok(entries)
}

/// Parse a full declaration line:
/// `DATATYPE ['<' CONSTRAINT '>'] ['[' DIMS ']'] IDENT ['[' DIMS ']'] [';']`.
///
/// This is a prefix match. The trailing semicolon is optional and anything
/// after it is ignored, which tolerates trailing junk the same way the
/// line-oriented grammar tolerates unsupported syntax elsewhere.
fn declaration<'src>(input: &mut Input<'src>) -> IResult<RawDeclaration<'src>> {
    let datatype = datatype(input)?;
    let constraint = opt(constraint).parse_next(input)?;
    let size_dims = opt(dim_group).parse_next(input)?.unwrap_or_default();
    let name = identifier(input)?;
    let array_dims = opt(dim_group).parse_next(input)?.unwrap_or_default();
    opt(any.verify(|token: &Token<'_>| matches!(token, Token::Semicolon)).void())
        .parse_next(input)?;

    let mut dims = size_dims;
    dims.extend(array_dims);

    Ok(RawDeclaration {
        datatype,
        constraint,
        dims,
        name,
    })
}

/// Extracts declared variables from all declarative blocks.
///
/// Lines failing the declaration grammar are skipped with a [`ErrorCode::W100`]
/// diagnostic, except dependency statements (the declarative blocks that are
/// also executable contain those legitimately; the dependency pass owns them).
/// A redeclared name replaces the earlier node and records
/// [`ErrorCode::W101`].
pub(crate) fn extract_declarations(
    blocks: &Blocks,
    collector: &mut DiagnosticCollector,
) -> IndexMap<String, Node> {
    let mut nodes: IndexMap<String, Node> = IndexMap::new();

    for block in Block::DECLARATIVE {
        for line in blocks.lines(block) {
            let tokens = lexer::tokenize(line);
            if tokens.is_empty() {
                continue;
            }
            if tokens
                .iter()
                .any(|token| matches!(token, Token::Tilde | Token::Assign))
            {
                continue;
            }

            let mut input = TokenSlice::new(&tokens);
            match declaration(&mut input) {
                Ok(raw) => {
                    if nodes.contains_key(raw.name) {
                        collector.push(
                            Diagnostic::warning(format!(
                                "`{}` declared more than once",
                                raw.name
                            ))
                            .with_code(ErrorCode::W101)
                            .with_block(block)
                            .with_line(line.clone())
                            .with_help("the later declaration replaces the earlier one"),
                        );
                    }
                    trace!(name = raw.name, block:% = block; "Declared variable");
                    nodes.insert(
                        raw.name.to_string(),
                        Node::new(raw.name, raw.datatype, raw.constraint, raw.dims, block),
                    );
                }
                Err(_) => {
                    collector.push(
                        Diagnostic::warning("line does not match the declaration grammar")
                            .with_code(ErrorCode::W100)
                            .with_block(block)
                            .with_line(line.clone()),
                    );
                }
            }
        }
    }

    debug!(count = nodes.len(); "Extracted declarations");
    nodes
}
