//! Source segmentation: comment stripping and block extraction.

use indexmap::IndexMap;
use log::{debug, trace};

use trellis_core::Block;

use crate::error::{Diagnostic, ErrorCode, ParseError};

/// Block bodies keyed by block, each split into trimmed non-empty lines.
///
/// A block absent from the source has no entry; [`Blocks::lines`] treats
/// absence and emptiness the same way downstream.
#[derive(Debug, Default)]
pub(crate) struct Blocks {
    bodies: IndexMap<Block, Vec<String>>,
}

impl Blocks {
    /// Lines of the given block, empty if the block is absent.
    pub(crate) fn lines(&self, block: Block) -> &[String] {
        self.bodies.get(&block).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the block appeared in the source at all.
    pub(crate) fn contains(&self, block: Block) -> bool {
        self.bodies.contains_key(&block)
    }
}

/// Removes `/* ... */` block comments (non-nesting) and `//` line comments.
///
/// Newlines inside removed regions are preserved so line structure survives.
pub(crate) fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if c == '/' {
            match chars.peek() {
                Some((_, '/')) => {
                    chars.next();
                    for (_, skipped) in chars.by_ref() {
                        if skipped == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                    continue;
                }
                Some((_, '*')) => {
                    chars.next();
                    let mut prev = '\0';
                    for (_, skipped) in chars.by_ref() {
                        if skipped == '\n' {
                            out.push('\n');
                        }
                        if prev == '*' && skipped == '/' {
                            break;
                        }
                        prev = skipped;
                    }
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }

    out
}

/// Splits the source into named block bodies.
///
/// Each of the six block keywords is located with token-boundary checks and
/// must be followed by `{`. The body runs until the brace depth returns to
/// zero. An unterminated block is the only fatal parsing condition.
pub(crate) fn segment(source: &str) -> Result<Blocks, ParseError> {
    let mut bodies = IndexMap::new();

    for block in Block::ALL {
        let Some(body_start) = find_block_start(source, block) else {
            trace!(block:% = block; "Block not present in source");
            continue;
        };

        let body = scan_body(source, body_start).ok_or_else(|| {
            ParseError::from(
                Diagnostic::error(format!("unbalanced braces in `{block}` block"))
                    .with_code(ErrorCode::E001)
                    .with_block(block)
                    .with_help("add a closing `}` to terminate the block"),
            )
        })?;

        let lines: Vec<String> = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        debug!(block:% = block, lines = lines.len(); "Segmented block");
        bodies.insert(block, lines);
    }

    Ok(Blocks { bodies })
}

/// Finds the byte offset just after the `{` opening the given block.
///
/// The keyword must sit on token boundaries and `data`/`parameters` must not
/// be the tail of their `transformed` variants. Anything matching the
/// keyword without a following `{` (say, a variable reference) is skipped.
fn find_block_start(source: &str, block: Block) -> Option<usize> {
    let keyword = block.keyword();
    let mut search_from = 0;

    while let Some(found) = source[search_from..].find(keyword) {
        let at = search_from + found;
        search_from = at + keyword.len();

        let preceded_by_word = source[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        if preceded_by_word {
            continue;
        }
        if matches!(block, Block::Data | Block::Parameters) && tail_of_transformed(source, at) {
            continue;
        }

        let after = &source[at + keyword.len()..];
        if after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            continue;
        }

        let trimmed = after.trim_start();
        if let Some(body) = trimmed.strip_prefix('{') {
            return Some(source.len() - body.len());
        }
    }

    None
}

/// Whether the keyword match at `at` is preceded by the word `transformed`.
fn tail_of_transformed(source: &str, at: usize) -> bool {
    let before = source[..at].trim_end();
    let Some(head) = before.strip_suffix("transformed") else {
        return false;
    };
    !head
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Captures the block body starting just after its opening brace.
///
/// Depth starts at 1; returns `None` when the source ends before the
/// matching `}`.
fn scan_body(source: &str, body_start: usize) -> Option<&str> {
    let mut depth = 1usize;

    for (offset, c) in source[body_start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&source[body_start..body_start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}
