//! The Diagnostic type: a single error or warning message.

use std::fmt;

use trellis_core::Block;

use crate::error::{ErrorCode, Severity};

/// A single diagnostic message.
///
/// Diagnostics are line-oriented: the pipeline works on trimmed block lines,
/// so a diagnostic carries the block it occurred in and the offending line
/// text rather than byte offsets into the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    code: Option<ErrorCode>,
    block: Option<Block>,
    line: Option<String>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            code: None,
            block: None,
            line: None,
            help: None,
        }
    }

    /// Attaches an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches the block the diagnostic refers to.
    pub fn with_block(mut self, block: Block) -> Self {
        self.block = Some(block);
        self
    }

    /// Attaches the offending source line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Attaches help text suggesting a fix.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code, if one was attached.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The block this diagnostic refers to, if known.
    pub fn block(&self) -> Option<Block> {
        self.block
    }

    /// The offending source line, if captured.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    /// Help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(block) = self.block {
            write!(f, " (in `{block}` block)")?;
        }
        if let Some(line) = &self.line {
            write!(f, "\n  | {line}")?;
        }
        if let Some(help) = &self.help {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_fields() {
        let diag = Diagnostic::error("target `alpha` is not declared")
            .with_code(ErrorCode::E200)
            .with_block(Block::Model)
            .with_line("alpha ~ normal(0, 1);")
            .with_help("declare `alpha` in a declarative block");

        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.block(), Some(Block::Model));
        assert_eq!(diag.line(), Some("alpha ~ normal(0, 1);"));
        assert!(diag.help().is_some());
    }

    #[test]
    fn test_display_format() {
        let diag = Diagnostic::warning("skipped unparseable declaration")
            .with_code(ErrorCode::W100)
            .with_block(Block::Data);

        assert_eq!(
            diag.to_string(),
            "warning[W100]: skipped unparseable declaration (in `data` block)"
        );
    }

    #[test]
    fn test_display_includes_line_and_help() {
        let diag = Diagnostic::error("boom")
            .with_line("int x")
            .with_help("end with a semicolon");

        let rendered = diag.to_string();
        assert!(rendered.contains("| int x"));
        assert!(rendered.contains("= help: end with a semicolon"));
    }
}
