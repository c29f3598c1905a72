//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// - [`Severity::Error`] indicates a condition that invalidated part of the
///   parse (a skipped statement, an aborted block scan).
/// - [`Severity::Warning`] indicates tolerated input the caller may still
///   want to know about (a skipped declaration line, a duplicate name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A condition that invalidated part or all of the parse.
    Error,

    /// A tolerated condition, surfaced through the optional diagnostic
    /// channel rather than swallowed.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
