//! Error codes for the Trellis diagnostic system.
//!
//! Codes are organized by phase:
//! - `E0xx` - Segmentation errors
//! - `E2xx` - Dependency-statement errors
//! - `W1xx` - Declaration warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Segmentation Errors (E0xx)
    // =========================================================================
    /// Unbalanced block braces.
    ///
    /// A block's opening `{` has no matching `}` before the end of the
    /// source. This is fatal: the block boundary cannot be determined.
    E001,

    // =========================================================================
    // Dependency-Statement Errors (E2xx)
    // =========================================================================
    /// Unresolved reference.
    ///
    /// A dependency statement's target does not resolve to any declared
    /// variable. The statement contributes no edges.
    E200,

    // =========================================================================
    // Declaration Warnings (W1xx)
    // =========================================================================
    /// Unparseable declaration line.
    ///
    /// A non-empty line inside a declarative block did not match the
    /// declaration grammar and was skipped. This is tolerated by design
    /// (comment remnants, multi-line declarations, unsupported syntax).
    W100,

    /// Duplicate declaration.
    ///
    /// A variable name was declared more than once; the later declaration
    /// replaced the earlier one.
    W101,
}

impl ErrorCode {
    /// Returns the code as a display string, e.g. `"E200"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E200 => "E200",
            ErrorCode::W100 => "W100",
            ErrorCode::W101 => "W101",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
