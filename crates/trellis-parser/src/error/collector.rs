//! Accumulator for advisory diagnostics emitted during extraction.

use log::trace;

use crate::error::Diagnostic;

/// Collects diagnostics across extraction stages.
///
/// Declaration and dependency extraction never abort on a bad line; they
/// record what they skipped here. The collected list is returned to the
/// caller as the enumerable record of which statements failed.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        trace!(diagnostic:% = diagnostic; "Collected diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Consumes the collector, yielding diagnostics in emission order.
    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_preserves_order() {
        let mut collector = DiagnosticCollector::new();
        collector.push(Diagnostic::warning("first"));
        collector.push(Diagnostic::error("second"));

        let diagnostics = collector.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message(), "first");
        assert_eq!(diagnostics[1].message(), "second");
    }
}
