use rustc_hash::FxHashSet;
use serde::Serialize;
use text_size::TextRange;

use vex_python_ast::Ranged;

use crate::registry::Rule;
use crate::violation::Violation;

/// The severity a rule reports at.
///
/// Ordered from least to most severe, so severities can be compared and the
/// maximum taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is disabled and must not run at all.
    Off,
    Warning,
    Error,
}

impl Severity {
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Severity::Off)
    }
}

/// The rule-specific half of a diagnostic: which rule fired and what it says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticKind {
    pub rule: Rule,
    pub body: String,
}

/// A rendered finding, bound to the source span it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new<V: Violation>(violation: V, severity: Severity, range: TextRange) -> Self {
        Self {
            kind: DiagnosticKind {
                rule: violation.rule(),
                body: violation.message(),
            },
            severity,
            range,
        }
    }

    /// A diagnostic describing a rule that failed internally. Reported in
    /// place of the rule's own output so one broken rule never aborts the
    /// run.
    pub fn internal_error(rule: Rule, range: TextRange, error: &anyhow::Error) -> Self {
        Self {
            kind: DiagnosticKind {
                rule,
                body: format!("Internal error in `{rule}` rule: {error}"),
            },
            severity: Severity::Warning,
            range,
        }
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// Collects diagnostics during a traversal.
///
/// The sink deduplicates on `(rule, range)` as diagnostics arrive and defers
/// ordering to [`DiagnosticSink::into_sorted`], which yields them sorted by
/// source position.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<(Rule, TextRange)>,
}

impl DiagnosticSink {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.seen.insert((diagnostic.kind.rule, diagnostic.range)) {
            self.diagnostics.push(diagnostic);
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consumes the sink, yielding diagnostics ordered by start offset, then
    /// end offset. The sort is stable, so diagnostics at the same span keep
    /// their emission order.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics;
        diagnostics.sort_by_key(|diagnostic| (diagnostic.range.start(), diagnostic.range.end()));
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use text_size::{TextRange, TextSize};

    use super::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
    use crate::registry::Rule;

    fn diagnostic(rule: Rule, start: u32, len: u32) -> Diagnostic {
        Diagnostic {
            kind: DiagnosticKind {
                rule,
                body: String::from("test body"),
            },
            severity: Severity::Error,
            range: TextRange::at(TextSize::from(start), TextSize::from(len)),
        }
    }

    #[test]
    fn sink_deduplicates_same_rule_and_range() {
        let mut sink = DiagnosticSink::default();
        sink.push(diagnostic(Rule::UnnecessaryCast, 10, 4));
        sink.push(diagnostic(Rule::UnnecessaryCast, 10, 4));
        sink.push(diagnostic(Rule::MissingParameterType, 10, 4));
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn into_sorted_orders_by_source_position() {
        let mut sink = DiagnosticSink::default();
        sink.push(diagnostic(Rule::UnnecessaryCast, 40, 2));
        sink.push(diagnostic(Rule::MissingParameterType, 5, 3));
        sink.push(diagnostic(Rule::InvalidTypeVarUse, 5, 8));

        let starts: Vec<u32> = sink
            .into_sorted()
            .iter()
            .map(|diagnostic| diagnostic.range.start().into())
            .collect();
        assert_eq!(starts, vec![5, 5, 40]);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Off < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(!Severity::Off.is_enabled());
        assert!(Severity::Warning.is_enabled());
    }
}
