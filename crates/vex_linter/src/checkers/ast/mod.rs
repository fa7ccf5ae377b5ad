//! The AST-driven rule engine.
//!
//! [`Checker`] walks the module once in source order. At each node it hands
//! control to the `analyze` dispatchers, which consult the rule table before
//! running any rule body: a disabled rule costs one table load and performs
//! no oracle queries.

use text_size::TextRange;

use vex_python_ast::visitor::{self, Visitor};
use vex_python_ast::{Expr, Stmt};
use vex_python_semantic::TypeFacts;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::registry::Rule;
use crate::settings::LinterSettings;
use crate::violation::Violation;

pub(crate) mod analyze;

pub(crate) struct Checker<'a> {
    settings: &'a LinterSettings,
    facts: &'a dyn TypeFacts,
    diagnostics: DiagnosticSink,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(settings: &'a LinterSettings, facts: &'a dyn TypeFacts) -> Self {
        Self {
            settings,
            facts,
            diagnostics: DiagnosticSink::default(),
        }
    }

    pub(crate) fn facts(&self) -> &'a dyn TypeFacts {
        self.facts
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.settings.rules.is_enabled(rule)
    }

    pub(crate) fn any_rule_enabled(&self, rules: &[Rule]) -> bool {
        rules.iter().any(|&rule| self.is_rule_enabled(rule))
    }

    /// Records a violation at the severity the rule table assigns its rule.
    ///
    /// Callers gate on [`Checker::is_rule_enabled`] before doing any work,
    /// so the severity here is never `Off`.
    pub(crate) fn report_diagnostic<V: Violation>(&mut self, violation: V, range: TextRange) {
        let rule = violation.rule();
        let severity = self.settings.rules.severity(rule);
        debug_assert!(
            severity.is_enabled(),
            "rule `{rule}` reported while disabled"
        );
        self.diagnostics
            .push(Diagnostic::new(violation, severity, range));
    }

    /// Records a rule's internal failure and lets the traversal continue.
    pub(crate) fn report_internal_error(
        &mut self,
        rule: Rule,
        range: TextRange,
        error: &anyhow::Error,
    ) {
        log::error!("Rule `{rule}` failed at {range:?}: {error}");
        self.diagnostics
            .push(Diagnostic::internal_error(rule, range, error));
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_sorted()
    }
}

impl<'a> Visitor<'a> for Checker<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        analyze::statement(stmt, self);
        visitor::walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        analyze::expression(expr, self);
        visitor::walk_expr(self, expr);
    }

    fn visit_annotation(&mut self, expr: &'a Expr) {
        analyze::annotation(expr, self);
        // Composite annotations contain nested type expressions, each of
        // which is itself an annotation position. The subscripted value
        // (`list` in `list[int]`) is part of the enclosing use site, not an
        // annotation of its own.
        match expr {
            Expr::Subscript(subscript) => match subscript.slice.as_ref() {
                Expr::Tuple(tuple) => {
                    for element in &tuple.elts {
                        self.visit_annotation(element);
                    }
                }
                slice => self.visit_annotation(slice),
            },
            Expr::BinOp(bin_op) => {
                self.visit_annotation(&bin_op.left);
                self.visit_annotation(&bin_op.right);
            }
            _ => {}
        }
    }
}
