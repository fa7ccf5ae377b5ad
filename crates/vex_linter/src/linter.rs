use vex_python_ast::Stmt;
use vex_python_ast::visitor::Visitor;
use vex_python_semantic::TypeFacts;

use crate::checkers::ast::Checker;
use crate::diagnostic::Diagnostic;
use crate::settings::LinterSettings;

/// Runs every enabled rule over a module in one source-order traversal.
///
/// Diagnostics come back sorted by source position, deduplicated per rule
/// and span. The fact oracle is only consulted for rules the settings
/// enable; with every rule off this returns without touching it.
pub fn check_module(
    module: &[Stmt],
    facts: &dyn TypeFacts,
    settings: &LinterSettings,
) -> Vec<Diagnostic> {
    let mut checker = Checker::new(settings, facts);
    checker.visit_body(module);
    checker.into_diagnostics()
}
