use vex_python_ast::{Expr, Ranged};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::rules;

/// Runs lint rules over an [`Expr`] in an annotation position.
pub(crate) fn annotation(expr: &Expr, checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::MissingTypeArgument) {
        if let Err(error) = rules::missing_type_argument_annotation(checker, expr) {
            checker.report_internal_error(Rule::MissingTypeArgument, expr.range(), &error);
        }
    }
}
