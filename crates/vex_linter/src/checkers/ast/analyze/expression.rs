use vex_python_ast::{Expr, Ranged};
use vex_python_semantic::KnownFunction;

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::rules;

/// Runs lint rules over an [`Expr`].
pub(crate) fn expression(expr: &Expr, checker: &mut Checker) {
    match expr {
        Expr::Call(call) => {
            if !checker.any_rule_enabled(&[
                Rule::UnnecessaryIsInstance,
                Rule::UnnecessaryCast,
                Rule::MissingTypeArgument,
            ]) {
                return;
            }
            match checker.facts().resolved_known_function(call.func.range()) {
                Some(function @ (KnownFunction::IsInstance | KnownFunction::IsSubclass)) => {
                    if checker.is_rule_enabled(Rule::UnnecessaryIsInstance) {
                        if let Err(error) = rules::unnecessary_isinstance(checker, call, function) {
                            checker.report_internal_error(
                                Rule::UnnecessaryIsInstance,
                                call.range(),
                                &error,
                            );
                        }
                    }
                }
                Some(KnownFunction::Cast) => {
                    if checker.is_rule_enabled(Rule::UnnecessaryCast) {
                        rules::unnecessary_cast(checker, call);
                    }
                }
                None => {
                    if checker.is_rule_enabled(Rule::MissingTypeArgument) {
                        if let Err(error) = rules::missing_type_argument_call(checker, call) {
                            checker.report_internal_error(
                                Rule::MissingTypeArgument,
                                call.range(),
                                &error,
                            );
                        }
                    }
                }
            }
        }
        Expr::Lambda(lambda) => {
            if checker.is_rule_enabled(Rule::CallInDefaultInitializer) {
                rules::call_in_default_initializer(checker, &lambda.parameters);
            }
        }
        _ => {}
    }
}
