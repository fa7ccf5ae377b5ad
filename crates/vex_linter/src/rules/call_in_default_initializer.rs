use vex_python_ast::{Expr, Parameters, Ranged};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for parameter default values that execute a function call.
///
/// ## Why is this bad?
/// Default values run once, when the `def` (or `lambda`) is evaluated, not
/// per call. A call in a default is either a shared-mutable-state bug
/// waiting to happen or an expensive computation in a surprising place.
///
/// Calls nested inside container displays are flagged too; a call inside a
/// `lambda` default is not, because the lambda body does not run at
/// definition time.
///
/// ## Example
/// ```python
/// def log(message, stamp=time.time()):
///     ...
/// ```
#[derive(Debug)]
pub(crate) struct CallInDefaultInitializer {
    parameter: String,
}

impl Violation for CallInDefaultInitializer {
    fn rule(&self) -> Rule {
        Rule::CallInDefaultInitializer
    }

    fn message(&self) -> String {
        format!(
            "Function call in default value for parameter `{}`",
            self.parameter
        )
    }
}

/// Flags defaults of `parameters` that perform a call at definition time.
pub(crate) fn call_in_default_initializer(checker: &mut Checker, parameters: &Parameters) {
    for parameter_with_default in parameters.iter_non_variadic_params() {
        let Some(default) = &parameter_with_default.default else {
            continue;
        };
        if executes_call(default) {
            checker.report_diagnostic(
                CallInDefaultInitializer {
                    parameter: parameter_with_default.parameter.name.to_string(),
                },
                default.range(),
            );
        }
    }
}

/// Whether evaluating `expr` at definition time performs a call.
fn executes_call(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) => true,
        Expr::Tuple(tuple) => tuple.elts.iter().any(executes_call),
        Expr::List(list) => list.elts.iter().any(executes_call),
        Expr::Set(set) => set.elts.iter().any(executes_call),
        Expr::Dict(dict) => dict.items.iter().any(|item| {
            item.key.as_ref().is_some_and(executes_call) || executes_call(&item.value)
        }),
        Expr::UnaryOp(unary_op) => executes_call(&unary_op.operand),
        Expr::BinOp(bin_op) => executes_call(&bin_op.left) || executes_call(&bin_op.right),
        Expr::Attribute(attribute) => executes_call(&attribute.value),
        Expr::Subscript(subscript) => {
            executes_call(&subscript.value) || executes_call(&subscript.slice)
        }
        // A lambda body runs per call, not at definition time.
        Expr::Lambda(_)
        | Expr::Name(_)
        | Expr::NumberLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::BooleanLiteral(_)
        | Expr::NoneLiteral(_) => false,
    }
}
