use vex_python_ast::{ExprCall, Ranged};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for `cast` calls whose target type is exactly the inferred type of
/// the casted expression.
///
/// ## Why is this bad?
/// The cast changes nothing and hides the fact that the annotation already
/// holds, so the call can simply be removed.
///
/// Casts to or from a dynamic type (`Any`, `Unknown`) are never flagged;
/// they are how code opts out of checking on purpose.
///
/// ## Example
/// ```python
/// numbers: list[int] = []
/// total = sum(cast(list[int], numbers))
/// ```
#[derive(Debug)]
pub(crate) struct UnnecessaryCast {
    ty: String,
}

impl Violation for UnnecessaryCast {
    fn rule(&self) -> Rule {
        Rule::UnnecessaryCast
    }

    fn message(&self) -> String {
        format!("Unnecessary `cast` call; type is already `{}`", self.ty)
    }
}

/// Flags a `cast` call that does not change the expression's type.
pub(crate) fn unnecessary_cast(checker: &mut Checker, call: &ExprCall) {
    if !call.arguments.keywords.is_empty() || call.arguments.args.len() != 2 {
        return;
    }
    let facts = checker.facts();
    let Some(target) = facts.type_expression(call.arguments.args[0].range()) else {
        return;
    };
    let Some(source) = facts.inferred_type(call.arguments.args[1].range()) else {
        return;
    };
    if target.is_dynamic() || source.is_dynamic() {
        return;
    }
    // Structural equality; `int | str` and `str | int` are distinct
    // spellings and stay unflagged.
    if target == source {
        checker.report_diagnostic(
            UnnecessaryCast {
                ty: target.display(facts).to_string(),
            },
            call.range(),
        );
    }
}
