use anyhow::{Result, ensure};
use text_size::TextRange;

use vex_python_ast::{Expr, ExprCall, Ranged};
use vex_python_semantic::{ClassId, TypeArguments};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for uses of a generic class that supply no type arguments, either
/// in an annotation (`x: Mapping`) or at an instantiation call whose
/// arguments leave the parameters unsolved.
///
/// ## Why is this bad?
/// A generic class without arguments is parameterized over `Unknown`, so the
/// values it produces escape checking. Spelling the arguments out keeps the
/// container's element types honest.
///
/// Use sites where type resolution already failed upstream are skipped to
/// avoid cascading a second diagnostic onto the same root cause.
#[derive(Debug)]
pub(crate) struct MissingTypeArgument {
    class: String,
}

impl Violation for MissingTypeArgument {
    fn rule(&self) -> Rule {
        Rule::MissingTypeArgument
    }

    fn message(&self) -> String {
        format!("Expected type arguments for generic class `{}`", self.class)
    }
}

/// Flags a bare or subscripted annotation of a generic class. The class
/// reference may be a plain name or an attribute path (`typing.Mapping`).
pub(crate) fn missing_type_argument_annotation(checker: &mut Checker, expr: &Expr) -> Result<()> {
    let (symbol_range, use_site) = match expr {
        Expr::Name(_) | Expr::Attribute(_) => (expr.range(), expr.range()),
        Expr::Subscript(subscript) => match subscript.value.as_ref() {
            value @ (Expr::Name(_) | Expr::Attribute(_)) => (value.range(), subscript.range),
            _ => return Ok(()),
        },
        _ => return Ok(()),
    };
    let Some(class) = checker.facts().resolved_class(symbol_range) else {
        return Ok(());
    };
    check_use_site(checker, class, use_site, use_site)
}

/// Flags an instantiation call of a generic class whose type arguments could
/// not be solved from the constructor arguments.
pub(crate) fn missing_type_argument_call(checker: &mut Checker, call: &ExprCall) -> Result<()> {
    let Some(class) = checker.facts().resolved_class(call.func.range()) else {
        return Ok(());
    };
    check_use_site(checker, class, call.range(), call.func.range())
}

fn check_use_site(
    checker: &mut Checker,
    class: ClassId,
    use_site: TextRange,
    report_range: TextRange,
) -> Result<()> {
    let facts = checker.facts();
    let parameters = facts.generic_parameters(class);
    if parameters.is_empty() {
        return Ok(());
    }
    match facts.resolved_type_arguments(use_site) {
        TypeArguments::Explicit(arguments) | TypeArguments::Inferred(arguments) => {
            // The resolver guarantees one argument per parameter; anything
            // else is a fact-table inconsistency, not a user error.
            ensure!(
                arguments.len() == parameters.len(),
                "generic class `{}` resolved {} type argument(s) for {} parameter(s)",
                facts.class_name(class),
                arguments.len(),
                parameters.len()
            );
        }
        TypeArguments::Missing => {
            checker.report_diagnostic(
                MissingTypeArgument {
                    class: facts.class_name(class).to_string(),
                },
                report_range,
            );
        }
        TypeArguments::Unresolved => {}
    }
    Ok(())
}
