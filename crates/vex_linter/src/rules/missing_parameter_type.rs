use vex_python_ast::{Ranged, StmtFunctionDef};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for function parameters that have neither a type annotation nor a
/// default value whose type can be inferred.
///
/// ## Why is this bad?
/// An unannotated parameter is typed as `Unknown`, which silently disables
/// checking for every expression the parameter flows into.
///
/// Parameters following the `self`/`cls` convention are exempt, as are
/// unannotated parameters whose default value pins down a type.
///
/// ## Example
/// ```python
/// def greet(name):
///     ...
/// ```
///
/// Use instead:
/// ```python
/// def greet(name: str) -> None:
///     ...
/// ```
#[derive(Debug)]
pub(crate) struct MissingParameterType {
    parameter: String,
    function: String,
}

impl Violation for MissingParameterType {
    fn rule(&self) -> Rule {
        Rule::MissingParameterType
    }

    fn message(&self) -> String {
        let MissingParameterType {
            parameter,
            function,
        } = self;
        format!("Type annotation is missing for parameter `{parameter}` of function `{function}`")
    }
}

/// Flags the unannotated, uninferable parameters of `function_def`.
pub(crate) fn missing_parameter_type(checker: &mut Checker, function_def: &StmtFunctionDef) {
    let facts = checker.facts();
    for parameter_with_default in function_def.parameters.iter_non_variadic_params() {
        let parameter = &parameter_with_default.parameter;
        if parameter.annotation().is_some() {
            continue;
        }
        if facts.is_self_or_cls_convention(parameter.range()) {
            continue;
        }
        // A default value with a known static type gives the parameter an
        // inferable type.
        if let Some(default) = &parameter_with_default.default {
            if facts
                .inferred_type(default.range())
                .is_some_and(|ty| !ty.is_dynamic())
            {
                continue;
            }
        }
        checker.report_diagnostic(
            MissingParameterType {
                parameter: parameter.name.to_string(),
                function: function_def.name.to_string(),
            },
            parameter.range(),
        );
    }
}
