use vex_python_ast::visitor::{self, Visitor};
use vex_python_ast::{Expr, Ranged, StmtFunctionDef, TypeParam};
use vex_python_semantic::{TypeFacts, TypeVarId};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for type variables that appear at only one site of the signature
/// that declares them.
///
/// ## Why is this bad?
/// A type variable expresses a relationship between two or more types. Used
/// once, it constrains nothing and reads as a weaker spelling of the bound
/// (or of `Any`).
///
/// ## Example
/// ```python
/// def head[T](values: list[T]) -> int: ...
/// ```
///
/// Use instead:
/// ```python
/// def head[T](values: list[T]) -> T: ...
/// ```
#[derive(Debug)]
pub(crate) struct InvalidTypeVarUse {
    type_var: String,
    function: String,
}

impl Violation for InvalidTypeVarUse {
    fn rule(&self) -> Rule {
        Rule::InvalidTypeVarUse
    }

    fn message(&self) -> String {
        let InvalidTypeVarUse { type_var, function } = self;
        format!("Type variable `{type_var}` appears only once in the signature of `{function}`")
    }
}

/// Flags single-use type variables declared on `function_def`.
pub(crate) fn invalid_type_var_use(checker: &mut Checker, function_def: &StmtFunctionDef) {
    let Some(type_params) = &function_def.type_params else {
        return;
    };
    let facts = checker.facts();
    for type_param in &type_params.type_params {
        let TypeParam::TypeVar(declaration) = type_param;
        let Some(type_var) = facts.resolved_type_var(declaration.name.range()) else {
            continue;
        };
        // Count signature sites (parameter annotations and the return
        // annotation) that mention the variable, not individual mentions:
        // `list[tuple[T, T]]` is still a single site.
        let sites = signature_annotations(function_def)
            .filter(|annotation| mentions_type_var(facts, annotation, type_var))
            .count();
        if sites == 1 {
            checker.report_diagnostic(
                InvalidTypeVarUse {
                    type_var: facts.type_var_name(type_var).to_string(),
                    function: function_def.name.to_string(),
                },
                type_param.range(),
            );
        }
    }
}

fn signature_annotations(function_def: &StmtFunctionDef) -> impl Iterator<Item = &Expr> {
    let parameters = &function_def.parameters;
    parameters
        .iter_non_variadic_params()
        .filter_map(|parameter| parameter.parameter.annotation())
        .chain(parameters.vararg.iter().filter_map(|p| p.annotation()))
        .chain(parameters.kwarg.iter().filter_map(|p| p.annotation()))
        .chain(function_def.returns.as_deref())
}

fn mentions_type_var(facts: &dyn TypeFacts, annotation: &Expr, target: TypeVarId) -> bool {
    struct Finder<'a> {
        facts: &'a dyn TypeFacts,
        target: TypeVarId,
        found: bool,
    }

    impl<'a> Visitor<'a> for Finder<'_> {
        fn visit_expr(&mut self, expr: &'a Expr) {
            if self.found {
                return;
            }
            if let Expr::Name(name) = expr {
                if self.facts.resolved_type_var(name.range) == Some(self.target) {
                    self.found = true;
                    return;
                }
            }
            visitor::walk_expr(self, expr);
        }
    }

    let mut finder = Finder {
        facts,
        target,
        found: false,
    };
    finder.visit_expr(annotation);
    finder.found
}
