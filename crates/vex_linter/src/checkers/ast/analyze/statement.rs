use vex_python_ast::Stmt;

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::rules;

/// Runs lint rules over a [`Stmt`].
pub(crate) fn statement(stmt: &Stmt, checker: &mut Checker) {
    match stmt {
        Stmt::FunctionDef(function_def) => {
            if checker.is_rule_enabled(Rule::MissingParameterType) {
                rules::missing_parameter_type(checker, function_def);
            }
            if checker.is_rule_enabled(Rule::InvalidTypeVarUse) {
                rules::invalid_type_var_use(checker, function_def);
            }
            if checker.is_rule_enabled(Rule::CallInDefaultInitializer) {
                rules::call_in_default_initializer(checker, &function_def.parameters);
            }
        }
        _ => {}
    }
}
