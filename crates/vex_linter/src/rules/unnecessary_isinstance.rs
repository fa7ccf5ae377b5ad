use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use smallvec::SmallVec;

use vex_python_ast::{Expr, ExprCall, Ranged};
use vex_python_semantic::{
    ClassId, KnownFunction, NarrowingOutcome, NarrowingReason, Type, TypeFacts,
};

use crate::checkers::ast::Checker;
use crate::registry::Rule;
use crate::violation::Violation;

/// ## What it does
/// Checks for `isinstance` and `issubclass` tests whose outcome is already
/// known from the inferred type of the tested expression.
///
/// ## Why is this bad?
/// A test that always succeeds is dead weight, and a test that always fails
/// guards a branch that can never run. Both usually point at a stale check
/// left behind by a refactoring, or at a misunderstanding of the types in
/// play.
///
/// The analysis is conservative: a diagnostic is only raised when every
/// member of the tested type decides the same way. Dynamic types, type
/// variables, and unresolved targets produce no diagnostic.
#[derive(Debug)]
pub(crate) struct UnnecessaryIsInstance {
    function: KnownFunction,
    tested: String,
    target: String,
    outcome: NarrowingOutcome,
}

impl Violation for UnnecessaryIsInstance {
    fn rule(&self) -> Rule {
        Rule::UnnecessaryIsInstance
    }

    fn message(&self) -> String {
        let UnnecessaryIsInstance {
            function,
            tested,
            target,
            outcome,
        } = self;
        let relation = match function {
            KnownFunction::IsSubclass => "a subclass of",
            _ => "an instance of",
        };
        match outcome {
            NarrowingOutcome::AlwaysTrue(NarrowingReason::IdenticalClass) => {
                format!(
                    "Unnecessary `{}` call; the expression is already of type `{target}`",
                    function.as_str()
                )
            }
            NarrowingOutcome::AlwaysTrue(_) => {
                format!("`{tested}` is always {relation} `{target}`")
            }
            NarrowingOutcome::AlwaysFalse(_) => {
                format!("`{tested}` is never {relation} `{target}`")
            }
            NarrowingOutcome::Indeterminate => {
                debug_assert!(false, "indeterminate narrowing outcome reported");
                String::new()
            }
        }
    }
}

/// Flags an `isinstance`/`issubclass` call that is statically decided.
pub(crate) fn unnecessary_isinstance(
    checker: &mut Checker,
    call: &ExprCall,
    function: KnownFunction,
) -> Result<()> {
    // Only the two-argument positional form narrows.
    if !call.arguments.keywords.is_empty() || call.arguments.args.len() != 2 {
        return Ok(());
    }
    let facts = checker.facts();
    let object = &call.arguments.args[0];
    let classinfo = &call.arguments.args[1];

    let Some(targets) = resolve_targets(facts, classinfo) else {
        return Ok(());
    };
    if targets.is_empty() {
        // `isinstance(x, ())` is always false at runtime, but an empty
        // tuple in real code is invariably a bug upstream of this rule.
        return Ok(());
    }
    let Some(tested) = facts.inferred_type(object.range()) else {
        return Ok(());
    };
    if tested.is_dynamic() {
        return Ok(());
    }

    let outcome = match function {
        KnownFunction::IsInstance => instance_test_outcome(facts, tested, &targets)?,
        KnownFunction::IsSubclass => subclass_test_outcome(facts, tested, &targets)?,
        KnownFunction::Cast => return Ok(()),
    };
    if matches!(outcome, NarrowingOutcome::Indeterminate) {
        return Ok(());
    }

    let target = targets
        .iter()
        .map(|&class| facts.class_name(class))
        .join(" | ");
    checker.report_diagnostic(
        UnnecessaryIsInstance {
            function,
            tested: tested.display(facts).to_string(),
            target,
            outcome,
        },
        call.range(),
    );
    Ok(())
}

/// Resolves the `classinfo` argument to a set of classes. `None` means some
/// element did not resolve and the test must be left alone.
fn resolve_targets(facts: &dyn TypeFacts, classinfo: &Expr) -> Option<SmallVec<[ClassId; 4]>> {
    let mut targets = SmallVec::new();
    match classinfo {
        Expr::Tuple(tuple) => {
            for element in &tuple.elts {
                targets.push(facts.resolved_class(element.range())?);
            }
        }
        element => targets.push(facts.resolved_class(element.range())?),
    }
    Some(targets)
}

fn instance_test_outcome(
    facts: &dyn TypeFacts,
    tested: &Type,
    targets: &[ClassId],
) -> Result<NarrowingOutcome> {
    let members = tested.union_members();
    ensure!(!members.is_empty(), "inferred union type has no members");

    let mut all_true = true;
    let mut all_false = true;
    // The "already of type" message only makes sense against a single
    // target class.
    let mut identical = targets.len() == 1;
    for member in members {
        match member {
            Type::Union(_) => bail!("inferred union type contains a nested union"),
            Type::Instance(instance) => {
                if targets
                    .iter()
                    .any(|&target| facts.is_subclass_of(instance.class, target))
                {
                    all_false = false;
                    if !targets.contains(&instance.class) {
                        identical = false;
                    }
                } else if targets
                    .iter()
                    .all(|&target| is_disjoint(facts, instance.class, target))
                {
                    all_true = false;
                    identical = false;
                } else {
                    // Unrelated but not provably disjoint; a subclass of
                    // both could exist.
                    return Ok(NarrowingOutcome::Indeterminate);
                }
            }
            Type::Any
            | Type::Unknown
            | Type::Never
            | Type::None
            | Type::ClassLiteral(_)
            | Type::TypeVar(_) => return Ok(NarrowingOutcome::Indeterminate),
        }
    }
    Ok(aggregate(all_true, all_false, identical))
}

fn subclass_test_outcome(
    facts: &dyn TypeFacts,
    tested: &Type,
    targets: &[ClassId],
) -> Result<NarrowingOutcome> {
    let members = tested.union_members();
    ensure!(!members.is_empty(), "inferred union type has no members");

    let mut all_true = true;
    let mut all_false = true;
    let mut identical = targets.len() == 1;
    for member in members {
        match member {
            Type::Union(_) => bail!("inferred union type contains a nested union"),
            // With the class statically known, the subclass relation decides
            // the call exactly.
            Type::ClassLiteral(class) => {
                if targets
                    .iter()
                    .any(|&target| facts.is_subclass_of(*class, target))
                {
                    all_false = false;
                    if !targets.contains(class) {
                        identical = false;
                    }
                } else {
                    all_true = false;
                    identical = false;
                }
            }
            _ => return Ok(NarrowingOutcome::Indeterminate),
        }
    }
    Ok(aggregate(all_true, all_false, identical))
}

fn aggregate(all_true: bool, all_false: bool, identical: bool) -> NarrowingOutcome {
    match (all_true, all_false) {
        (true, false) => NarrowingOutcome::AlwaysTrue(if identical {
            NarrowingReason::IdenticalClass
        } else {
            NarrowingReason::Subclass
        }),
        (false, true) => NarrowingOutcome::AlwaysFalse(NarrowingReason::Disjoint),
        _ => NarrowingOutcome::Indeterminate,
    }
}

/// Whether no runtime value can be an instance of both classes. Without
/// `@final` on either side a common subclass could always be defined later.
fn is_disjoint(facts: &dyn TypeFacts, left: ClassId, right: ClassId) -> bool {
    !facts.is_subclass_of(left, right)
        && !facts.is_subclass_of(right, left)
        && (facts.is_final_class(left) || facts.is_final_class(right))
}
