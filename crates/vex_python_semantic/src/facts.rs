use text_size::TextRange;

use crate::types::{ClassId, Type, TypeVarId};

/// The read-only oracle over externally computed type information.
///
/// Facts are keyed by the source span of the node they describe. Every query
/// is side-effect free, and absence of a fact always means "no information",
/// never an error: rules resolve missing facts to "do not flag".
pub trait TypeFacts {
    /// The inferred type of a value expression.
    fn inferred_type(&self, node: TextRange) -> Option<&Type>;

    /// The type spelled by an expression in a type-expression position
    /// (an annotation, or the first argument to `cast`).
    fn type_expression(&self, node: TextRange) -> Option<&Type>;

    /// The class a name or attribute expression refers to, if the symbol
    /// resolves to a class.
    fn resolved_class(&self, node: TextRange) -> Option<ClassId>;

    /// The type variable a name expression refers to, if the symbol resolves
    /// to one. Also maps declaration sites to their variable.
    fn resolved_type_var(&self, node: TextRange) -> Option<TypeVarId>;

    /// Whether an expression resolves to one of the functions with
    /// checker-known semantics.
    fn resolved_known_function(&self, node: TextRange) -> Option<KnownFunction>;

    /// The declared type parameters of a class, in declaration order. Empty
    /// for non-generic classes.
    fn generic_parameters(&self, class: ClassId) -> &[TypeVarId];

    /// The type-argument resolution at a use site of a generic class (an
    /// annotation or an instantiation call).
    fn resolved_type_arguments(&self, use_site: TextRange) -> &TypeArguments;

    /// Whether `class` is `base` or derives from it, transitively.
    fn is_subclass_of(&self, class: ClassId, base: ClassId) -> bool;

    /// Whether `class` is decorated `@final` (it can have no subclasses).
    fn is_final_class(&self, class: ClassId) -> bool;

    fn class_name(&self, class: ClassId) -> &str;

    fn type_var_name(&self, type_var: TypeVarId) -> &str;

    /// Whether a parameter follows the `self`/`cls` convention in its
    /// position and scope.
    fn is_self_or_cls_convention(&self, parameter: TextRange) -> bool;
}

/// Functions the rule engine attaches special semantics to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownFunction {
    /// `isinstance`
    IsInstance,
    /// `issubclass`
    IsSubclass,
    /// `typing.cast`
    Cast,
}

impl KnownFunction {
    pub const fn as_str(self) -> &'static str {
        match self {
            KnownFunction::IsInstance => "isinstance",
            KnownFunction::IsSubclass => "issubclass",
            KnownFunction::Cast => "cast",
        }
    }
}

/// The outcome of type-argument resolution at a use site of a generic class.
#[derive(Debug, Clone, PartialEq, is_macro::Is)]
pub enum TypeArguments {
    /// Arguments were written out at the use site, e.g. `Foo[int]`.
    Explicit(Vec<Type>),
    /// Arguments were solved from context, e.g. from a constructor call's
    /// argument types.
    Inferred(Vec<Type>),
    /// The use site supplies no arguments and none could be solved.
    Missing,
    /// Upstream type resolution already failed here; reporting again would
    /// cascade a diagnostic onto the same root cause.
    Unresolved,
}

/// The statically determined outcome of a narrowing test
/// (`isinstance`/`issubclass`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NarrowingOutcome {
    AlwaysTrue(NarrowingReason),
    AlwaysFalse(NarrowingReason),
    Indeterminate,
}

/// Why a narrowing test's outcome is statically known.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NarrowingReason {
    /// The tested type is exactly the target class.
    IdenticalClass,
    /// The tested type is a strict subtype of the target.
    Subclass,
    /// No runtime value can satisfy both the tested type and the target.
    Disjoint,
}
