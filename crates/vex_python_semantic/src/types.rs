use std::slice;

use crate::facts::TypeFacts;

pub use crate::display::DisplayType;

/// Identifies a class known to the oracle. Stable for the duration of one
/// analysis run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies a declared type variable known to the oracle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVarId(u32);

impl TypeVarId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The inferred or declared type of an expression, as reported by the
/// external inference engine.
///
/// Equality is structural: two instances of the same generic class are equal
/// only if their type arguments are equal element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// The dynamic type: a statically-unknown set of values.
    Any,
    /// No annotation and no inferable type. Behaves like `Any` for every
    /// rule: uncertainty never produces a diagnostic.
    Unknown,
    /// The empty set of values.
    Never,
    /// The `None` singleton.
    None,
    /// The set of objects whose class is (a subclass of) the given class.
    Instance(InstanceType),
    /// A specific class object, known exactly.
    ClassLiteral(ClassId),
    /// A reference to an in-scope type variable.
    TypeVar(TypeVarId),
    Union(UnionType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceType {
    pub class: ClassId,
    /// Type arguments if the class is generic, in declaration order. Empty
    /// for non-generic classes and for unspecialized uses.
    pub type_args: Box<[Type]>,
}

/// Invariant: a union holds at least two members and no nested unions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionType {
    pub elements: Box<[Type]>,
}

impl Type {
    pub fn instance(class: ClassId) -> Self {
        Self::Instance(InstanceType {
            class,
            type_args: Box::default(),
        })
    }

    pub fn generic_instance(class: ClassId, type_args: impl IntoIterator<Item = Type>) -> Self {
        Self::Instance(InstanceType {
            class,
            type_args: type_args.into_iter().collect(),
        })
    }

    pub fn union(elements: impl IntoIterator<Item = Type>) -> Self {
        Self::Union(UnionType {
            elements: elements.into_iter().collect(),
        })
    }

    /// Returns `true` for the gradual types that rules must treat as
    /// "no information".
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Type::Any | Type::Unknown)
    }

    /// The members of a union, or the type itself as a one-element slice.
    pub fn union_members(&self) -> &[Type] {
        match self {
            Type::Union(union) => &union.elements,
            _ => slice::from_ref(self),
        }
    }

    pub fn display<'a>(&'a self, facts: &'a dyn TypeFacts) -> DisplayType<'a> {
        DisplayType::new(self, facts)
    }
}
