//! Human-readable rendering of types for diagnostic messages.

use std::fmt;

use crate::facts::TypeFacts;
use crate::types::Type;

/// Displays a [`Type`], resolving class and type-variable names through the
/// oracle.
pub struct DisplayType<'a> {
    ty: &'a Type,
    facts: &'a dyn TypeFacts,
}

impl<'a> DisplayType<'a> {
    pub(crate) fn new(ty: &'a Type, facts: &'a dyn TypeFacts) -> Self {
        Self { ty, facts }
    }
}

impl fmt::Display for DisplayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Type::Any => f.write_str("Any"),
            Type::Unknown => f.write_str("Unknown"),
            Type::Never => f.write_str("Never"),
            Type::None => f.write_str("None"),
            Type::Instance(instance) => {
                f.write_str(self.facts.class_name(instance.class))?;
                if let Some((first, rest)) = instance.type_args.split_first() {
                    write!(f, "[{}", first.display(self.facts))?;
                    for arg in rest {
                        write!(f, ", {}", arg.display(self.facts))?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
            Type::ClassLiteral(class) => {
                write!(f, "type[{}]", self.facts.class_name(*class))
            }
            Type::TypeVar(type_var) => f.write_str(self.facts.type_var_name(*type_var)),
            Type::Union(union) => {
                let mut elements = union.elements.iter();
                if let Some(first) = elements.next() {
                    write!(f, "{}", first.display(self.facts))?;
                    for element in elements {
                        write!(f, " | {}", element.display(self.facts))?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for DisplayType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
