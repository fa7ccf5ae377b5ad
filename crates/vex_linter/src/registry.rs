//! The registry of all [`Rule`] implementations known to the engine.

use std::fmt;

use serde::{Serialize, Serializer};
use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::diagnostic::Severity;

/// Identifies one diagnostic rule.
///
/// Dispatch is data-driven (`checkers::ast::analyze` consults the enabled
/// set per node kind), so adding a variant here plus its rule module is all
/// a new rule needs.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
    /// A function parameter has neither a type annotation nor a default
    /// value with an inferable type.
    MissingParameterType,
    /// A generic class is used without explicit or inferable type arguments.
    MissingTypeArgument,
    /// A type variable appears at only one site of a generic function
    /// signature and therefore constrains nothing.
    InvalidTypeVarUse,
    /// A parameter default value executes a call at definition time.
    CallInDefaultInitializer,
    /// An `isinstance`/`issubclass` test whose outcome is statically known.
    #[strum(serialize = "unnecessary-isinstance")]
    UnnecessaryIsInstance,
    /// A `cast` to the exact type the expression already has.
    UnnecessaryCast,
}

impl Rule {
    /// The rule's stable, kebab-case configuration name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The severity a rule reports at when the configuration does not
    /// mention it.
    pub const fn default_severity(self) -> Severity {
        match self {
            Rule::InvalidTypeVarUse => Severity::Warning,
            Rule::MissingParameterType
            | Rule::MissingTypeArgument
            | Rule::CallInDefaultInitializer
            | Rule::UnnecessaryIsInstance
            | Rule::UnnecessaryCast => Severity::Off,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
