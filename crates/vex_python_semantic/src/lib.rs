//! The semantic side of the rule engine's input: a structural type model and
//! the read-only [`TypeFacts`] oracle through which rules query inference
//! results computed elsewhere.
//!
//! Nothing in this crate infers types. [`SemanticModel`] is a plain fact
//! table: a front end (or a test) records what the external inference engine
//! concluded, keyed by source span, and rules read it back through the
//! [`TypeFacts`] interface.

pub use facts::{KnownFunction, NarrowingOutcome, NarrowingReason, TypeArguments, TypeFacts};
pub use model::SemanticModel;
pub use types::{ClassId, DisplayType, InstanceType, Type, TypeVarId, UnionType};

mod display;
mod facts;
mod model;
mod types;
