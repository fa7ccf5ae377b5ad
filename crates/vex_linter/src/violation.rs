use crate::registry::Rule;

/// A single detected rule violation, before severity is attached.
///
/// Each rule module defines one struct per violation shape, carrying the
/// values its message interpolates.
pub trait Violation {
    /// The rule that produced this violation.
    fn rule(&self) -> Rule;

    /// The rendered diagnostic body.
    fn message(&self) -> String;
}
