use strum::{EnumCount, IntoEnumIterator};

use crate::diagnostic::Severity;
use crate::registry::Rule;

/// The resolved severity of every rule in the registry.
///
/// Backed by a dense array indexed by the rule's discriminant, so the
/// per-node enabled checks in the hot traversal are a load, not a hash
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    severities: [Severity; Rule::COUNT],
}

impl RuleTable {
    /// A table with every rule turned off.
    pub const fn empty() -> Self {
        Self {
            severities: [Severity::Off; Rule::COUNT],
        }
    }

    pub fn severity(&self, rule: Rule) -> Severity {
        self.severities[rule as usize]
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        self.severity(rule).is_enabled()
    }

    pub fn set(&mut self, rule: Rule, severity: Severity) {
        self.severities[rule as usize] = severity;
    }

    /// Iterates over the rules that are enabled, in registry order.
    pub fn iter_enabled(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::iter().filter(|&rule| self.is_enabled(rule))
    }
}

impl Default for RuleTable {
    /// The documented out-of-the-box configuration.
    fn default() -> Self {
        let mut table = Self::empty();
        for rule in Rule::iter() {
            table.set(rule, rule.default_severity());
        }
        table
    }
}
