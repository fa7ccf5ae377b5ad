pub use options::{ConfigurationError, Options, RuleLevel};
pub use rule_table::RuleTable;

use crate::diagnostic::Severity;
use crate::registry::Rule;

mod options;
pub mod rule_table;

/// The resolved, immutable settings a lint run executes under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterSettings {
    pub rules: RuleTable,
}

impl LinterSettings {
    pub fn from_options(options: Options) -> Result<Self, ConfigurationError> {
        Ok(Self {
            rules: options.into_rule_table()?,
        })
    }

    /// Settings with exactly one rule enabled, at `error`. Used by tests to
    /// exercise rules in isolation.
    pub fn for_rule(rule: Rule) -> Self {
        Self::for_rules([rule])
    }

    /// Settings with exactly the given rules enabled, at `error`.
    pub fn for_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut table = RuleTable::empty();
        for rule in rules {
            table.set(rule, Severity::Error);
        }
        Self { rules: table }
    }
}

impl Default for LinterSettings {
    fn default() -> Self {
        Self {
            rules: RuleTable::default(),
        }
    }
}
