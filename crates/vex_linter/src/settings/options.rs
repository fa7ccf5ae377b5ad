//! The user-facing configuration surface, deserialized from the host
//! project's configuration file.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::diagnostic::Severity;
use crate::registry::Rule;
use crate::settings::rule_table::RuleTable;

/// A per-rule severity override as written in configuration.
///
/// `true` enables the rule at its strictest level; `false` disables it; a
/// string names a severity level explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RuleLevel {
    Toggle(bool),
    Level(String),
}

impl RuleLevel {
    fn into_severity(self, rule: &str) -> Result<Severity, ConfigurationError> {
        match self {
            RuleLevel::Toggle(true) => Ok(Severity::Error),
            RuleLevel::Toggle(false) => Ok(Severity::Off),
            RuleLevel::Level(level) => match level.as_str() {
                "none" => Ok(Severity::Off),
                "warning" => Ok(Severity::Warning),
                "error" => Ok(Severity::Error),
                _ => Err(ConfigurationError::InvalidSeverity {
                    rule: rule.to_string(),
                    value: level,
                }),
            },
        }
    }
}

/// The raw rule configuration: a map from rule name to severity override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Options {
    pub rules: BTreeMap<String, RuleLevel>,
}

impl Options {
    /// Resolves the raw overrides into a [`RuleTable`], starting from the
    /// documented defaults.
    ///
    /// Rule names that are not in the registry are skipped with a warning,
    /// so configurations written for newer releases keep loading. An invalid
    /// severity value is an error, and no partial table is produced.
    pub fn into_rule_table(self) -> Result<RuleTable, ConfigurationError> {
        let mut table = RuleTable::default();
        for (name, level) in self.rules {
            let Ok(rule) = Rule::from_str(&name) else {
                log::warn!("Ignoring unknown rule `{name}` in configuration");
                continue;
            };
            table.set(rule, level.into_severity(&name)?);
        }
        Ok(table)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "Invalid severity `{value}` for rule `{rule}` (expected `none`, `warning`, `error`, or a boolean)"
    )]
    InvalidSeverity { rule: String, value: String },
}
