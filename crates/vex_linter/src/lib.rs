//! Severity-gated diagnostic rules over typed Python ASTs.
//!
//! The linter consumes a pre-built AST ([`vex_python_ast`]) and a read-only
//! type-fact oracle ([`vex_python_semantic::TypeFacts`]) and evaluates a
//! fixed registry of type-soundness rules in a single source-order
//! traversal. It performs no parsing, no inference, and no rendering: the
//! output is an ordered sequence of [`Diagnostic`] records for an external
//! reporter.

pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
pub use linter::check_module;
pub use registry::Rule;
pub use settings::{ConfigurationError, LinterSettings, Options};
pub use violation::Violation;

mod checkers;
mod diagnostic;
mod linter;
pub mod registry;
mod rules;
pub mod settings;
mod violation;
