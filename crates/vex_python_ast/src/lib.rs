//! The typed-AST input model consumed by the vex rule engine.
//!
//! This crate deliberately contains no parser: a front end (or a test
//! harness) constructs the tree, and the rule engine only reads it. Node
//! shapes follow the Python `ast` module where they overlap with it.

pub use nodes::*;

mod nodes;
pub mod visitor;
