//! Mutator catalog for mutation testing of Angular applications
//!
//! This library is the mutation-generation engine of a mutation-testing tool:
//! given a parsed program tree, it produces a catalog of localized,
//! semantics-altering rewrites (mutants), one candidate at a time, for an
//! external instrumentation pipeline to schedule and run tests against.
//!
//! Beyond generic operator swaps and structural removals, the catalog knows
//! two Angular idioms: reactive-forms control constructions (validators,
//! default values, control names) and reactive streams (subscriptions, error
//! handling, pipeline operators).
//!
//! # Usage
//!
//! ```
//! use ng_mutators::{collect_mutants, mutators, Node};
//! use ng_mutators::ast::BinaryOp;
//!
//! let program = Node::program(vec![Node::expr_stmt(Node::binary(
//!     BinaryOp::EqEqEq,
//!     Node::ident("a"),
//!     Node::ident("b"),
//! ))]);
//!
//! let mutants = collect_mutants(&program, mutators::all());
//! assert!(mutants.iter().any(|m| m.mutator == "ComparisonOperator"));
//! ```
//!
//! Every candidate is an independent clone: the input tree is never modified,
//! so mutants may be retained, serialized, or applied in any order.

pub mod ast;
pub mod config;
pub mod cursor;
pub mod error;
pub mod forms;
pub mod mutator;
pub mod mutators;

// Re-export main types at crate root
pub use ast::Node;
pub use config::MutatorConfig;
pub use cursor::Cursor;
pub use error::{CatalogError, Result};
pub use mutator::{collect_mutants, Mutant, Mutator};
