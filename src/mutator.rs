//! The mutator protocol and the per-file collection driver
//!
//! A mutator is a named rule that recognizes a pattern at a cursor and
//! produces zero or more replacement nodes. Every candidate is an independent
//! deep clone: no mutator ever writes to the tree it is probed against, so
//! candidates may be retained freely and mutators may be driven in any order.

use crate::ast::Node;
use crate::cursor::{self, Cursor};

/// A named mutation rule.
///
/// `mutate` is probed against every node of a file's tree. It must never
/// panic for well-formed input; a node outside the rule's pattern produces an
/// empty vec. Each returned node is a complete, independent alternative for
/// the node under the cursor and is syntactically valid in that exact
/// position.
pub trait Mutator: Sync {
    /// Stable, globally-unique name used in reporting
    fn name(&self) -> &'static str;

    /// Produce all candidates for the node under the cursor
    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node>;
}

/// One syntactically valid, behaviorally altered variant of a single node
#[derive(Debug, Clone, PartialEq)]
pub struct Mutant {
    /// Name of the mutator that produced this candidate
    pub mutator: &'static str,
    /// The replacement for the node the mutator was probed against
    pub replacement: Node,
}

/// Probe every node of `program` with every mutator and collect the results.
///
/// Order is deterministic: preorder walk outer, mutator list middle, candidate
/// order inner. The input tree is left untouched.
pub fn collect_mutants(program: &Node, mutators: &[&dyn Mutator]) -> Vec<Mutant> {
    let mut mutants = Vec::new();
    cursor::walk(program, &mut |cursor| {
        for mutator in mutators {
            let candidates = mutator.mutate(cursor);
            if !candidates.is_empty() {
                log::debug!("{}: {} candidate(s)", mutator.name(), candidates.len());
            }
            mutants.extend(candidates.into_iter().map(|replacement| Mutant {
                mutator: mutator.name(),
                replacement,
            }));
        }
    });
    mutants
}
