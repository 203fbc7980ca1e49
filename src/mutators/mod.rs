//! The mutator catalog
//!
//! One ordered, fixed list of every mutator in the crate. Iteration order is
//! deterministic but carries no meaning: no mutator depends on another having
//! run first.

mod forms;
mod operators;
mod rxjs;
mod structural;

pub use forms::{FormControlName, FormDefaultValue, FormValidation};
pub use operators::{
    ArithmeticOperator, AssignmentOperator, BooleanLiteral, ComparisonOperator, EqualityOperator,
    LogicalOperator, StringLiteral, UnaryOperator, UpdateOperator,
};
pub use rxjs::{ErrorHandling, RxjsOperator, SubscribeCall, UnsubscribeCall};
pub use structural::{
    ArrayDeclaration, ArrowFunction, BlockStatement, ConditionalExpression, MethodExpression,
    ObjectLiteral, OptionalChaining, Regex,
};

use crate::config::MutatorConfig;
use crate::error::{CatalogError, Result};
use crate::mutator::Mutator;

/// Every mutator of the catalog, in registry order.
static ALL: &[&dyn Mutator] = &[
    &ArithmeticOperator,
    &ArrayDeclaration,
    &ArrowFunction,
    &BlockStatement,
    &BooleanLiteral,
    &ConditionalExpression,
    &EqualityOperator,
    &LogicalOperator,
    &MethodExpression,
    &ObjectLiteral,
    &StringLiteral,
    &UnaryOperator,
    &UpdateOperator,
    &Regex,
    &OptionalChaining,
    &AssignmentOperator,
    &FormValidation,
    &ComparisonOperator,
    &ErrorHandling,
    &SubscribeCall,
    &RxjsOperator,
    &FormDefaultValue,
    &FormControlName,
    &UnsubscribeCall,
];

/// The full catalog.
pub fn all() -> &'static [&'static dyn Mutator] {
    ALL
}

/// The catalog narrowed by a configuration.
///
/// Every name the configuration mentions must exist in the catalog; an
/// unknown name is rejected rather than silently ignored.
pub fn filtered(config: &MutatorConfig) -> Result<Vec<&'static dyn Mutator>> {
    for name in config.mentioned_names() {
        if !ALL.iter().any(|mutator| mutator.name() == name) {
            return Err(CatalogError::UnknownMutator {
                name: name.to_string(),
                known: ALL.iter().map(|mutator| mutator.name().to_string()).collect(),
            });
        }
    }
    Ok(ALL
        .iter()
        .copied()
        .filter(|mutator| config.selects(mutator.name()))
        .collect())
}
