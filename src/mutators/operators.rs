//! Generic operator and literal-value swap mutators
//!
//! Each rule targets one syntactic category and swaps an operator or value
//! via a fixed table. Only operators present in a table trigger a candidate;
//! anything else produces nothing.

use crate::ast::{AssignOp, BinaryOp, Node, UnaryOp, UpdateOp};
use crate::cursor::Cursor;
use crate::mutator::Mutator;

/// `+↔-`, `*↔/`, `%→*`
pub struct ArithmeticOperator;

impl Mutator for ArithmeticOperator {
    fn name(&self) -> &'static str {
        "ArithmeticOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let table = |op: BinaryOp| match op {
            BinaryOp::Add => Some(BinaryOp::Sub),
            BinaryOp::Sub => Some(BinaryOp::Add),
            BinaryOp::Mul => Some(BinaryOp::Div),
            BinaryOp::Div => Some(BinaryOp::Mul),
            BinaryOp::Mod => Some(BinaryOp::Mul),
            _ => None,
        };
        swap_binary_operator(cursor.node(), table)
    }
}

/// `==↔!=`, `===↔!==`
pub struct EqualityOperator;

impl Mutator for EqualityOperator {
    fn name(&self) -> &'static str {
        "EqualityOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let table = |op: BinaryOp| match op {
            BinaryOp::EqEq => Some(BinaryOp::NotEq),
            BinaryOp::NotEq => Some(BinaryOp::EqEq),
            BinaryOp::EqEqEq => Some(BinaryOp::NotEqEq),
            BinaryOp::NotEqEq => Some(BinaryOp::EqEqEq),
            _ => None,
        };
        swap_binary_operator(cursor.node(), table)
    }
}

/// Strictness flips: `===↔==`, `!==↔!=`
pub struct ComparisonOperator;

impl Mutator for ComparisonOperator {
    fn name(&self) -> &'static str {
        "ComparisonOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let table = |op: BinaryOp| match op {
            BinaryOp::EqEqEq => Some(BinaryOp::EqEq),
            BinaryOp::EqEq => Some(BinaryOp::EqEqEq),
            BinaryOp::NotEq => Some(BinaryOp::NotEqEq),
            BinaryOp::NotEqEq => Some(BinaryOp::NotEq),
            _ => None,
        };
        swap_binary_operator(cursor.node(), table)
    }
}

/// `&&↔||`
pub struct LogicalOperator;

impl Mutator for LogicalOperator {
    fn name(&self) -> &'static str {
        "LogicalOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let table = |op: BinaryOp| match op {
            BinaryOp::And => Some(BinaryOp::Or),
            BinaryOp::Or => Some(BinaryOp::And),
            _ => None,
        };
        swap_binary_operator(cursor.node(), table)
    }
}

/// Sign swap `+x↔-x`; negation removal `!x → x`
pub struct UnaryOperator;

impl Mutator for UnaryOperator {
    fn name(&self) -> &'static str {
        "UnaryOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::UnaryExpression { operator, argument } = cursor.node() else {
            return Vec::new();
        };
        match operator {
            UnaryOp::Plus => vec![Node::UnaryExpression {
                operator: UnaryOp::Minus,
                argument: argument.clone(),
            }],
            UnaryOp::Minus => vec![Node::UnaryExpression {
                operator: UnaryOp::Plus,
                argument: argument.clone(),
            }],
            UnaryOp::Not => vec![argument.as_ref().clone()],
        }
    }
}

/// `++↔--`, prefixness preserved
pub struct UpdateOperator;

impl Mutator for UpdateOperator {
    fn name(&self) -> &'static str {
        "UpdateOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::UpdateExpression { operator, prefix, argument } = cursor.node() else {
            return Vec::new();
        };
        let swapped = match operator {
            UpdateOp::Increment => UpdateOp::Decrement,
            UpdateOp::Decrement => UpdateOp::Increment,
        };
        vec![Node::UpdateExpression {
            operator: swapped,
            prefix: *prefix,
            argument: argument.clone(),
        }]
    }
}

/// Compound-assignment table; plain `=` never triggers
pub struct AssignmentOperator;

impl Mutator for AssignmentOperator {
    fn name(&self) -> &'static str {
        "AssignmentOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::AssignmentExpression { operator, left, right } = cursor.node() else {
            return Vec::new();
        };
        let swapped = match operator {
            AssignOp::AddAssign => AssignOp::SubAssign,
            AssignOp::SubAssign => AssignOp::AddAssign,
            AssignOp::MulAssign => AssignOp::DivAssign,
            AssignOp::DivAssign => AssignOp::MulAssign,
            AssignOp::ModAssign => AssignOp::MulAssign,
            AssignOp::AndAssign => AssignOp::OrAssign,
            AssignOp::OrAssign => AssignOp::AndAssign,
            AssignOp::NullishAssign => AssignOp::AndAssign,
            AssignOp::Assign => return Vec::new(),
        };
        vec![Node::AssignmentExpression {
            operator: swapped,
            left: left.clone(),
            right: right.clone(),
        }]
    }
}

/// `true↔false`
pub struct BooleanLiteral;

impl Mutator for BooleanLiteral {
    fn name(&self) -> &'static str {
        "BooleanLiteral"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match cursor.node() {
            Node::BooleanLiteral { value } => vec![Node::boolean(!value)],
            _ => Vec::new(),
        }
    }
}

/// `"" → "mutated string"`, anything else → `""`
///
/// Never fires for a property key: renaming a key is a different mutation
/// (and usually a compile error in typed call sites).
pub struct StringLiteral;

impl Mutator for StringLiteral {
    fn name(&self) -> &'static str {
        "StringLiteral"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        if cursor.field() == Some("key") {
            return Vec::new();
        }
        match cursor.node() {
            Node::StringLiteral { value } if value.is_empty() => {
                vec![Node::string("mutated string")]
            }
            Node::StringLiteral { .. } => vec![Node::string("")],
            _ => Vec::new(),
        }
    }
}

fn swap_binary_operator(node: &Node, table: impl Fn(BinaryOp) -> Option<BinaryOp>) -> Vec<Node> {
    let Node::BinaryExpression { operator, left, right } = node else {
        return Vec::new();
    };
    match table(*operator) {
        Some(swapped) => vec![Node::BinaryExpression {
            operator: swapped,
            left: left.clone(),
            right: right.clone(),
        }],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use pretty_assertions::assert_eq;

    fn mutate_once(mutator: &dyn Mutator, node: &Node) -> Vec<Node> {
        mutator.mutate(&Cursor::root(node))
    }

    fn binary(op: BinaryOp) -> Node {
        Node::binary(op, Node::ident("a"), Node::ident("b"))
    }

    #[test]
    fn test_arithmetic_swaps() {
        let candidates = mutate_once(&ArithmeticOperator, &binary(BinaryOp::Add));
        assert_eq!(candidates, vec![binary(BinaryOp::Sub)]);

        let candidates = mutate_once(&ArithmeticOperator, &binary(BinaryOp::Mod));
        assert_eq!(candidates, vec![binary(BinaryOp::Mul)]);
    }

    #[test]
    fn test_comparison_yields_exactly_one_loose_candidate() {
        let candidates = mutate_once(&ComparisonOperator, &binary(BinaryOp::EqEqEq));
        assert_eq!(candidates, vec![binary(BinaryOp::EqEq)]);
    }

    #[test]
    fn test_comparison_is_involutive_for_all_four_operators() {
        for op in [
            BinaryOp::EqEq,
            BinaryOp::EqEqEq,
            BinaryOp::NotEq,
            BinaryOp::NotEqEq,
        ] {
            let original = binary(op);
            let once = mutate_once(&ComparisonOperator, &original).remove(0);
            let twice = mutate_once(&ComparisonOperator, &once).remove(0);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn test_equality_is_involutive() {
        for op in [
            BinaryOp::EqEq,
            BinaryOp::NotEq,
            BinaryOp::EqEqEq,
            BinaryOp::NotEqEq,
        ] {
            let original = binary(op);
            let once = mutate_once(&EqualityOperator, &original).remove(0);
            let twice = mutate_once(&EqualityOperator, &once).remove(0);
            assert_eq!(twice, original);
        }
    }

    #[test]
    fn test_operators_outside_the_table_never_trigger() {
        // Relational operators belong to no table in the catalog.
        for op in [BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::Gt, BinaryOp::GtEq] {
            assert!(mutate_once(&ArithmeticOperator, &binary(op)).is_empty());
            assert!(mutate_once(&EqualityOperator, &binary(op)).is_empty());
            assert!(mutate_once(&ComparisonOperator, &binary(op)).is_empty());
            assert!(mutate_once(&LogicalOperator, &binary(op)).is_empty());
        }
        assert!(mutate_once(&LogicalOperator, &binary(BinaryOp::Add)).is_empty());
    }

    #[test]
    fn test_logical_swap() {
        assert_eq!(
            mutate_once(&LogicalOperator, &binary(BinaryOp::And)),
            vec![binary(BinaryOp::Or)]
        );
    }

    #[test]
    fn test_unary_sign_swap_and_negation_removal() {
        let minus = Node::unary(UnaryOp::Minus, Node::ident("x"));
        assert_eq!(
            mutate_once(&UnaryOperator, &minus),
            vec![Node::unary(UnaryOp::Plus, Node::ident("x"))]
        );

        let not = Node::unary(UnaryOp::Not, Node::ident("x"));
        assert_eq!(mutate_once(&UnaryOperator, &not), vec![Node::ident("x")]);
    }

    #[test]
    fn test_update_swap_preserves_prefixness() {
        let postfix = Node::UpdateExpression {
            operator: UpdateOp::Increment,
            prefix: false,
            argument: Box::new(Node::ident("i")),
        };
        let expected = Node::UpdateExpression {
            operator: UpdateOp::Decrement,
            prefix: false,
            argument: Box::new(Node::ident("i")),
        };
        assert_eq!(mutate_once(&UpdateOperator, &postfix), vec![expected]);
    }

    #[test]
    fn test_assignment_table() {
        let assign = |op| Node::AssignmentExpression {
            operator: op,
            left: Box::new(Node::ident("x")),
            right: Box::new(Node::number(1.0)),
        };
        assert_eq!(
            mutate_once(&AssignmentOperator, &assign(AssignOp::AddAssign)),
            vec![assign(AssignOp::SubAssign)]
        );
        assert_eq!(
            mutate_once(&AssignmentOperator, &assign(AssignOp::NullishAssign)),
            vec![assign(AssignOp::AndAssign)]
        );
        assert!(mutate_once(&AssignmentOperator, &assign(AssignOp::Assign)).is_empty());
    }

    #[test]
    fn test_boolean_negation() {
        assert_eq!(
            mutate_once(&BooleanLiteral, &Node::boolean(true)),
            vec![Node::boolean(false)]
        );
    }

    #[test]
    fn test_string_literal_rules() {
        assert_eq!(
            mutate_once(&StringLiteral, &Node::string("")),
            vec![Node::string("mutated string")]
        );
        assert_eq!(
            mutate_once(&StringLiteral, &Node::string("hello")),
            vec![Node::string("")]
        );
    }

    #[test]
    fn test_string_literal_skips_property_keys() {
        let object = Node::object(vec![Node::ObjectProperty {
            key: Box::new(Node::string("name")),
            value: Box::new(Node::string("value")),
        }]);
        let program = Node::program(vec![Node::expr_stmt(object)]);

        let mut candidates = Vec::new();
        crate::cursor::walk(&program, &mut |cursor| {
            candidates.extend(StringLiteral.mutate(cursor));
        });
        // Only the value string mutates, never the key.
        assert_eq!(candidates, vec![Node::string("")]);
    }
}
