//! Structural-removal and literal-shape mutators
//!
//! These rules remove or neutralize a sub-structure rather than swap a token.
//! All of them read the node and yield independent clones.

use crate::ast::{Node, UnaryOp};
use crate::cursor::Cursor;
use crate::mutator::Mutator;

/// Empties a non-empty statement block
pub struct BlockStatement;

impl Mutator for BlockStatement {
    fn name(&self) -> &'static str {
        "BlockStatement"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match cursor.node() {
            Node::BlockStatement { body } if !body.is_empty() => vec![Node::block(vec![])],
            _ => Vec::new(),
        }
    }
}

/// Replaces a non-empty array literal with `[]`
pub struct ArrayDeclaration;

impl Mutator for ArrayDeclaration {
    fn name(&self) -> &'static str {
        "ArrayDeclaration"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match cursor.node() {
            Node::ArrayExpression { elements } if !elements.is_empty() => {
                vec![Node::array(vec![])]
            }
            _ => Vec::new(),
        }
    }
}

/// Replaces an expression-bodied arrow's body with `undefined`
///
/// Block bodies are the [`BlockStatement`] mutator's territory, and an arrow
/// that already returns `undefined` is left alone.
pub struct ArrowFunction;

impl Mutator for ArrowFunction {
    fn name(&self) -> &'static str {
        "ArrowFunction"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::ArrowFunctionExpression { params, body } = cursor.node() else {
            return Vec::new();
        };
        if matches!(body.as_ref(), Node::BlockStatement { .. }) || body.as_ref() == &Node::undefined()
        {
            return Vec::new();
        }
        vec![Node::ArrowFunctionExpression {
            params: params.clone(),
            body: Box::new(Node::undefined()),
        }]
    }
}

/// Two candidates per ternary: branches swapped, and guard negated
pub struct ConditionalExpression;

impl Mutator for ConditionalExpression {
    fn name(&self) -> &'static str {
        "ConditionalExpression"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::ConditionalExpression { test, consequent, alternate } = cursor.node() else {
            return Vec::new();
        };
        vec![
            Node::ConditionalExpression {
                test: test.clone(),
                consequent: alternate.clone(),
                alternate: consequent.clone(),
            },
            Node::ConditionalExpression {
                test: Box::new(Node::unary(UnaryOp::Not, test.as_ref().clone())),
                consequent: consequent.clone(),
                alternate: alternate.clone(),
            },
        ]
    }
}

const METHOD_SWAPS: [(&str, &str); 14] = [
    ("endsWith", "startsWith"),
    ("startsWith", "endsWith"),
    ("every", "some"),
    ("some", "every"),
    ("toLowerCase", "toUpperCase"),
    ("toUpperCase", "toLowerCase"),
    ("toLocaleLowerCase", "toLocaleUpperCase"),
    ("toLocaleUpperCase", "toLocaleLowerCase"),
    ("trimStart", "trimEnd"),
    ("trimEnd", "trimStart"),
    ("padStart", "padEnd"),
    ("padEnd", "padStart"),
    ("min", "max"),
    ("max", "min"),
];

const METHOD_REMOVALS: [&str; 8] = [
    "charAt", "filter", "reverse", "slice", "sort", "substr", "substring", "trim",
];

/// Swaps a known method for its counterpart, or removes a known
/// behavior-preserving call so the receiver survives
pub struct MethodExpression;

impl Mutator for MethodExpression {
    fn name(&self) -> &'static str {
        "MethodExpression"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::CallExpression { callee, arguments, optional } = cursor.node() else {
            return Vec::new();
        };
        let Node::MemberExpression {
            object,
            property,
            computed: false,
            optional: member_optional,
        } = callee.as_ref()
        else {
            return Vec::new();
        };
        let Some(method) = property.identifier_name() else {
            return Vec::new();
        };

        if let Some((_, replacement)) = METHOD_SWAPS.iter().find(|(from, _)| *from == method) {
            return vec![Node::CallExpression {
                callee: Box::new(Node::MemberExpression {
                    object: object.clone(),
                    property: Box::new(Node::ident(*replacement)),
                    computed: false,
                    optional: *member_optional,
                }),
                arguments: arguments.clone(),
                optional: *optional,
            }];
        }
        if METHOD_REMOVALS.contains(&method) {
            return vec![object.as_ref().clone()];
        }
        Vec::new()
    }
}

/// Strips optional-access safety: `a?.b → a.b`, `a?.[i] → a[i]`, `a?.() → a()`
pub struct OptionalChaining;

impl Mutator for OptionalChaining {
    fn name(&self) -> &'static str {
        "OptionalChaining"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match cursor.node() {
            Node::MemberExpression {
                object,
                property,
                computed,
                optional: true,
            } => vec![Node::MemberExpression {
                object: object.clone(),
                property: property.clone(),
                computed: *computed,
                optional: false,
            }],
            Node::CallExpression {
                callee,
                arguments,
                optional: true,
            } => vec![Node::CallExpression {
                callee: callee.clone(),
                arguments: arguments.clone(),
                optional: false,
            }],
            _ => Vec::new(),
        }
    }
}

/// Perturbs a regex literal: strip a leading `^`, strip a trailing `$`, clear
/// the flags — each its own candidate
pub struct Regex;

impl Mutator for Regex {
    fn name(&self) -> &'static str {
        "Regex"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::RegexLiteral { pattern, flags } = cursor.node() else {
            return Vec::new();
        };
        let mut candidates = Vec::new();
        if let Some(stripped) = pattern.strip_prefix('^') {
            candidates.push(Node::RegexLiteral {
                pattern: stripped.to_string(),
                flags: flags.clone(),
            });
        }
        if let Some(stripped) = pattern.strip_suffix('$') {
            candidates.push(Node::RegexLiteral {
                pattern: stripped.to_string(),
                flags: flags.clone(),
            });
        }
        if !flags.is_empty() {
            candidates.push(Node::RegexLiteral {
                pattern: pattern.clone(),
                flags: String::new(),
            });
        }
        candidates
    }
}

/// One candidate per object property, with that property removed
pub struct ObjectLiteral;

impl Mutator for ObjectLiteral {
    fn name(&self) -> &'static str {
        "ObjectLiteral"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let Node::ObjectExpression { properties } = cursor.node() else {
            return Vec::new();
        };
        (0..properties.len())
            .map(|index| {
                let mut remaining = properties.clone();
                remaining.remove(index);
                Node::object(remaining)
            })
            .collect()
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

    #[test]
    fn test_block_statement_empties_the_body() {
        let block = Node::block(vec![Node::expr_stmt(Node::ident("f"))]);
        assert_eq!(mutate_once(&BlockStatement, &block), vec![Node::block(vec![])]);
        assert!(mutate_once(&BlockStatement, &Node::block(vec![])).is_empty());
    }

    #[test]
    fn test_array_declaration() {
        let array = Node::array(vec![Node::number(1.0)]);
        assert_eq!(mutate_once(&ArrayDeclaration, &array), vec![Node::array(vec![])]);
        assert!(mutate_once(&ArrayDeclaration, &Node::array(vec![])).is_empty());
    }

    #[test]
    fn test_arrow_function_body_neutralized() {
        let arrow = Node::ArrowFunctionExpression {
            params: vec![Node::ident("x")],
            body: Box::new(Node::ident("x")),
        };
        let expected = Node::ArrowFunctionExpression {
            params: vec![Node::ident("x")],
            body: Box::new(Node::undefined()),
        };
        assert_eq!(mutate_once(&ArrowFunction, &arrow), vec![expected]);
    }

    #[test]
    fn test_arrow_function_skips_undefined_and_block_bodies() {
        let already_neutral = Node::ArrowFunctionExpression {
            params: vec![],
            body: Box::new(Node::undefined()),
        };
        assert!(mutate_once(&ArrowFunction, &already_neutral).is_empty());

        let block_bodied = Node::ArrowFunctionExpression {
            params: vec![],
            body: Box::new(Node::block(vec![])),
        };
        assert!(mutate_once(&ArrowFunction, &block_bodied).is_empty());
    }

    #[test]
    fn test_conditional_yields_branch_swap_and_guard_negation() {
        let ternary = Node::ConditionalExpression {
            test: Box::new(Node::ident("cond")),
            consequent: Box::new(Node::ident("a")),
            alternate: Box::new(Node::ident("b")),
        };
        let candidates = mutate_once(&ConditionalExpression, &ternary);
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0],
            Node::ConditionalExpression {
                test: Box::new(Node::ident("cond")),
                consequent: Box::new(Node::ident("b")),
                alternate: Box::new(Node::ident("a")),
            }
        );
        assert_eq!(
            candidates[1],
            Node::ConditionalExpression {
                test: Box::new(Node::unary(UnaryOp::Not, Node::ident("cond"))),
                consequent: Box::new(Node::ident("a")),
                alternate: Box::new(Node::ident("b")),
            }
        );
    }

    #[test]
    fn test_method_swap() {
        let call = Node::method_call(Node::ident("s"), "toUpperCase", vec![]);
        assert_eq!(
            mutate_once(&MethodExpression, &call),
            vec![Node::method_call(Node::ident("s"), "toLowerCase", vec![])]
        );
    }

    #[test]
    fn test_method_removal_keeps_the_receiver() {
        let call = Node::method_call(Node::ident("list"), "filter", vec![Node::ident("f")]);
        assert_eq!(mutate_once(&MethodExpression, &call), vec![Node::ident("list")]);
    }

    #[test]
    fn test_unknown_method_never_triggers() {
        let call = Node::method_call(Node::ident("s"), "concat", vec![]);
        assert!(mutate_once(&MethodExpression, &call).is_empty());
    }

    #[test]
    fn test_optional_chaining_stripped() {
        let member = Node::MemberExpression {
            object: Box::new(Node::ident("a")),
            property: Box::new(Node::ident("b")),
            computed: false,
            optional: true,
        };
        assert_eq!(
            mutate_once(&OptionalChaining, &member),
            vec![Node::member(Node::ident("a"), "b")]
        );

        let plain = Node::member(Node::ident("a"), "b");
        assert!(mutate_once(&OptionalChaining, &plain).is_empty());
    }

    #[test]
    fn test_regex_candidates() {
        let regex = Node::RegexLiteral {
            pattern: "^abc$".to_string(),
            flags: "gi".to_string(),
        };
        let candidates = mutate_once(&Regex, &regex);
        assert_eq!(candidates.len(), 3);
        assert_eq!(
            candidates[0],
            Node::RegexLiteral { pattern: "abc$".to_string(), flags: "gi".to_string() }
        );
        assert_eq!(
            candidates[1],
            Node::RegexLiteral { pattern: "^abc".to_string(), flags: "gi".to_string() }
        );
        assert_eq!(
            candidates[2],
            Node::RegexLiteral { pattern: "^abc$".to_string(), flags: String::new() }
        );
    }

    #[test]
    fn test_object_literal_one_candidate_per_property() {
        let object = Node::object(vec![
            Node::property("a", Node::number(1.0)),
            Node::property("b", Node::number(2.0)),
        ]);
        let candidates = mutate_once(&ObjectLiteral, &object);
        assert_eq!(
            candidates,
            vec![
                Node::object(vec![Node::property("b", Node::number(2.0))]),
                Node::object(vec![Node::property("a", Node::number(1.0))]),
            ]
        );
    }
}
