//! Mutators aware of reactive-stream (observable) idioms
//!
//! Subscription handling, error handling, and pipeline operators are
//! recognized by shape: a `.subscribe(...)`/`.unsubscribe()`/`.catch(...)`
//! member call, a `.pipe(...)` call, or an operator identifier inside one.

use crate::ast::{IdentRole, Node};
use crate::cursor::{self, Cursor};
use crate::mutator::Mutator;

/// Operators that limit a subscription's lifetime.
const LIMITING_OPERATORS: [&str; 5] = ["first", "take", "takeUntil", "takeWhile", "takeUntilDestroyed"];

/// Fixed, non-involutive rotation table: operator name → semantically
/// adjacent replacement.
const ROTATIONS: [(&str, &str); 8] = [
    ("retry", "catchError"),
    ("debounceTime", "auditTime"),
    ("debounce", "audit"),
    ("map", "tap"),
    ("switchMap", "mergeMap"),
    ("take", "skip"),
    ("first", "last"),
    ("distinctUntilChanged", "distinct"),
];

/// Drops a `.subscribe(...)` call, leaving its receiver
pub struct SubscribeCall;

impl Mutator for SubscribeCall {
    fn name(&self) -> &'static str {
        "SubscribeCall"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match member_call(cursor.node(), "subscribe") {
            Some(receiver) => vec![receiver.clone()],
            None => Vec::new(),
        }
    }
}

/// Drops an `.unsubscribe()` call, or removes a lifetime-limiting operator
/// from a `.pipe(...)` call — one candidate per qualifying operator
pub struct UnsubscribeCall;

impl Mutator for UnsubscribeCall {
    fn name(&self) -> &'static str {
        "UnsubscribeCall"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let node = cursor.node();
        if let Some(receiver) = member_call(node, "unsubscribe") {
            return vec![receiver.clone()];
        }
        if member_call(node, "pipe").is_none() {
            return Vec::new();
        }
        let Node::CallExpression { arguments, .. } = node else {
            return Vec::new();
        };
        arguments
            .iter()
            .enumerate()
            .filter(|(_, argument)| is_operator_call(argument, &LIMITING_OPERATORS))
            .map(|(index, _)| {
                let mut candidate = node.clone();
                if let Node::CallExpression { arguments, .. } = &mut candidate {
                    arguments.remove(index);
                }
                candidate
            })
            .collect()
    }
}

/// Removes error handling in its four shapes
///
/// `try { B } catch → B`; `recv.catch(...) → recv`; `catchError(...)`
/// arguments filtered out of a `.pipe(...)` call; the `error` property
/// removed from a `.subscribe(...)` observer object.
pub struct ErrorHandling;

impl Mutator for ErrorHandling {
    fn name(&self) -> &'static str {
        "ErrorHandling"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        let node = cursor.node();

        if let Node::TryStatement { block, .. } = node {
            return vec![block.as_ref().clone()];
        }

        if let Some(receiver) = member_call(node, "catch") {
            return vec![receiver.clone()];
        }

        if member_call(node, "pipe").is_some() {
            let Node::CallExpression { arguments, .. } = node else {
                return Vec::new();
            };
            if !arguments
                .iter()
                .any(|argument| is_operator_call(argument, &["catchError"]))
            {
                return Vec::new();
            }
            let mut candidate = node.clone();
            if let Node::CallExpression { arguments, .. } = &mut candidate {
                arguments.retain(|argument| !is_operator_call(argument, &["catchError"]));
            }
            return vec![candidate];
        }

        // Observer object handed to subscribe: { next: ..., error: ... }
        if let Node::ObjectExpression { properties } = node {
            let is_subscribe_argument = cursor.field() == Some("arguments")
                && cursor
                    .parent_node()
                    .is_some_and(|parent| member_call(parent, "subscribe").is_some());
            if is_subscribe_argument && properties.iter().any(is_error_property) {
                let mut remaining = properties.clone();
                remaining.retain(|property| !is_error_property(property));
                return vec![Node::object(remaining)];
            }
        }

        Vec::new()
    }
}

/// Rotates a pipeline operator to its table partner
///
/// At a use site inside `.pipe(...)` the partner is substituted only when it
/// is provably already imported elsewhere in the file. At the program root,
/// for every imported table operator whose partner is missing, one candidate
/// per use introduces the partner import and rewrites that single use; every
/// candidate is an independent clone of the whole program.
pub struct RxjsOperator;

impl Mutator for RxjsOperator {
    fn name(&self) -> &'static str {
        "RxjsOperator"
    }

    fn mutate(&self, cursor: &Cursor<'_>) -> Vec<Node> {
        match cursor.node() {
            Node::Identifier { name } => {
                let Some(partner) = rotation_partner(name) else {
                    return Vec::new();
                };
                if !is_operator_callee_in_pipe(cursor) {
                    return Vec::new();
                }
                if imported_names(cursor.program()).any(|imported| imported == partner) {
                    vec![Node::ident(partner)]
                } else {
                    // Conservative: without the import the candidate would
                    // not even compile.
                    Vec::new()
                }
            }
            Node::Program { body } if cursor.is_root() => {
                let program = cursor.node();
                let mut candidates = Vec::new();
                for (body_index, statement) in body.iter().enumerate() {
                    let Node::ImportDeclaration { specifiers, .. } = statement else {
                        continue;
                    };
                    for operator in specifiers {
                        let Some(partner) = rotation_partner(operator) else {
                            continue;
                        };
                        if imported_names(program).any(|imported| imported == partner) {
                            continue; // the use-site rule covers this
                        }
                        for use_index in 0..count_uses(program, operator) {
                            let mut candidate = program.clone();
                            add_import_specifier(&mut candidate, body_index, partner);
                            rewrite_nth_use(&mut candidate, operator, use_index, partner);
                            candidates.push(candidate);
                        }
                    }
                }
                candidates
            }
            _ => Vec::new(),
        }
    }
}

/// An object property whose key is the identifier `error`.
fn is_error_property(property: &Node) -> bool {
    matches!(property, Node::ObjectProperty { key, .. } if key.identifier_name() == Some("error"))
}

fn rotation_partner(name: &str) -> Option<&'static str> {
    ROTATIONS
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

/// The receiver of `receiver.method(...)`, if `node` is such a call.
fn member_call<'a>(node: &'a Node, method: &str) -> Option<&'a Node> {
    let Node::CallExpression { callee, .. } = node else {
        return None;
    };
    match callee.as_ref() {
        Node::MemberExpression {
            object,
            property,
            computed: false,
            ..
        } if property.identifier_name() == Some(method) => Some(object),
        _ => None,
    }
}

/// `name(...)` for one of `names`.
fn is_operator_call(node: &Node, names: &[&str]) -> bool {
    match node {
        Node::CallExpression { callee, .. } => callee
            .identifier_name()
            .is_some_and(|name| names.contains(&name)),
        _ => false,
    }
}

/// Is this identifier the callee of an operator call that is itself an
/// argument of a `.pipe(...)` call?
fn is_operator_callee_in_pipe(cursor: &Cursor<'_>) -> bool {
    if cursor.field() != Some("callee") {
        return false;
    }
    let Some(call) = cursor.parent() else {
        return false;
    };
    if !matches!(call.node(), Node::CallExpression { .. }) || call.field() != Some("arguments") {
        return false;
    }
    call.parent_node()
        .is_some_and(|pipe| member_call(pipe, "pipe").is_some())
}

/// All named imports of the program, in source order.
fn imported_names(program: &Node) -> impl Iterator<Item = &str> + '_ {
    let body: &[Node] = match program {
        Node::Program { body } => body,
        _ => &[],
    };
    body.iter().flat_map(|statement| match statement {
        Node::ImportDeclaration { specifiers, .. } => specifiers.as_slice(),
        _ => &[],
    })
    .map(String::as_str)
}

/// Count identifier uses of `name`, excluding property keys and static member
/// properties. Import specifiers are not identifier nodes and never count.
fn count_uses(program: &Node, name: &str) -> usize {
    let mut count = 0;
    cursor::walk(program, &mut |cursor| {
        if is_identifier_use(cursor, name) {
            count += 1;
        }
    });
    count
}

fn is_identifier_use(cursor: &Cursor<'_>, name: &str) -> bool {
    if cursor.node().identifier_name() != Some(name) {
        return false;
    }
    if cursor.field() == Some("key") {
        return false;
    }
    let static_member_property = cursor.field() == Some("property")
        && matches!(
            cursor.parent_node(),
            Some(Node::MemberExpression { computed: false, .. })
        );
    !static_member_property
}

fn add_import_specifier(program: &mut Node, body_index: usize, name: &str) {
    if let Node::Program { body } = program {
        if let Some(Node::ImportDeclaration { specifiers, .. }) = body.get_mut(body_index) {
            specifiers.push(name.to_string());
        }
    }
}

/// Rewrite the `target`-th use of `name` (same counting as [`count_uses`]).
fn rewrite_nth_use(program: &mut Node, name: &str, target: usize, replacement: &str) {
    let mut seen = 0;
    program.visit_identifiers_mut(&mut |ident, role| {
        if role == IdentRole::Use && ident == name {
            if seen == target {
                *ident = replacement.to_string();
            }
            seen += 1;
        }
    });
}
