//! Read-only navigation over a syntax tree
//!
//! A [`Cursor`] hands a mutator the node it is being probed against together
//! with the chain of ancestors above it, the field name the node occupies in
//! its parent, and its index when that field is a list. Cursors live on the
//! walk stack; they are built during [`walk`] and valid only inside the
//! callback.

use crate::ast::Node;

/// A navigation handle over one node, including its ancestor chain.
///
/// All queries are total: a missing parent or field answers `None`, never a
/// panic.
pub struct Cursor<'a> {
    node: &'a Node,
    parent: Option<&'a Cursor<'a>>,
    field: Option<&'static str>,
    index: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// A cursor for a tree root, with no ancestry.
    pub fn root(node: &'a Node) -> Cursor<'a> {
        Cursor {
            node,
            parent: None,
            field: None,
            index: None,
        }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn parent(&self) -> Option<&Cursor<'a>> {
        self.parent
    }

    pub fn parent_node(&self) -> Option<&'a Node> {
        self.parent.map(|p| p.node)
    }

    /// The field this node occupies within its parent (`"arguments"`,
    /// `"init"`, ...).
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// The position of this node within a list field of its parent.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The topmost node of the ancestor chain — the whole file's tree when the
    /// walk started at a program root.
    pub fn program(&self) -> &'a Node {
        let mut cursor = self;
        while let Some(parent) = cursor.parent {
            cursor = parent;
        }
        cursor.node
    }
}

/// Preorder walk of `root`, invoking `f` with a cursor for every node.
pub fn walk<F>(root: &Node, f: &mut F)
where
    F: FnMut(&Cursor<'_>),
{
    walk_node(root, None, None, None, f);
}

fn walk_node<'a, F>(
    node: &'a Node,
    parent: Option<&'a Cursor<'a>>,
    field: Option<&'static str>,
    index: Option<usize>,
    f: &mut F,
) where
    F: FnMut(&Cursor<'_>),
{
    let cursor = Cursor {
        node,
        parent,
        field,
        index,
    };
    f(&cursor);
    let p = Some(&cursor);

    match node {
        Node::Program { body } => walk_list(body, p, "body", f),
        Node::ImportDeclaration { .. }
        | Node::Identifier { .. }
        | Node::StringLiteral { .. }
        | Node::NumberLiteral { .. }
        | Node::BooleanLiteral { .. }
        | Node::NullLiteral
        | Node::RegexLiteral { .. } => {}
        Node::ExpressionStatement { expression } => {
            walk_node(expression, p, Some("expression"), None, f)
        }
        Node::VariableDeclaration { declarations } => walk_list(declarations, p, "declarations", f),
        Node::VariableDeclarator { id, init } => {
            walk_node(id, p, Some("id"), None, f);
            if let Some(init) = init {
                walk_node(init, p, Some("init"), None, f);
            }
        }
        Node::ClassDeclaration { body, .. } => walk_list(body, p, "body", f),
        Node::ClassProperty { key, value } => {
            walk_node(key, p, Some("key"), None, f);
            if let Some(value) = value {
                walk_node(value, p, Some("value"), None, f);
            }
        }
        Node::FunctionDeclaration { params, body, .. } => {
            walk_list(params, p, "params", f);
            walk_node(body, p, Some("body"), None, f);
        }
        Node::ReturnStatement { argument } => {
            if let Some(argument) = argument {
                walk_node(argument, p, Some("argument"), None, f);
            }
        }
        Node::IfStatement { test, consequent, alternate } => {
            walk_node(test, p, Some("test"), None, f);
            walk_node(consequent, p, Some("consequent"), None, f);
            if let Some(alternate) = alternate {
                walk_node(alternate, p, Some("alternate"), None, f);
            }
        }
        Node::BlockStatement { body } => walk_list(body, p, "body", f),
        Node::TryStatement { block, handler, finalizer } => {
            walk_node(block, p, Some("block"), None, f);
            if let Some(handler) = handler {
                walk_node(handler, p, Some("handler"), None, f);
            }
            if let Some(finalizer) = finalizer {
                walk_node(finalizer, p, Some("finalizer"), None, f);
            }
        }
        Node::CatchClause { param, body } => {
            if let Some(param) = param {
                walk_node(param, p, Some("param"), None, f);
            }
            walk_node(body, p, Some("body"), None, f);
        }
        Node::BinaryExpression { left, right, .. }
        | Node::AssignmentExpression { left, right, .. } => {
            walk_node(left, p, Some("left"), None, f);
            walk_node(right, p, Some("right"), None, f);
        }
        Node::UnaryExpression { argument, .. } | Node::UpdateExpression { argument, .. } => {
            walk_node(argument, p, Some("argument"), None, f)
        }
        Node::ConditionalExpression { test, consequent, alternate } => {
            walk_node(test, p, Some("test"), None, f);
            walk_node(consequent, p, Some("consequent"), None, f);
            walk_node(alternate, p, Some("alternate"), None, f);
        }
        Node::CallExpression { callee, arguments, .. } => {
            walk_node(callee, p, Some("callee"), None, f);
            walk_list(arguments, p, "arguments", f);
        }
        Node::NewExpression { callee, arguments } => {
            walk_node(callee, p, Some("callee"), None, f);
            walk_list(arguments, p, "arguments", f);
        }
        Node::MemberExpression { object, property, .. } => {
            walk_node(object, p, Some("object"), None, f);
            walk_node(property, p, Some("property"), None, f);
        }
        Node::ArrowFunctionExpression { params, body } => {
            walk_list(params, p, "params", f);
            walk_node(body, p, Some("body"), None, f);
        }
        Node::ArrayExpression { elements } => walk_list(elements, p, "elements", f),
        Node::ObjectExpression { properties } => walk_list(properties, p, "properties", f),
        Node::ObjectProperty { key, value } => {
            walk_node(key, p, Some("key"), None, f);
            walk_node(value, p, Some("value"), None, f);
        }
    }
}

fn walk_list<'a, F>(nodes: &'a [Node], parent: Option<&'a Cursor<'a>>, field: &'static str, f: &mut F)
where
    F: FnMut(&Cursor<'_>),
{
    for (index, node) in nodes.iter().enumerate() {
        walk_node(node, parent, Some(field), Some(index), f);
    }
}
