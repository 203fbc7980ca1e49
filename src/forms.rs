//! Recognizer for form-control construction patterns
//!
//! A form control, group, record, or array can be written three ways:
//!
//! 1. a direct constructor call: `new FormControl('')`
//! 2. a builder factory call: `fb.control('')`, `fb.group({...})`
//! 3. an array literal nested as a control definition inside the first
//!    argument of a `group`/`record`/`array` factory call: `fb.group({ name:
//!    [''] })`
//!
//! Every consumer has to try all three encodings; this module keeps that
//! three-way disjunction in one place. All predicates are recomputed from the
//! live node and its ancestors on every call and answer `false` when the
//! ancestry does not match.

use crate::ast::Node;
use crate::cursor::Cursor;

/// Constructor names denoting a control, group, record, or array.
pub const CONTROL_TYPES: [&str; 7] = [
    "FormControl",
    "UntypedFormControl",
    "FormGroup",
    "UntypedFormGroup",
    "FormRecord",
    "FormArray",
    "UntypedFormArray",
];

/// Constructor names that create a single control.
pub const CONTROL_CREATING_TYPES: [&str; 2] = ["FormControl", "UntypedFormControl"];

/// Factory methods of a form builder.
pub const BUILDER_METHODS: [&str; 4] = ["control", "group", "record", "array"];

/// Is this node a form control/group/record/array construction, in any of the
/// three encodings?
pub fn is_forms_construction(cursor: &Cursor<'_>) -> bool {
    is_control_constructor(cursor.node(), &CONTROL_TYPES)
        || is_builder_factory(cursor.node(), &BUILDER_METHODS)
        || is_inline_builder_control(cursor)
}

/// Like [`is_forms_construction`], restricted to constructions that create a
/// single control.
pub fn is_control_creating_construction(cursor: &Cursor<'_>) -> bool {
    is_control_constructor(cursor.node(), &CONTROL_CREATING_TYPES)
        || is_builder_factory(cursor.node(), &["control"])
        || is_inline_builder_control(cursor)
}

/// Is this node positionally the `index`-th constructor/factory argument of a
/// recognized construction?
pub fn is_ith_argument(cursor: &Cursor<'_>, index: usize) -> bool {
    let Some(parent) = cursor.parent() else {
        return false;
    };
    if !is_forms_construction(parent) {
        return false;
    }
    let field = match parent.node() {
        // Inline encoding: the construction is an array literal.
        Node::ArrayExpression { .. } => "elements",
        _ => "arguments",
    };
    cursor.field() == Some(field) && cursor.index() == Some(index)
}

/// The positional arguments of a recognized construction: call/constructor
/// arguments, or the elements of an inline control definition.
pub fn construction_arguments(node: &Node) -> Option<&[Node]> {
    match node {
        Node::CallExpression { arguments, .. } | Node::NewExpression { arguments, .. } => {
            Some(arguments)
        }
        Node::ArrayExpression { elements } => Some(elements),
        _ => None,
    }
}

/// Mutable twin of [`construction_arguments`], for editing a cloned
/// construction.
pub fn construction_arguments_mut(node: &mut Node) -> Option<&mut Vec<Node>> {
    match node {
        Node::CallExpression { arguments, .. } | Node::NewExpression { arguments, .. } => {
            Some(arguments)
        }
        Node::ArrayExpression { elements } => Some(elements),
        _ => None,
    }
}

/// Encoding 1: `new FormControl(...)` and friends.
fn is_control_constructor(node: &Node, names: &[&str]) -> bool {
    match node {
        Node::NewExpression { callee, .. } => callee
            .identifier_name()
            .is_some_and(|name| names.contains(&name)),
        _ => false,
    }
}

/// Encoding 2: `builder.control(...)`, `builder.group(...)`, ...
fn is_builder_factory(node: &Node, methods: &[&str]) -> bool {
    let Node::CallExpression { callee, .. } = node else {
        return false;
    };
    match callee.as_ref() {
        Node::MemberExpression {
            property,
            computed: false,
            ..
        } => property
            .identifier_name()
            .is_some_and(|name| methods.contains(&name)),
        _ => false,
    }
}

/// Encoding 3: an array literal defining a control inline inside the first
/// argument of a `group`/`record`/`array` factory call.
fn is_inline_builder_control(cursor: &Cursor<'_>) -> bool {
    if !matches!(cursor.node(), Node::ArrayExpression { .. }) {
        return false;
    }

    // group/record: the array is a property value of the first (object)
    // argument.
    if cursor.field() == Some("value") {
        if let Some(property) = cursor.parent() {
            if matches!(property.node(), Node::ObjectProperty { .. }) {
                if let Some(object) = property.parent() {
                    if matches!(object.node(), Node::ObjectExpression { .. })
                        && object.field() == Some("arguments")
                        && object.index() == Some(0)
                    {
                        if let Some(factory) = object.parent() {
                            return is_builder_factory(factory.node(), &["group", "record"]);
                        }
                    }
                }
            }
        }
        return false;
    }

    // array: the array is an element of the first (array) argument.
    if cursor.field() == Some("elements") {
        if let Some(outer) = cursor.parent() {
            if matches!(outer.node(), Node::ArrayExpression { .. })
                && outer.field() == Some("arguments")
                && outer.index() == Some(0)
            {
                if let Some(factory) = outer.parent() {
                    return is_builder_factory(factory.node(), &["array"]);
                }
            }
        }
    }
    false
}
