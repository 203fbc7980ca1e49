//! Syntax tree for Angular/TypeScript-style programs
//!
//! The tree is a closed enum over program-construct kinds so that every
//! mutator's match logic is checked for missing cases at compile time.
//! Nodes carry no source positions and no identity beyond structure;
//! `Clone` is a deep copy and `PartialEq` is structural equality.

/// Binary operators, with the logical operators folded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `===`
    EqEqEq,
    /// `!==`
    NotEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::EqEq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::EqEqEq => "===",
            BinaryOp::NotEqEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

/// Assignment operators. `Assign` is plain `=`; the rest are compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    /// `&&=`
    AndAssign,
    /// `||=`
    OrAssign,
    /// `??=`
    NullishAssign,
}

/// A syntax-tree node.
///
/// Children that are lists keep their source order. Named imports are plain
/// strings rather than identifier nodes, so identifier scans never touch an
/// import statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program {
        body: Vec<Node>,
    },
    ImportDeclaration {
        specifiers: Vec<String>,
        source: String,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    VariableDeclaration {
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    ClassDeclaration {
        name: String,
        body: Vec<Node>,
    },
    /// A class field, possibly with an initializer.
    ClassProperty {
        key: Box<Node>,
        value: Option<Box<Node>>,
    },
    FunctionDeclaration {
        name: String,
        params: Vec<Node>,
        body: Box<Node>,
    },
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    TryStatement {
        block: Box<Node>,
        handler: Option<Box<Node>>,
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Option<Box<Node>>,
        body: Box<Node>,
    },
    BinaryExpression {
        operator: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryExpression {
        operator: UnaryOp,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: UpdateOp,
        prefix: bool,
        argument: Box<Node>,
    },
    AssignmentExpression {
        operator: AssignOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
        /// `callee?.(...)`
        optional: bool,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        /// `object[property]` rather than `object.property`
        computed: bool,
        /// `object?.property`
        optional: bool,
    },
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
    },
    Identifier {
        name: String,
    },
    StringLiteral {
        value: String,
    },
    NumberLiteral {
        value: f64,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
    RegexLiteral {
        pattern: String,
        flags: String,
    },
    ArrayExpression {
        elements: Vec<Node>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    ObjectProperty {
        key: Box<Node>,
        value: Box<Node>,
    },
}

/// The syntactic position of an identifier, as seen by [`Node::visit_identifiers_mut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentRole {
    /// An ordinary use: reference, binding, callee, argument, ...
    Use,
    /// The key of an object property or class field.
    Key,
    /// The property of a non-computed member access (`obj.prop`).
    StaticMemberProperty,
}

impl Node {
    pub fn ident(name: impl Into<String>) -> Node {
        Node::Identifier { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::StringLiteral { value: value.into() }
    }

    pub fn number(value: f64) -> Node {
        Node::NumberLiteral { value }
    }

    pub fn boolean(value: bool) -> Node {
        Node::BooleanLiteral { value }
    }

    /// The `undefined` identifier.
    pub fn undefined() -> Node {
        Node::ident("undefined")
    }

    pub fn array(elements: Vec<Node>) -> Node {
        Node::ArrayExpression { elements }
    }

    pub fn object(properties: Vec<Node>) -> Node {
        Node::ObjectExpression { properties }
    }

    /// An object property with an identifier key.
    pub fn property(key: &str, value: Node) -> Node {
        Node::ObjectProperty {
            key: Box::new(Node::ident(key)),
            value: Box::new(value),
        }
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
        Node::CallExpression {
            callee: Box::new(callee),
            arguments,
            optional: false,
        }
    }

    /// `new Name(arguments)`
    pub fn constructor_call(name: &str, arguments: Vec<Node>) -> Node {
        Node::NewExpression {
            callee: Box::new(Node::ident(name)),
            arguments,
        }
    }

    /// Non-computed member access `object.property`.
    pub fn member(object: Node, property: &str) -> Node {
        Node::MemberExpression {
            object: Box::new(object),
            property: Box::new(Node::ident(property)),
            computed: false,
            optional: false,
        }
    }

    /// `object.method(arguments)`
    pub fn method_call(object: Node, method: &str, arguments: Vec<Node>) -> Node {
        Node::call(Node::member(object, method), arguments)
    }

    pub fn binary(operator: BinaryOp, left: Node, right: Node) -> Node {
        Node::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOp, argument: Node) -> Node {
        Node::UnaryExpression {
            operator,
            argument: Box::new(argument),
        }
    }

    pub fn import(source: &str, specifiers: &[&str]) -> Node {
        Node::ImportDeclaration {
            specifiers: specifiers.iter().map(|s| s.to_string()).collect(),
            source: source.to_string(),
        }
    }

    /// `const name = init;`
    pub fn var_decl(name: &str, init: Node) -> Node {
        Node::VariableDeclaration {
            declarations: vec![Node::VariableDeclarator {
                id: Box::new(Node::ident(name)),
                init: Some(Box::new(init)),
            }],
        }
    }

    pub fn expr_stmt(expression: Node) -> Node {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    pub fn block(body: Vec<Node>) -> Node {
        Node::BlockStatement { body }
    }

    pub fn program(body: Vec<Node>) -> Node {
        Node::Program { body }
    }

    /// The name of this node if it is an identifier.
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Node::Identifier { name } => Some(name),
            _ => None,
        }
    }

    pub fn is_object_expression(&self) -> bool {
        matches!(self, Node::ObjectExpression { .. })
    }

    pub fn is_empty_array(&self) -> bool {
        matches!(self, Node::ArrayExpression { elements } if elements.is_empty())
    }

    /// `null`, `undefined`, or `[]` — the trivially-empty values that
    /// validation and default-value rules leave alone.
    pub fn is_nullish_or_empty_array(&self) -> bool {
        match self {
            Node::NullLiteral => true,
            Node::Identifier { name } => name == "undefined",
            Node::ArrayExpression { elements } => elements.is_empty(),
            _ => false,
        }
    }

    /// Visit every identifier node in this subtree, in source order, reporting
    /// its syntactic role. Import specifiers are plain strings and are never
    /// visited.
    pub fn visit_identifiers_mut(&mut self, f: &mut impl FnMut(&mut String, IdentRole)) {
        self.visit_idents(IdentRole::Use, f);
    }

    /// Append `suffix` to every identifier whose text equals `name`, in every
    /// role. Matching is textual only; there is no scope resolution.
    pub fn rename_identifiers(&mut self, name: &str, suffix: &str) {
        self.visit_identifiers_mut(&mut |ident, _| {
            if ident == name {
                ident.push_str(suffix);
            }
        });
    }

    fn visit_idents(&mut self, role: IdentRole, f: &mut impl FnMut(&mut String, IdentRole)) {
        use IdentRole::Use;
        match self {
            Node::Identifier { name } => f(name, role),
            Node::Program { body }
            | Node::BlockStatement { body }
            | Node::ClassDeclaration { body, .. } => {
                for node in body {
                    node.visit_idents(Use, f);
                }
            }
            Node::ImportDeclaration { .. }
            | Node::StringLiteral { .. }
            | Node::NumberLiteral { .. }
            | Node::BooleanLiteral { .. }
            | Node::NullLiteral
            | Node::RegexLiteral { .. } => {}
            Node::ExpressionStatement { expression } => expression.visit_idents(Use, f),
            Node::VariableDeclaration { declarations } => {
                for node in declarations {
                    node.visit_idents(Use, f);
                }
            }
            Node::VariableDeclarator { id, init } => {
                id.visit_idents(Use, f);
                if let Some(init) = init {
                    init.visit_idents(Use, f);
                }
            }
            Node::ClassProperty { key, value } => {
                key.visit_idents(IdentRole::Key, f);
                if let Some(value) = value {
                    value.visit_idents(Use, f);
                }
            }
            Node::FunctionDeclaration { params, body, .. } => {
                for node in params {
                    node.visit_idents(Use, f);
                }
                body.visit_idents(Use, f);
            }
            Node::ReturnStatement { argument } => {
                if let Some(argument) = argument {
                    argument.visit_idents(Use, f);
                }
            }
            Node::IfStatement { test, consequent, alternate } => {
                test.visit_idents(Use, f);
                consequent.visit_idents(Use, f);
                if let Some(alternate) = alternate {
                    alternate.visit_idents(Use, f);
                }
            }
            Node::TryStatement { block, handler, finalizer } => {
                block.visit_idents(Use, f);
                if let Some(handler) = handler {
                    handler.visit_idents(Use, f);
                }
                if let Some(finalizer) = finalizer {
                    finalizer.visit_idents(Use, f);
                }
            }
            Node::CatchClause { param, body } => {
                if let Some(param) = param {
                    param.visit_idents(Use, f);
                }
                body.visit_idents(Use, f);
            }
            Node::BinaryExpression { left, right, .. }
            | Node::AssignmentExpression { left, right, .. } => {
                left.visit_idents(Use, f);
                right.visit_idents(Use, f);
            }
            Node::UnaryExpression { argument, .. }
            | Node::UpdateExpression { argument, .. } => argument.visit_idents(Use, f),
            Node::ConditionalExpression { test, consequent, alternate } => {
                test.visit_idents(Use, f);
                consequent.visit_idents(Use, f);
                alternate.visit_idents(Use, f);
            }
            Node::CallExpression { callee, arguments, .. } => {
                callee.visit_idents(Use, f);
                for node in arguments {
                    node.visit_idents(Use, f);
                }
            }
            Node::NewExpression { callee, arguments } => {
                callee.visit_idents(Use, f);
                for node in arguments {
                    node.visit_idents(Use, f);
                }
            }
            Node::MemberExpression { object, property, computed, .. } => {
                object.visit_idents(Use, f);
                let role = if *computed {
                    Use
                } else {
                    IdentRole::StaticMemberProperty
                };
                property.visit_idents(role, f);
            }
            Node::ArrowFunctionExpression { params, body } => {
                for node in params {
                    node.visit_idents(Use, f);
                }
                body.visit_idents(Use, f);
            }
            Node::ArrayExpression { elements } => {
                for node in elements {
                    node.visit_idents(Use, f);
                }
            }
            Node::ObjectExpression { properties } => {
                for node in properties {
                    node.visit_idents(Use, f);
                }
            }
            Node::ObjectProperty { key, value } => {
                key.visit_idents(IdentRole::Key, f);
                value.visit_idents(Use, f);
            }
        }
    }
}
