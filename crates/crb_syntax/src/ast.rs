//! Abstract Syntax Tree definitions for crb
//!
//! This module defines the node kinds the code generator understands. The tree is produced once by the parser and
//! consumed read-only by the emitter.

use std::fmt;

/// Identifier text as written in the source
pub type Ident = String;

/// A program is a sequence of top-level statements
///
/// `None` entries are empty slots left by the parser (e.g. blank statements); they carry no output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Option<Node>>,
}

// ============================================================================
// Node kinds
// ============================================================================

/// Tag identifying which grammar production a [`Node`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ImportDeclaration,
    FunctionDeclaration,
    BlockStatement,
    ReturnStatement,
    ExpressionStatement,
    VariableDeclaration,
    CallExpression,
    BinaryExpression,
    Literal,
    Identifier,
}

impl NodeKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Program,
        NodeKind::ImportDeclaration,
        NodeKind::FunctionDeclaration,
        NodeKind::BlockStatement,
        NodeKind::ReturnStatement,
        NodeKind::ExpressionStatement,
        NodeKind::VariableDeclaration,
        NodeKind::CallExpression,
        NodeKind::BinaryExpression,
        NodeKind::Literal,
        NodeKind::Identifier,
    ];

    /// The tag spelling used by the parser.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ImportDeclaration => "ImportDeclaration",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::Literal => "Literal",
            NodeKind::Identifier => "Identifier",
        }
    }

    /// Look up a kind by its tag spelling.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax tree node.
///
/// Every variant except [`Node::Unsupported`] has an emission rule. `Unsupported` keeps the tag of a node the parser
/// produced outside the known set so the emitter can report it by name.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    ImportDeclaration(ImportDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    BlockStatement(BlockStatement),
    ReturnStatement(ReturnStatement),
    ExpressionStatement(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    CallExpression(CallExpression),
    BinaryExpression(BinaryExpression),
    Literal(Literal),
    Identifier(Identifier),
    Unsupported(UnsupportedNode),
}

impl Node {
    /// The kind of this node, or `None` for [`Node::Unsupported`].
    pub fn kind(&self) -> Option<NodeKind> {
        Some(match self {
            Node::Program(_) => NodeKind::Program,
            Node::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Node::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Node::BlockStatement(_) => NodeKind::BlockStatement,
            Node::ReturnStatement(_) => NodeKind::ReturnStatement,
            Node::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Node::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Node::CallExpression(_) => NodeKind::CallExpression,
            Node::BinaryExpression(_) => NodeKind::BinaryExpression,
            Node::Literal(_) => NodeKind::Literal,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::Unsupported(_) => return None,
        })
    }

    /// The tag spelling of this node, including unsupported tags.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Unsupported(node) => node.kind.as_str(),
            other => other.kind().map(NodeKind::as_str).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Where an import points: a system header (`<...>`) or a pre-quoted local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSource {
    pub is_standard_library: bool,
    pub value: String,
}

/// `#include` producing declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub source: ImportSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Ident,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
    pub body: BlockStatement,
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Ident,
    pub typing: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<Ident>, typing: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            typing: typing.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub mutable: bool,
    pub name: Ident,
    pub typing: TypeRef,
    pub value: Box<Node>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub body: Vec<Option<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

// ============================================================================
// Expressions
// ============================================================================

/// A call. The callee also doubles as a cast target (`foo*int(x)` prints `int*(x)`).
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Ident,
    pub arguments: Vec<Node>,
}

/// Infix operation; `operator` is printed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Node>,
    pub operator: String,
    pub right: Box<Node>,
}

/// Literal text, already quoted/escaped by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: Ident,
}

/// A node whose kind has no emission rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedNode {
    pub kind: String,
}

// ============================================================================
// Types
// ============================================================================

/// A type name as written in the source, e.g. `int` or `ptr*char`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Node {
    pub fn program(body: Vec<Option<Node>>) -> Node {
        Node::Program(Program { body })
    }

    /// `#include <value>` when `is_standard_library`, otherwise `#include value`.
    pub fn import(is_standard_library: bool, value: impl Into<String>) -> Node {
        Node::ImportDeclaration(ImportDeclaration {
            source: ImportSource {
                is_standard_library,
                value: value.into(),
            },
        })
    }

    pub fn function(
        name: impl Into<Ident>,
        return_type: impl Into<TypeRef>,
        params: Vec<Param>,
        body: Vec<Option<Node>>,
    ) -> Node {
        Node::FunctionDeclaration(FunctionDeclaration {
            name: name.into(),
            return_type: return_type.into(),
            params,
            body: BlockStatement { body },
        })
    }

    pub fn block(body: Vec<Option<Node>>) -> Node {
        Node::BlockStatement(BlockStatement { body })
    }

    pub fn ret(argument: Node) -> Node {
        Node::ReturnStatement(ReturnStatement {
            argument: Box::new(argument),
        })
    }

    pub fn expr_stmt(expression: Node) -> Node {
        Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    pub fn var(mutable: bool, name: impl Into<Ident>, typing: impl Into<TypeRef>, value: Node) -> Node {
        Node::VariableDeclaration(VariableDeclaration {
            mutable,
            name: name.into(),
            typing: typing.into(),
            value: Box::new(value),
        })
    }

    pub fn call(callee: impl Into<Ident>, arguments: Vec<Node>) -> Node {
        Node::CallExpression(CallExpression {
            callee: callee.into(),
            arguments,
        })
    }

    pub fn binary(left: Node, operator: impl Into<String>, right: Node) -> Node {
        Node::BinaryExpression(BinaryExpression {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        })
    }

    pub fn literal(value: impl Into<String>) -> Node {
        Node::Literal(Literal { value: value.into() })
    }

    pub fn ident(name: impl Into<Ident>) -> Node {
        Node::Identifier(Identifier { name: name.into() })
    }

    pub fn unsupported(kind: impl Into<String>) -> Node {
        Node::Unsupported(UnsupportedNode { kind: kind.into() })
    }
}
