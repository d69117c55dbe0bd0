//! Expression AST nodes
//! 
//! Children that a well-formed tree always has are still `Option`s: the
//! parser of an interactive tool may hand over partial trees, and the
//! translator has to cope with whatever is missing.

use super::ops::{AssignOp, BinaryOp, IncDec, TypeQueryKind, UnaryOp};
use crate::ast::NodeId;
use c2ssa_common::SourceSpan;
use serde::{Deserialize, Serialize};

/// AST Expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub node_id: NodeId,
    pub kind: ExpressionKind,
    pub span: SourceSpan,
    /// Source text of the whole node, used to label IR values
    pub text: String,
}

impl Expression {
    pub fn new(node_id: NodeId, kind: ExpressionKind, span: SourceSpan, text: impl Into<String>) -> Self {
        Self {
            node_id,
            kind,
            span,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Identifier reference
    Identifier(String),

    /// Numeric or character constant, raw token text (`0x1F`, `'\n'`, `1e10f`)
    Constant(String),

    /// One or more adjacent string literal tokens, raw text with quotes
    StringLiteral(Vec<String>),

    /// `( expression )`
    Paren(Option<Box<Expression>>),

    /// Primary expression followed by calls, indexing, member access and `++`/`--`,
    /// suffixes in source order
    Postfix {
        base: Option<Box<Expression>>,
        suffixes: Vec<PostfixSuffix>,
    },

    /// `op cast-expression`
    Unary {
        op: UnaryOp,
        operand: Option<Box<Expression>>,
    },

    /// Prefix `++x` / `--x`
    PreIncDec {
        op: IncDec,
        operand: Option<Box<Expression>>,
    },

    /// `sizeof` / `_Alignof`
    TypeQuery {
        kind: TypeQueryKind,
        operand: TypeQueryOperand,
    },

    /// GNU `&&label`
    LabelAddress(String),

    /// `( type-name ) cast-expression`
    Cast {
        type_name: TypeName,
        operand: Option<Box<Expression>>,
    },

    /// `( type-name ) { initializer-list }`
    CompoundLiteral {
        type_name: TypeName,
        initializers: InitializerList,
    },

    Binary {
        op: BinaryOp,
        left: Option<Box<Expression>>,
        right: Option<Box<Expression>>,
    },

    /// `condition ? then_expr : else_expr`
    Conditional {
        condition: Option<Box<Expression>>,
        then_expr: Option<Box<Expression>>,
        else_expr: Option<Box<Expression>>,
    },

    /// `target op value`, the value may be a braced initializer list
    Assignment {
        op: AssignOp,
        target: Option<Box<Expression>>,
        value: Option<Box<Initializer>>,
    },
}

/// Operator following a postfix expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostfixSuffix {
    /// `( arguments )`
    Call(Vec<Expression>),

    /// `[ index ]`
    Index(Option<Box<Expression>>),

    /// `.name` or `->name`
    Member { name: String, arrow: bool },

    /// `++` / `--`
    IncDec(IncDec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeQueryOperand {
    Type(TypeName),
    /// `sizeof expr`; the operand is never evaluated
    Expression(Box<Expression>),
}

/// A type name as written in casts and `sizeof`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    /// Specifier words, e.g. `["unsigned", "long"]` or `["struct", "point"]`
    pub specifiers: Vec<String>,
    /// Number of `*` in the abstract declarator
    pub pointer_depth: u32,
    /// Number of `[]` in the abstract declarator
    pub array_depth: u32,
    pub span: SourceSpan,
}

/// Initializer: a single expression or a braced list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initializer {
    pub node_id: NodeId,
    pub kind: InitializerKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InitializerKind {
    Expression(Expression),
    List(InitializerList),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerList {
    pub items: Vec<InitializerItem>,
    pub span: SourceSpan,
}

/// One element of an initializer list, optionally designated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerItem {
    pub designators: Vec<Designator>,
    pub initializer: Initializer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Designator {
    /// `[ index ] =`
    Index(Option<Expression>),

    /// `.member =`
    Member(String),
}
