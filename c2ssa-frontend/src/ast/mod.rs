//! Abstract Syntax Tree definitions for C expressions
//! 
//! This module defines the expression nodes produced by the parser and
//! consumed by the SSA translator. One enum variant per grammar production.

pub mod ops;
pub mod expressions;

pub use ops::{AssignOp, BinaryOp, IncDec, OperatorTier, TypeQueryKind, UnaryOp};
pub use expressions::{
    Designator, Expression, ExpressionKind, Initializer, InitializerItem, InitializerKind,
    InitializerList, PostfixSuffix, TypeName, TypeQueryOperand,
};

pub use c2ssa_common::NodeId;

/// Node ID generator for AST nodes
#[derive(Debug, Clone, Default)]
pub struct NodeIdGenerator {
    next_id: NodeId,
}

impl NodeIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }
    
    pub fn next(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
