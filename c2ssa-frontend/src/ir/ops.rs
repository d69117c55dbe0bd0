//! IR operators

use super::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operations in IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrBinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div, Mod,

    // Bitwise
    Shl, Shr, And, Or, Xor,

    // Comparison (return bool)
    Eq, NotEq, Lt, LtEq, Gt, GtEq,

    // Logical, both operands are always evaluated
    LogicAnd, LogicOr,
}

impl IrBinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            IrBinaryOp::Eq | IrBinaryOp::NotEq | IrBinaryOp::Lt | IrBinaryOp::LtEq | IrBinaryOp::Gt | IrBinaryOp::GtEq
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, IrBinaryOp::LogicAnd | IrBinaryOp::LogicOr)
    }

    /// Result type for operands of type `lhs` and `rhs`
    pub fn result_type(self, lhs: &Type, rhs: &Type) -> Type {
        if self.is_comparison() || self.is_logical() {
            Type::Boolean
        } else if lhs.is_float() || rhs.is_float() {
            Type::Float
        } else if *lhs == Type::Any {
            rhs.clone()
        } else {
            lhs.clone()
        }
    }
}

impl fmt::Display for IrBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            IrBinaryOp::Add => "add",
            IrBinaryOp::Sub => "sub",
            IrBinaryOp::Mul => "mul",
            IrBinaryOp::Div => "div",
            IrBinaryOp::Mod => "mod",
            IrBinaryOp::Shl => "shl",
            IrBinaryOp::Shr => "shr",
            IrBinaryOp::And => "and",
            IrBinaryOp::Or => "or",
            IrBinaryOp::Xor => "xor",
            IrBinaryOp::Eq => "eq",
            IrBinaryOp::NotEq => "ne",
            IrBinaryOp::Lt => "lt",
            IrBinaryOp::LtEq => "le",
            IrBinaryOp::Gt => "gt",
            IrBinaryOp::GtEq => "ge",
            IrBinaryOp::LogicAnd => "land",
            IrBinaryOp::LogicOr => "lor",
        };
        write!(f, "{}", op_str)
    }
}

/// Unary operations in IR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrUnaryOp {
    Plus,       // Identity
    Neg,        // Arithmetic negation
    Not,        // Logical not
    BitwiseNot,
}

impl IrUnaryOp {
    pub fn result_type(self, operand: &Type) -> Type {
        match self {
            IrUnaryOp::Not => Type::Boolean,
            _ => operand.clone(),
        }
    }
}

impl fmt::Display for IrUnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            IrUnaryOp::Plus => "plus",
            IrUnaryOp::Neg => "neg",
            IrUnaryOp::Not => "not",
            IrUnaryOp::BitwiseNot => "bnot",
        };
        write!(f, "{}", op_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_types() {
        assert_eq!(IrBinaryOp::Lt.result_type(&Type::Number, &Type::Number), Type::Boolean);
        assert_eq!(IrBinaryOp::Add.result_type(&Type::Number, &Type::Float), Type::Float);
        assert_eq!(IrBinaryOp::Add.result_type(&Type::Any, &Type::Number), Type::Number);
        assert_eq!(IrUnaryOp::Not.result_type(&Type::Number), Type::Boolean);
    }
}
