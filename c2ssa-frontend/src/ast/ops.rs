//! Operator definitions for C expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Precedence tier a binary operator is translated under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorTier {
    Multiplicative,
    Additive,
    Relational,
    LogicalAnd,
    LogicalOr,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Multiplicative tier
    Mul, Div, Mod, LeftShift, RightShift, BitAnd,

    // Additive tier
    Add, Sub, BitOr, BitXor,

    // Relational tier
    Equal, NotEqual, Less, LessEqual, Greater, GreaterEqual,

    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn tier(self) -> OperatorTier {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod
            | BinaryOp::LeftShift | BinaryOp::RightShift | BinaryOp::BitAnd => OperatorTier::Multiplicative,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::BitOr | BinaryOp::BitXor => OperatorTier::Additive,
            BinaryOp::Equal | BinaryOp::NotEqual | BinaryOp::Less
            | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => OperatorTier::Relational,
            BinaryOp::LogicalAnd => OperatorTier::LogicalAnd,
            BinaryOp::LogicalOr => OperatorTier::LogicalOr,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::BitAnd => "&",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        };
        write!(f, "{}", op_str)
    }
}

/// Prefix unary operators applied to a cast expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus, Minus, LogicalNot, BitNot,
    Dereference, AddressOf,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::LogicalNot => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Dereference => "*",
            UnaryOp::AddressOf => "&",
        };
        write!(f, "{}", op_str)
    }
}

/// `++` / `--`, prefix or postfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncDec {
    Increment,
    Decrement,
}

impl fmt::Display for IncDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncDec::Increment => write!(f, "++"),
            IncDec::Decrement => write!(f, "--"),
        }
    }
}

/// Assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    MulAssign, DivAssign, ModAssign,
    AddAssign, SubAssign,
    LeftShiftAssign, RightShiftAssign,
    BitAndAssign, BitXorAssign, BitOrAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment applies, `None` for plain `=`
    pub fn binary_op(self) -> Option<BinaryOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::MulAssign => Some(BinaryOp::Mul),
            AssignOp::DivAssign => Some(BinaryOp::Div),
            AssignOp::ModAssign => Some(BinaryOp::Mod),
            AssignOp::AddAssign => Some(BinaryOp::Add),
            AssignOp::SubAssign => Some(BinaryOp::Sub),
            AssignOp::LeftShiftAssign => Some(BinaryOp::LeftShift),
            AssignOp::RightShiftAssign => Some(BinaryOp::RightShift),
            AssignOp::BitAndAssign => Some(BinaryOp::BitAnd),
            AssignOp::BitXorAssign => Some(BinaryOp::BitXor),
            AssignOp::BitOrAssign => Some(BinaryOp::BitOr),
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.binary_op() {
            None => write!(f, "="),
            Some(op) => write!(f, "{}=", op),
        }
    }
}

/// `sizeof` or `_Alignof`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeQueryKind {
    Sizeof,
    Alignof,
}

impl fmt::Display for TypeQueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeQueryKind::Sizeof => write!(f, "sizeof"),
            TypeQueryKind::Alignof => write!(f, "_Alignof"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_tiers() {
        for op in [BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod, BinaryOp::LeftShift, BinaryOp::RightShift, BinaryOp::BitAnd] {
            assert_eq!(op.tier(), OperatorTier::Multiplicative);
        }
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::BitOr, BinaryOp::BitXor] {
            assert_eq!(op.tier(), OperatorTier::Additive);
        }
        assert_eq!(BinaryOp::GreaterEqual.tier(), OperatorTier::Relational);
        assert_eq!(BinaryOp::LogicalAnd.tier(), OperatorTier::LogicalAnd);
        assert_eq!(BinaryOp::LogicalOr.tier(), OperatorTier::LogicalOr);
    }

    #[test]
    fn test_assign_op_display() {
        assert_eq!(AssignOp::Assign.to_string(), "=");
        assert_eq!(AssignOp::LeftShiftAssign.to_string(), "<<=");
        assert_eq!(AssignOp::BitXorAssign.to_string(), "^=");
        assert_eq!(AssignOp::AddAssign.binary_op(), Some(BinaryOp::Add));
    }
}
