//! SSA instruction kinds

use super::ops::{IrBinaryOp, IrUnaryOp};
use super::values::Constant;
use super::variable::Variable;
use c2ssa_common::{BlockId, ValueId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What defines a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstKind {
    Const(Constant),

    /// Value-only declaration: a name with no defined value yet
    Undefined { name: String },

    FunctionRef { name: String },

    Binary {
        op: IrBinaryOp,
        lhs: ValueId,
        rhs: ValueId,
    },

    Unary {
        op: IrUnaryOp,
        operand: ValueId,
    },

    Call {
        callee: ValueId,
        args: Vec<ValueId>,
    },

    /// Member or element read, `.`, `->` and `[]` alike
    Member { object: ValueId, key: ValueId },

    /// Member or element write; the value itself has type void
    MemberWrite {
        object: ValueId,
        key: ValueId,
        value: ValueId,
    },

    /// Object built from an initializer list
    MakeObject { fields: Vec<(ValueId, ValueId)> },

    /// Pointer-producing constant over a variable
    AddressOf { variable: Variable },

    /// Pointee read through an opaque pointer
    Load { pointer: ValueId },

    /// Type application, the target type is the value's type
    Cast { value: ValueId },

    Phi { incoming: Vec<(BlockId, ValueId)> },
}

impl InstKind {
    /// Values this instruction reads
    pub fn operands(&self) -> Vec<ValueId> {
        match self {
            InstKind::Const(_) | InstKind::Undefined { .. } | InstKind::FunctionRef { .. } => Vec::new(),
            InstKind::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            InstKind::Unary { operand, .. } => vec![*operand],
            InstKind::Call { callee, args } => std::iter::once(*callee).chain(args.iter().copied()).collect(),
            InstKind::Member { object, key } => vec![*object, *key],
            InstKind::MemberWrite { object, key, value } => vec![*object, *key, *value],
            InstKind::MakeObject { fields } => fields.iter().flat_map(|(k, v)| [*k, *v]).collect(),
            InstKind::AddressOf { .. } => Vec::new(),
            InstKind::Load { pointer } => vec![*pointer],
            InstKind::Cast { value } => vec![*value],
            InstKind::Phi { incoming } => incoming.iter().map(|(_, v)| *v).collect(),
        }
    }

    pub fn is_phi(&self) -> bool {
        matches!(self, InstKind::Phi { .. })
    }
}

impl fmt::Display for InstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstKind::Const(constant) => write!(f, "const {}", constant),
            InstKind::Undefined { name } => write!(f, "undef {}", name),
            InstKind::FunctionRef { name } => write!(f, "@{}", name),
            InstKind::Binary { op, lhs, rhs } => write!(f, "{} %{}, %{}", op, lhs, rhs),
            InstKind::Unary { op, operand } => write!(f, "{} %{}", op, operand),
            InstKind::Call { callee, args } => {
                write!(f, "call %{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "%{}", arg)?;
                }
                write!(f, ")")
            }
            InstKind::Member { object, key } => write!(f, "member %{}[%{}]", object, key),
            InstKind::MemberWrite { object, key, value } => {
                write!(f, "store %{}[%{}], %{}", object, key, value)
            }
            InstKind::MakeObject { fields } => {
                write!(f, "object {{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 { write!(f, ",")?; }
                    write!(f, " %{}: %{}", key, value)?;
                }
                write!(f, " }}")
            }
            InstKind::AddressOf { variable } => write!(f, "addr {}", variable),
            InstKind::Load { pointer } => write!(f, "load %{}", pointer),
            InstKind::Cast { value } => write!(f, "cast %{}", value),
            InstKind::Phi { incoming } => {
                write!(f, "phi ")?;
                for (i, (block, value)) in incoming.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "[%{}, bb{}]", value, block)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let add = InstKind::Binary { op: IrBinaryOp::Add, lhs: 1, rhs: 2 };
        assert_eq!(add.to_string(), "add %1, %2");

        let call = InstKind::Call { callee: 0, args: vec![1, 2] };
        assert_eq!(call.to_string(), "call %0(%1, %2)");

        let phi = InstKind::Phi { incoming: vec![(1, 4), (2, 5)] };
        assert_eq!(phi.to_string(), "phi [%4, bb1], [%5, bb2]");
    }

    #[test]
    fn test_operands() {
        let write = InstKind::MemberWrite { object: 1, key: 2, value: 3 };
        assert_eq!(write.operands(), vec![1, 2, 3]);
        assert!(InstKind::Const(Constant::Int(0)).operands().is_empty());
    }
}
