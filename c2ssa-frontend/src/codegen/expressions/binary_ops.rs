//! Binary operator translation

use super::{ExpressionTranslator, Translated};
use crate::ast::{BinaryOp, Expression};
use crate::ir::IrBinaryOp;
use log::trace;

/// IR operator for a source operator
pub fn ir_binary_op(op: BinaryOp) -> IrBinaryOp {
    match op {
        // multiplicative tier
        BinaryOp::Mul => IrBinaryOp::Mul,
        BinaryOp::Div => IrBinaryOp::Div,
        BinaryOp::Mod => IrBinaryOp::Mod,
        BinaryOp::LeftShift => IrBinaryOp::Shl,
        BinaryOp::RightShift => IrBinaryOp::Shr,
        BinaryOp::BitAnd => IrBinaryOp::And,
        // additive tier
        BinaryOp::Add => IrBinaryOp::Add,
        BinaryOp::Sub => IrBinaryOp::Sub,
        BinaryOp::BitOr => IrBinaryOp::Or,
        BinaryOp::BitXor => IrBinaryOp::Xor,
        // relational tier
        BinaryOp::Equal => IrBinaryOp::Eq,
        BinaryOp::NotEqual => IrBinaryOp::NotEq,
        BinaryOp::Less => IrBinaryOp::Lt,
        BinaryOp::LessEqual => IrBinaryOp::LtEq,
        BinaryOp::Greater => IrBinaryOp::Gt,
        BinaryOp::GreaterEqual => IrBinaryOp::GtEq,
        BinaryOp::LogicalAnd => IrBinaryOp::LogicAnd,
        BinaryOp::LogicalOr => IrBinaryOp::LogicOr,
    }
}

/// Left then right as r-values. When the right side is missing or has no
/// value the left side is returned unchanged.
pub fn translate_binary(
    cx: &mut ExpressionTranslator,
    op: BinaryOp,
    left: Option<&Expression>,
    right: Option<&Expression>,
) -> Translated {
    trace!("{:?} tier operator `{}`", op.tier(), op);
    let lhs = cx.required_rvalue(left, &format!("left operand of `{}`", op));
    let rhs = match right {
        Some(right) => cx.translate_rvalue(right),
        None => {
            cx.error(format!("missing right operand of `{}`", op));
            None
        }
    };

    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => Translated::value(cx.builder.emit_binary(ir_binary_op(op), lhs, rhs)),
        (lhs, _) => {
            trace!("Operand of `{}` has no value, keeping the left operand", op);
            Translated { value: lhs, variable: None }
        }
    }
}
