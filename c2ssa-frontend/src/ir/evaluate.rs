//! Read-only constant evaluation over a function's values.
//!
//! Phi values are resolved by walking the blocks from the entry, taking
//! each branch whose condition is itself constant. A phi on a block the
//! walk does not reach, or behind a non-constant branch, has no constant.

use super::blocks::Terminator;
use super::function::Function;
use super::instructions::InstKind;
use super::ops::{IrBinaryOp, IrUnaryOp};
use super::types::Type;
use super::values::Constant;
use c2ssa_common::{BlockId, ValueId};

impl Function {
    /// Constant `id` evaluates to along the path actually taken
    pub fn const_value(&self, id: ValueId) -> Option<Constant> {
        let value = self.value(id)?;
        match &value.kind {
            InstKind::Const(constant) => Some(constant.clone()),
            InstKind::Binary { op, lhs, rhs } => {
                fold_binary(*op, self.const_value(*lhs)?, self.const_value(*rhs)?)
            }
            InstKind::Unary { op, operand } => fold_unary(*op, self.const_value(*operand)?),
            InstKind::Cast { value: inner } => convert(self.const_value(*inner)?, &value.ty),
            InstKind::Phi { incoming } => {
                let predecessor = self.predecessor_on_path(value.block)?;
                let (_, incoming_value) = incoming.iter().find(|(block, _)| *block == predecessor)?;
                self.const_value(*incoming_value)
            }
            _ => None,
        }
    }

    /// Block executed right before `target` when walking from the entry
    fn predecessor_on_path(&self, target: BlockId) -> Option<BlockId> {
        let mut previous = None;
        let mut current = Self::ENTRY;
        for _ in 0..=self.blocks.len() {
            if current == target {
                return previous;
            }
            let next = match self.block(current)?.terminator? {
                Terminator::Jump(next) => next,
                Terminator::Branch { cond, then_block, else_block } => {
                    if self.const_value(cond)?.is_truthy() { then_block } else { else_block }
                }
            };
            previous = Some(current);
            current = next;
        }
        None
    }
}

fn fold_binary(op: IrBinaryOp, lhs: Constant, rhs: Constant) -> Option<Constant> {
    if op.is_logical() {
        let result = match op {
            IrBinaryOp::LogicAnd => lhs.is_truthy() && rhs.is_truthy(),
            _ => lhs.is_truthy() || rhs.is_truthy(),
        };
        return Some(Constant::Bool(result));
    }

    if let (Constant::Str(a), Constant::Str(b)) = (&lhs, &rhs) {
        return match op {
            IrBinaryOp::Eq => Some(Constant::Bool(a == b)),
            IrBinaryOp::NotEq => Some(Constant::Bool(a != b)),
            _ => None,
        };
    }

    if matches!(lhs, Constant::Float(_)) || matches!(rhs, Constant::Float(_)) {
        return fold_float(op, lhs.as_float()?, rhs.as_float()?);
    }

    let (a, b) = (lhs.as_int()?, rhs.as_int()?);
    let result = match op {
        IrBinaryOp::Add => Constant::Int(a.wrapping_add(b)),
        IrBinaryOp::Sub => Constant::Int(a.wrapping_sub(b)),
        IrBinaryOp::Mul => Constant::Int(a.wrapping_mul(b)),
        IrBinaryOp::Div => Constant::Int(a.checked_div(b)?),
        IrBinaryOp::Mod => Constant::Int(a.checked_rem(b)?),
        IrBinaryOp::Shl => Constant::Int(a.wrapping_shl(b as u32)),
        IrBinaryOp::Shr => Constant::Int(a.wrapping_shr(b as u32)),
        IrBinaryOp::And => Constant::Int(a & b),
        IrBinaryOp::Or => Constant::Int(a | b),
        IrBinaryOp::Xor => Constant::Int(a ^ b),
        IrBinaryOp::Eq => Constant::Bool(a == b),
        IrBinaryOp::NotEq => Constant::Bool(a != b),
        IrBinaryOp::Lt => Constant::Bool(a < b),
        IrBinaryOp::LtEq => Constant::Bool(a <= b),
        IrBinaryOp::Gt => Constant::Bool(a > b),
        IrBinaryOp::GtEq => Constant::Bool(a >= b),
        IrBinaryOp::LogicAnd | IrBinaryOp::LogicOr => return None,
    };
    Some(result)
}

fn fold_float(op: IrBinaryOp, a: f64, b: f64) -> Option<Constant> {
    let result = match op {
        IrBinaryOp::Add => Constant::Float(a + b),
        IrBinaryOp::Sub => Constant::Float(a - b),
        IrBinaryOp::Mul => Constant::Float(a * b),
        IrBinaryOp::Div => Constant::Float(a / b),
        IrBinaryOp::Mod => Constant::Float(a % b),
        IrBinaryOp::Eq => Constant::Bool(a == b),
        IrBinaryOp::NotEq => Constant::Bool(a != b),
        IrBinaryOp::Lt => Constant::Bool(a < b),
        IrBinaryOp::LtEq => Constant::Bool(a <= b),
        IrBinaryOp::Gt => Constant::Bool(a > b),
        IrBinaryOp::GtEq => Constant::Bool(a >= b),
        _ => return None,
    };
    Some(result)
}

fn fold_unary(op: IrUnaryOp, operand: Constant) -> Option<Constant> {
    match (op, operand) {
        (IrUnaryOp::Not, c) => Some(Constant::Bool(!c.is_truthy())),
        (IrUnaryOp::Plus, c @ (Constant::Int(_) | Constant::Float(_) | Constant::Bool(_))) => Some(c),
        (IrUnaryOp::Neg, Constant::Float(v)) => Some(Constant::Float(-v)),
        (IrUnaryOp::Neg, c) => Some(Constant::Int(c.as_int()?.wrapping_neg())),
        (IrUnaryOp::BitwiseNot, c) => Some(Constant::Int(!c.as_int()?)),
        _ => None,
    }
}

fn convert(constant: Constant, ty: &Type) -> Option<Constant> {
    match ty {
        Type::Number => match constant {
            Constant::Float(v) => Some(Constant::Int(v as i64)),
            Constant::Bool(v) => Some(Constant::Int(v as i64)),
            Constant::Int(_) => Some(constant),
            Constant::Str(_) => None,
        },
        Type::Float => constant.as_float().map(Constant::Float),
        Type::Boolean => Some(Constant::Bool(constant.is_truthy())),
        _ => Some(constant),
    }
}
