//! Postfix chains: calls, indexing, member access and `++`/`--`
//!
//! Suffixes apply in source order. `right` holds the r-value produced so
//! far and `left` the assignable slot it came from, if any.

use super::{ExpressionTranslator, Translated};
use crate::ast::{Expression, IncDec, PostfixSuffix};
use crate::ir::{Constant, IrBinaryOp, Variable};
use c2ssa_common::ValueId;
use log::trace;

pub fn translate_postfix(
    cx: &mut ExpressionTranslator,
    base: Option<&Expression>,
    suffixes: &[PostfixSuffix],
    want_lvalue: bool,
) -> Translated {
    let base = match base {
        Some(base) => base,
        None => return cx.missing("operand of postfix expression"),
    };
    if suffixes.is_empty() {
        return cx.translate(base, want_lvalue);
    }

    // `x++` needs the slot of `x`, anything else only its value
    let base_is_target = matches!(suffixes.first(), Some(PostfixSuffix::IncDec(_)));
    let translated = cx.translate(base, base_is_target);
    let mut left = translated.variable.clone();
    let mut right = cx.value_of(&translated);

    for (index, suffix) in suffixes.iter().enumerate() {
        let last = index + 1 == suffixes.len();
        match suffix {
            PostfixSuffix::Call(arguments) => {
                let callee = object_value(cx, right, &left, "called expression");
                let args = arguments.iter().map(|arg| argument_value(cx, arg)).collect();
                right = Some(cx.builder.emit_call(callee, args));
                left = None;
            }
            PostfixSuffix::Index(index_expr) => {
                let object = object_value(cx, right, &left, "indexed expression");
                let key = match index_expr.as_deref().and_then(|e| cx.translate_rvalue(e)) {
                    Some(key) => key,
                    None => {
                        cx.error("missing index expression".to_string());
                        cx.placeholder()
                    }
                };
                (left, right) = member_access(cx, object, key, want_lvalue && last);
            }
            PostfixSuffix::Member { name, .. } => {
                let object = object_value(cx, right, &left, "member access");
                let key = cx.builder.emit_const(Constant::Str(name.clone()));
                (left, right) = member_access(cx, object, key, want_lvalue && last);
            }
            PostfixSuffix::IncDec(op) => {
                right = Some(increment(cx, *op, right, left.take()));
            }
        }
    }

    Translated {
        value: right,
        variable: if want_lvalue { left } else { None },
    }
}

/// The object a suffix applies to, or a reported placeholder
fn object_value(cx: &mut ExpressionTranslator, right: Option<ValueId>, left: &Option<Variable>, what: &str) -> ValueId {
    let value = match (right, left) {
        (Some(value), _) => Some(value),
        (None, Some(variable)) => cx.builder.variable_value(variable),
        (None, None) => None,
    };
    match value {
        Some(value) => value,
        None => {
            cx.error(format!("{} has no value", what));
            cx.placeholder()
        }
    }
}

fn argument_value(cx: &mut ExpressionTranslator, arg: &Expression) -> ValueId {
    match cx.translate_rvalue(arg) {
        Some(value) => value,
        None => {
            trace!("Argument `{}` has no value", arg.text);
            cx.builder.emit_undefined(&arg.text)
        }
    }
}

/// Slot for `object[key]` plus its current value, unless only the slot is wanted
fn member_access(
    cx: &mut ExpressionTranslator,
    object: ValueId,
    key: ValueId,
    slot_only: bool,
) -> (Option<Variable>, Option<ValueId>) {
    let slot = cx.builder.member_variable(object, key);
    let value = if slot_only { None } else { Some(cx.builder.read_member(object, key)) };
    (Some(slot), value)
}

/// `value = value ± 1`, assigned back to `target`; yields the updated value
pub(super) fn increment(
    cx: &mut ExpressionTranslator,
    op: IncDec,
    value: Option<ValueId>,
    target: Option<Variable>,
) -> ValueId {
    let old = match (value, &target) {
        (Some(value), _) => value,
        (None, Some(variable)) => match cx.builder.variable_value(variable) {
            Some(value) => value,
            None => cx.placeholder(),
        },
        (None, None) => {
            cx.error(format!("missing operand of `{}`", op));
            cx.placeholder()
        }
    };

    let one = cx.builder.emit_const(Constant::Int(1));
    let ir_op = match op {
        IncDec::Increment => IrBinaryOp::Add,
        IncDec::Decrement => IrBinaryOp::Sub,
    };
    let updated = cx.builder.emit_binary(ir_op, old, one);

    match target {
        Some(variable) if !variable.is_anonymous() => cx.builder.assign(&variable, updated),
        _ => cx.warn(format!("operand of `{}` is not assignable", op)),
    }
    updated
}
