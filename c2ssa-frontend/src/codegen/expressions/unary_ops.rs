//! Unary operators, casts, compound literals and type queries

use super::postfix::increment;
use super::{ExpressionTranslator, Translated};
use crate::ast::{Expression, IncDec, InitializerList, TypeName, TypeQueryKind, TypeQueryOperand, UnaryOp};
use crate::codegen::types::resolve_type;
use crate::ir::{IrUnaryOp, Variable};
use log::{debug, trace};

pub fn translate_unary(
    cx: &mut ExpressionTranslator,
    op: UnaryOp,
    operand: Option<&Expression>,
    want_lvalue: bool,
) -> Translated {
    let operand = match operand {
        Some(operand) => operand,
        None => return cx.missing(&format!("operand of unary `{}`", op)),
    };

    let ir_op = match op {
        UnaryOp::AddressOf => return address_of(cx, operand),
        UnaryOp::Dereference => return dereference(cx, operand, want_lvalue),
        UnaryOp::Plus => IrUnaryOp::Plus,
        UnaryOp::Minus => IrUnaryOp::Neg,
        UnaryOp::LogicalNot => IrUnaryOp::Not,
        UnaryOp::BitNot => IrUnaryOp::BitwiseNot,
    };

    match cx.translate_rvalue(operand) {
        Some(value) => Translated::value(cx.builder.emit_unary(ir_op, value)),
        None => Translated::none(),
    }
}

fn address_of(cx: &mut ExpressionTranslator, operand: &Expression) -> Translated {
    let translated = cx.translate(operand, true);
    if let Some(variable) = translated.variable.as_ref().filter(|v| !v.is_anonymous()) {
        if let Some(pointer) = cx.builder.emit_address_of(variable) {
            return Translated::value(pointer);
        }
    }

    cx.warn(format!("cannot take the address of `{}`", operand.text));
    Translated {
        value: translated.value,
        variable: None,
    }
}

/// `*p` reads through `p` only when `p` has pointer type; otherwise the
/// operand value passes through unchanged. As a target, `*p` is always the
/// pointee slot, never `p` itself.
fn dereference(cx: &mut ExpressionTranslator, operand: &Expression, want_lvalue: bool) -> Translated {
    let translated = cx.translate(operand, false);
    let pointer = match cx.value_of(&translated) {
        Some(pointer) => pointer,
        None => {
            cx.warn(format!("cannot dereference `{}`", operand.text));
            return Translated {
                value: None,
                variable: want_lvalue.then(Variable::anonymous),
            };
        }
    };

    if want_lvalue {
        return Translated::variable(cx.builder.pointee_variable(pointer));
    }
    if cx.builder.value_type(pointer).is_pointer() {
        return Translated::value(cx.builder.emit_load(pointer));
    }
    match cx.builder.pointee_binding(pointer) {
        Some(written) => Translated::value(written),
        None => {
            trace!("Dereference of non-pointer `{}` passes through", operand.text);
            Translated::value(pointer)
        }
    }
}

pub fn translate_pre_inc_dec(cx: &mut ExpressionTranslator, op: IncDec, operand: Option<&Expression>) -> Translated {
    let operand = match operand {
        Some(operand) => operand,
        None => return cx.missing(&format!("operand of prefix `{}`", op)),
    };
    let translated = cx.translate(operand, true);
    Translated::value(increment(cx, op, translated.value, translated.variable))
}

/// `sizeof` and `_Alignof` resolve their type but produce no value
pub fn translate_type_query(kind: TypeQueryKind, operand: &TypeQueryOperand) -> Translated {
    match operand {
        TypeQueryOperand::Type(type_name) => {
            let ty = resolve_type(type_name);
            debug!("{}({}) yields no value", kind, ty);
        }
        TypeQueryOperand::Expression(expr) => {
            debug!("{} `{}` is not evaluated", kind, expr.text);
        }
    }
    Translated::none()
}

pub fn translate_cast(cx: &mut ExpressionTranslator, type_name: &TypeName, operand: Option<&Expression>) -> Translated {
    let ty = resolve_type(type_name);
    match cx.required_rvalue(operand, "operand of cast") {
        Some(value) => Translated::value(cx.builder.emit_cast(value, ty)),
        None => Translated::none(),
    }
}

pub fn translate_compound_literal(
    cx: &mut ExpressionTranslator,
    type_name: &TypeName,
    initializers: &InitializerList,
) -> Translated {
    let object = super::assignments::translate_initializer_list(cx, initializers);
    let ty = resolve_type(type_name);
    Translated::value(cx.builder.emit_cast(object, ty))
}
