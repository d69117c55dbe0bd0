//! Assignments and initializers
//!
//! The target slot is resolved first, then its old value for compound
//! operators, then the right-hand side. Each is evaluated exactly once.

use super::{ExpressionTranslator, Translated};
use crate::ast::{AssignOp, Designator, Expression, Initializer, InitializerKind, InitializerList};
use crate::ir::{Constant, Variable};
use c2ssa_common::ValueId;
use log::trace;

use super::binary_ops::ir_binary_op;

pub fn translate_assignment(
    cx: &mut ExpressionTranslator,
    op: AssignOp,
    target: Option<&Expression>,
    value: Option<&Initializer>,
) -> Translated {
    let variable = match target {
        Some(target) => match cx.translate(target, true).variable {
            Some(variable) => variable,
            None => {
                cx.warn(format!("`{}` is not assignable", target.text));
                Variable::anonymous()
            }
        },
        None => {
            cx.error("missing target of assignment".to_string());
            Variable::anonymous()
        }
    };

    let old = match op.binary_op() {
        Some(_) => cx.builder.variable_value(&variable),
        None => None,
    };

    let operand = match value {
        Some(initializer) => cx.translate_initializer(initializer),
        None => cx.missing("right-hand side of assignment").value,
    };
    let operand = match operand {
        Some(operand) => operand,
        None => {
            trace!("Right-hand side of `{}` has no value, nothing assigned", op);
            return Translated::variable(variable);
        }
    };

    let result = match (op.binary_op(), old) {
        (Some(binary), Some(old)) => cx.builder.emit_binary(ir_binary_op(binary), old, operand),
        _ => operand,
    };
    cx.builder.assign(&variable, result);

    let operand_type = cx.builder.value_type(operand);
    let result = cx.builder.emit_cast(result, operand_type);
    Translated {
        value: Some(result),
        variable: Some(variable),
    }
}

pub fn translate_initializer(cx: &mut ExpressionTranslator, initializer: &Initializer) -> Option<ValueId> {
    cx.with_range(&initializer.span, |cx| match &initializer.kind {
        InitializerKind::Expression(expr) => cx.translate_rvalue(expr),
        InitializerKind::List(list) => Some(translate_initializer_list(cx, list)),
    })
}

/// Object with one field per item. Undesignated items are keyed by their
/// position; nested designators build nested objects.
pub fn translate_initializer_list(cx: &mut ExpressionTranslator, list: &InitializerList) -> ValueId {
    cx.with_range(&list.span, |cx| {
        let mut fields = Vec::with_capacity(list.items.len());

        for (position, item) in list.items.iter().enumerate() {
            let mut value = match translate_initializer(cx, &item.initializer) {
                Some(value) => value,
                None => {
                    trace!("Initializer {} has no value, field skipped", position);
                    continue;
                }
            };

            let mut keys: Vec<ValueId> = item.designators.iter().map(|d| designator_key(cx, d)).collect();
            let key = if keys.is_empty() {
                cx.builder.emit_const(Constant::Int(position as i64))
            } else {
                let outer = keys.remove(0);
                for inner in keys.into_iter().rev() {
                    value = cx.builder.emit_make_object(vec![(inner, value)]);
                }
                outer
            };
            fields.push((key, value));
        }

        cx.builder.emit_make_object(fields)
    })
}

fn designator_key(cx: &mut ExpressionTranslator, designator: &Designator) -> ValueId {
    match designator {
        Designator::Member(name) => cx.builder.emit_const(Constant::Str(name.clone())),
        Designator::Index(Some(index)) => match cx.translate_rvalue(index) {
            Some(key) => key,
            None => cx.placeholder(),
        },
        Designator::Index(None) => {
            cx.error("missing index of designator".to_string());
            cx.placeholder()
        }
    }
}
