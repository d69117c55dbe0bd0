//! Conditional expressions and their join
//!
//! `cond ? a : b` becomes a merge variable assigned on both arms of a join
//! region. Reading it once after the region closes yields the phi.

use super::{ExpressionTranslator, Translated};
use crate::ast::Expression;
use crate::ir::Variable;
use log::debug;

pub fn translate_conditional(
    cx: &mut ExpressionTranslator,
    text: &str,
    condition: Option<&Expression>,
    then_expr: Option<&Expression>,
    else_expr: Option<&Expression>,
) -> Translated {
    let cond = match cx.required_rvalue(condition, "condition of `?:`") {
        Some(cond) => cond,
        None => cx.placeholder(),
    };

    let name = cx.next_temp_name();
    let merge = cx.builder.declare_local(&name);
    let declared = cx.builder.emit_undefined(&name);
    cx.builder.assign(&merge, declared);
    debug!("Conditional `{}` merges through '{}'", text, name);

    let mut region = cx.builder.begin_join(cond);
    assign_arm(cx, &merge, then_expr, "true branch of `?:`");
    cx.builder.else_arm(&mut region);
    assign_arm(cx, &merge, else_expr, "false branch of `?:`");
    cx.builder.end_join(region);

    let merged = match cx.builder.variable_value(&merge) {
        Some(merged) => merged,
        None => return Translated::none(),
    };
    if cx.builder.function().value(merged).is_some_and(|v| v.kind.is_phi()) {
        cx.builder.set_name(merged, text);
    }
    Translated::value(merged)
}

fn assign_arm(cx: &mut ExpressionTranslator, merge: &Variable, arm: Option<&Expression>, what: &str) {
    if let Some(value) = cx.required_rvalue(arm, what) {
        cx.builder.assign(merge, value);
    }
}
