//! Identifiers, constants and string literals

use super::{ExpressionTranslator, Translated};
use crate::codegen::literals::{concat_strings, decode_constant};
use crate::ir::Constant;
use log::trace;

pub fn translate_identifier(cx: &mut ExpressionTranslator, name: &str, want_lvalue: bool) -> Translated {
    if want_lvalue {
        return Translated::variable(cx.builder.declare(name));
    }

    if let Some(value) = cx.builder.peek(name) {
        return Translated::value(value);
    }
    if let Some(function) = cx.builder.function_ref(name) {
        trace!("'{}' resolved as a function", name);
        return Translated::value(function);
    }

    cx.warn(format!("identifier `{}` not found in current scope", name));
    Translated::value(cx.builder.read(name))
}

pub fn translate_constant(cx: &mut ExpressionTranslator, text: &str) -> Translated {
    let constant = match decode_constant(text) {
        Some(constant) => constant,
        None => {
            cx.warn(format!("malformed constant `{}`", text));
            Constant::Int(0)
        }
    };
    let value = cx.builder.emit_const(constant);
    cx.builder.set_name(value, text);
    Translated::value(value)
}

pub fn translate_string(cx: &mut ExpressionTranslator, tokens: &[String]) -> Translated {
    let text = concat_strings(tokens);
    Translated::value(cx.builder.emit_const(Constant::Str(text)))
}
