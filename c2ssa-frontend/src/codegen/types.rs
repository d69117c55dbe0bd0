//! Type name resolution

use crate::ast::TypeName;
use crate::ir::Type;
use log::trace;

/// Resolve a written type name to an IR type. Arrays decay to pointers.
pub fn resolve_type(type_name: &TypeName) -> Type {
    let words: Vec<&str> = type_name.specifiers.iter().map(String::as_str).collect();

    let base = match words.as_slice() {
        ["struct", name, ..] | ["union", name, ..] => Type::Struct { name: Some(name.to_string()) },
        ["struct"] | ["union"] => Type::Struct { name: None },
        ["enum", ..] => Type::Number,
        [] => Type::Any,
        _ if words.contains(&"void") => Type::Void,
        _ if words.contains(&"_Bool") => Type::Boolean,
        _ if words.iter().any(|w| matches!(*w, "float" | "double")) => Type::Float,
        _ if words.iter().all(|w| is_integer_word(w)) => Type::Number,
        [name] => Type::Alias(name.to_string()),
        _ => Type::Any,
    };

    let depth = type_name.pointer_depth + type_name.array_depth;
    let resolved = (0..depth).fold(base, |ty, _| Type::pointer_to(ty));
    trace!("Resolved type {:?} to {}", type_name.specifiers, resolved);
    resolved
}

fn is_integer_word(word: &str) -> bool {
    matches!(word, "char" | "short" | "int" | "long" | "signed" | "unsigned")
}
