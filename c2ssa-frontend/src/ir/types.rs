//! Value types carried by SSA values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of an SSA value.
///
/// Only pointer-ness is inspected by the expression translator; struct
/// layouts belong to whoever declares the struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Unknown or not yet resolved
    Any,
    /// Integer and enumeration types
    Number,
    Float,
    Boolean,
    String,
    Void,
    Pointer(Box<Type>),
    Struct { name: Option<String> },
    /// Result of an initializer list
    Object,
    Function { name: String },
    /// Typedef name that was not expanded
    Alias(String),
}

impl Type {
    pub fn pointer_to(pointee: Type) -> Type {
        Type::Pointer(Box::new(pointee))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Type::Float)
    }

    /// Target type of a pointer
    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => write!(f, "any"),
            Type::Number => write!(f, "number"),
            Type::Float => write!(f, "float"),
            Type::Boolean => write!(f, "bool"),
            Type::String => write!(f, "string"),
            Type::Void => write!(f, "void"),
            Type::Pointer(target) => write!(f, "{}*", target),
            Type::Struct { name: Some(name) } => write!(f, "struct {}", name),
            Type::Struct { name: None } => write!(f, "struct"),
            Type::Object => write!(f, "object"),
            Type::Function { name } => write!(f, "fn {}", name),
            Type::Alias(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_queries() {
        let ty = Type::pointer_to(Type::pointer_to(Type::Number));
        assert!(ty.is_pointer());
        assert_eq!(ty.pointee(), Some(&Type::pointer_to(Type::Number)));
        assert_eq!(ty.to_string(), "number**");
        assert!(Type::Number.pointee().is_none());
    }
}
