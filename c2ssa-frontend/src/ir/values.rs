//! Constants and the per-value record stored in a function

use super::instructions::InstKind;
use super::types::Type;
use c2ssa_common::{BlockId, ValueId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compile-time constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Constant {
    pub fn ty(&self) -> Type {
        match self {
            Constant::Int(_) => Type::Number,
            Constant::Float(_) => Type::Float,
            Constant::Str(_) => Type::String,
            Constant::Bool(_) => Type::Boolean,
        }
    }

    /// C truth value; every string is true
    pub fn is_truthy(&self) -> bool {
        match self {
            Constant::Int(v) => *v != 0,
            Constant::Float(v) => *v != 0.0,
            Constant::Str(_) => true,
            Constant::Bool(v) => *v,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Constant::Int(v) => Some(*v),
            Constant::Bool(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Constant::Float(v) => Some(*v),
            Constant::Int(v) => Some(*v as f64),
            Constant::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Constant::Str(_) => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(v) => write!(f, "{}", v),
            Constant::Float(v) => write!(f, "{:?}", v),
            Constant::Str(s) => write!(f, "{:?}", s),
            Constant::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// One SSA value. Only `name` may change after emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueData {
    pub id: ValueId,
    pub kind: InstKind,
    pub ty: Type,
    /// Debug label, usually the source text that produced the value
    pub name: Option<String>,
    pub block: BlockId,
}

impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}: {} = {}", self.id, self.ty, self.kind)?;
        if let Some(name) = &self.name {
            write!(f, "  ; {}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(Constant::Int(3).is_truthy());
        assert!(!Constant::Int(0).is_truthy());
        assert!(!Constant::Float(0.0).is_truthy());
        assert!(Constant::Str(String::new()).is_truthy());
    }

    #[test]
    fn test_display_keeps_kinds_apart() {
        assert_eq!(Constant::Int(1).to_string(), "1");
        assert_eq!(Constant::Float(1.0).to_string(), "1.0");
        assert_eq!(Constant::Str("1".to_string()).to_string(), "\"1\"");
    }
}
