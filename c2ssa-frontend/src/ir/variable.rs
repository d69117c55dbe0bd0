//! Mutable bindings that resolve to SSA values

use c2ssa_common::{SymbolId, ValueId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something an assignment can target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// Named binding in a scope
    Local(SymbolId),
    /// Member or element of an object value, `key` is the key value
    Member { object: ValueId, key: ValueId },
    /// Placeholder target; assignments to it are dropped
    Anonymous,
}

impl Variable {
    pub fn anonymous() -> Self {
        Self {
            name: String::new(),
            kind: VariableKind::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self.kind, VariableKind::Anonymous)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            VariableKind::Local(_) => write!(f, "{}", self.name),
            VariableKind::Member { object, key } => write!(f, "%{}[%{}]", object, key),
            VariableKind::Anonymous => write!(f, "_"),
        }
    }
}
