//! Identifier types shared between the frontend and the IR.

/// Identifier of an SSA value inside a function
pub type ValueId = u32;

/// Identifier of a basic block inside a function
pub type BlockId = u32;

/// Unique identifier for AST nodes
pub type NodeId = u32;

/// Identifier of a named variable binding in the host builder
pub type SymbolId = u32;
