//! SSA intermediate representation
//!
//! A `Function` is an arena of immutable values grouped into basic blocks.
//! `FunctionBuilder` is the host side the expression translator drives:
//! scopes, variable bindings, emission primitives and join regions.

pub mod types;
pub mod values;
pub mod ops;
pub mod variable;
pub mod instructions;
pub mod blocks;
pub mod function;
pub mod evaluate;
pub mod symbols;
pub mod builder;

pub use types::Type;
pub use values::{Constant, ValueData};
pub use ops::{IrBinaryOp, IrUnaryOp};
pub use variable::{Variable, VariableKind};
pub use instructions::InstKind;
pub use blocks::{BasicBlock, Terminator};
pub use function::Function;
pub use symbols::FunctionTable;
pub use builder::{FunctionBuilder, JoinRegion};
