//! Function in IR: a value arena plus its basic blocks

use super::blocks::{BasicBlock, Terminator};
use super::instructions::InstKind;
use super::types::Type;
use super::values::ValueData;
use c2ssa_common::{BlockId, ValueId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Indexed by `ValueId`
    pub values: Vec<ValueData>,
    /// Indexed by `BlockId`, the entry block comes first
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    pub const ENTRY: BlockId = 0;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            blocks: vec![BasicBlock::new(Self::ENTRY, "entry")],
        }
    }

    pub fn value(&self, id: ValueId) -> Option<&ValueData> {
        self.values.get(id as usize)
    }

    pub fn block(&self, id: BlockId) -> Option<&BasicBlock> {
        self.blocks.get(id as usize)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut BasicBlock> {
        self.blocks.get_mut(id as usize)
    }

    /// Type of `id`, `Any` for unknown ids
    pub fn value_type(&self, id: ValueId) -> Type {
        self.value(id).map(|v| v.ty.clone()).unwrap_or(Type::Any)
    }

    /// Append a block labelled `{label}.{id}`
    pub fn add_block(&mut self, label: &str) -> BlockId {
        let id = self.blocks.len() as BlockId;
        self.blocks.push(BasicBlock::new(id, format!("{}.{}", label, id)));
        id
    }

    /// Append a new value at the end of `block`
    pub fn push_value(&mut self, block: BlockId, kind: InstKind, ty: Type) -> ValueId {
        let id = self.values.len() as ValueId;
        self.values.push(ValueData {
            id,
            kind,
            ty,
            name: None,
            block,
        });
        if let Some(bb) = self.block_mut(block) {
            bb.instructions.push(id);
        }
        id
    }

    /// Close `block` and record it as predecessor of its successors
    pub fn set_terminator(&mut self, block: BlockId, terminator: Terminator) {
        for successor in terminator.successors() {
            if let Some(bb) = self.block_mut(successor) {
                if !bb.predecessors.contains(&block) {
                    bb.predecessors.push(block);
                }
            }
        }
        if let Some(bb) = self.block_mut(block) {
            bb.terminator = Some(terminator);
        }
    }

    pub fn set_name(&mut self, id: ValueId, name: impl Into<String>) {
        if let Some(value) = self.values.get_mut(id as usize) {
            value.name = Some(name.into());
        }
    }

    pub fn phis(&self) -> impl Iterator<Item = &ValueData> {
        self.values.iter().filter(|v| v.kind.is_phi())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "function {} {{", self.name)?;
        for block in &self.blocks {
            write!(f, "bb{} ({}):", block.id, block.label)?;
            if !block.predecessors.is_empty() {
                let preds: Vec<String> = block.predecessors.iter().map(|p| format!("bb{}", p)).collect();
                write!(f, "  ; preds {}", preds.join(", "))?;
            }
            writeln!(f)?;
            for id in &block.instructions {
                if let Some(value) = self.value(*id) {
                    writeln!(f, "  {}", value)?;
                }
            }
            if let Some(terminator) = &block.terminator {
                writeln!(f, "  {}", terminator)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Constant;

    #[test]
    fn test_blocks_and_predecessors() {
        let mut func = Function::new("f");
        let cond = func.push_value(Function::ENTRY, InstKind::Const(Constant::Bool(true)), Type::Boolean);
        let then_block = func.add_block("then");
        let else_block = func.add_block("else");
        func.set_terminator(Function::ENTRY, Terminator::Branch { cond, then_block, else_block });

        assert_eq!(func.block(then_block).map(|b| b.label.as_str()), Some("then.1"));
        assert_eq!(func.block(else_block).map(|b| b.predecessors.clone()), Some(vec![Function::ENTRY]));
    }

    #[test]
    fn test_display() {
        let mut func = Function::new("f");
        let one = func.push_value(Function::ENTRY, InstKind::Const(Constant::Int(1)), Type::Number);
        func.set_name(one, "1");
        let text = func.to_string();
        assert!(text.starts_with("function f {"));
        assert!(text.contains("%0: number = const 1  ; 1"));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut func = Function::new("f");
        func.push_value(Function::ENTRY, InstKind::Const(Constant::Int(7)), Type::Number);
        let json = serde_json::to_string(&func).unwrap();
        let back: Function = serde_json::from_str(&json).unwrap();
        assert_eq!(back, func);
    }
}
