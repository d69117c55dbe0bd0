//! Host builder for SSA construction
//!
//! `FunctionBuilder` owns the function being built, the lexical scope
//! stack and the current binding of every variable. Bindings are path
//! sensitive: inside a join region each arm starts from the bindings that
//! held before the branch, and `end_join` reconciles the arms with phi
//! values.
//!
//! Values are never rewritten once emitted. Updating a variable means
//! binding it to a new value.

use super::blocks::Terminator;
use super::function::Function;
use super::instructions::InstKind;
use super::ops::{IrBinaryOp, IrUnaryOp};
use super::symbols::FunctionTable;
use super::types::Type;
use super::values::Constant;
use super::variable::{Variable, VariableKind};
use c2ssa_common::{BlockId, SymbolId, ValueId};
use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Identity of a member slot: constant keys compare by value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MemberKey {
    Const(String),
    Value(ValueId),
}

/// Current value of every bound local and member slot
#[derive(Debug, Clone, Default)]
struct Bindings {
    locals: HashMap<SymbolId, ValueId>,
    members: HashMap<(ValueId, MemberKey), ValueId>,
}

#[derive(Debug)]
struct ArmExit {
    block: BlockId,
    bindings: Bindings,
}

/// An open two-armed conditional region.
///
/// Created by [`FunctionBuilder::begin_join`] with the true arm current;
/// [`FunctionBuilder::else_arm`] switches to the false arm and
/// [`FunctionBuilder::end_join`] closes the region.
#[derive(Debug)]
#[must_use = "a join region must be closed with end_join"]
pub struct JoinRegion {
    then_block: BlockId,
    else_block: BlockId,
    merge_block: BlockId,
    entry: Bindings,
    then_exit: Option<ArmExit>,
}

pub struct FunctionBuilder {
    function: Function,
    current_block: BlockId,
    functions: Arc<FunctionTable>,
    /// Visible names; a later declaration of a name shadows the earlier one
    scope: HashMap<String, SymbolId>,
    /// Symbol names, indexed by `SymbolId`
    symbols: Vec<String>,
    bindings: Bindings,
    /// Most recent call; objects built before it may have been written by the callee
    last_call: Option<ValueId>,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>, functions: Arc<FunctionTable>) -> Self {
        let function = Function::new(name);
        debug!("Creating FunctionBuilder for '{}'", function.name);
        Self {
            function,
            current_block: Function::ENTRY,
            functions,
            scope: HashMap::new(),
            symbols: Vec::new(),
            bindings: Bindings::default(),
            last_call: None,
        }
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn finish(self) -> Function {
        self.function
    }

    // ---- names ----

    fn resolve(&self, name: &str) -> Option<SymbolId> {
        self.scope.get(name).copied()
    }

    fn new_symbol(&mut self, name: &str) -> SymbolId {
        let id = self.symbols.len() as SymbolId;
        self.symbols.push(name.to_string());
        self.scope.insert(name.to_string(), id);
        trace!("New symbol {} '{}'", id, name);
        id
    }

    fn local(&self, name: &str, symbol: SymbolId) -> Variable {
        Variable {
            name: name.to_string(),
            kind: VariableKind::Local(symbol),
        }
    }

    /// Variable visible as `name`, created if absent
    pub fn declare(&mut self, name: &str) -> Variable {
        let symbol = match self.resolve(name) {
            Some(symbol) => symbol,
            None => self.new_symbol(name),
        };
        self.local(name, symbol)
    }

    /// Fresh variable shadowing any earlier `name`
    pub fn declare_local(&mut self, name: &str) -> Variable {
        let symbol = self.new_symbol(name);
        self.local(name, symbol)
    }

    /// Current value of `name` without emitting anything
    pub fn peek(&self, name: &str) -> Option<ValueId> {
        let symbol = self.resolve(name)?;
        self.bindings.locals.get(&symbol).copied()
    }

    /// Current value of `name`; an unbound name is bound to a fresh placeholder
    pub fn read(&mut self, name: &str) -> ValueId {
        let symbol = match self.resolve(name) {
            Some(symbol) => symbol,
            None => self.new_symbol(name),
        };
        self.read_symbol(symbol)
    }

    fn read_symbol(&mut self, symbol: SymbolId) -> ValueId {
        if let Some(value) = self.bindings.locals.get(&symbol) {
            return *value;
        }
        let name = self.symbols.get(symbol as usize).cloned().unwrap_or_default();
        debug!("Reading unbound '{}', binding a placeholder", name);
        let placeholder = self.emit_undefined(&name);
        self.bindings.locals.insert(symbol, placeholder);
        placeholder
    }

    pub fn assign(&mut self, variable: &Variable, value: ValueId) {
        match &variable.kind {
            VariableKind::Local(symbol) => {
                trace!("Binding '{}' to %{}", variable.name, value);
                self.bindings.locals.insert(*symbol, value);
            }
            VariableKind::Member { object, key } => {
                self.push(
                    InstKind::MemberWrite { object: *object, key: *key, value },
                    Type::Void,
                );
                let slot = (*object, self.member_key(*key));
                self.bindings.members.insert(slot, value);
            }
            VariableKind::Anonymous => {
                trace!("Dropping assignment of %{} to anonymous variable", value);
            }
        }
    }

    /// Current value of a variable, `None` for an anonymous one
    pub fn variable_value(&mut self, variable: &Variable) -> Option<ValueId> {
        match &variable.kind {
            VariableKind::Local(symbol) => Some(self.read_symbol(*symbol)),
            VariableKind::Member { object, key } => Some(self.read_member(*object, *key)),
            VariableKind::Anonymous => None,
        }
    }

    // ---- emission ----

    fn push(&mut self, kind: InstKind, ty: Type) -> ValueId {
        let id = self.function.push_value(self.current_block, kind, ty);
        trace!("Emitted %{} in bb{}", id, self.current_block);
        id
    }

    pub fn emit_const(&mut self, constant: Constant) -> ValueId {
        let ty = constant.ty();
        self.push(InstKind::Const(constant), ty)
    }

    /// Value-only declaration of `name`
    pub fn emit_undefined(&mut self, name: &str) -> ValueId {
        let id = self.push(InstKind::Undefined { name: name.to_string() }, Type::Any);
        self.function.set_name(id, name);
        id
    }

    pub fn function_ref(&mut self, name: &str) -> Option<ValueId> {
        if !self.functions.contains(name) {
            return None;
        }
        Some(self.push(
            InstKind::FunctionRef { name: name.to_string() },
            Type::Function { name: name.to_string() },
        ))
    }

    pub fn emit_binary(&mut self, op: IrBinaryOp, lhs: ValueId, rhs: ValueId) -> ValueId {
        let ty = op.result_type(&self.value_type(lhs), &self.value_type(rhs));
        self.push(InstKind::Binary { op, lhs, rhs }, ty)
    }

    pub fn emit_unary(&mut self, op: IrUnaryOp, operand: ValueId) -> ValueId {
        let ty = op.result_type(&self.value_type(operand));
        self.push(InstKind::Unary { op, operand }, ty)
    }

    /// Call `callee`. The callee may write any member slot and any local
    /// whose address is among `args`, so those bindings do not survive it.
    pub fn emit_call(&mut self, callee: ValueId, args: Vec<ValueId>) -> ValueId {
        let escaped: Vec<(ValueId, Variable)> = args
            .iter()
            .filter_map(|arg| self.address_target(*arg).map(|variable| (*arg, variable)))
            .collect();
        let call = self.push(InstKind::Call { callee, args }, Type::Any);

        self.bindings.members.clear();
        self.last_call = Some(call);
        for (pointer, variable) in escaped {
            if let VariableKind::Local(symbol) = variable.kind {
                let ty = self.value_type(pointer).pointee().cloned().unwrap_or(Type::Any);
                let reloaded = self.push(InstKind::Load { pointer }, ty);
                debug!("'{}' escaped into call %{}, reloaded as %{}", variable.name, call, reloaded);
                self.bindings.locals.insert(symbol, reloaded);
            }
        }
        call
    }

    fn member_key(&self, key: ValueId) -> MemberKey {
        match self.function.value(key).map(|v| &v.kind) {
            Some(InstKind::Const(constant)) => MemberKey::Const(constant.to_string()),
            _ => MemberKey::Value(key),
        }
    }

    /// Member or element read. A slot written earlier on this path, or a
    /// field of an object built in place since the last call, yields its
    /// value directly.
    pub fn read_member(&mut self, object: ValueId, key: ValueId) -> ValueId {
        let slot = (object, self.member_key(key));
        if let Some(value) = self.bindings.members.get(&slot) {
            return *value;
        }
        let built_since_call = self.last_call.map_or(true, |call| object > call);
        if let Some(InstKind::MakeObject { fields }) = self.function.value(object).map(|v| &v.kind) {
            if !built_since_call {
                return self.push(InstKind::Member { object, key }, Type::Any);
            }
            if let Some((_, value)) = fields.iter().find(|(field, _)| self.member_key(*field) == slot.1) {
                return *value;
            }
        }
        self.push(InstKind::Member { object, key }, Type::Any)
    }

    /// Assignable member or element slot
    pub fn member_variable(&self, object: ValueId, key: ValueId) -> Variable {
        Variable {
            name: format!("{}[{}]", self.describe(object), self.describe(key)),
            kind: VariableKind::Member { object, key },
        }
    }

    pub fn emit_make_object(&mut self, fields: Vec<(ValueId, ValueId)>) -> ValueId {
        self.push(InstKind::MakeObject { fields }, Type::Object)
    }

    /// Pointer to `variable`; anonymous variables have no address
    pub fn emit_address_of(&mut self, variable: &Variable) -> Option<ValueId> {
        if variable.is_anonymous() {
            return None;
        }
        let pointee = match &variable.kind {
            VariableKind::Local(symbol) => self.bindings.locals.get(symbol).map(|v| self.value_type(*v)),
            _ => None,
        }
        .unwrap_or(Type::Any);
        Some(self.push(
            InstKind::AddressOf { variable: variable.clone() },
            Type::pointer_to(pointee),
        ))
    }

    fn address_target(&self, pointer: ValueId) -> Option<Variable> {
        match self.function.value(pointer).map(|v| &v.kind) {
            Some(InstKind::AddressOf { variable }) => Some(variable.clone()),
            _ => None,
        }
    }

    /// Value a pointer points at
    pub fn emit_load(&mut self, pointer: ValueId) -> ValueId {
        if let Some(variable) = self.address_target(pointer) {
            if let Some(value) = self.variable_value(&variable) {
                return value;
            }
        }
        if let Some(value) = self.pointee_binding(pointer) {
            return value;
        }
        let ty = self.value_type(pointer).pointee().cloned().unwrap_or(Type::Any);
        self.push(InstKind::Load { pointer }, ty)
    }

    /// Value last written through `*pointer` on this path
    pub fn pointee_binding(&self, pointer: ValueId) -> Option<ValueId> {
        let zero = MemberKey::Const(Constant::Int(0).to_string());
        self.bindings.members.get(&(pointer, zero)).copied()
    }

    /// Assignable target of `*pointer`
    pub fn pointee_variable(&mut self, pointer: ValueId) -> Variable {
        if let Some(variable) = self.address_target(pointer) {
            return variable;
        }
        let zero = self.emit_const(Constant::Int(0));
        self.member_variable(pointer, zero)
    }

    /// Apply `ty` to `value`; a value that already has the type is returned as is
    pub fn emit_cast(&mut self, value: ValueId, ty: Type) -> ValueId {
        if self.value_type(value) == ty {
            return value;
        }
        self.push(InstKind::Cast { value }, ty)
    }

    pub fn set_name(&mut self, value: ValueId, name: &str) {
        self.function.set_name(value, name);
    }

    pub fn value_type(&self, value: ValueId) -> Type {
        self.function.value_type(value)
    }

    fn describe(&self, value: ValueId) -> String {
        match self.function.value(value) {
            Some(data) => match (&data.kind, &data.name) {
                (InstKind::Const(constant), _) => constant.to_string(),
                (_, Some(name)) => name.clone(),
                _ => format!("%{}", value),
            },
            None => format!("%{}", value),
        }
    }

    // ---- join regions ----

    /// Branch on `cond` and enter the true arm
    pub fn begin_join(&mut self, cond: ValueId) -> JoinRegion {
        let then_block = self.function.add_block("join.then");
        let else_block = self.function.add_block("join.else");
        let merge_block = self.function.add_block("join.merge");
        self.function.set_terminator(
            self.current_block,
            Terminator::Branch { cond, then_block, else_block },
        );
        debug!(
            "Join region on %{}: then bb{}, else bb{}, merge bb{}",
            cond, then_block, else_block, merge_block
        );

        self.current_block = then_block;
        JoinRegion {
            then_block,
            else_block,
            merge_block,
            entry: self.bindings.clone(),
            then_exit: None,
        }
    }

    /// Close the true arm and enter the false arm with the pre-branch bindings
    pub fn else_arm(&mut self, region: &mut JoinRegion) {
        if region.then_exit.is_some() {
            return;
        }
        let bindings = std::mem::replace(&mut self.bindings, region.entry.clone());
        region.then_exit = Some(ArmExit { block: self.current_block, bindings });
        self.function.set_terminator(self.current_block, Terminator::Jump(region.merge_block));
        self.current_block = region.else_block;
    }

    /// Close the region and continue in its merge block.
    ///
    /// Every local bound to different values at the two arm exits gets a
    /// phi; member slots survive only where both arms agree.
    pub fn end_join(&mut self, region: JoinRegion) {
        let (then_exit, else_exit) = match region.then_exit {
            Some(then_exit) => {
                let bindings = std::mem::take(&mut self.bindings);
                (then_exit, ArmExit { block: self.current_block, bindings })
            }
            None => {
                // no false arm was built: it is the empty path
                let bindings = std::mem::take(&mut self.bindings);
                (
                    ArmExit { block: self.current_block, bindings },
                    ArmExit { block: region.else_block, bindings: region.entry },
                )
            }
        };
        for exit in [then_exit.block, else_exit.block] {
            self.function.set_terminator(exit, Terminator::Jump(region.merge_block));
        }
        self.current_block = region.merge_block;

        let symbols: BTreeSet<SymbolId> = then_exit
            .bindings
            .locals
            .keys()
            .chain(else_exit.bindings.locals.keys())
            .copied()
            .collect();

        let mut merged = Bindings::default();
        for symbol in symbols {
            let then_value = then_exit.bindings.locals.get(&symbol).copied();
            let else_value = else_exit.bindings.locals.get(&symbol).copied();
            if let (Some(a), Some(b)) = (then_value, else_value) {
                if a == b {
                    merged.locals.insert(symbol, a);
                    continue;
                }
            }

            let name = self.symbols.get(symbol as usize).cloned().unwrap_or_default();
            let then_value = match then_value {
                Some(value) => value,
                None => self.undefined_in(then_exit.block, &name),
            };
            let else_value = match else_value {
                Some(value) => value,
                None => self.undefined_in(else_exit.block, &name),
            };

            let then_type = self.value_type(then_value);
            let ty = if then_type == self.value_type(else_value) { then_type } else { Type::Any };
            let phi = self.function.push_value(
                region.merge_block,
                InstKind::Phi {
                    incoming: vec![(then_exit.block, then_value), (else_exit.block, else_value)],
                },
                ty,
            );
            self.function.set_name(phi, &name);
            debug!("Phi %{} for '{}' in bb{}", phi, name, region.merge_block);
            merged.locals.insert(symbol, phi);
        }

        for (slot, value) in then_exit.bindings.members {
            if else_exit.bindings.members.get(&slot) == Some(&value) {
                merged.members.insert(slot, value);
            }
        }

        self.bindings = merged;
        trace!("Closed join region, then bb{} else bb{}", region.then_block, region.else_block);
    }

    fn undefined_in(&mut self, block: BlockId, name: &str) -> ValueId {
        let id = self.function.push_value(block, InstKind::Undefined { name: name.to_string() }, Type::Any);
        self.function.set_name(id, name);
        id
    }
}
