//! Expression translation modules

mod primary;
mod postfix;
mod unary_ops;
mod binary_ops;
mod conditional;
mod assignments;

pub use binary_ops::ir_binary_op;

use super::config::TranslatorConfig;
use crate::ast::{Expression, ExpressionKind, Initializer};
use crate::ir::{Constant, FunctionBuilder, Variable};
use c2ssa_common::{ErrorReporter, Severity, SourceSpan, ValueId};
use log::debug;

/// Result of translating one expression node.
///
/// R-value requests fill `value`, l-value requests fill `variable`; some
/// forms fill both. Both are empty for forms that yield nothing, such as
/// `sizeof`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translated {
    pub value: Option<ValueId>,
    pub variable: Option<Variable>,
}

impl Translated {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn value(value: ValueId) -> Self {
        Self {
            value: Some(value),
            variable: None,
        }
    }

    pub fn variable(variable: Variable) -> Self {
        Self {
            value: None,
            variable: Some(variable),
        }
    }
}

/// Expression translation context
pub struct ExpressionTranslator<'a> {
    pub builder: &'a mut FunctionBuilder,
    pub reporter: &'a mut ErrorReporter,
    pub config: &'a TranslatorConfig,
    /// Source ranges of the nodes being translated, innermost last
    ranges: Vec<SourceSpan>,
    next_temp: u32,
}

impl<'a> ExpressionTranslator<'a> {
    pub fn new(
        builder: &'a mut FunctionBuilder,
        reporter: &'a mut ErrorReporter,
        config: &'a TranslatorConfig,
    ) -> Self {
        Self {
            builder,
            reporter,
            config,
            ranges: Vec::new(),
            next_temp: 0,
        }
    }

    /// Translate a top-level expression as an r-value
    pub fn translate_expression(&mut self, expr: &Expression) -> Translated {
        self.translate(expr, false)
    }

    /// Translate one node; every production goes through here
    pub fn translate(&mut self, expr: &Expression, want_lvalue: bool) -> Translated {
        self.with_range(&expr.span, |cx| {
            let result = cx.dispatch(expr, want_lvalue);
            if let Some(value) = result.value {
                let unnamed = cx.builder.function().value(value).is_some_and(|v| v.name.is_none());
                if unnamed && !expr.text.is_empty() {
                    cx.builder.set_name(value, &expr.text);
                }
            }
            result
        })
    }

    fn dispatch(&mut self, expr: &Expression, want_lvalue: bool) -> Translated {
        match &expr.kind {
            ExpressionKind::Identifier(name) => primary::translate_identifier(self, name, want_lvalue),
            ExpressionKind::Constant(text) => primary::translate_constant(self, text),
            ExpressionKind::StringLiteral(tokens) => primary::translate_string(self, tokens),
            ExpressionKind::Paren(inner) => match inner {
                Some(inner) => self.translate(inner, want_lvalue),
                None => self.missing("parenthesized expression"),
            },
            ExpressionKind::Postfix { base, suffixes } => {
                postfix::translate_postfix(self, base.as_deref(), suffixes, want_lvalue)
            }
            ExpressionKind::Unary { op, operand } => {
                unary_ops::translate_unary(self, *op, operand.as_deref(), want_lvalue)
            }
            ExpressionKind::PreIncDec { op, operand } => {
                unary_ops::translate_pre_inc_dec(self, *op, operand.as_deref())
            }
            ExpressionKind::TypeQuery { kind, operand } => unary_ops::translate_type_query(*kind, operand),
            ExpressionKind::LabelAddress(label) => {
                debug!("Address of label '{}' has no value", label);
                Translated::none()
            }
            ExpressionKind::Cast { type_name, operand } => {
                unary_ops::translate_cast(self, type_name, operand.as_deref())
            }
            ExpressionKind::CompoundLiteral { type_name, initializers } => {
                unary_ops::translate_compound_literal(self, type_name, initializers)
            }
            ExpressionKind::Binary { op, left, right } => {
                binary_ops::translate_binary(self, *op, left.as_deref(), right.as_deref())
            }
            ExpressionKind::Conditional { condition, then_expr, else_expr } => conditional::translate_conditional(
                self,
                &expr.text,
                condition.as_deref(),
                then_expr.as_deref(),
                else_expr.as_deref(),
            ),
            ExpressionKind::Assignment { op, target, value } => {
                assignments::translate_assignment(self, *op, target.as_deref(), value.as_deref())
            }
        }
    }

    /// Run `f` with `span` as the current source range, restoring the
    /// previous range afterwards
    pub fn with_range<T>(&mut self, span: &SourceSpan, f: impl FnOnce(&mut Self) -> T) -> T {
        self.ranges.push(span.clone());
        let result = f(self);
        self.ranges.pop();
        result
    }

    pub fn current_range(&self) -> SourceSpan {
        self.ranges.last().cloned().unwrap_or_else(SourceSpan::dummy)
    }

    pub fn range_depth(&self) -> usize {
        self.ranges.len()
    }

    pub fn warn(&mut self, message: String) {
        let span = self.current_range();
        debug!("{}: warning: {}", span, message);
        self.reporter.report(Severity::Warn, &self.config.tag, message, span);
    }

    pub fn error(&mut self, message: String) {
        let span = self.current_range();
        debug!("{}: error: {}", span, message);
        self.reporter.report(Severity::Error, &self.config.tag, message, span);
    }

    /// Report a missing child and stand in a zero constant and an anonymous variable
    pub fn missing(&mut self, what: &str) -> Translated {
        self.error(format!("missing {}", what));
        Translated {
            value: Some(self.placeholder()),
            variable: Some(Variable::anonymous()),
        }
    }

    pub fn placeholder(&mut self) -> ValueId {
        self.builder.emit_const(Constant::Int(0))
    }

    /// Value of a translation: its r-value, else the current value of its variable
    pub fn value_of(&mut self, translated: &Translated) -> Option<ValueId> {
        match (&translated.value, &translated.variable) {
            (Some(value), _) => Some(*value),
            (None, Some(variable)) => self.builder.variable_value(variable),
            (None, None) => None,
        }
    }

    pub fn translate_rvalue(&mut self, expr: &Expression) -> Option<ValueId> {
        let translated = self.translate(expr, false);
        self.value_of(&translated)
    }

    /// R-value of a child that must be present; a missing child becomes a placeholder
    pub fn required_rvalue(&mut self, child: Option<&Expression>, what: &str) -> Option<ValueId> {
        match child {
            Some(expr) => self.translate_rvalue(expr),
            None => {
                let translated = self.missing(what);
                translated.value
            }
        }
    }

    pub fn translate_initializer(&mut self, initializer: &Initializer) -> Option<ValueId> {
        assignments::translate_initializer(self, initializer)
    }

    /// Unique name for a merge variable
    pub fn next_temp_name(&mut self) -> String {
        let name = format!("{}_{}", self.config.temp_prefix, self.next_temp);
        self.next_temp += 1;
        name
    }
}
