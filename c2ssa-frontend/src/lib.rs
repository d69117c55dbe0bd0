//! C expression to SSA translator - Frontend
//!
//! This crate provides:
//! - Lexer: tokenizes C expression source
//! - Parser: builds the expression AST from tokens
//! - AST: expression node definitions
//! - IR: SSA functions, the host builder and constant evaluation
//! - Codegen: the expression translator from AST to SSA

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod ir;
pub mod codegen;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{ParseError, Parser};
pub use ast::{BinaryOp, Expression, ExpressionKind, NodeIdGenerator, UnaryOp};
pub use ir::{Constant, Function, FunctionBuilder, FunctionTable, Type, Variable};
pub use codegen::{ExpressionTranslator, Translated, TranslatorConfig};

use c2ssa_common::{CompilerError, ErrorReporter, ValueId};
use log::debug;
use std::sync::Arc;

/// Output of translating one unit
pub struct Translation {
    pub builder: FunctionBuilder,
    /// One entry per top-level expression, in source order
    pub results: Vec<Translated>,
    pub reporter: ErrorReporter,
}

impl Translation {
    pub fn function(&self) -> &Function {
        self.builder.function()
    }

    /// R-value of the `index`th top-level expression
    pub fn value(&self, index: usize) -> Option<ValueId> {
        self.results.get(index).and_then(|r| r.value)
    }

    /// Constant the `index`th top-level expression evaluates to
    pub fn const_value(&self, index: usize) -> Option<Constant> {
        self.function().const_value(self.value(index)?)
    }
}

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Tokenize source code (for debugging/IDE features)
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::new(source);
        lexer.tokenize()
    }

    /// Parse a `;`-separated list of expressions
    pub fn parse_expressions(source: &str, config: &TranslatorConfig) -> Result<Vec<Expression>, CompilerError> {
        let tokens = Lexer::with_filename(source, &config.filename).tokenize()?;
        let mut parser = Parser::new(tokens, source).with_typedefs(config.typedefs.iter().cloned());
        parser.parse_expression_list()
    }

    /// Parse and translate `source` into one function
    pub fn translate_source(source: &str, config: &TranslatorConfig) -> Result<Translation, CompilerError> {
        let functions: FunctionTable = config.functions.iter().cloned().collect();
        Self::translate_with_table(source, config, Arc::new(functions))
    }

    /// Like [`Frontend::translate_source`] with a function table shared between units
    pub fn translate_with_table(
        source: &str,
        config: &TranslatorConfig,
        functions: Arc<FunctionTable>,
    ) -> Result<Translation, CompilerError> {
        let expressions = Self::parse_expressions(source, config)?;
        Ok(Self::translate_expressions(&expressions, config, functions))
    }

    /// Translate already parsed expressions in order. Never fails.
    pub fn translate_expressions(
        expressions: &[Expression],
        config: &TranslatorConfig,
        functions: Arc<FunctionTable>,
    ) -> Translation {
        let mut builder = FunctionBuilder::new(config.function_name.clone(), functions);
        let mut reporter = ErrorReporter::new();
        let results: Vec<Translated> = {
            let mut translator = ExpressionTranslator::new(&mut builder, &mut reporter, config);
            expressions.iter().map(|expr| translator.translate_expression(expr)).collect()
        };
        debug!(
            "Translated {} expressions into '{}': {}",
            expressions.len(),
            config.function_name,
            reporter.summary()
        );

        Translation {
            builder,
            results,
            reporter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_tokenize() {
        let tokens = Frontend::tokenize_source("x = 42;").unwrap();

        // x, =, 42, ;, EOF
        assert_eq!(tokens.len(), 5);
        assert!(matches!(tokens[0].token_type, TokenType::Identifier(_)));
        assert!(matches!(tokens[1].token_type, TokenType::Equal));
        assert!(matches!(tokens[4].token_type, TokenType::EndOfFile));
    }

    #[test]
    fn test_translate_source() {
        let translation = Frontend::translate_source("x = 5; x += 1;", &TranslatorConfig::default()).unwrap();
        assert_eq!(translation.results.len(), 2);
        assert_eq!(translation.const_value(1), Some(Constant::Int(6)));
        assert!(!translation.reporter.has_errors());
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        assert!(Frontend::translate_source("x = ;", &TranslatorConfig::default()).is_err());
    }
}
