//! Recursive descent parser for C expressions
//! 
//! Produces the expression AST the translator consumes. A source is a
//! `;`-separated list of expressions; statements and declarations belong to
//! the host and are not parsed here.

pub mod errors;
pub mod types;
pub mod expressions;
pub mod postfix;
pub mod initializers;

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use c2ssa_common::{CompilerError, SourceLocation, SourceSpan};
use std::collections::{HashSet, VecDeque};

pub use errors::ParseError;

/// C expression parser
pub struct Parser<'src> {
    pub(crate) tokens: VecDeque<Token>,
    pub(crate) source: &'src str,
    pub(crate) node_id_gen: NodeIdGenerator,
    pub(crate) typedefs: HashSet<String>,
    pub(crate) previous_end: SourceLocation,
}

impl<'src> Parser<'src> {
    /// Create a parser over `tokens` lexed from `source`
    pub fn new(tokens: Vec<Token>, source: &'src str) -> Self {
        let previous_end = tokens
            .first()
            .map(|t| t.span.start.clone())
            .unwrap_or_else(SourceLocation::dummy);
        Self {
            tokens: tokens.into(),
            source,
            node_id_gen: NodeIdGenerator::new(),
            typedefs: HashSet::new(),
            previous_end,
        }
    }

    /// Names that denote types, so `(name)x` parses as a cast
    pub fn with_typedefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.typedefs.extend(names.into_iter().map(Into::into));
        self
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(n)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        if token.token_type != TokenType::EndOfFile {
            self.previous_end = token.span.end.clone();
        }
        Some(token)
    }

    pub(crate) fn check(&self, token_type: &TokenType) -> bool {
        match self.peek() {
            Some(token) => std::mem::discriminant(&token.token_type) == std::mem::discriminant(token_type),
            None => matches!(token_type, TokenType::EndOfFile),
        }
    }

    pub(crate) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, token_type: TokenType, context: &str) -> Result<Token, ParseError> {
        if self.check(&token_type) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.unexpected(&format!("{} in {}", token_type, context)))
    }

    /// Error for the current token
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let found = self.peek().cloned().unwrap_or_else(|| {
            Token::new(TokenType::EndOfFile, SourceSpan::from_location(self.previous_end.clone()))
        });
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found,
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        match self.peek() {
            Some(token) => token.span.start.clone(),
            None => self.previous_end.clone(),
        }
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn span_from(&self, start: SourceLocation) -> SourceSpan {
        SourceSpan::new(start, self.previous_end.clone())
    }

    /// Build a node covering `start` up to the last consumed token
    pub(crate) fn finish(&mut self, kind: ExpressionKind, start: SourceLocation) -> Expression {
        let span = self.span_from(start);
        let text = span.slice(self.source).unwrap_or_default().to_string();
        Expression::new(self.node_id_gen.next(), kind, span, text)
    }

    /// Parse a `;`-separated expression list up to end of input
    pub fn parse_expression_list(&mut self) -> Result<Vec<Expression>, CompilerError> {
        let mut expressions = Vec::new();
        loop {
            while self.match_token(&TokenType::Semicolon) {}
            if self.check(&TokenType::EndOfFile) {
                return Ok(expressions);
            }
            expressions.push(self.parse_expression()?);
            if !self.check(&TokenType::EndOfFile) {
                self.expect(TokenType::Semicolon, "expression list")?;
            }
        }
    }
}
