//! Initializers and braced initializer lists

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::Parser;
use c2ssa_common::CompilerError;

impl<'src> Parser<'src> {
    /// Parse an initializer: a braced list or an assignment expression
    pub fn parse_initializer(&mut self) -> Result<Initializer, CompilerError> {
        let start = self.current_location();
        let kind = if self.check(&TokenType::LeftBrace) {
            InitializerKind::List(self.parse_initializer_list()?)
        } else {
            InitializerKind::Expression(self.parse_assignment_expression()?)
        };
        Ok(Initializer {
            node_id: self.node_id_gen.next(),
            kind,
            span: self.span_from(start),
        })
    }

    /// Parse `{ designation? initializer, ... }` with an optional trailing comma
    pub fn parse_initializer_list(&mut self) -> Result<InitializerList, CompilerError> {
        let start = self.current_location();
        self.expect(TokenType::LeftBrace, "initializer list")?;

        let mut items = Vec::new();
        while !self.check(&TokenType::RightBrace) {
            let designators = self.parse_designation()?;
            let initializer = self.parse_initializer()?;
            items.push(InitializerItem { designators, initializer });

            if !self.match_token(&TokenType::Comma) {
                break;
            }
        }
        self.expect(TokenType::RightBrace, "initializer list")?;

        Ok(InitializerList {
            items,
            span: self.span_from(start),
        })
    }

    /// `.name` and `[index]` designators up to `=`, or nothing
    fn parse_designation(&mut self) -> Result<Vec<Designator>, CompilerError> {
        let mut designators = Vec::new();
        loop {
            if self.match_token(&TokenType::Dot) {
                match self.advance() {
                    Some(Token { token_type: TokenType::Identifier(name), .. }) => {
                        designators.push(Designator::Member(name))
                    }
                    _ => return Err(self.unexpected("member designator").into()),
                }
            } else if self.match_token(&TokenType::LeftBracket) {
                let index = self.parse_conditional_expression()?;
                self.expect(TokenType::RightBracket, "array designator")?;
                designators.push(Designator::Index(Some(index)));
            } else {
                break;
            }
        }

        if !designators.is_empty() {
            self.expect(TokenType::Equal, "designated initializer")?;
        }
        Ok(designators)
    }
}
