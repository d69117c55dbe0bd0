//! Cast, unary, postfix and primary expression parsing

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::Parser;
use c2ssa_common::{CompilerError, SourceLocation};

impl<'src> Parser<'src> {
    /// Parse cast expression: `( type-name ) cast-expression` or a unary expression.
    /// A compound literal `( type-name ) { ... }` continues as a postfix expression.
    pub fn parse_cast_expression(&mut self) -> Result<Expression, CompilerError> {
        if !(self.check(&TokenType::LeftParen) && self.is_type_start_at(1)) {
            return self.parse_unary_expression();
        }

        let start = self.current_location();
        self.advance(); // '('
        let type_name = self.parse_type_name()?;
        self.expect(TokenType::RightParen, "cast")?;

        if self.check(&TokenType::LeftBrace) {
            let initializers = self.parse_initializer_list()?;
            let literal = self.finish(ExpressionKind::CompoundLiteral { type_name, initializers }, start.clone());
            return self.parse_postfix_suffixes(literal, start);
        }

        let operand = self.parse_cast_expression()?;
        Ok(self.finish(
            ExpressionKind::Cast {
                type_name,
                operand: Some(Box::new(operand)),
            },
            start,
        ))
    }

    /// Parse unary expression
    pub fn parse_unary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_location();
        let token_type = match self.peek() {
            Some(token) => token.token_type.clone(),
            None => return Err(self.unexpected("expression").into()),
        };

        let unary_op = match token_type {
            TokenType::PlusPlus | TokenType::MinusMinus => {
                self.advance();
                let op = if token_type == TokenType::PlusPlus { IncDec::Increment } else { IncDec::Decrement };
                let operand = self.parse_unary_expression()?;
                return Ok(self.finish(
                    ExpressionKind::PreIncDec { op, operand: Some(Box::new(operand)) },
                    start,
                ));
            }
            TokenType::AmpersandAmpersand => {
                if let Some(Token { token_type: TokenType::Identifier(label), .. }) = self.peek_nth(1).cloned() {
                    self.advance();
                    self.advance();
                    return Ok(self.finish(ExpressionKind::LabelAddress(label), start));
                }
                return Err(self.unexpected("expression").into());
            }
            TokenType::Sizeof | TokenType::Alignof => {
                self.advance();
                let kind = if token_type == TokenType::Sizeof { TypeQueryKind::Sizeof } else { TypeQueryKind::Alignof };
                let operand = if self.check(&TokenType::LeftParen) && self.is_type_start_at(1) {
                    self.advance();
                    let type_name = self.parse_type_name()?;
                    self.expect(TokenType::RightParen, "sizeof")?;
                    TypeQueryOperand::Type(type_name)
                } else {
                    TypeQueryOperand::Expression(Box::new(self.parse_unary_expression()?))
                };
                return Ok(self.finish(ExpressionKind::TypeQuery { kind, operand }, start));
            }
            TokenType::Ampersand => UnaryOp::AddressOf,
            TokenType::Star => UnaryOp::Dereference,
            TokenType::Plus => UnaryOp::Plus,
            TokenType::Minus => UnaryOp::Minus,
            TokenType::Tilde => UnaryOp::BitNot,
            TokenType::Bang => UnaryOp::LogicalNot,
            _ => return self.parse_postfix_expression(),
        };

        self.advance();
        let operand = self.parse_cast_expression()?;
        Ok(self.finish(
            ExpressionKind::Unary { op: unary_op, operand: Some(Box::new(operand)) },
            start,
        ))
    }

    /// Parse postfix expression
    pub fn parse_postfix_expression(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_location();
        let base = self.parse_primary_expression()?;
        self.parse_postfix_suffixes(base, start)
    }

    /// Collect calls, indexing, member access and `++`/`--` after `base`, in source order
    pub(crate) fn parse_postfix_suffixes(&mut self, base: Expression, start: SourceLocation) -> Result<Expression, CompilerError> {
        let mut suffixes = Vec::new();

        loop {
            let token_type = match self.peek() {
                Some(token) => token.token_type.clone(),
                None => break,
            };
            let suffix = match token_type {
                TokenType::LeftParen => {
                    self.advance();
                    let mut arguments = Vec::new();
                    if !self.check(&TokenType::RightParen) {
                        loop {
                            arguments.push(self.parse_assignment_expression()?);
                            if !self.match_token(&TokenType::Comma) {
                                break;
                            }
                        }
                    }
                    self.expect(TokenType::RightParen, "function call")?;
                    PostfixSuffix::Call(arguments)
                }
                TokenType::LeftBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(TokenType::RightBracket, "array index")?;
                    PostfixSuffix::Index(Some(Box::new(index)))
                }
                TokenType::Dot | TokenType::Arrow => {
                    self.advance();
                    let arrow = token_type == TokenType::Arrow;
                    match self.advance() {
                        Some(Token { token_type: TokenType::Identifier(name), .. }) => {
                            PostfixSuffix::Member { name, arrow }
                        }
                        _ => return Err(self.unexpected("member name").into()),
                    }
                }
                TokenType::PlusPlus => {
                    self.advance();
                    PostfixSuffix::IncDec(IncDec::Increment)
                }
                TokenType::MinusMinus => {
                    self.advance();
                    PostfixSuffix::IncDec(IncDec::Decrement)
                }
                _ => break,
            };
            suffixes.push(suffix);
        }

        if suffixes.is_empty() {
            return Ok(base);
        }
        Ok(self.finish(
            ExpressionKind::Postfix { base: Some(Box::new(base)), suffixes },
            start,
        ))
    }

    /// Parse primary expression
    pub fn parse_primary_expression(&mut self) -> Result<Expression, CompilerError> {
        let start = self.current_location();

        let kind = match self.peek().map(|t| t.token_type.clone()) {
            Some(TokenType::Identifier(name)) => {
                self.advance();
                ExpressionKind::Identifier(name)
            }
            Some(TokenType::Constant(text)) | Some(TokenType::CharConstant(text)) => {
                self.advance();
                ExpressionKind::Constant(text)
            }
            Some(TokenType::StringLiteral(_)) => {
                let mut pieces = Vec::new();
                while let Some(Token { token_type: TokenType::StringLiteral(piece), .. }) = self.peek().cloned() {
                    pieces.push(piece);
                    self.advance();
                }
                ExpressionKind::StringLiteral(pieces)
            }
            Some(TokenType::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenType::RightParen, "parenthesized expression")?;
                ExpressionKind::Paren(Some(Box::new(inner)))
            }
            _ => return Err(self.unexpected("primary expression").into()),
        };

        Ok(self.finish(kind, start))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::tests::parse;

    #[test]
    fn test_postfix_chain_keeps_source_order() {
        let expr = parse("a.b->c[0]");
        match expr.kind {
            ExpressionKind::Postfix { base: Some(base), suffixes } => {
                assert_eq!(base.text, "a");
                assert_eq!(suffixes.len(), 3);
                assert_eq!(suffixes[0], PostfixSuffix::Member { name: "b".to_string(), arrow: false });
                assert_eq!(suffixes[1], PostfixSuffix::Member { name: "c".to_string(), arrow: true });
                assert!(matches!(suffixes[2], PostfixSuffix::Index(Some(_))));
            }
            other => panic!("Expected postfix expression, got {:?}", other),
        }
    }

    #[test]
    fn test_curried_calls() {
        let expr = parse("f(1)(2, 3)");
        match expr.kind {
            ExpressionKind::Postfix { suffixes, .. } => {
                assert!(matches!(&suffixes[0], PostfixSuffix::Call(args) if args.len() == 1));
                assert!(matches!(&suffixes[1], PostfixSuffix::Call(args) if args.len() == 2));
            }
            other => panic!("Expected postfix expression, got {:?}", other),
        }
    }

    #[test]
    fn test_adjacent_strings_form_one_primary() {
        let expr = parse(r#""ab" "cd""#);
        assert_eq!(
            expr.kind,
            ExpressionKind::StringLiteral(vec![r#""ab""#.to_string(), r#""cd""#.to_string()])
        );
    }

    #[test]
    fn test_cast_versus_parenthesized() {
        assert!(matches!(parse("(int)x").kind, ExpressionKind::Cast { .. }));
        assert!(matches!(parse("(x)").kind, ExpressionKind::Paren(Some(_))));
        assert!(matches!(parse("(char *)(long)x").kind, ExpressionKind::Cast { .. }));
    }

    #[test]
    fn test_unary_forms() {
        assert!(matches!(parse("++x").kind, ExpressionKind::PreIncDec { op: IncDec::Increment, .. }));
        assert!(matches!(parse("-x").kind, ExpressionKind::Unary { op: UnaryOp::Minus, .. }));
        assert!(matches!(parse("&&done").kind, ExpressionKind::LabelAddress(ref l) if l == "done"));
        assert!(matches!(
            parse("sizeof(int)").kind,
            ExpressionKind::TypeQuery { kind: TypeQueryKind::Sizeof, operand: TypeQueryOperand::Type(_) }
        ));
        assert!(matches!(
            parse("_Alignof x").kind,
            ExpressionKind::TypeQuery { kind: TypeQueryKind::Alignof, operand: TypeQueryOperand::Expression(_) }
        ));
    }

    #[test]
    fn test_compound_literal_takes_suffixes() {
        let expr = parse("(struct point){ .x = 1, .y = 2 }.x");
        match expr.kind {
            ExpressionKind::Postfix { base: Some(base), suffixes } => {
                assert!(matches!(base.kind, ExpressionKind::CompoundLiteral { .. }));
                assert_eq!(suffixes.len(), 1);
            }
            other => panic!("Expected postfix expression, got {:?}", other),
        }
    }
}
