//! Type name parsing for casts, compound literals and `sizeof`

use crate::ast::TypeName;
use crate::lexer::{Token, TokenType};
use crate::parser::{ParseError, Parser};
use c2ssa_common::CompilerError;

impl<'src> Parser<'src> {
    /// Whether the token `n` places ahead can begin a type name
    pub(crate) fn is_type_start_at(&self, n: usize) -> bool {
        match self.peek_nth(n) {
            Some(Token { token_type: TokenType::Identifier(name), .. }) => self.typedefs.contains(name),
            Some(token) => token.token_type.is_type_keyword(),
            None => false,
        }
    }

    /// Parse `specifier-qualifier-list abstract-declarator?`.
    /// Only pointer and array declarators are understood.
    pub fn parse_type_name(&mut self) -> Result<TypeName, CompilerError> {
        let start = self.current_location();
        let mut specifiers = Vec::new();

        loop {
            let token_type = match self.peek() {
                Some(token) => token.token_type.clone(),
                None => break,
            };
            match token_type {
                TokenType::Const | TokenType::Volatile => {
                    self.advance();
                }
                TokenType::Struct | TokenType::Union | TokenType::Enum => {
                    self.advance();
                    specifiers.push(token_type.to_string());
                    match self.advance() {
                        Some(Token { token_type: TokenType::Identifier(tag), .. }) => specifiers.push(tag),
                        _ => {
                            return Err(ParseError::InvalidType {
                                message: format!("anonymous {} is not supported in a type name", token_type),
                                location: start,
                            }
                            .into())
                        }
                    }
                }
                TokenType::Identifier(ref name) if specifiers.is_empty() && self.typedefs.contains(name) => {
                    self.advance();
                    specifiers.push(name.clone());
                }
                ref keyword if keyword.is_type_keyword() => {
                    self.advance();
                    specifiers.push(keyword.to_string());
                }
                _ => break,
            }
        }

        if specifiers.is_empty() {
            return Err(self.unexpected("type name").into());
        }

        let mut pointer_depth = 0;
        loop {
            if self.match_token(&TokenType::Star) {
                pointer_depth += 1;
            } else if !(self.match_token(&TokenType::Const) || self.match_token(&TokenType::Volatile)) {
                break;
            }
        }

        let mut array_depth = 0;
        while self.match_token(&TokenType::LeftBracket) {
            // the bound does not affect the resolved type
            if !self.check(&TokenType::RightBracket) {
                self.parse_conditional_expression()?;
            }
            self.expect(TokenType::RightBracket, "array declarator")?;
            array_depth += 1;
        }

        Ok(TypeName {
            specifiers,
            pointer_depth,
            array_depth,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn type_name(input: &str, typedefs: &[&str]) -> TypeName {
        let tokens = Lexer::new(input).tokenize().unwrap();
        Parser::new(tokens, input)
            .with_typedefs(typedefs.iter().copied())
            .parse_type_name()
            .unwrap()
    }

    #[test]
    fn test_builtin_specifiers() {
        let ty = type_name("unsigned long", &[]);
        assert_eq!(ty.specifiers, vec!["unsigned", "long"]);
        assert_eq!(ty.pointer_depth, 0);
    }

    #[test]
    fn test_qualifiers_are_dropped() {
        let ty = type_name("const char * const *", &[]);
        assert_eq!(ty.specifiers, vec!["char"]);
        assert_eq!(ty.pointer_depth, 2);
    }

    #[test]
    fn test_struct_and_array() {
        let ty = type_name("struct point [4][2]", &[]);
        assert_eq!(ty.specifiers, vec!["struct", "point"]);
        assert_eq!(ty.array_depth, 2);
    }

    #[test]
    fn test_typedef_name() {
        let ty = type_name("size_t *", &["size_t"]);
        assert_eq!(ty.specifiers, vec!["size_t"]);
        assert_eq!(ty.pointer_depth, 1);
    }

    #[test]
    fn test_typedef_cast_only_when_known() {
        let input = "(size_t)x";
        let tokens = Lexer::new(input).tokenize().unwrap();
        let mut parser = Parser::new(tokens, input).with_typedefs(["size_t"]);
        assert!(matches!(
            parser.parse_expression().unwrap().kind,
            crate::ast::ExpressionKind::Cast { .. }
        ));
    }
}
