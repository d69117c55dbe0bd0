//! C expression lexer
//! 
//! Tokenizes C source text into a stream of tokens. Constants are kept in
//! their raw spelling; deciding what a constant means is the job of the
//! literal decoder in `codegen::literals`.

pub mod token;
pub mod literals;
pub mod operators;

pub use token::{Token, TokenType};

use c2ssa_common::{CompilerError, SourceLocation, SourceSpan};
use std::collections::HashMap;

/// C lexer
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) offset: usize,
    filename: String,
    keywords: HashMap<&'static str, TokenType>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self::with_filename(input, "<input>")
    }

    pub fn with_filename(input: &str, filename: &str) -> Self {
        let keywords = [
            ("sizeof", TokenType::Sizeof),
            ("_Alignof", TokenType::Alignof),
            ("alignof", TokenType::Alignof),
            ("void", TokenType::Void),
            ("char", TokenType::Char),
            ("short", TokenType::Short),
            ("int", TokenType::Int),
            ("long", TokenType::Long),
            ("float", TokenType::Float),
            ("double", TokenType::Double),
            ("signed", TokenType::Signed),
            ("unsigned", TokenType::Unsigned),
            ("_Bool", TokenType::Bool),
            ("struct", TokenType::Struct),
            ("union", TokenType::Union),
            ("enum", TokenType::Enum),
            ("const", TokenType::Const),
            ("volatile", TokenType::Volatile),
        ]
        .into_iter()
        .collect();

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            offset: 0,
            filename: filename.to_string(),
            keywords,
        }
    }

    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line, self.column, self.offset)
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), CompilerError> {
        loop {
            match (self.current_char(), self.peek_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Tokenize the whole input; the last token is always `EndOfFile`
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.token_type == TokenType::EndOfFile;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_trivia()?;
        let start = self.current_location();

        let token_type = match self.current_char() {
            None => TokenType::EndOfFile,
            Some(ch) if ch.is_ascii_digit() => self.tokenize_number(),
            Some('.') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => self.tokenize_number(),
            Some('\'') => self.tokenize_char_literal(String::new())?,
            Some('"') => self.tokenize_string_literal(String::new())?,
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                if let Some(prefix) = self.encoding_prefix() {
                    for _ in 0..prefix.len() {
                        self.advance();
                    }
                    if self.current_char() == Some('\'') {
                        self.tokenize_char_literal(prefix)?
                    } else {
                        self.tokenize_string_literal(prefix)?
                    }
                } else {
                    self.tokenize_identifier()
                }
            }
            Some(_) => self.tokenize_operator()?,
        };

        let span = SourceSpan::new(start, self.current_location());
        Ok(Token::new(token_type, span))
    }

    /// `L`, `u`, `U` or `u8` immediately followed by a quote
    fn encoding_prefix(&self) -> Option<String> {
        let is_quote = |c: Option<char>| matches!(c, Some('\'') | Some('"'));
        match self.current_char()? {
            'L' | 'U' if is_quote(self.peek_char(1)) => self.current_char().map(String::from),
            'u' if self.peek_char(1) == Some('8') && self.peek_char(2) == Some('"') => Some("u8".to_string()),
            'u' if is_quote(self.peek_char(1)) => Some("u".to_string()),
            _ => None,
        }
    }

    fn tokenize_identifier(&mut self) -> TokenType {
        let mut name = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match self.keywords.get(name.as_str()) {
            Some(keyword) => keyword.clone(),
            None => TokenType::Identifier(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_types(input: &str) -> Vec<TokenType> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_tokenize_assignment() {
        assert_eq!(
            token_types("x += 0x1F;"),
            vec![
                TokenType::Identifier("x".to_string()),
                TokenType::PlusEqual,
                TokenType::Constant("0x1F".to_string()),
                TokenType::Semicolon,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_tokenize_keywords_and_comments() {
        assert_eq!(
            token_types("sizeof(int) /* size */ // trailing\n"),
            vec![
                TokenType::Sizeof,
                TokenType::LeftParen,
                TokenType::Int,
                TokenType::RightParen,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_tokenize_prefixed_literals() {
        assert_eq!(
            token_types("L'a' u8\"x\" Lx"),
            vec![
                TokenType::CharConstant("L'a'".to_string()),
                TokenType::StringLiteral("u8\"x\"".to_string()),
                TokenType::Identifier("Lx".to_string()),
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_token_spans_track_offsets() {
        let tokens = Lexer::new("a\n  bc").tokenize().unwrap();
        assert_eq!(tokens[1].span.start.line, 2);
        assert_eq!(tokens[1].span.start.column, 3);
        assert_eq!(tokens[1].span.start.offset, 4);
        assert_eq!(tokens[1].span.end.offset, 6);
    }
}
