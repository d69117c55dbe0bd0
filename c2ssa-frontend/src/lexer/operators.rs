//! Operator and comment scanning for the C lexer

use crate::lexer::{Lexer, TokenType};
use c2ssa_common::CompilerError;

impl Lexer {
    pub(crate) fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    pub(crate) fn skip_block_comment(&mut self) -> Result<(), CompilerError> {
        let start = self.current_location();
        self.advance(); // '/'
        self.advance(); // '*'

        while let Some(ch) = self.current_char() {
            if ch == '*' && self.peek_char(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(CompilerError::lexer_error(
            "Unterminated block comment".to_string(),
            start,
        ))
    }

    /// Tokenize a punctuator, longest match first
    pub fn tokenize_operator(&mut self) -> Result<TokenType, CompilerError> {
        let location = self.current_location();
        let c0 = self.current_char().unwrap_or('\0');
        let c1 = self.peek_char(1).unwrap_or('\0');
        let c2 = self.peek_char(2).unwrap_or('\0');

        let (token_type, width) = match (c0, c1, c2) {
            ('<', '<', '=') => (TokenType::LeftShiftEqual, 3),
            ('>', '>', '=') => (TokenType::RightShiftEqual, 3),
            ('+', '+', _) => (TokenType::PlusPlus, 2),
            ('-', '-', _) => (TokenType::MinusMinus, 2),
            ('-', '>', _) => (TokenType::Arrow, 2),
            ('<', '<', _) => (TokenType::LeftShift, 2),
            ('>', '>', _) => (TokenType::RightShift, 2),
            ('<', '=', _) => (TokenType::LessEqual, 2),
            ('>', '=', _) => (TokenType::GreaterEqual, 2),
            ('=', '=', _) => (TokenType::EqualEqual, 2),
            ('!', '=', _) => (TokenType::BangEqual, 2),
            ('&', '&', _) => (TokenType::AmpersandAmpersand, 2),
            ('|', '|', _) => (TokenType::PipePipe, 2),
            ('+', '=', _) => (TokenType::PlusEqual, 2),
            ('-', '=', _) => (TokenType::MinusEqual, 2),
            ('*', '=', _) => (TokenType::StarEqual, 2),
            ('/', '=', _) => (TokenType::SlashEqual, 2),
            ('%', '=', _) => (TokenType::PercentEqual, 2),
            ('&', '=', _) => (TokenType::AmpersandEqual, 2),
            ('|', '=', _) => (TokenType::PipeEqual, 2),
            ('^', '=', _) => (TokenType::CaretEqual, 2),
            ('+', _, _) => (TokenType::Plus, 1),
            ('-', _, _) => (TokenType::Minus, 1),
            ('*', _, _) => (TokenType::Star, 1),
            ('/', _, _) => (TokenType::Slash, 1),
            ('%', _, _) => (TokenType::Percent, 1),
            ('&', _, _) => (TokenType::Ampersand, 1),
            ('|', _, _) => (TokenType::Pipe, 1),
            ('^', _, _) => (TokenType::Caret, 1),
            ('~', _, _) => (TokenType::Tilde, 1),
            ('!', _, _) => (TokenType::Bang, 1),
            ('=', _, _) => (TokenType::Equal, 1),
            ('<', _, _) => (TokenType::Less, 1),
            ('>', _, _) => (TokenType::Greater, 1),
            ('?', _, _) => (TokenType::Question, 1),
            (':', _, _) => (TokenType::Colon, 1),
            ('(', _, _) => (TokenType::LeftParen, 1),
            (')', _, _) => (TokenType::RightParen, 1),
            ('{', _, _) => (TokenType::LeftBrace, 1),
            ('}', _, _) => (TokenType::RightBrace, 1),
            ('[', _, _) => (TokenType::LeftBracket, 1),
            (']', _, _) => (TokenType::RightBracket, 1),
            (';', _, _) => (TokenType::Semicolon, 1),
            (',', _, _) => (TokenType::Comma, 1),
            ('.', _, _) => (TokenType::Dot, 1),
            (other, _, _) => {
                return Err(CompilerError::lexer_error(
                    format!("Unexpected character '{}'", other),
                    location,
                ));
            }
        };

        for _ in 0..width {
            self.advance();
        }
        Ok(token_type)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenType};

    #[test]
    fn test_longest_match() {
        let types: Vec<_> = Lexer::new("a<<=b->c&&d")
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token_type)
            .collect();
        assert_eq!(types[1], TokenType::LeftShiftEqual);
        assert_eq!(types[3], TokenType::Arrow);
        assert_eq!(types[5], TokenType::AmpersandAmpersand);
    }

    #[test]
    fn test_unexpected_character() {
        assert!(Lexer::new("a @ b").tokenize().is_err());
    }
}
