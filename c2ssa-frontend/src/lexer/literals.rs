//! Literal scanning for the C lexer
//! 
//! Only the extent of each literal is determined here. The raw spelling,
//! quotes and prefixes included, is handed to the parser untouched.

use crate::lexer::{Lexer, TokenType};
use c2ssa_common::CompilerError;

impl Lexer {
    /// Scan a preprocessing number: digits, letters, `_`, `.`, and signs after exponents
    pub fn tokenize_number(&mut self) -> TokenType {
        let mut number = String::new();
        let is_hex = self.current_char() == Some('0') && matches!(self.peek_char(1), Some('x') | Some('X'));

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' {
                number.push(ch);
                self.advance();
                let exponent = if is_hex { matches!(ch, 'p' | 'P') } else { matches!(ch, 'e' | 'E') };
                if exponent && matches!(self.current_char(), Some('+') | Some('-')) {
                    if let Some(sign) = self.advance() {
                        number.push(sign);
                    }
                }
            } else {
                break;
            }
        }

        TokenType::Constant(number)
    }

    /// Scan a character constant, `prefix` has already been consumed
    pub fn tokenize_char_literal(&mut self, prefix: String) -> Result<TokenType, CompilerError> {
        let text = self.scan_quoted(prefix, '\'', "character constant")?;
        Ok(TokenType::CharConstant(text))
    }

    /// Scan a string literal, `prefix` has already been consumed
    pub fn tokenize_string_literal(&mut self, prefix: String) -> Result<TokenType, CompilerError> {
        let text = self.scan_quoted(prefix, '"', "string literal")?;
        Ok(TokenType::StringLiteral(text))
    }

    fn scan_quoted(&mut self, mut text: String, quote: char, what: &str) -> Result<String, CompilerError> {
        let start = self.current_location();
        if let Some(open) = self.advance() {
            text.push(open);
        }

        while let Some(ch) = self.current_char() {
            match ch {
                '\n' => break,
                '\\' => {
                    text.push(ch);
                    self.advance();
                    if let Some(escaped) = self.advance() {
                        text.push(escaped);
                    }
                }
                _ => {
                    text.push(ch);
                    self.advance();
                    if ch == quote {
                        return Ok(text);
                    }
                }
            }
        }

        Err(CompilerError::lexer_error(format!("Unterminated {}", what), start))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenType};

    fn single(input: &str) -> TokenType {
        Lexer::new(input).next_token().unwrap().token_type
    }

    #[test]
    fn test_numbers_keep_raw_spelling() {
        assert_eq!(single("0x1F"), TokenType::Constant("0x1F".to_string()));
        assert_eq!(single("017u"), TokenType::Constant("017u".to_string()));
        assert_eq!(single("1e-10"), TokenType::Constant("1e-10".to_string()));
        assert_eq!(single(".5f"), TokenType::Constant(".5f".to_string()));
        assert_eq!(single("0x1p+3"), TokenType::Constant("0x1p+3".to_string()));
    }

    #[test]
    fn test_hex_digit_e_is_not_an_exponent() {
        let tokens = Lexer::new("0x1e+1").tokenize().unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Constant("0x1e".to_string()));
        assert_eq!(tokens[1].token_type, TokenType::Plus);
    }

    #[test]
    fn test_quoted_literals_keep_escapes() {
        assert_eq!(single(r"'\n'"), TokenType::CharConstant(r"'\n'".to_string()));
        assert_eq!(single(r#""a\"b""#), TokenType::StringLiteral(r#""a\"b""#.to_string()));
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        assert!(Lexer::new("\"abc").next_token().is_err());
        assert!(Lexer::new("'a\n'").next_token().is_err());
    }
}
