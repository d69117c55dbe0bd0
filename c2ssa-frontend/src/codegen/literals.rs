//! Literal decoding
//!
//! Pure functions from raw token text to constants. Constant tokens are
//! tried as character, integer and float literals, in that order.

use crate::ir::Constant;

/// Decode a numeric or character constant token
pub fn decode_constant(text: &str) -> Option<Constant> {
    if let Some(code) = decode_char(text) {
        return Some(Constant::Int(code));
    }
    if let Some(value) = decode_int(text) {
        return Some(Constant::Int(value));
    }
    decode_float(text).map(Constant::Float)
}

/// `'a'`, `'\n'`, `L'x'`; multi-character constants are rejected
pub fn decode_char(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(['L', 'u', 'U']);
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let decoded = unescape(inner)?;
    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch as i64),
        _ => None,
    }
}

/// Hex `0x`, binary `0b`, octal leading zero, otherwise decimal.
/// `u`/`l` suffixes are ignored and values wrap to 64 bits.
pub fn decode_int(text: &str) -> Option<i64> {
    let digits = text.trim_end_matches(['u', 'U', 'l', 'L']);
    let (digits, radix) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(bin) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        (bin, 2)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (&digits[1..], 8)
    } else {
        (digits, 10)
    };

    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as i64)
}

/// Text containing `.` or an exponent marker; `f`/`l` suffixes are ignored
pub fn decode_float(text: &str) -> Option<f64> {
    if text.starts_with("0x") || text.starts_with("0X") {
        return None;
    }
    if !text.contains(['.', 'e', 'E']) {
        return None;
    }
    text.trim_end_matches(['f', 'F', 'l', 'L']).parse().ok()
}

/// Resolve C escape sequences, `None` if any escape is malformed
pub fn unescape(text: &str) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let decoded = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0C',
            'v' => '\x0B',
            'e' => '\x1B',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            '?' => '?',
            digit @ '0'..='7' => {
                let mut code = digit.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                char::from_u32(code)?
            }
            'x' => {
                let mut code: u32 = 0;
                let mut count = 0;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(16)) {
                    code = code.checked_mul(16)?.checked_add(d)?;
                    chars.next();
                    count += 1;
                }
                if count == 0 {
                    return None;
                }
                char::from_u32(code)?
            }
            marker @ ('u' | 'U') => {
                let width = if marker == 'u' { 4 } else { 8 };
                let mut code = 0;
                for _ in 0..width {
                    code = code * 16 + chars.next()?.to_digit(16)?;
                }
                char::from_u32(code)?
            }
            _ => return None,
        };
        result.push(decoded);
    }

    Some(result)
}

/// Contents of one string token. A well-formed quoted token is unescaped;
/// anything else contributes its inner text as written.
pub fn string_token_value(token: &str) -> String {
    let text = ["u8", "L", "u", "U"]
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix).filter(|rest| rest.starts_with('"')))
        .unwrap_or(token);

    let inner = match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner,
        None => return text.trim_matches('"').to_string(),
    };
    unescape(inner).unwrap_or_else(|| inner.to_string())
}

/// Adjacent string tokens concatenate
pub fn concat_strings<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(|t| string_token_value(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bases() {
        assert_eq!(decode_int("0x1F"), Some(31));
        assert_eq!(decode_int("0X1f"), Some(31));
        assert_eq!(decode_int("0b101"), Some(5));
        assert_eq!(decode_int("017"), Some(15));
        assert_eq!(decode_int("42"), Some(42));
        assert_eq!(decode_int("0"), Some(0));
        assert_eq!(decode_int("10UL"), Some(10));
    }

    #[test]
    fn test_bad_integers() {
        assert_eq!(decode_int("09"), None);
        assert_eq!(decode_int("0x"), None);
        assert_eq!(decode_int("3.14"), None);
    }

    #[test]
    fn test_integer_wraps_to_64_bits() {
        assert_eq!(decode_int("0xFFFFFFFFFFFFFFFF"), Some(-1));
    }

    #[test]
    fn test_char_literals() {
        assert_eq!(decode_char(r"'\n'"), Some(10));
        assert_eq!(decode_char("'a'"), Some(97));
        assert_eq!(decode_char(r"'\0'"), Some(0));
        assert_eq!(decode_char(r"'\x41'"), Some(65));
        assert_eq!(decode_char(r"'\101'"), Some(65));
        assert_eq!(decode_char("L'z'"), Some(122));
        assert_eq!(decode_char("'ab'"), None);
        assert_eq!(decode_char("97"), None);
    }

    #[test]
    fn test_float_detection() {
        assert_eq!(decode_constant("3.14"), Some(Constant::Float(3.14)));
        assert_eq!(decode_constant("1e10"), Some(Constant::Float(1e10)));
        assert_eq!(decode_constant("2.5f"), Some(Constant::Float(2.5)));
        assert_eq!(decode_constant(".5"), Some(Constant::Float(0.5)));
        assert_eq!(decode_constant("314"), Some(Constant::Int(314)));
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(decode_constant("'1'"), Some(Constant::Int(49)));
        // hex digit `e` is not an exponent
        assert_eq!(decode_constant("0x1e5"), Some(Constant::Int(485)));
        assert_eq!(decode_constant("1.2.3"), None);
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\tb").as_deref(), Some("a\tb"));
        assert_eq!(unescape(r#"say \"hi\""#).as_deref(), Some("say \"hi\""));
        assert_eq!(unescape(r"é").as_deref(), Some("é"));
        assert_eq!(unescape(r"bad\q"), None);
        assert_eq!(unescape("trailing\\"), None);
    }

    #[test]
    fn test_string_tokens() {
        assert_eq!(concat_strings(&[r#""ab""#, r#""cd""#]), "abcd");
        assert_eq!(concat_strings(&[r#""line\n""#, r#"L"wide""#]), "line\nwide");
        assert_eq!(string_token_value(r#"u8"x""#), "x");
    }

    #[test]
    fn test_malformed_escape_keeps_raw_text() {
        assert_eq!(string_token_value(r#""a\qb""#), r"a\qb");
        assert_eq!(string_token_value(r#""unterminated"#), "unterminated");
    }
}
