//! Token definitions for the C expression lexer

use c2ssa_common::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// C token types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    // Literals keep their raw spelling; classification happens in the literal decoder
    Constant(String),
    CharConstant(String),
    StringLiteral(String),

    Identifier(String),

    // Keywords
    Sizeof, Alignof,
    Void, Char, Short, Int, Long, Float, Double, Signed, Unsigned, Bool,
    Struct, Union, Enum, Const, Volatile,

    // Operators
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Percent,        // %
    Ampersand,      // &
    Pipe,           // |
    Caret,          // ^
    Tilde,          // ~
    Bang,           // !
    Equal,          // =
    Less,           // <
    Greater,        // >
    Question,       // ?
    Colon,          // :

    // Compound operators
    PlusPlus,       // ++
    MinusMinus,     // --
    LeftShift,      // <<
    RightShift,     // >>
    LessEqual,      // <=
    GreaterEqual,   // >=
    EqualEqual,     // ==
    BangEqual,      // !=
    AmpersandAmpersand, // &&
    PipePipe,       // ||

    // Assignment operators
    PlusEqual,      // +=
    MinusEqual,     // -=
    StarEqual,      // *=
    SlashEqual,     // /=
    PercentEqual,   // %=
    AmpersandEqual, // &=
    PipeEqual,      // |=
    CaretEqual,     // ^=
    LeftShiftEqual, // <<=
    RightShiftEqual, // >>=

    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    Semicolon,      // ;
    Comma,          // ,
    Dot,            // .
    Arrow,          // ->

    EndOfFile,
}

impl TokenType {
    /// Keywords that can start a type name
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Void | TokenType::Char | TokenType::Short | TokenType::Int
                | TokenType::Long | TokenType::Float | TokenType::Double | TokenType::Signed
                | TokenType::Unsigned | TokenType::Bool | TokenType::Struct | TokenType::Union
                | TokenType::Enum | TokenType::Const | TokenType::Volatile
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenType::Constant(s)
            | TokenType::CharConstant(s)
            | TokenType::StringLiteral(s)
            | TokenType::Identifier(s) => return write!(f, "{s}"),
            TokenType::Sizeof => "sizeof",
            TokenType::Alignof => "_Alignof",
            TokenType::Void => "void",
            TokenType::Char => "char",
            TokenType::Short => "short",
            TokenType::Int => "int",
            TokenType::Long => "long",
            TokenType::Float => "float",
            TokenType::Double => "double",
            TokenType::Signed => "signed",
            TokenType::Unsigned => "unsigned",
            TokenType::Bool => "_Bool",
            TokenType::Struct => "struct",
            TokenType::Union => "union",
            TokenType::Enum => "enum",
            TokenType::Const => "const",
            TokenType::Volatile => "volatile",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Star => "*",
            TokenType::Slash => "/",
            TokenType::Percent => "%",
            TokenType::Ampersand => "&",
            TokenType::Pipe => "|",
            TokenType::Caret => "^",
            TokenType::Tilde => "~",
            TokenType::Bang => "!",
            TokenType::Equal => "=",
            TokenType::Less => "<",
            TokenType::Greater => ">",
            TokenType::Question => "?",
            TokenType::Colon => ":",
            TokenType::PlusPlus => "++",
            TokenType::MinusMinus => "--",
            TokenType::LeftShift => "<<",
            TokenType::RightShift => ">>",
            TokenType::LessEqual => "<=",
            TokenType::GreaterEqual => ">=",
            TokenType::EqualEqual => "==",
            TokenType::BangEqual => "!=",
            TokenType::AmpersandAmpersand => "&&",
            TokenType::PipePipe => "||",
            TokenType::PlusEqual => "+=",
            TokenType::MinusEqual => "-=",
            TokenType::StarEqual => "*=",
            TokenType::SlashEqual => "/=",
            TokenType::PercentEqual => "%=",
            TokenType::AmpersandEqual => "&=",
            TokenType::PipeEqual => "|=",
            TokenType::CaretEqual => "^=",
            TokenType::LeftShiftEqual => "<<=",
            TokenType::RightShiftEqual => ">>=",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::LeftBrace => "{",
            TokenType::RightBrace => "}",
            TokenType::LeftBracket => "[",
            TokenType::RightBracket => "]",
            TokenType::Semicolon => ";",
            TokenType::Comma => ",",
            TokenType::Dot => ".",
            TokenType::Arrow => "->",
            TokenType::EndOfFile => "end of file",
        };
        write!(f, "{text}")
    }
}

/// Token with its source span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, span: SourceSpan) -> Self {
        Self { token_type, span }
    }
}
