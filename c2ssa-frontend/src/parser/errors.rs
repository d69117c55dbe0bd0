//! Parse error types for the expression parser

use crate::lexer::Token;
use c2ssa_common::{CompilerError, SourceLocation};

/// Parse error types specific to the parser
#[derive(Debug, Clone)]
pub enum ParseError {
    UnexpectedToken {
        expected: String,
        found: Token,
    },
    InvalidType {
        message: String,
        location: SourceLocation,
    },
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedToken { expected, found } => {
                CompilerError::parse_error(
                    format!("Expected {}, found {}", expected, found.token_type),
                    found.span.start,
                )
            }
            ParseError::InvalidType { message, location } => {
                CompilerError::parse_error(message, location)
            }
        }
    }
}
