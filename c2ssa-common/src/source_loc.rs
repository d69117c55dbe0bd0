//! Source location tracking for diagnostics
//! 
//! Every AST node and every diagnostic carries a span so that
//! warnings produced deep inside an expression point at the right text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based, offset is a byte offset)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(filename: &str, line: u32, column: u32, offset: usize) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
            offset,
        }
    }

    /// Location without a file, used by hand-built trees in tests
    pub fn new_simple(line: u32, column: u32) -> Self {
        Self::new("<input>", line, column, 0)
    }

    pub fn dummy() -> Self {
        Self::new("<unknown>", 0, 0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// A span in a source file (from start to end location)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create a span covering a single location
    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            end: location.clone(),
            start: location,
        }
    }

    pub fn dummy() -> Self {
        Self::from_location(SourceLocation::dummy())
    }

    /// Slice the covered text out of `source`, if the offsets fit
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start.offset..self.end.offset)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.filename != self.end.filename {
            write!(f, "{} to {}", self.start, self.end)
        } else if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}:{}", self.start.filename, self.start.line)
            } else {
                write!(
                    f,
                    "{}:{}:{}-{}",
                    self.start.filename, self.start.line, self.start.column, self.end.column
                )
            }
        } else {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.filename, self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::new("test.c", 42, 10, 300);
        assert_eq!(format!("{}", loc), "test.c:42:10");
    }

    #[test]
    fn test_source_span_same_line() {
        let span = SourceSpan::new(
            SourceLocation::new("test.c", 1, 5, 4),
            SourceLocation::new("test.c", 1, 10, 9),
        );
        assert_eq!(format!("{}", span), "test.c:1:5-10");
    }

    #[test]
    fn test_source_span_different_lines() {
        let span = SourceSpan::new(
            SourceLocation::new("test.c", 1, 5, 4),
            SourceLocation::new("test.c", 3, 10, 40),
        );
        assert_eq!(format!("{}", span), "test.c:1:5-3:10");
    }

    #[test]
    fn test_source_span_slice() {
        let span = SourceSpan::new(
            SourceLocation::new("test.c", 1, 3, 2),
            SourceLocation::new("test.c", 1, 6, 5),
        );
        assert_eq!(span.slice("a + b * c"), Some("+ b"));
        assert_eq!(span.slice("a"), None);
    }
}
