//! Error handling for the translator
//! 
//! Two channels exist. `CompilerError` is returned by the phases that can
//! genuinely fail (lexing, parsing, I/O). Everything the expression
//! translator notices is a `Diagnostic` collected by an `ErrorReporter`;
//! the translator itself never fails.

use crate::source_loc::{SourceLocation, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Hard errors from the phases surrounding the translator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Lexical error at {location}: {message}")]
    LexError {
        location: SourceLocation,
        message: String,
    },

    #[error("Parse error at {location}: {message}")]
    ParseError {
        location: SourceLocation,
        message: String,
    },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    pub fn lexer_error(message: String, location: SourceLocation) -> Self {
        CompilerError::LexError { location, message }
    }

    pub fn parse_error(message: String, location: SourceLocation) -> Self {
        CompilerError::ParseError { location, message }
    }
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Recoverable oddity, a best-effort fallback was taken
    Warn,
    /// Structurally malformed input, a placeholder was substituted
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warn => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with location, severity and the reporting component's tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    pub span: SourceSpan,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, tag: &str, message: String, span: SourceSpan) -> Self {
        Self {
            severity,
            tag: tag.to_string(),
            message,
            span,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}: {}", self.span, self.tag, self.severity, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        Ok(())
    }
}

/// Diagnostic sink. Collects diagnostics in emission order.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and return it for further decoration
    pub fn report(&mut self, severity: Severity, tag: &str, message: String, span: SourceSpan) -> &mut Diagnostic {
        match severity {
            Severity::Warn => self.warning_count += 1,
            Severity::Error => self.error_count += 1,
        }
        let index = self.diagnostics.len();
        self.diagnostics.push(Diagnostic::new(severity, tag, message, span));
        &mut self.diagnostics[index]
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics of one severity, in emission order
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity == severity)
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }

    pub fn summary(&self) -> String {
        match (self.error_count, self.warning_count) {
            (0, 0) => "No errors or warnings".to_string(),
            (0, w) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (e, 0) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (e, w) => format!(
                "{} error{} and {} warning{}",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> SourceSpan {
        SourceSpan::new(
            SourceLocation::new("test.c", 1, 1, 0),
            SourceLocation::new("test.c", 1, 5, 4),
        )
    }

    #[test]
    fn test_report_counts_by_severity() {
        let mut reporter = ErrorReporter::new();
        assert!(!reporter.has_errors());

        reporter.report(Severity::Warn, "c2ssa", "odd".to_string(), span());
        assert!(!reporter.has_errors());
        assert_eq!(reporter.warning_count(), 1);

        reporter.report(Severity::Error, "c2ssa", "broken".to_string(), span());
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.with_severity(Severity::Error).count(), 1);
    }

    #[test]
    fn test_diagnostic_display_with_notes() {
        let mut reporter = ErrorReporter::new();
        reporter
            .report(Severity::Warn, "c2ssa", "not found".to_string(), span())
            .notes
            .push("declared later".to_string());

        let text = reporter.diagnostics()[0].to_string();
        assert_eq!(text, "test.c:1:1-5: [c2ssa] warning: not found\n  note: declared later");
    }

    #[test]
    fn test_summary() {
        let mut reporter = ErrorReporter::new();
        assert_eq!(reporter.summary(), "No errors or warnings");

        reporter.report(Severity::Error, "t", "e1".to_string(), span());
        assert_eq!(reporter.summary(), "1 error");

        reporter.report(Severity::Error, "t", "e2".to_string(), span());
        reporter.report(Severity::Warn, "t", "w1".to_string(), span());
        assert_eq!(reporter.summary(), "2 errors and 1 warning");

        reporter.clear();
        assert_eq!(reporter.diagnostics().len(), 0);
    }
}
