//! Diagnostics for the trace front-end.
//!
//! [`CompileError`] carries a byte span into the source. It implements [`miette::Diagnostic`] so callers can render
//! it with source context:
//!
//! ```rust
//! use tracefg_syntax::ast::Span;
//! use tracefg_syntax::diagnostics::{CompileError, render};
//!
//! let err = CompileError::syntax("Expected ';'".to_string(), Span::new(4, 5));
//! let text = render("trace.js", "var x", &err);
//! assert!(text.contains("Expected ';'"));
//! ```

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report};

use crate::ast::Span;

/// A front-end error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Lex,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lex error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.kind {
            ErrorKind::Lex => "tracefg::lex",
            ErrorKind::Syntax => "tracefg::syntax",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_string()), (self.span.start, self.span.len()));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Render an error with source context into a string (no colours).
pub fn render(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let mut out = String::new();
    let handler = miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &*report).is_err() {
        out = format!("{}", error);
    }
    out
}

/// Print an error with source context to stderr.
pub fn print_error(file_name: &str, source: &str, error: &CompileError) {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    eprintln!("{:?}", report);
}
