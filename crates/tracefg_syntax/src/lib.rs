//! Syntax front-end for execution traces: lexer, parser, AST, diagnostics.
//!
//! The tracer serialises a probabilistic program run as a small JavaScript subset in single-assignment form:
//!
//! ```text
//! var ab0 = random('wrapped_flip', [0.5, JSON.parse('null')]);
//! var ab1 = and(ab0, ab0);
//! if (ab1) { var ab2 = ab0; } else { var ab2 = ab1; }
//! condition(ab2);
//! ab2;
//! ```
//!
//! This crate turns that text into an [`ast::Program`]. It is intentionally “syntax-only”: classifying statements
//! into translator IR (assignments, evidence, conditionals, the trailing query) happens in the `tracefg` crate.
//!
//! ## Examples
//! ```rust
//! use tracefg_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("var ab0 = flip(0.5);\nab0;\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```
//!
//! ## See also
//! - `tracefg_core::lang` for registry-backed vocabulary (keywords/punctuation).

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns every lexer error, or (if lexing succeeded) every parser error.
pub fn parse_source(source: &str) -> Result<ast::Program, Vec<diagnostics::CompileError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
