#![forbid(unsafe_code)]
//! tracefg: execution traces to Dimple factor graphs
//!
//! A probabilistic program's tracer records one run as a single-assignment trace. This crate translates that trace
//! into Java statements that build the equivalent Dimple factor graph and query the belief of the final variable.
//!
//! ```text
//! trace source → tracefg_syntax (lex, parse) → ir::lower → backend::Translator → Java text
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use tracefg::TranslateConfig;
//!
//! let java = tracefg::translate_source("var ab0 = flip(0.5); ab0", &TranslateConfig::default()).unwrap();
//! assert!(java.starts_with("Bit ab0 = new Bit();\n"));
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a translator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod ir;

use miette::Diagnostic;
use thiserror::Error;

pub use backend::{PrimitiveRegistry, TranslateError, Translator};
pub use config::TranslateConfig;
pub use tracefg_syntax::diagnostics::CompileError;

/// Any failure of [`translate_source`].
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("trace has {} syntax error(s)", .errors.len())]
    #[diagnostic(code(tracefg::syntax))]
    Syntax {
        #[related]
        errors: Vec<CompileError>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),
}

/// Parse, lower and translate trace source with the builtin primitives.
///
/// ## Errors
/// - [`Error::Syntax`] with every lexer or parser error.
/// - [`Error::Translate`] with the first translation failure.
pub fn translate_source(source: &str, config: &TranslateConfig) -> Result<String, Error> {
    translate_source_with(source, config, &PrimitiveRegistry::with_builtins())
}

/// [`translate_source`] against a caller-supplied registry.
pub fn translate_source_with(
    source: &str,
    config: &TranslateConfig,
    registry: &PrimitiveRegistry,
) -> Result<String, Error> {
    let program = tracefg_syntax::parse_source(source).map_err(|errors| Error::Syntax { errors })?;
    let ir = ir::lower_program(&program)?;
    Ok(Translator::new(registry, config).translate(&ir)?)
}
