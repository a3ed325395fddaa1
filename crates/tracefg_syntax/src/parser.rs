//! Parser for trace programs
//!
//! Converts a token stream into an AST [`Program`]. The grammar is the JavaScript subset the tracer emits:
//!
//! ```text
//! program   := statement*
//! statement := "var" IDENT ("=" expr)? ";"
//!            | "if" "(" expr ")" statement ("else" statement)?
//!            | "{" statement* "}"
//!            | expr ";"
//!            | ";"
//! expr      := primary postfix*
//! primary   := IDENT | NUMBER | STRING | "true" | "false" | "null"
//!            | "[" (expr ("," expr)* ","?)? "]" | "(" expr ")" | "-" primary
//! postfix   := "(" args ")" | "." IDENT
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use tracefg_syntax::{lexer, parser};
//!
//! let source = "var ab0 = random('wrapped_flip',[0.5,JSON.parse('null')]);\nab0;\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.statements.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use tracefg_core::lang::keywords::KeywordId;
use tracefg_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
