//! Define error types for IR → Java translation.
//!
//! These errors represent *translation* failures (as opposed to lex/parse errors, which are
//! `tracefg_syntax::diagnostics::CompileError`). Every variant is fatal for the call that raised it: no partial
//! output is returned.
//!
//! ## Notes
//!
//! - Prefer actionable messages: users should know which primitive, variable or construct is at fault and, where
//!   possible, what to do instead.

use miette::Diagnostic;
use thiserror::Error;

/// Error during translation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TranslateError {
    #[error("cannot translate primitive `{name}`: no descriptor producer is registered for it")]
    #[diagnostic(
        code(tracefg::unknown_primitive),
        help("register a producer with `PrimitiveRegistry::register` and retry")
    )]
    UnknownPrimitive { name: String },

    #[error("unsupported construct: {kind}")]
    #[diagnostic(code(tracefg::unsupported_node))]
    UnsupportedNode { kind: String },

    #[error("cannot declare `{name}` from a literal: {reason}")]
    #[diagnostic(code(tracefg::malformed_literal_assignment))]
    MalformedLiteralAssignment { name: String, reason: String },

    #[error("malformed ERP dispatch: {reason}")]
    #[diagnostic(
        code(tracefg::malformed_dispatch),
        help("the dispatcher is expected as `random('wrapped_<erp>', [args..., metadata])`")
    )]
    MalformedDispatch { reason: String },

    #[error("unsupported arguments for `{primitive}`: {reason}")]
    #[diagnostic(code(tracefg::unsupported_arguments))]
    UnsupportedArguments { primitive: String, reason: String },

    #[error("descriptor producer for `{primitive}` did not set the {field}")]
    #[diagnostic(code(tracefg::incomplete_descriptor))]
    IncompleteDescriptor { primitive: String, field: &'static str },

    #[error("variable `{name}` is used before it is declared")]
    #[diagnostic(code(tracefg::undeclared_variable))]
    UndeclaredVariable { name: String },

    #[error("conditional branches define different variables (`{consequent}` and `{alternate}`)")]
    #[diagnostic(
        code(tracefg::mismatched_branches),
        help("both branches of a conditional must end by assigning the same merge variable")
    )]
    MismatchedBranches { consequent: String, alternate: String },

    #[error("variable `{name}` is declared more than once")]
    #[diagnostic(
        code(tracefg::duplicate_declaration),
        help("a trace assigns every variable exactly once; rename one of the declarations")
    )]
    DuplicateDeclaration { name: String },
}

impl TranslateError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        TranslateError::UnsupportedNode { kind: kind.into() }
    }

    pub fn undeclared(name: impl Into<String>) -> Self {
        TranslateError::UndeclaredVariable { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_primitive_names_the_callee() {
        let err = TranslateError::UnknownPrimitive {
            name: "wrapped_uniform".into(),
        };
        assert!(err.to_string().contains("`wrapped_uniform`"));
    }

    #[test]
    fn test_unsupported_node_names_the_kind() {
        let err = TranslateError::unsupported("member expression `Math.PI`");
        assert_eq!(err.to_string(), "unsupported construct: member expression `Math.PI`");
    }

    #[test]
    fn test_diagnostic_codes_are_namespaced() {
        let err = TranslateError::undeclared("ab9");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tracefg::undeclared_variable"));
    }
}
