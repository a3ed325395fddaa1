//! Reserved words of the trace surface syntax.
//!
//! The tracer emits a tiny JavaScript subset: `var` declarations, `if`/`else`, and the literal words `true`, `false`
//! and `null`. Everything else (including `random`, `condition`, `factor`) is an ordinary identifier.
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("var"), Some(KeywordId::Var));
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Var));
//! assert_eq!(keywords::as_str(KeywordId::Else), "else");
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for a reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Var,
    If,
    Else,
    True,
    False,
    Null,
}

pub type KeywordInfo = LangItemInfo<KeywordId>;

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Var, "var", &["let", "const"], "Single-assignment variable declaration."),
    info(KeywordId::If, "if", &[], "Conditional with a mandatory `else` branch."),
    info(KeywordId::Else, "else", &[], "Alternate branch of a conditional."),
    info(KeywordId::True, "true", &[], "Boolean literal."),
    info(KeywordId::False, "false", &[], "Boolean literal."),
    info(KeywordId::Null, "null", &[], "Null literal (only meaningful as ERP metadata)."),
];

/// Return the canonical spelling for a reserved word.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a reserved word.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling (canonical or alias) to a reserved word.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(name: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.is_spelled(name)).map(|k| k.id)
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> KeywordInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        stability: Stability::Stable,
    }
}
