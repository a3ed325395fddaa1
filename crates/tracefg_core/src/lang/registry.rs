//! Shareable metadata for `tracefg_core::lang` registries.
//!
//! The `tracefg_core::lang` module is a set of **registry-first** vocabularies: keywords, punctuation, evidence
//! statements, primitives, factor constructors and variable kinds. This submodule provides the small,
//! dependency-free metadata types that are reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Draft` marks items whose Dimple mapping is known to be approximate (e.g. a truncated discrete domain).
///
/// ## Examples
/// ```rust
/// use tracefg_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

impl Stability {
    /// Lower-case label used in generated docs.
    pub fn label(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Draft => "draft",
            Stability::Deprecated => "deprecated",
        }
    }
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (e.g. the factor a primitive maps to) wrap this struct's fields in an
/// “extension” info type instead.
///
/// ## Notes
/// - `description` is intentionally mandatory to keep docs/tooling consistent.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub stability: Stability,
}

impl<Id> LangItemInfo<Id> {
    /// Return `true` when `name` is the canonical spelling or one of the aliases.
    pub fn is_spelled(&self, name: &str) -> bool {
        self.canonical == name || self.aliases.contains(&name)
    }
}
