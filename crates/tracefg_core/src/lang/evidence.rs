//! Evidence statements.
//!
//! The tracer records observations as calls to `condition(v)` (hard constraint) or `factor(v)` (soft weighting).
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::evidence::{self, EvidenceKindId};
//!
//! assert_eq!(evidence::from_str("condition"), Some(EvidenceKindId::Condition));
//! assert_eq!(evidence::from_str("observe"), None);
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for an evidence statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvidenceKindId {
    Condition,
    Factor,
}

pub type EvidenceKindInfo = LangItemInfo<EvidenceKindId>;

/// Registry of evidence statements.
pub const EVIDENCE_KINDS: &[EvidenceKindInfo] = &[
    LangItemInfo {
        id: EvidenceKindId::Condition,
        canonical: "condition",
        aliases: &[],
        description: "Hard evidence: fixes the variable's value to true.",
        stability: Stability::Stable,
    },
    LangItemInfo {
        id: EvidenceKindId::Factor,
        canonical: "factor",
        aliases: &[],
        description: "Soft evidence: the variable's value contributes a weight.",
        stability: Stability::Stable,
    },
];

/// Return the canonical spelling for an evidence statement.
pub fn as_str(id: EvidenceKindId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an evidence statement.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: EvidenceKindId) -> &'static EvidenceKindInfo {
    EVIDENCE_KINDS
        .iter()
        .find(|e| e.id == id)
        .expect("evidence info missing")
}

/// Resolve a callee name to an evidence statement.
pub fn from_str(name: &str) -> Option<EvidenceKindId> {
    EVIDENCE_KINDS.iter().find(|e| e.is_spelled(name)).map(|e| e.id)
}
