//! Dimple variable kinds.
//!
//! Every factor-graph variable the translator declares has one of these kinds. The canonical spelling is the Java
//! class name emitted in declarations (`Bit ab0 = new Bit();`).
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::variables::{self, VariableKindId};
//!
//! assert_eq!(variables::as_str(VariableKindId::Bit), "Bit");
//! assert_eq!(variables::as_str(VariableKindId::FiniteField), "FiniteFieldVariable");
//! assert!(variables::is_continuous(VariableKindId::Real));
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for a Dimple variable kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKindId {
    Discrete,
    Bit,
    Real,
    RealJoint,
    FiniteField,
}

/// Metadata for a variable kind.
#[derive(Debug, Clone, Copy)]
pub struct VariableKindInfo {
    pub item: LangItemInfo<VariableKindId>,
    /// Continuous kinds report beliefs as parameter objects instead of `double[]` tables.
    pub continuous: bool,
}

/// Registry of all variable kinds.
pub const VARIABLE_KINDS: &[VariableKindInfo] = &[
    info(
        VariableKindId::Discrete,
        "Discrete",
        "Variable over an enumerated domain.",
        false,
    ),
    info(VariableKindId::Bit, "Bit", "Discrete variable over the domain {0, 1}.", false),
    info(VariableKindId::Real, "Real", "Continuous scalar variable.", true),
    info(
        VariableKindId::RealJoint,
        "RealJoint",
        "Continuous vector variable (jointly distributed reals).",
        true,
    ),
    info(
        VariableKindId::FiniteField,
        "FiniteFieldVariable",
        "Variable over a finite field GF(2^n).",
        false,
    ),
];

/// Return the Java class name for a variable kind.
pub fn as_str(id: VariableKindId) -> &'static str {
    info_for(id).item.canonical
}

/// Return `true` if the kind is continuous.
pub fn is_continuous(id: VariableKindId) -> bool {
    info_for(id).continuous
}

/// Return the full metadata entry for a variable kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: VariableKindId) -> &'static VariableKindInfo {
    VARIABLE_KINDS
        .iter()
        .find(|v| v.item.id == id)
        .expect("variable kind info missing")
}

/// Resolve a Java class name to a variable kind.
pub fn from_str(name: &str) -> Option<VariableKindId> {
    VARIABLE_KINDS
        .iter()
        .find(|v| v.item.is_spelled(name))
        .map(|v| v.item.id)
}

const fn info(
    id: VariableKindId,
    canonical: &'static str,
    description: &'static str,
    continuous: bool,
) -> VariableKindInfo {
    VariableKindInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            stability: Stability::Stable,
        },
        continuous,
    }
}
