//! Source primitive vocabulary.
//!
//! This module defines the canonical set of source primitives the translator knows how to encode: elementary random
//! primitives (ERPs) and deterministic functions. Each entry names the Dimple factor and variable kind the primitive
//! maps to; *how* the call's arguments are wired into that factor is decided by the translator's descriptor producers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The tracer spells ERPs as `wrapped_<name>` inside the `random(..)` dispatcher; that prefix is a naming
//!   convention resolved by the translator (see [`super::conventions::strip_wrapped_prefix`]), not an alias.
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::primitives::{self, PrimitiveId, PrimitiveKind};
//! use tracefg_core::lang::variables::VariableKindId;
//!
//! let info = primitives::info_for(PrimitiveId::Gaussian);
//! assert_eq!(info.item.canonical, "gaussian");
//! assert_eq!(info.kind, PrimitiveKind::Erp);
//! assert_eq!(info.output, VariableKindId::Real);
//! assert!(info.arity.accepts(2));
//! ```

use super::factors::FactorId;
use super::registry::{LangItemInfo, Stability};
use super::variables::VariableKindId;

/// Whether a primitive is a random choice or a deterministic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Erp,
    Deterministic,
}

/// Number of arguments a primitive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    /// Return `true` if a call with `n` arguments is well-formed.
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::Between(lo, hi) => lo <= n && n <= hi,
            Arity::AtLeast(k) => n >= k,
        }
    }

    /// Human-readable form used in diagnostics and generated docs.
    pub fn describe(self) -> String {
        match self {
            Arity::Exactly(1) => "1 argument".to_string(),
            Arity::Exactly(k) => format!("{k} arguments"),
            Arity::Between(lo, hi) => format!("{lo} to {hi} arguments"),
            Arity::AtLeast(k) => format!("at least {k} argument{}", if k == 1 { "" } else { "s" }),
        }
    }
}

/// Stable identifier for a source primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    // ERPs
    Flip,
    Gaussian,
    Beta,
    Gamma,
    Exponential,
    Poisson,
    Binomial,
    Discrete,
    Dirichlet,

    // Deterministic
    And,
    Or,
    Not,
    Xor,
    Equal,
    Greater,
    Less,
    Plus,
    Minus,
    Mult,
    Div,
    Abs,
    Exp,
    Log,
    Sqrt,
}

/// Metadata for a source primitive.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub item: LangItemInfo<PrimitiveId>,
    pub kind: PrimitiveKind,
    /// Factor constructor the primitive is encoded with.
    pub factor: FactorId,
    /// Kind of the variable declared for the primitive's result.
    pub output: VariableKindId,
    pub arity: Arity,
}

/// Registry of all source primitives.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    // ERPs
    erp(
        PrimitiveId::Flip,
        "flip",
        &[],
        "Coin flip with success probability p (default 0.5).",
        FactorId::Bernoulli,
        VariableKindId::Bit,
        Arity::Between(0, 1),
    ),
    erp(
        PrimitiveId::Gaussian,
        "gaussian",
        &["normal"],
        "Normal distribution parameterised by mean and standard deviation.",
        FactorId::Normal,
        VariableKindId::Real,
        Arity::Exactly(2),
    ),
    erp(
        PrimitiveId::Beta,
        "beta",
        &[],
        "Beta distribution with shape parameters a and b.",
        FactorId::Beta,
        VariableKindId::Real,
        Arity::Exactly(2),
    ),
    erp(
        PrimitiveId::Gamma,
        "gamma",
        &[],
        "Gamma distribution parameterised by shape and scale.",
        FactorId::Gamma,
        VariableKindId::Real,
        Arity::Exactly(2),
    ),
    erp(
        PrimitiveId::Exponential,
        "exponential",
        &[],
        "Exponential distribution with the given rate.",
        FactorId::Gamma,
        VariableKindId::Real,
        Arity::Exactly(1),
    ),
    draft(erp(
        PrimitiveId::Poisson,
        "poisson",
        &[],
        "Poisson distribution; the domain is truncated to a finite range.",
        FactorId::Poisson,
        VariableKindId::Discrete,
        Arity::Exactly(1),
    )),
    erp(
        PrimitiveId::Binomial,
        "binomial",
        &[],
        "Number of successes in n trials with success probability p.",
        FactorId::Binomial,
        VariableKindId::Discrete,
        Arity::Exactly(2),
    ),
    erp(
        PrimitiveId::Discrete,
        "discrete",
        &["categorical"],
        "Index drawn proportionally to a weight vector.",
        FactorId::Categorical,
        VariableKindId::Discrete,
        Arity::Exactly(1),
    ),
    erp(
        PrimitiveId::Dirichlet,
        "dirichlet",
        &[],
        "Dirichlet distribution over probability vectors.",
        FactorId::Dirichlet,
        VariableKindId::RealJoint,
        Arity::Exactly(1),
    ),
    // Deterministic
    det(
        PrimitiveId::And,
        "and",
        &[],
        "Logical conjunction.",
        FactorId::And,
        VariableKindId::Bit,
        Arity::AtLeast(1),
    ),
    det(
        PrimitiveId::Or,
        "or",
        &[],
        "Logical disjunction.",
        FactorId::Or,
        VariableKindId::Bit,
        Arity::AtLeast(1),
    ),
    det(
        PrimitiveId::Not,
        "not",
        &[],
        "Logical negation.",
        FactorId::Not,
        VariableKindId::Bit,
        Arity::Exactly(1),
    ),
    det(
        PrimitiveId::Xor,
        "xor",
        &[],
        "Exclusive or.",
        FactorId::Xor,
        VariableKindId::Bit,
        Arity::AtLeast(2),
    ),
    det(
        PrimitiveId::Equal,
        "equal",
        &["eq"],
        "Equality test.",
        FactorId::Equals,
        VariableKindId::Bit,
        Arity::AtLeast(2),
    ),
    det(
        PrimitiveId::Greater,
        "greater",
        &["gt"],
        "Strictly-greater comparison.",
        FactorId::GreaterThan,
        VariableKindId::Bit,
        Arity::Exactly(2),
    ),
    det(
        PrimitiveId::Less,
        "less",
        &["lt"],
        "Strictly-less comparison.",
        FactorId::LessThan,
        VariableKindId::Bit,
        Arity::Exactly(2),
    ),
    det(
        PrimitiveId::Plus,
        "plus",
        &["sum"],
        "Sum of the arguments.",
        FactorId::Sum,
        VariableKindId::Real,
        Arity::AtLeast(1),
    ),
    det(
        PrimitiveId::Minus,
        "minus",
        &[],
        "Difference of the arguments; negation when called with one argument.",
        FactorId::Subtract,
        VariableKindId::Real,
        Arity::AtLeast(1),
    ),
    det(
        PrimitiveId::Mult,
        "mult",
        &["product"],
        "Product of the arguments.",
        FactorId::Product,
        VariableKindId::Real,
        Arity::AtLeast(1),
    ),
    det(
        PrimitiveId::Div,
        "div",
        &[],
        "Quotient of two arguments.",
        FactorId::Divide,
        VariableKindId::Real,
        Arity::Exactly(2),
    ),
    det(
        PrimitiveId::Abs,
        "abs",
        &[],
        "Absolute value.",
        FactorId::Abs,
        VariableKindId::Real,
        Arity::Exactly(1),
    ),
    det(
        PrimitiveId::Exp,
        "exp",
        &[],
        "Natural exponential.",
        FactorId::Exp,
        VariableKindId::Real,
        Arity::Exactly(1),
    ),
    det(
        PrimitiveId::Log,
        "log",
        &[],
        "Natural logarithm.",
        FactorId::Log,
        VariableKindId::Real,
        Arity::Exactly(1),
    ),
    det(
        PrimitiveId::Sqrt,
        "sqrt",
        &[],
        "Square root.",
        FactorId::Sqrt,
        VariableKindId::Real,
        Arity::Exactly(1),
    ),
];

/// Return the canonical spelling for a primitive.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the accepted aliases for a primitive.
pub fn aliases(id: PrimitiveId) -> &'static [&'static str] {
    info_for(id).item.aliases
}

/// Return the full metadata entry for a primitive.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.item.id == id)
        .expect("primitive info missing")
}

/// Resolve a spelling to a primitive identifier.
///
/// ## Returns
/// - `Some(PrimitiveId)` if `name` matches a canonical spelling or alias.
/// - `None` otherwise (including `wrapped_*` spellings; see the module notes).
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    if let Some(p) = PRIMITIVES.iter().find(|p| p.item.canonical == name) {
        return Some(p.item.id);
    }
    PRIMITIVES
        .iter()
        .find(|p| p.item.aliases.contains(&name))
        .map(|p| p.item.id)
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: PrimitiveId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    kind: PrimitiveKind,
    factor: FactorId,
    output: VariableKindId,
    arity: Arity,
) -> PrimitiveInfo {
    PrimitiveInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            stability: Stability::Stable,
        },
        kind,
        factor,
        output,
        arity,
    }
}

const fn erp(
    id: PrimitiveId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    factor: FactorId,
    output: VariableKindId,
    arity: Arity,
) -> PrimitiveInfo {
    entry(id, canonical, aliases, description, PrimitiveKind::Erp, factor, output, arity)
}

const fn det(
    id: PrimitiveId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    factor: FactorId,
    output: VariableKindId,
    arity: Arity,
) -> PrimitiveInfo {
    entry(
        id,
        canonical,
        aliases,
        description,
        PrimitiveKind::Deterministic,
        factor,
        output,
        arity,
    )
}

const fn draft(mut info: PrimitiveInfo) -> PrimitiveInfo {
    info.item.stability = Stability::Draft;
    info
}
