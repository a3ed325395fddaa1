//! Dimple factor constructors.
//!
//! The canonical spelling is the Java class instantiated inside `addFactor(new <Ctor>(..), ..)`.
//!
//! ## Notes
//! - `Structural` factors are emitted by the translator itself (branch merges, aliases, soft evidence); they have no
//!   source primitive.
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::factors::{self, FactorCategory, FactorId};
//!
//! assert_eq!(factors::as_str(FactorId::Multiplexer), "Multiplexer");
//! assert_eq!(factors::category(FactorId::Normal), FactorCategory::Stochastic);
//! ```

use super::registry::{LangItemInfo, Stability};

/// Broad grouping of factor constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorCategory {
    /// Conditional distributions backing ERPs.
    Stochastic,
    /// Deterministic functions of their inputs.
    Deterministic,
    /// Emitted by the translator for control flow and evidence.
    Structural,
}

/// Stable identifier for a factor constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorId {
    // Stochastic
    Bernoulli,
    Normal,
    Beta,
    Gamma,
    Poisson,
    Binomial,
    Categorical,
    Dirichlet,

    // Deterministic
    And,
    Or,
    Not,
    Xor,
    Equals,
    GreaterThan,
    LessThan,
    Sum,
    Subtract,
    Product,
    Divide,
    Negate,
    Abs,
    Exp,
    Log,
    Sqrt,

    // Structural
    Multiplexer,
    Equality,
    Identity,
}

/// Metadata for a factor constructor.
#[derive(Debug, Clone, Copy)]
pub struct FactorInfo {
    pub item: LangItemInfo<FactorId>,
    pub category: FactorCategory,
}

/// Registry of all factor constructors.
pub const FACTORS: &[FactorInfo] = &[
    stochastic(FactorId::Bernoulli, "Bernoulli", "Bernoulli(p) over a Bit output."),
    stochastic(FactorId::Normal, "Normal", "Normal(mean, precision) over a Real output."),
    stochastic(FactorId::Beta, "Beta", "Beta(alpha, beta) over a Real output."),
    stochastic(FactorId::Gamma, "Gamma", "Gamma(alpha, beta) with rate beta over a Real output."),
    stochastic(FactorId::Poisson, "Poisson", "Poisson(lambda) over a Discrete output."),
    stochastic(FactorId::Binomial, "Binomial", "Binomial(N) with success probability as input."),
    stochastic(
        FactorId::Categorical,
        "Categorical",
        "Categorical distribution over a Discrete index.",
    ),
    stochastic(FactorId::Dirichlet, "Dirichlet", "Dirichlet(alphas) over a RealJoint output."),
    deterministic(FactorId::And, "And", "Logical conjunction of the inputs."),
    deterministic(FactorId::Or, "Or", "Logical disjunction of the inputs."),
    deterministic(FactorId::Not, "Not", "Logical negation."),
    deterministic(FactorId::Xor, "Xor", "Exclusive or of the inputs."),
    deterministic(FactorId::Equals, "Equals", "Output is 1 iff all inputs are equal."),
    deterministic(FactorId::GreaterThan, "GreaterThan", "Output is 1 iff a > b."),
    deterministic(FactorId::LessThan, "LessThan", "Output is 1 iff a < b."),
    deterministic(FactorId::Sum, "Sum", "Sum of the inputs."),
    deterministic(FactorId::Subtract, "Subtract", "First input minus the others."),
    deterministic(FactorId::Product, "Product", "Product of the inputs."),
    deterministic(FactorId::Divide, "Divide", "Quotient of two inputs."),
    deterministic(FactorId::Negate, "Negate", "Arithmetic negation."),
    deterministic(FactorId::Abs, "Abs", "Absolute value."),
    deterministic(FactorId::Exp, "Exp", "Natural exponential."),
    deterministic(FactorId::Log, "Log", "Natural logarithm."),
    deterministic(FactorId::Sqrt, "Sqrt", "Square root."),
    structural(
        FactorId::Multiplexer,
        "Multiplexer",
        "Output equals the input chosen by the selector.",
    ),
    structural(FactorId::Equality, "Equality", "Constrains all connected variables to be equal."),
    structural(
        FactorId::Identity,
        "Identity",
        "Unit factor over a single variable; marks soft evidence.",
    ),
];

/// Return the Java class name for a factor constructor.
pub fn as_str(id: FactorId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the category for a factor constructor.
pub fn category(id: FactorId) -> FactorCategory {
    info_for(id).category
}

/// Return the full metadata entry for a factor constructor.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: FactorId) -> &'static FactorInfo {
    FACTORS
        .iter()
        .find(|f| f.item.id == id)
        .expect("factor info missing")
}

/// Resolve a Java class name to a factor constructor.
pub fn from_str(name: &str) -> Option<FactorId> {
    FACTORS.iter().find(|f| f.item.is_spelled(name)).map(|f| f.item.id)
}

const fn factor(
    id: FactorId,
    canonical: &'static str,
    description: &'static str,
    category: FactorCategory,
) -> FactorInfo {
    FactorInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            stability: Stability::Stable,
        },
        category,
    }
}

const fn stochastic(id: FactorId, canonical: &'static str, description: &'static str) -> FactorInfo {
    factor(id, canonical, description, FactorCategory::Stochastic)
}

const fn deterministic(id: FactorId, canonical: &'static str, description: &'static str) -> FactorInfo {
    factor(id, canonical, description, FactorCategory::Deterministic)
}

const fn structural(id: FactorId, canonical: &'static str, description: &'static str) -> FactorInfo {
    factor(id, canonical, description, FactorCategory::Structural)
}
