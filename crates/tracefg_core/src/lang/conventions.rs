//! Shared translator conventions (well-known identifiers and constants).

/// Name of the generic ERP dispatcher emitted by the tracer: `random('wrapped_flip', [0.5, JSON.parse('null')])`.
pub const ERP_DISPATCHER: &str = "random";

/// Prefix the tracer puts in front of ERP names passed to the dispatcher.
pub const WRAPPED_ERP_PREFIX: &str = "wrapped_";

/// Default name of the `FactorGraph` instance the emitted statements operate on.
pub const DEFAULT_GRAPH_NAME: &str = "myGraph";

/// Default solver iteration count written into the query preamble.
pub const DEFAULT_NUM_ITERATIONS: u32 = 10_000;

/// Java local holding the extracted belief of the queried variable.
pub const BELIEF_BINDING: &str = "belief";

/// Value written by `condition(v)` (Dimple has no boolean domain; true is index 1).
pub const CONDITION_FIXED_VALUE: i64 = 1;

/// Suffixes for branch-local outputs of a conditional (`ab3_then`, `ab3_else`).
pub const THEN_SUFFIX: &str = "then";
pub const ELSE_SUFFIX: &str = "else";

/// Strip the wrapped-ERP prefix, if present.
///
/// ## Examples
/// ```rust
/// use tracefg_core::lang::conventions::strip_wrapped_prefix;
///
/// assert_eq!(strip_wrapped_prefix("wrapped_flip"), Some("flip"));
/// assert_eq!(strip_wrapped_prefix("flip"), None);
/// assert_eq!(strip_wrapped_prefix("wrapped_"), None);
/// ```
pub fn strip_wrapped_prefix(name: &str) -> Option<&str> {
    name.strip_prefix(WRAPPED_ERP_PREFIX).filter(|rest| !rest.is_empty())
}
