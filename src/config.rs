//! Translation configuration
//!
//! Everything the emitted Java depends on that is not part of the trace itself: the name of the `FactorGraph`
//! instance, the solver iteration count written into the query preamble, and the local the belief is bound to.

use tracefg_core::lang::conventions;

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    /// Java identifier of the factor graph every statement operates on
    pub graph_name: String,
    /// Solver iteration count set before `solve()`
    pub num_iterations: u32,
    /// Java local receiving the queried variable's belief
    pub belief_binding: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            graph_name: conventions::DEFAULT_GRAPH_NAME.to_string(),
            num_iterations: conventions::DEFAULT_NUM_ITERATIONS,
            belief_binding: conventions::BELIEF_BINDING.to_string(),
        }
    }
}

impl TranslateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the factor graph identifier
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Set the solver iteration count
    pub fn with_num_iterations(mut self, iterations: u32) -> Self {
        self.num_iterations = iterations;
        self
    }

    /// Set the belief binding name
    pub fn with_belief_binding(mut self, name: impl Into<String>) -> Self {
        self.belief_binding = name.into();
        self
    }
}
