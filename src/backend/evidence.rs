//! Evidence encoding.
//!
//! - `condition(v)` fixes `v` to true: `v.setFixedValue(1);`
//! - `factor(v)` attaches a unary `Identity` factor to `v`, so the variable's value weights the graph.

use tracefg_core::lang::conventions::CONDITION_FIXED_VALUE;
use tracefg_core::lang::evidence::EvidenceKindId;
use tracefg_core::lang::factors::{self, FactorId};
use tracefg_core::lang::variables::{self, VariableKindId};

use super::target::{JavaExpr, JavaStmt};

/// Builds the statement for one evidence call against a graph.
#[derive(Debug, Clone, Copy)]
pub struct EvidenceHandler<'g> {
    graph: &'g str,
}

impl<'g> EvidenceHandler<'g> {
    pub fn new(graph: &'g str) -> Self {
        Self { graph }
    }

    /// `kind` applied to `variable`, which was declared with `declared`.
    pub fn build(&self, kind: EvidenceKindId, variable: &str, declared: VariableKindId) -> JavaStmt {
        match kind {
            EvidenceKindId::Condition => {
                if declared != VariableKindId::Bit {
                    // Index 1 is only "true" on a Bit domain.
                    tracing::warn!(
                        variable,
                        kind = variables::as_str(declared),
                        "condition on a non-Bit variable fixes it to domain index 1"
                    );
                }
                JavaStmt::FixValue {
                    variable: variable.to_string(),
                    value: JavaExpr::Int(CONDITION_FIXED_VALUE),
                }
            }
            EvidenceKindId::Factor => JavaStmt::AddFactor {
                graph: self.graph.to_string(),
                constructor: factors::as_str(FactorId::Identity).to_string(),
                constructor_args: Vec::new(),
                output: variable.to_string(),
                inputs: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_fixes_value_to_true() {
        let stmt = EvidenceHandler::new("myGraph").build(EvidenceKindId::Condition, "ab3", VariableKindId::Bit);
        assert_eq!(stmt.to_string(), "ab3.setFixedValue(1);");
    }

    #[test]
    fn test_condition_on_real_still_emits_fixed_value() {
        let stmt = EvidenceHandler::new("myGraph").build(EvidenceKindId::Condition, "x", VariableKindId::Real);
        assert_eq!(stmt.to_string(), "x.setFixedValue(1);");
    }

    #[test]
    fn test_factor_attaches_identity() {
        let stmt = EvidenceHandler::new("g").build(EvidenceKindId::Factor, "w", VariableKindId::Real);
        assert_eq!(stmt.to_string(), "g.addFactor(new Identity(), w);");
    }
}
