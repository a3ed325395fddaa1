//! Trace Intermediate Representation (IR)
//!
//! The IR is the single-assignment program the translator walks. It sits between the surface AST and the Java
//! statement model:
//!
//! ```text
//! trace source → AST (tracefg_syntax) → IR (lower) → JavaStmt (backend) → Java text
//! ```
//!
//! Every variable is assigned exactly once along any execution path, except that both branches of a
//! [`Conditional`] assign the same merge variable.

pub mod lower;

pub use lower::lower_program;
pub use tracefg_syntax::ast::Literal;

use tracefg_core::lang::evidence::{self, EvidenceKindId};

/// An ordered sequence of top-level nodes; the root of translation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IrProgram {
    pub body: Vec<IrNode>,
}

impl IrProgram {
    pub fn new(body: Vec<IrNode>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IrNode {
    /// A bare reference to a declared variable. Emits nothing.
    Identifier(String),
    /// `var name = init;`
    Assignment(Assignment),
    /// `condition(v);` / `factor(v);` as a statement of its own
    Evidence(EvidenceCall),
    /// `if (test) { ... } else { ... }`
    Conditional(Conditional),
    /// The final bare variable reference of a program; the queried variable.
    TrailingExpression(String),
}

impl IrNode {
    /// Short human-readable name of the node kind (used in `UnsupportedNode` errors).
    pub fn kind_name(&self) -> &'static str {
        match self {
            IrNode::Identifier(_) => "identifier",
            IrNode::Assignment(_) => "assignment",
            IrNode::Evidence(_) => "evidence statement",
            IrNode::Conditional(_) => "conditional",
            IrNode::TrailingExpression(_) => "trailing expression",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub init: Initializer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    /// `f(args...)`, including the ERP dispatcher `random('wrapped_f', [args..., metadata])`
    Call(PrimitiveCall),
    /// `var x = condition(v);` (the tracer sometimes binds evidence results)
    Evidence(EvidenceCall),
    /// `var x = 0.5;`
    Literal(Literal),
    /// `var x = [0.2, 0.8];`
    Array(Vec<Argument>),
    /// `var b = a;`
    Alias(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveCall {
    pub function: String,
    pub args: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceCall {
    pub kind: EvidenceKindId,
    pub variable: String,
}

impl EvidenceCall {
    pub fn name(&self) -> &'static str {
        evidence::as_str(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// Selector; translation requires an [`IrNode::Identifier`].
    pub test: Box<IrNode>,
    pub consequent: Vec<IrNode>,
    pub alternate: Option<Vec<IrNode>>,
}

impl Conditional {
    /// The merge variable: the name the consequent branch defines last.
    ///
    /// Looks through a nested conditional in tail position.
    pub fn output(&self) -> Option<&str> {
        branch_output(&self.consequent)
    }
}

/// Name defined by the last node of a branch, if it defines one.
pub fn branch_output(branch: &[IrNode]) -> Option<&str> {
    match branch.last()? {
        IrNode::Assignment(assign) => Some(assign.name.as_str()),
        IrNode::Conditional(cond) => cond.output(),
        _ => None,
    }
}

/// An argument of a primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Literal(Literal),
    Variable(String),
    /// Literal array; one level deep in practice.
    Array(Vec<Argument>),
    /// The trailing metadata element of a dispatcher call, kept as re-generated source text (e.g. the tracer's
    /// `JSON.parse('null')`). Lowering rejects free expressions anywhere else.
    Expression(String),
}

impl Argument {
    pub fn number(value: f64) -> Self {
        Argument::Literal(Literal::Number(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Argument::Variable(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Argument::Literal(Literal::Str(value.into()))
    }

    /// The numeric value of a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Argument::Literal(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// `true` for literals and arrays made only of literals.
    pub fn is_constant(&self) -> bool {
        match self {
            Argument::Literal(_) => true,
            Argument::Array(items) => items.iter().all(Argument::is_constant),
            Argument::Variable(_) | Argument::Expression(_) => false,
        }
    }

    /// Visit every variable referenced by this argument, in order.
    pub fn for_each_variable<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Argument::Variable(name) => f(name),
            Argument::Array(items) => items.iter().for_each(|item| item.for_each_variable(f)),
            Argument::Literal(_) | Argument::Expression(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(name: &str, source: &str) -> IrNode {
        IrNode::Assignment(Assignment {
            name: name.into(),
            init: Initializer::Alias(source.into()),
        })
    }

    #[test]
    fn test_conditional_output_is_last_definition() {
        let cond = Conditional {
            test: Box::new(IrNode::Identifier("c".into())),
            consequent: vec![assign("t", "a"), assign("out", "t")],
            alternate: Some(vec![assign("out", "b")]),
        };
        assert_eq!(cond.output(), Some("out"));
    }

    #[test]
    fn test_conditional_output_looks_through_nested_conditional() {
        let inner = Conditional {
            test: Box::new(IrNode::Identifier("d".into())),
            consequent: vec![assign("out", "a")],
            alternate: Some(vec![assign("out", "b")]),
        };
        let outer = Conditional {
            test: Box::new(IrNode::Identifier("c".into())),
            consequent: vec![IrNode::Conditional(inner)],
            alternate: Some(vec![assign("out", "b")]),
        };
        assert_eq!(outer.output(), Some("out"));
    }

    #[test]
    fn test_branch_without_definition_has_no_output() {
        assert_eq!(branch_output(&[IrNode::Identifier("x".into())]), None);
        assert_eq!(branch_output(&[]), None);
    }

    #[test]
    fn test_argument_variables_include_array_elements() {
        let arg = Argument::Array(vec![Argument::variable("a"), Argument::number(1.0), Argument::variable("b")]);
        let mut seen = Vec::new();
        arg.for_each_variable(&mut |name| seen.push(name));
        assert_eq!(seen, ["a", "b"]);
        assert!(!arg.is_constant());
    }
}
