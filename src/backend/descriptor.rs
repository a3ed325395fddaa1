//! Factor descriptors and the builder that resolves them.
//!
//! One primitive call becomes exactly two statements:
//!
//! ```text
//! <Type> <output> = new <Type>(<variable args>);
//! <graph>.addFactor(new <Constructor>(<constructor args>), <output>[, <inputs>]);
//! ```
//!
//! The builder unwraps the ERP dispatcher, renders the arguments, asks the registry's producer to fill in the
//! descriptor, and checks the producer's post-conditions.

use tracefg_core::lang::conventions;
use tracefg_core::lang::variables::VariableKindId;

use super::errors::TranslateError;
use super::registry::PrimitiveRegistry;
use super::target::{JavaExpr, JavaStmt};
use crate::ir::{Argument, Literal};

/// A partially-built factor encoding, handed to a [`DescriptorProducer`](super::registry::DescriptorProducer).
#[derive(Debug, Clone, PartialEq)]
pub struct FactorDescriptor {
    pub output: String,
    /// Primitive name after dispatcher unwrapping (may still carry the `wrapped_` prefix).
    pub primitive: String,
    pub args: Vec<Argument>,
    /// `args` rendered as Java expressions, index for index.
    pub rendered_args: Vec<JavaExpr>,

    pub target_type: Option<VariableKindId>,
    pub constructor: Option<String>,
    pub constructor_args: Vec<JavaExpr>,
    pub input_variables: Vec<JavaExpr>,
    /// Arguments of the output variable's own constructor (e.g. a discrete domain).
    pub variable_args: Vec<JavaExpr>,
    /// Set by a producer that cannot encode these arguments.
    pub unsupported: Option<String>,
}

impl FactorDescriptor {
    pub fn new(output: impl Into<String>, primitive: impl Into<String>, args: Vec<Argument>) -> Self {
        let rendered_args = args.iter().map(render_argument).collect();
        Self {
            output: output.into(),
            primitive: primitive.into(),
            args,
            rendered_args,
            target_type: None,
            constructor: None,
            constructor_args: Vec::new(),
            input_variables: Vec::new(),
            variable_args: Vec::new(),
            unsupported: None,
        }
    }

    /// Record that the arguments cannot be encoded.
    pub fn refuse(&mut self, reason: impl Into<String>) {
        self.unsupported = Some(reason.into());
    }
}

/// A descriptor whose producer post-conditions hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFactor {
    pub output: String,
    pub primitive: String,
    pub kind: VariableKindId,
    pub constructor: String,
    pub constructor_args: Vec<JavaExpr>,
    pub input_variables: Vec<JavaExpr>,
    pub variable_args: Vec<JavaExpr>,
}

impl ResolvedFactor {
    /// The declaration and factor-addition statements for this factor.
    pub fn statements(&self, graph: &str) -> Vec<JavaStmt> {
        vec![
            JavaStmt::Declare {
                kind: self.kind,
                name: self.output.clone(),
                args: self.variable_args.clone(),
            },
            JavaStmt::AddFactor {
                graph: graph.to_string(),
                constructor: self.constructor.clone(),
                constructor_args: self.constructor_args.clone(),
                output: self.output.clone(),
                inputs: self.input_variables.clone(),
            },
        ]
    }
}

/// Turns `(output, primitive, args)` into factor statements.
pub struct DescriptorBuilder<'r> {
    registry: &'r PrimitiveRegistry,
    graph: &'r str,
}

impl<'r> DescriptorBuilder<'r> {
    pub fn new(registry: &'r PrimitiveRegistry, graph: &'r str) -> Self {
        Self { registry, graph }
    }

    /// Resolve a call to a complete factor description.
    ///
    /// ## Errors
    /// - `MalformedDispatch` when a `random(..)` call does not have the dispatcher shape.
    /// - `UnknownPrimitive` when the (unwrapped) name has no producer.
    /// - `UnsupportedArguments` when the producer refuses the arguments.
    /// - `IncompleteDescriptor` when the producer leaves the target type or constructor unset.
    #[tracing::instrument(level = "debug", skip_all, fields(output = output, function = function))]
    pub fn describe(&self, output: &str, function: &str, args: &[Argument]) -> Result<ResolvedFactor, TranslateError> {
        let (primitive, args) = unwrap_dispatch(function, args)?;
        let producer = self.registry.resolve(&primitive)?;

        let mut descriptor = FactorDescriptor::new(output, primitive, args);
        producer.populate(&mut descriptor);

        if let Some(reason) = descriptor.unsupported {
            return Err(TranslateError::UnsupportedArguments {
                primitive: descriptor.primitive,
                reason,
            });
        }
        let Some(kind) = descriptor.target_type else {
            return Err(TranslateError::IncompleteDescriptor {
                primitive: descriptor.primitive,
                field: "target type",
            });
        };
        let Some(constructor) = descriptor.constructor else {
            return Err(TranslateError::IncompleteDescriptor {
                primitive: descriptor.primitive,
                field: "constructor",
            });
        };

        Ok(ResolvedFactor {
            output: descriptor.output,
            primitive: descriptor.primitive,
            kind,
            constructor,
            constructor_args: descriptor.constructor_args,
            input_variables: descriptor.input_variables,
            variable_args: descriptor.variable_args,
        })
    }

    /// Resolve a call and render its two statements.
    pub fn build(&self, output: &str, function: &str, args: &[Argument]) -> Result<Vec<JavaStmt>, TranslateError> {
        Ok(self.describe(output, function, args)?.statements(self.graph))
    }
}

/// Rewrite `random('P', [A..., metadata])` to `P(A...)`; any other call passes through unchanged.
///
/// ## Errors
/// - `MalformedDispatch` unless the dispatcher gets exactly a string literal and a non-empty array.
pub fn unwrap_dispatch(function: &str, args: &[Argument]) -> Result<(String, Vec<Argument>), TranslateError> {
    if function != conventions::ERP_DISPATCHER {
        return Ok((function.to_string(), args.to_vec()));
    }

    match args {
        [Argument::Literal(Literal::Str(name)), Argument::Array(items)] => match items.split_last() {
            Some((_metadata, real_args)) => Ok((name.clone(), real_args.to_vec())),
            None => Err(TranslateError::MalformedDispatch {
                reason: format!("argument list for `{}` is missing the trailing metadata element", name),
            }),
        },
        [first, Argument::Array(_)] => Err(TranslateError::MalformedDispatch {
            reason: format!("expected the primitive name as a string literal, found {}", describe(first)),
        }),
        [_, second] => Err(TranslateError::MalformedDispatch {
            reason: format!("expected the argument list as an array, found {}", describe(second)),
        }),
        _ => Err(TranslateError::MalformedDispatch {
            reason: format!("expected 2 arguments, found {}", args.len()),
        }),
    }
}

fn describe(arg: &Argument) -> String {
    match arg {
        Argument::Literal(lit) => format!("literal {}", lit),
        Argument::Variable(name) => format!("variable `{}`", name),
        Argument::Array(_) => "an array".to_string(),
        Argument::Expression(text) => format!("expression `{}`", text),
    }
}

/// Render an argument as a Java expression.
///
/// Arrays of numbers become `new double[] {..}`; any other array becomes `new Object[] {..}`. `null` and re-generated
/// expressions pass through as text.
pub fn render_argument(arg: &Argument) -> JavaExpr {
    match arg {
        Argument::Literal(Literal::Number(n)) => JavaExpr::Number(*n),
        Argument::Literal(Literal::Bool(b)) => JavaExpr::Bool(*b),
        Argument::Literal(Literal::Str(s)) => JavaExpr::Str(s.clone()),
        Argument::Literal(Literal::Null) => JavaExpr::Raw("null".to_string()),
        Argument::Variable(name) => JavaExpr::Ident(name.clone()),
        Argument::Array(items) => {
            let elem_ty = if items.iter().all(|item| item.as_number().is_some()) {
                "double"
            } else {
                "Object"
            };
            JavaExpr::Array {
                elem_ty,
                items: items.iter().map(render_argument).collect(),
            }
        }
        Argument::Expression(text) => JavaExpr::Raw(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(name: &str, args: Vec<Argument>) -> Vec<Argument> {
        let mut items = args;
        items.push(Argument::Expression("JSON.parse('null')".into()));
        vec![Argument::string(name), Argument::Array(items)]
    }

    fn rendered(stmts: &[JavaStmt]) -> Vec<String> {
        stmts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_unwrap_dispatch_drops_metadata() {
        let (name, args) = unwrap_dispatch("random", &dispatch("wrapped_flip", vec![Argument::number(0.5)])).unwrap();
        assert_eq!(name, "wrapped_flip");
        assert_eq!(args, vec![Argument::number(0.5)]);
    }

    #[test]
    fn test_unwrap_dispatch_passes_other_calls_through() {
        let args = vec![Argument::variable("a"), Argument::variable("b")];
        let (name, out) = unwrap_dispatch("and", &args).unwrap();
        assert_eq!(name, "and");
        assert_eq!(out, args);
    }

    #[test]
    fn test_unwrap_dispatch_rejects_malformed_shapes() {
        let no_metadata = vec![Argument::string("wrapped_flip"), Argument::Array(vec![])];
        assert!(matches!(
            unwrap_dispatch("random", &no_metadata),
            Err(TranslateError::MalformedDispatch { .. })
        ));

        let variable_name = vec![Argument::variable("f"), Argument::Array(vec![Argument::number(1.0)])];
        let err = unwrap_dispatch("random", &variable_name).unwrap_err();
        assert!(err.to_string().contains("found variable `f`"));

        let one_arg = vec![Argument::string("wrapped_flip")];
        assert!(unwrap_dispatch("random", &one_arg).unwrap_err().to_string().contains("expected 2 arguments"));
    }

    #[test]
    fn test_build_flip_through_dispatcher() {
        let registry = PrimitiveRegistry::with_builtins();
        let builder = DescriptorBuilder::new(&registry, "myGraph");
        let stmts = builder
            .build("ab0", "random", &dispatch("wrapped_flip", vec![Argument::number(0.5)]))
            .unwrap();
        assert_eq!(
            rendered(&stmts),
            ["Bit ab0 = new Bit();", "myGraph.addFactor(new Bernoulli(0.5), ab0);"]
        );
    }

    #[test]
    fn test_dispatch_and_direct_call_render_identically() {
        let registry = PrimitiveRegistry::with_builtins();
        let builder = DescriptorBuilder::new(&registry, "myGraph");
        let args = vec![Argument::number(0.0), Argument::number(2.0)];
        let wrapped = builder
            .build("x", "random", &dispatch("wrapped_gaussian", args.clone()))
            .unwrap();
        let direct = builder.build("x", "gaussian", &args).unwrap();
        assert_eq!(wrapped, direct);
    }

    #[test]
    fn test_unknown_primitive_propagates() {
        let registry = PrimitiveRegistry::with_builtins();
        let builder = DescriptorBuilder::new(&registry, "myGraph");
        let err = builder
            .build("x", "random", &dispatch("wrapped_uniform", vec![]))
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::UnknownPrimitive {
                name: "wrapped_uniform".into()
            }
        );
    }

    #[test]
    fn test_incomplete_descriptor_is_reported() {
        let mut registry = PrimitiveRegistry::empty();
        registry.register("half", |d: &mut FactorDescriptor| {
            d.target_type = Some(VariableKindId::Real);
        });
        let builder = DescriptorBuilder::new(&registry, "g");
        let err = builder.build("x", "half", &[]).unwrap_err();
        assert_eq!(
            err,
            TranslateError::IncompleteDescriptor {
                primitive: "half".into(),
                field: "constructor"
            }
        );
    }

    #[test]
    fn test_custom_producer_sees_rendered_args() {
        let mut registry = PrimitiveRegistry::empty();
        registry.register("mix", |d: &mut FactorDescriptor| {
            d.target_type = Some(VariableKindId::Real);
            d.constructor = Some("Mixture".to_string());
            d.input_variables = d.rendered_args.clone();
        });
        let builder = DescriptorBuilder::new(&registry, "g");
        let args = [
            Argument::variable("a"),
            Argument::Array(vec![Argument::number(0.2), Argument::number(0.8)]),
        ];
        let stmts = builder.build("m", "mix", &args).unwrap();
        assert_eq!(
            stmts[1].to_string(),
            "g.addFactor(new Mixture(), m, a, new double[] {0.2, 0.8});"
        );
    }

    #[test]
    fn test_render_mixed_array_as_object_array() {
        let arg = Argument::Array(vec![Argument::number(1.0), Argument::variable("a")]);
        assert_eq!(render_argument(&arg).to_string(), "new Object[] {1, a}");
    }
}
