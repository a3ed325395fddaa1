//! IR → Java statement translation.
//!
//! A single depth-first pass over an [`IrProgram`]. The translator keeps a symbol table of everything declared so
//! far: factor-graph variables with their kind and constructor arguments, and plain Java constants from literal
//! assignments. Every reference is checked against it, so the emitted statements never use a name before its
//! declaration.
//!
//! Conditionals become one `Multiplexer` factor over a freshly declared merge variable:
//!
//! ```text
//! if (c) { var x = flip(0.3); } else { var x = a; }
//!
//! Bit x_then = new Bit();
//! myGraph.addFactor(new Bernoulli(0.3), x_then);
//! Bit x = new Bit();
//! myGraph.addFactor(new Multiplexer(), x, c, x_then, a);
//! ```

use std::collections::{HashMap, HashSet};

use tracefg_core::lang::conventions::{ELSE_SUFFIX, THEN_SUFFIX};
use tracefg_core::lang::factors::{self, FactorId};
use tracefg_core::lang::variables::{self, VariableKindId};

use super::descriptor::DescriptorBuilder;
use super::errors::TranslateError;
use super::evidence::EvidenceHandler;
use super::java_emitter::JavaEmitter;
use super::registry::PrimitiveRegistry;
use super::target::{JavaExpr, JavaStmt, JavaType};
use crate::config::TranslateConfig;
use crate::ir::{
    Argument, Assignment, Conditional, EvidenceCall, Initializer, IrNode, IrProgram, Literal, PrimitiveCall,
    branch_output,
};

/// A declared factor-graph variable.
#[derive(Debug, Clone, PartialEq)]
struct Declared {
    kind: VariableKindId,
    /// Constructor arguments, reused when the variable's kind is copied (aliases, merge variables).
    args: Vec<JavaExpr>,
}

#[derive(Debug, Clone, PartialEq)]
enum Binding {
    Variable(Declared),
    Constant(JavaType),
}

/// Per-call translation state.
#[derive(Debug, Default)]
struct Scope {
    symbols: HashMap<String, Binding>,
    /// Branch-local names handed out by `branch_local` and not declared yet.
    reserved: HashSet<String>,
    out: Vec<JavaStmt>,
}

impl Scope {
    fn lookup(&self, name: &str) -> Result<&Binding, TranslateError> {
        self.symbols.get(name).ok_or_else(|| TranslateError::undeclared(name))
    }

    fn variable(&self, name: &str) -> Result<&Declared, TranslateError> {
        match self.lookup(name)? {
            Binding::Variable(declared) => Ok(declared),
            Binding::Constant(ty) => Err(TranslateError::unsupported(format!(
                "constant `{}` of type {} used where a factor-graph variable is required",
                name,
                ty.as_str()
            ))),
        }
    }

    /// Record `binding` under a name that must not be declared yet.
    fn bind(&mut self, name: &str, binding: Binding) -> Result<(), TranslateError> {
        if self.symbols.contains_key(name) {
            return Err(TranslateError::DuplicateDeclaration { name: name.to_string() });
        }
        self.reserved.remove(name);
        self.symbols.insert(name.to_string(), binding);
        Ok(())
    }

    fn declare(&mut self, name: &str, kind: VariableKindId, args: Vec<JavaExpr>) -> Result<(), TranslateError> {
        self.bind(name, Binding::Variable(Declared { kind, args: args.clone() }))?;
        self.out.push(JavaStmt::Declare {
            kind,
            name: name.to_string(),
            args,
        });
        Ok(())
    }

    fn constant(&mut self, name: &str, ty: JavaType, value: JavaExpr) -> Result<(), TranslateError> {
        self.bind(name, Binding::Constant(ty))?;
        self.out.push(JavaStmt::LiteralDecl {
            ty,
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    /// Reserve `<base>_<suffix>`, or `<base>_<suffix>_2`, `_3`, ... if that name is taken.
    fn branch_local(&mut self, base: &str, suffix: &str) -> String {
        let stem = format!("{}_{}", base, suffix);
        let mut candidate = stem.clone();
        let mut n = 2;
        while self.symbols.contains_key(&candidate) || self.reserved.contains(&candidate) {
            candidate = format!("{}_{}", stem, n);
            n += 1;
        }
        self.reserved.insert(candidate.clone());
        candidate
    }
}

/// The value a conditional branch contributes to its multiplexer.
struct BranchValue {
    expr: JavaExpr,
    declared: Declared,
}

/// Translates IR programs into Java statements against one registry and configuration.
#[derive(Debug)]
pub struct Translator<'a> {
    registry: &'a PrimitiveRegistry,
    config: &'a TranslateConfig,
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a PrimitiveRegistry, config: &'a TranslateConfig) -> Self {
        Self { registry, config }
    }

    /// Translate a program to Java text, one statement per line.
    ///
    /// ## Errors
    /// - Any [`TranslateError`]; no partial output is returned.
    pub fn translate(&self, program: &IrProgram) -> Result<String, TranslateError> {
        Ok(JavaEmitter::render(&self.translate_statements(program)?))
    }

    /// Translate a program to structured statements.
    #[tracing::instrument(skip_all, fields(nodes = program.body.len(), graph = %self.config.graph_name))]
    pub fn translate_statements(&self, program: &IrProgram) -> Result<Vec<JavaStmt>, TranslateError> {
        let mut scope = Scope::default();
        let last = program.body.len().saturating_sub(1);

        for (i, node) in program.body.iter().enumerate() {
            match node {
                IrNode::TrailingExpression(name) if i == last => self.query(name, &mut scope)?,
                _ => self.translate_node(node, &mut scope)?,
            }
        }

        tracing::debug!(statements = scope.out.len(), "translation complete");
        Ok(scope.out)
    }

    fn builder(&self) -> DescriptorBuilder<'_> {
        DescriptorBuilder::new(self.registry, &self.config.graph_name)
    }

    fn translate_node(&self, node: &IrNode, scope: &mut Scope) -> Result<(), TranslateError> {
        match node {
            IrNode::Identifier(name) => scope.lookup(name).map(|_| ()),
            IrNode::Assignment(assign) => self.translate_assignment(assign, scope),
            IrNode::Evidence(call) => self.translate_evidence(call, scope),
            IrNode::Conditional(cond) => self.translate_conditional(cond, scope, None),
            IrNode::TrailingExpression(name) => Err(TranslateError::unsupported(format!(
                "trailing expression `{}` before the end of the program",
                name
            ))),
        }
    }

    fn translate_assignment(&self, assign: &Assignment, scope: &mut Scope) -> Result<(), TranslateError> {
        let name = assign.name.as_str();
        match &assign.init {
            Initializer::Call(call) => {
                self.translate_call(name, call, scope)?;
            }
            // The evidence result carries no value; only the evidence itself is emitted.
            Initializer::Evidence(call) => self.translate_evidence(call, scope)?,
            Initializer::Literal(lit) => {
                let (ty, value) = literal_value(name, lit)?;
                scope.constant(name, ty, value)?;
            }
            Initializer::Array(items) => {
                let values = items.iter().map(Argument::as_number).collect::<Option<Vec<_>>>();
                let Some(values) = values else {
                    return Err(TranslateError::MalformedLiteralAssignment {
                        name: name.to_string(),
                        reason: "only arrays of number literals have a Java declaration".to_string(),
                    });
                };
                scope.constant(name, JavaType::DoubleArray, JavaExpr::double_array(values))?;
            }
            Initializer::Alias(source) => match scope.lookup(source)?.clone() {
                Binding::Variable(declared) => {
                    scope.declare(name, declared.kind, declared.args)?;
                    scope.out.push(JavaStmt::AddFactor {
                        graph: self.config.graph_name.clone(),
                        constructor: factors::as_str(FactorId::Equality).to_string(),
                        constructor_args: Vec::new(),
                        output: name.to_string(),
                        inputs: vec![JavaExpr::ident(source)],
                    });
                }
                Binding::Constant(ty) => scope.constant(name, ty, JavaExpr::ident(source))?,
            },
        }
        Ok(())
    }

    /// Declare `output` from a primitive call and emit its factor.
    fn translate_call(&self, output: &str, call: &PrimitiveCall, scope: &mut Scope) -> Result<Declared, TranslateError> {
        let mut missing = None;
        for arg in &call.args {
            arg.for_each_variable(&mut |name| {
                if missing.is_none() && !scope.symbols.contains_key(name) {
                    missing = Some(name.to_string());
                }
            });
        }
        if let Some(name) = missing {
            return Err(TranslateError::undeclared(name));
        }

        let resolved = self.builder().describe(output, &call.function, &call.args)?;
        let declared = Declared {
            kind: resolved.kind,
            args: resolved.variable_args.clone(),
        };
        scope.bind(output, Binding::Variable(declared.clone()))?;
        scope.out.extend(resolved.statements(&self.config.graph_name));
        Ok(declared)
    }

    fn translate_evidence(&self, call: &EvidenceCall, scope: &mut Scope) -> Result<(), TranslateError> {
        let kind = match scope.lookup(&call.variable)? {
            Binding::Variable(declared) => declared.kind,
            Binding::Constant(_) => {
                return Err(TranslateError::unsupported(format!(
                    "`{}` on constant `{}`",
                    call.name(),
                    call.variable
                )));
            }
        };
        let stmt = EvidenceHandler::new(&self.config.graph_name).build(call.kind, &call.variable, kind);
        scope.out.push(stmt);
        Ok(())
    }

    /// Translate a conditional into a multiplexer over its merge variable.
    ///
    /// `output_override` renames the merge variable; a nested conditional in tail position uses it to define the
    /// enclosing branch's local instead of the shared merge name. Branch locals are named after the output, so
    /// `x_then` of an outer conditional is built from `x_then_then` and `x_then_else`.
    fn translate_conditional(
        &self,
        cond: &Conditional,
        scope: &mut Scope,
        output_override: Option<&str>,
    ) -> Result<(), TranslateError> {
        let selector = match cond.test.as_ref() {
            IrNode::Identifier(name) => {
                scope.lookup(name)?;
                name.clone()
            }
            other => {
                return Err(TranslateError::unsupported(format!(
                    "{} as conditional test",
                    other.kind_name()
                )));
            }
        };
        let Some(alternate) = &cond.alternate else {
            return Err(TranslateError::unsupported("conditional without else branch"));
        };

        let merge = match (branch_output(&cond.consequent), branch_output(alternate)) {
            (Some(then_name), Some(else_name)) if then_name == else_name => then_name.to_string(),
            (Some(then_name), Some(else_name)) => {
                return Err(TranslateError::MismatchedBranches {
                    consequent: then_name.to_string(),
                    alternate: else_name.to_string(),
                });
            }
            _ => {
                return Err(TranslateError::unsupported(
                    "conditional branch that does not end by assigning a variable",
                ));
            }
        };

        let output = output_override.unwrap_or(&merge);
        let then_value = self.translate_branch(&cond.consequent, output, THEN_SUFFIX, scope)?;
        let else_value = self.translate_branch(alternate, output, ELSE_SUFFIX, scope)?;

        if then_value.declared.kind != else_value.declared.kind {
            tracing::warn!(
                merge = %merge,
                consequent = variables::as_str(then_value.declared.kind),
                alternate = variables::as_str(else_value.declared.kind),
                "conditional branches produce different variable kinds; using the consequent's"
            );
        }

        tracing::debug!(output, selector = %selector, "emitting multiplexer");
        scope.declare(output, then_value.declared.kind, then_value.declared.args)?;
        scope.out.push(JavaStmt::AddFactor {
            graph: self.config.graph_name.clone(),
            constructor: factors::as_str(FactorId::Multiplexer).to_string(),
            constructor_args: Vec::new(),
            output: output.to_string(),
            inputs: vec![JavaExpr::Ident(selector), then_value.expr, else_value.expr],
        });
        Ok(())
    }

    fn translate_branch(
        &self,
        branch: &[IrNode],
        base: &str,
        suffix: &str,
        scope: &mut Scope,
    ) -> Result<BranchValue, TranslateError> {
        let Some((last, body)) = branch.split_last() else {
            return Err(TranslateError::unsupported("empty conditional branch"));
        };
        for node in body {
            self.translate_node(node, scope)?;
        }

        match last {
            IrNode::Assignment(assign) => self.branch_value(assign, base, suffix, scope),
            IrNode::Conditional(inner) => {
                let local = scope.branch_local(base, suffix);
                self.translate_conditional(inner, scope, Some(&local))?;
                let declared = scope.variable(&local)?.clone();
                Ok(BranchValue {
                    expr: JavaExpr::Ident(local),
                    declared,
                })
            }
            other => Err(TranslateError::unsupported(format!(
                "{} at the end of a conditional branch",
                other.kind_name()
            ))),
        }
    }

    /// The multiplexer input for a branch's final assignment.
    fn branch_value(
        &self,
        assign: &Assignment,
        base: &str,
        suffix: &str,
        scope: &mut Scope,
    ) -> Result<BranchValue, TranslateError> {
        match &assign.init {
            Initializer::Alias(source) => {
                let declared = match scope.lookup(source)? {
                    Binding::Variable(declared) => declared.clone(),
                    Binding::Constant(JavaType::Double) => plain(VariableKindId::Real),
                    Binding::Constant(JavaType::Boolean) => plain(VariableKindId::Bit),
                    Binding::Constant(ty) => {
                        return Err(TranslateError::unsupported(format!(
                            "{} constant `{}` as conditional branch value",
                            ty.as_str(),
                            source
                        )));
                    }
                };
                Ok(BranchValue {
                    expr: JavaExpr::ident(source),
                    declared,
                })
            }
            Initializer::Literal(Literal::Number(n)) => Ok(BranchValue {
                expr: JavaExpr::Number(*n),
                declared: plain(VariableKindId::Real),
            }),
            Initializer::Literal(Literal::Bool(b)) => Ok(BranchValue {
                expr: JavaExpr::Bool(*b),
                declared: plain(VariableKindId::Bit),
            }),
            Initializer::Literal(lit) => Err(TranslateError::MalformedLiteralAssignment {
                name: assign.name.clone(),
                reason: format!("{} cannot be a conditional branch value", lit),
            }),
            Initializer::Array(_) => Err(TranslateError::MalformedLiteralAssignment {
                name: assign.name.clone(),
                reason: "an array cannot be a conditional branch value".to_string(),
            }),
            Initializer::Call(call) => {
                let local = scope.branch_local(base, suffix);
                let declared = self.translate_call(&local, call, scope)?;
                Ok(BranchValue {
                    expr: JavaExpr::Ident(local),
                    declared,
                })
            }
            Initializer::Evidence(call) => Err(TranslateError::unsupported(format!(
                "`{}` as conditional branch value",
                call.name()
            ))),
        }
    }

    /// Solve the graph and print the belief of `name`.
    fn query(&self, name: &str, scope: &mut Scope) -> Result<(), TranslateError> {
        let kind = match scope.lookup(name)? {
            Binding::Variable(declared) => declared.kind,
            Binding::Constant(_) => {
                return Err(TranslateError::unsupported(format!("belief query on constant `{}`", name)));
            }
        };
        let continuous = variables::is_continuous(kind);
        let graph = &self.config.graph_name;
        let binding = &self.config.belief_binding;

        scope.out.push(JavaStmt::SetIterations {
            graph: graph.clone(),
            iterations: self.config.num_iterations,
        });
        scope.out.push(JavaStmt::Solve { graph: graph.clone() });
        scope.out.push(JavaStmt::ExtractBelief {
            binding: binding.clone(),
            variable: name.to_string(),
            continuous,
        });
        scope.out.push(JavaStmt::PrintBelief {
            binding: binding.clone(),
            continuous,
        });
        Ok(())
    }
}

fn plain(kind: VariableKindId) -> Declared {
    Declared { kind, args: Vec::new() }
}

fn literal_value(name: &str, lit: &Literal) -> Result<(JavaType, JavaExpr), TranslateError> {
    match lit {
        Literal::Number(n) => Ok((JavaType::Double, JavaExpr::Number(*n))),
        Literal::Bool(b) => Ok((JavaType::Boolean, JavaExpr::Bool(*b))),
        Literal::Str(s) => Ok((JavaType::String, JavaExpr::Str(s.clone()))),
        Literal::Null => Err(TranslateError::MalformedLiteralAssignment {
            name: name.to_string(),
            reason: "`null` has no Java literal declaration".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Result<Vec<String>, TranslateError> {
        let program = tracefg_syntax::parse_source(source).unwrap();
        let ir = crate::ir::lower_program(&program)?;
        let registry = PrimitiveRegistry::with_builtins();
        let config = TranslateConfig::default();
        let stmts = Translator::new(&registry, &config).translate_statements(&ir)?;
        Ok(stmts.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_flip_and_query() {
        let lines = run("var ab0 = random('wrapped_flip',[0.5,JSON.parse('null')]); ab0").unwrap();
        assert_eq!(
            lines,
            [
                "Bit ab0 = new Bit();",
                "myGraph.addFactor(new Bernoulli(0.5), ab0);",
                "myGraph.getSolver().setNumIterations(10000);",
                "myGraph.solve();",
                "double[] belief = ab0.getBelief();",
                "System.out.println(Arrays.toString(belief));",
            ]
        );
    }

    #[test]
    fn test_continuous_query_prints_object_belief() {
        let lines = run("var x = gaussian(0, 1); x").unwrap();
        assert_eq!(lines[4], "Object belief = x.getBelief();");
        assert_eq!(lines[5], "System.out.println(belief);");
    }

    #[test]
    fn test_use_before_declaration_fails() {
        let err = run("var ab2 = and(ab0, ab1);").unwrap_err();
        assert_eq!(err, TranslateError::undeclared("ab0"));
    }

    #[test]
    fn test_identifier_must_be_declared() {
        assert_eq!(run("ghost; var a = flip(); a").unwrap_err(), TranslateError::undeclared("ghost"));
    }

    #[test]
    fn test_condition_and_factor_evidence() {
        let lines = run("var a = flip(); condition(a); var w = gaussian(0, 1); factor(w); a").unwrap();
        assert_eq!(lines[2], "a.setFixedValue(1);");
        assert_eq!(lines[5], "myGraph.addFactor(new Identity(), w);");
    }

    #[test]
    fn test_evidence_initializer_does_not_declare_its_name() {
        let err = run("var a = flip(); var c = condition(a); c").unwrap_err();
        assert_eq!(err, TranslateError::undeclared("c"));
    }

    #[test]
    fn test_literal_declarations() {
        let lines = run("var p = 0.25; var ok = true; var s = 'hi'; var w = [0.2, 0.8];").unwrap();
        assert_eq!(
            lines,
            [
                "double p = 0.25;",
                "boolean ok = true;",
                "String s = \"hi\";",
                "double[] w = new double[] {0.2, 0.8};",
            ]
        );
    }

    #[test]
    fn test_null_literal_is_malformed() {
        let err = run("var n = null;").unwrap_err();
        assert!(matches!(err, TranslateError::MalformedLiteralAssignment { ref name, .. } if name == "n"));
    }

    #[test]
    fn test_declared_constant_feeds_factor() {
        let lines = run("var p = 0.3; var a = flip(p); a").unwrap();
        assert_eq!(lines[2], "myGraph.addFactor(new Bernoulli(), a, p);");
    }

    #[test]
    fn test_alias_of_variable_uses_equality() {
        let lines = run("var a = flip(); var b = a; b").unwrap();
        assert_eq!(lines[2], "Bit b = new Bit();");
        assert_eq!(lines[3], "myGraph.addFactor(new Equality(), b, a);");
    }

    #[test]
    fn test_alias_of_constant_is_constant() {
        let lines = run("var p = 0.5; var q = p;").unwrap();
        assert_eq!(lines[1], "double q = p;");
    }

    #[test]
    fn test_query_on_constant_is_unsupported() {
        let err = run("var p = 0.5; p").unwrap_err();
        assert!(err.to_string().contains("belief query on constant `p`"));
    }

    #[test]
    fn test_multiplexer_output_is_merge_variable_not_placeholder() {
        let lines = run(
            "var c = flip(); var a = flip(0.2); if (c) { var x = flip(0.9); } else { var x = a; } x",
        )
        .unwrap();
        assert_eq!(lines[4], "Bit x_then = new Bit();");
        assert_eq!(lines[5], "myGraph.addFactor(new Bernoulli(0.9), x_then);");
        assert_eq!(lines[6], "Bit x = new Bit();");
        assert_eq!(lines[7], "myGraph.addFactor(new Multiplexer(), x, c, x_then, a);");
        assert!(lines.iter().all(|line| !line.contains("[out")));
    }

    #[test]
    fn test_conditional_with_literal_branches() {
        let lines = run("var c = flip(); if (c) { var x = 1; } else { var x = 0; } x").unwrap();
        assert_eq!(lines[2], "Real x = new Real();");
        assert_eq!(lines[3], "myGraph.addFactor(new Multiplexer(), x, c, 1, 0);");
    }

    #[test]
    fn test_nested_conditional_defines_branch_local() {
        let lines = run(
            "var c = flip(); var d = flip(); var a = flip(); var b = flip();
             if (c) { if (d) { var x = a; } else { var x = b; } } else { var x = b; } x",
        )
        .unwrap();
        assert!(lines.contains(&"Bit x_then = new Bit();".to_string()));
        assert!(lines.contains(&"myGraph.addFactor(new Multiplexer(), x_then, d, a, b);".to_string()));
        assert!(lines.contains(&"myGraph.addFactor(new Multiplexer(), x, c, x_then, b);".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("Bit x = ")).count(), 1);
    }

    #[test]
    fn test_nested_call_valued_branches_get_distinct_locals() {
        let lines = run(
            "var c = flip(); var d = flip(); var b = flip();
             if (c) { if (d) { var x = flip(0.1); } else { var x = flip(0.2); } } else { var x = b; } x",
        )
        .unwrap();
        assert_eq!(
            lines[6..14],
            [
                "Bit x_then_then = new Bit();",
                "myGraph.addFactor(new Bernoulli(0.1), x_then_then);",
                "Bit x_then_else = new Bit();",
                "myGraph.addFactor(new Bernoulli(0.2), x_then_else);",
                "Bit x_then = new Bit();",
                "myGraph.addFactor(new Multiplexer(), x_then, d, x_then_then, x_then_else);",
                "Bit x = new Bit();",
                "myGraph.addFactor(new Multiplexer(), x, c, x_then, b);",
            ]
        );
    }

    #[test]
    fn test_reserved_branch_local_is_not_handed_out_twice() {
        let mut scope = Scope::default();
        let outer = scope.branch_local("x", THEN_SUFFIX);
        assert_eq!(outer, "x_then");
        assert_eq!(scope.branch_local("x", THEN_SUFFIX), "x_then_2");
        scope.declare(&outer, VariableKindId::Bit, vec![]).unwrap();
        assert!(scope.reserved.iter().all(|name| name != "x_then"));
    }

    #[test]
    fn test_redeclaration_fails() {
        let duplicate = TranslateError::DuplicateDeclaration { name: "a".into() };
        assert_eq!(run("var a = flip(); var a = flip(0.2); a").unwrap_err(), duplicate);
        assert_eq!(run("var a = 0.5; var a = 0.25;").unwrap_err(), duplicate);
        assert_eq!(run("var b = flip(); var a = b; var a = b;").unwrap_err(), duplicate);
    }

    #[test]
    fn test_merge_variable_already_declared_fails() {
        let err = run("var c = flip(); var x = flip(); if (c) { var x = c; } else { var x = c; } x").unwrap_err();
        assert_eq!(err, TranslateError::DuplicateDeclaration { name: "x".into() });
    }

    #[test]
    fn test_branch_local_names_do_not_collide() {
        let mut scope = Scope::default();
        scope.declare("x_then", VariableKindId::Bit, vec![]).unwrap();
        assert_eq!(scope.branch_local("x", THEN_SUFFIX), "x_then_2");
        assert_eq!(scope.branch_local("x", THEN_SUFFIX), "x_then_3");
        assert_eq!(scope.branch_local("x", ELSE_SUFFIX), "x_else");
    }

    #[test]
    fn test_mismatched_branches_fail() {
        let err = run("var c = flip(); var a = flip(); if (c) { var x = a; } else { var y = a; }").unwrap_err();
        assert_eq!(
            err,
            TranslateError::MismatchedBranches {
                consequent: "x".into(),
                alternate: "y".into()
            }
        );
    }

    #[test]
    fn test_conditional_without_else_is_unsupported() {
        let err = run("var c = flip(); var a = flip(); if (c) { var x = a; }").unwrap_err();
        assert!(err.to_string().contains("conditional without else branch"));
    }

    #[test]
    fn test_undeclared_selector_fails() {
        let err = run("var a = flip(); if (c) { var x = a; } else { var x = a; }").unwrap_err();
        assert_eq!(err, TranslateError::undeclared("c"));
    }

    #[test]
    fn test_trailing_expression_inside_program_is_unsupported() {
        let ir = IrProgram::new(vec![
            IrNode::TrailingExpression("a".into()),
            IrNode::Identifier("a".into()),
        ]);
        let registry = PrimitiveRegistry::with_builtins();
        let config = TranslateConfig::default();
        let err = Translator::new(&registry, &config).translate(&ir).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedNode { .. }));
    }

    #[test]
    fn test_config_overrides_graph_and_iterations() {
        let program = tracefg_syntax::parse_source("var a = flip(); a").unwrap();
        let ir = crate::ir::lower_program(&program).unwrap();
        let registry = PrimitiveRegistry::with_builtins();
        let config = TranslateConfig::new()
            .with_graph_name("g")
            .with_num_iterations(50)
            .with_belief_binding("b");
        let java = Translator::new(&registry, &config).translate(&ir).unwrap();
        assert!(java.contains("g.addFactor(new Bernoulli(0.5), a);\n"));
        assert!(java.contains("g.getSolver().setNumIterations(50);\n"));
        assert!(java.contains("double[] b = a.getBelief();\n"));
    }
}
