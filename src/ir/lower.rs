//! AST to IR lowering pass.
//!
//! Classifies the statements of a parsed trace into IR nodes:
//!
//! - `var x = f(..);` → [`Initializer::Call`]; `var x = condition(v);` → [`Initializer::Evidence`]
//! - `var x = <literal>;` / `var x = [..];` / `var x = y;` → literal, array and alias initializers
//! - `condition(v);` / `factor(v);` → [`IrNode::Evidence`]
//! - `if (v) .. else ..` → [`IrNode::Conditional`]
//! - a bare identifier statement → [`IrNode::Identifier`], or [`IrNode::TrailingExpression`] when it is the last
//!   statement of the program
//!
//! Blocks carry no meaning in the trace and are flattened. Anything else fails with
//! [`TranslateError::UnsupportedNode`].

use tracefg_core::lang::{conventions, evidence};
use tracefg_syntax::ast::{self, Expr, Spanned, Statement};

use super::{Argument, Assignment, Conditional, EvidenceCall, Initializer, IrNode, IrProgram, PrimitiveCall};
use crate::backend::errors::TranslateError;

/// Lower a parsed program to IR.
///
/// ## Errors
/// - `UnsupportedNode` for statement or expression forms the translator has no encoding for (declarations without an
///   initializer, member calls, negated variables, evidence with anything but a single variable argument, ...).
#[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
pub fn lower_program(program: &ast::Program) -> Result<IrProgram, TranslateError> {
    let mut body = Vec::new();
    for stmt in &program.statements {
        lower_statement(stmt, &mut body)?;
    }

    if let Some(IrNode::Identifier(name)) = body.last() {
        let name = name.clone();
        body.pop();
        body.push(IrNode::TrailingExpression(name));
    }

    Ok(IrProgram { body })
}

fn lower_statement(stmt: &Spanned<Statement>, out: &mut Vec<IrNode>) -> Result<(), TranslateError> {
    match &stmt.node {
        Statement::Var(decl) => out.push(lower_var(decl)?),
        Statement::If(if_stmt) => out.push(IrNode::Conditional(lower_if(if_stmt)?)),
        Statement::Block(stmts) => {
            for inner in stmts {
                lower_statement(inner, out)?;
            }
        }
        Statement::Expr(expr) => out.push(lower_expr_statement(expr)?),
    }
    Ok(())
}

fn lower_branch(stmt: &Spanned<Statement>) -> Result<Vec<IrNode>, TranslateError> {
    let mut nodes = Vec::new();
    lower_statement(stmt, &mut nodes)?;
    Ok(nodes)
}

fn lower_var(decl: &ast::VarDecl) -> Result<IrNode, TranslateError> {
    let name = decl.name.node.clone();
    let Some(init) = &decl.init else {
        return Err(TranslateError::unsupported(format!(
            "variable declaration `{}` without an initializer",
            name
        )));
    };

    let init = match &init.node {
        Expr::Call(_) => match lower_evidence(&init.node)? {
            Some(evidence) => Initializer::Evidence(evidence),
            None => Initializer::Call(lower_call(&init.node)?),
        },
        Expr::Literal(lit) => Initializer::Literal(lit.clone()),
        Expr::Array(items) => Initializer::Array(items.iter().map(|item| lower_argument(&item.node)).collect::<Result<_, _>>()?),
        Expr::Ident(source) => Initializer::Alias(source.clone()),
        other => {
            return Err(TranslateError::unsupported(format!(
                "{} `{}` as initializer of `{}`",
                other.kind_name(),
                other,
                name
            )));
        }
    };

    Ok(IrNode::Assignment(Assignment { name, init }))
}

fn lower_if(stmt: &ast::IfStmt) -> Result<Conditional, TranslateError> {
    let test = match &stmt.test.node {
        Expr::Ident(name) => IrNode::Identifier(name.clone()),
        other => {
            return Err(TranslateError::unsupported(format!(
                "{} `{}` as conditional test",
                other.kind_name(),
                other
            )));
        }
    };

    let consequent = lower_branch(&stmt.consequent)?;
    let alternate = match &stmt.alternate {
        Some(alt) => Some(lower_branch(alt)?),
        None => None,
    };

    Ok(Conditional {
        test: Box::new(test),
        consequent,
        alternate,
    })
}

fn lower_expr_statement(expr: &Spanned<Expr>) -> Result<IrNode, TranslateError> {
    match &expr.node {
        Expr::Ident(name) => Ok(IrNode::Identifier(name.clone())),
        Expr::Call(_) => match lower_evidence(&expr.node)? {
            Some(evidence) => Ok(IrNode::Evidence(evidence)),
            None => Err(TranslateError::unsupported(format!(
                "call expression `{}` whose result is not assigned",
                expr.node
            ))),
        },
        other => Err(TranslateError::unsupported(format!(
            "{} `{}` as statement",
            other.kind_name(),
            other
        ))),
    }
}

/// Recognise `condition(v)` / `factor(v)`.
///
/// Returns `Ok(None)` for calls to anything else.
fn lower_evidence(expr: &Expr) -> Result<Option<EvidenceCall>, TranslateError> {
    let Some(kind) = expr.simple_callee().and_then(evidence::from_str) else {
        return Ok(None);
    };
    let Expr::Call(call) = expr else {
        return Ok(None);
    };

    match call.args.as_slice() {
        [arg] => match &arg.node {
            Expr::Ident(variable) => Ok(Some(EvidenceCall {
                kind,
                variable: variable.clone(),
            })),
            other => Err(TranslateError::unsupported(format!(
                "{} `{}` as argument of `{}`",
                other.kind_name(),
                other,
                evidence::as_str(kind)
            ))),
        },
        args => Err(TranslateError::unsupported(format!(
            "`{}` with {} arguments (expected a single variable)",
            evidence::as_str(kind),
            args.len()
        ))),
    }
}

fn lower_call(expr: &Expr) -> Result<PrimitiveCall, TranslateError> {
    let Expr::Call(call) = expr else {
        return Err(TranslateError::unsupported(format!("{} `{}`", expr.kind_name(), expr)));
    };
    let Some(function) = expr.simple_callee() else {
        return Err(TranslateError::unsupported(format!(
            "call through {} `{}`",
            call.callee.node.kind_name(),
            call.callee.node
        )));
    };

    let args = match call.args.as_slice() {
        [name, list] if function == conventions::ERP_DISPATCHER => {
            vec![lower_argument(&name.node)?, lower_dispatch_list(&list.node)?]
        }
        args => args
            .iter()
            .map(|arg| lower_argument(&arg.node))
            .collect::<Result<_, _>>()?,
    };

    Ok(PrimitiveCall {
        function: function.to_string(),
        args,
    })
}

/// The dispatcher's argument array. Its last element is the tracer's metadata and may be any expression.
fn lower_dispatch_list(expr: &Expr) -> Result<Argument, TranslateError> {
    let Expr::Array(items) = expr else {
        return lower_argument(expr);
    };
    let Some((metadata, real_args)) = items.split_last() else {
        return Ok(Argument::Array(Vec::new()));
    };

    let mut lowered = real_args
        .iter()
        .map(|item| lower_argument(&item.node))
        .collect::<Result<Vec<_>, _>>()?;
    lowered.push(match &metadata.node {
        Expr::Literal(lit) => Argument::Literal(lit.clone()),
        other => Argument::Expression(other.to_string()),
    });
    Ok(Argument::Array(lowered))
}

fn lower_argument(expr: &Expr) -> Result<Argument, TranslateError> {
    match expr {
        Expr::Literal(lit) => Ok(Argument::Literal(lit.clone())),
        Expr::Ident(name) => Ok(Argument::Variable(name.clone())),
        Expr::Array(items) => Ok(Argument::Array(
            items
                .iter()
                .map(|item| lower_argument(&item.node))
                .collect::<Result<_, _>>()?,
        )),
        other => Err(TranslateError::unsupported(format!(
            "{} `{}` as primitive argument",
            other.kind_name(),
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Literal;
    use tracefg_core::lang::evidence::EvidenceKindId;

    fn lower_str(source: &str) -> Result<IrProgram, TranslateError> {
        let program = tracefg_syntax::parse_source(source).unwrap();
        lower_program(&program)
    }

    #[test]
    fn test_lower_wrapped_erp_keeps_dispatch_shape() {
        let ir = lower_str("var ab0 = random('wrapped_flip',[0.5,JSON.parse('null')]);").unwrap();
        assert_eq!(
            ir.body,
            vec![IrNode::Assignment(Assignment {
                name: "ab0".into(),
                init: Initializer::Call(PrimitiveCall {
                    function: "random".into(),
                    args: vec![
                        Argument::string("wrapped_flip"),
                        Argument::Array(vec![
                            Argument::number(0.5),
                            Argument::Expression("JSON.parse('null')".into()),
                        ]),
                    ],
                }),
            })]
        );
    }

    #[test]
    fn test_lower_evidence_statement_and_initializer() {
        let ir = lower_str("var a = flip(0.5); condition(a); var _ = factor(a);").unwrap();
        assert_eq!(
            ir.body[1],
            IrNode::Evidence(EvidenceCall {
                kind: EvidenceKindId::Condition,
                variable: "a".into()
            })
        );
        assert!(matches!(
            &ir.body[2],
            IrNode::Assignment(Assignment {
                init: Initializer::Evidence(EvidenceCall {
                    kind: EvidenceKindId::Factor,
                    ..
                }),
                ..
            })
        ));
    }

    #[test]
    fn test_last_identifier_becomes_trailing_expression() {
        let ir = lower_str("var a = flip(); a; var b = not(a); b;").unwrap();
        assert_eq!(ir.body[1], IrNode::Identifier("a".into()));
        assert_eq!(ir.body.last(), Some(&IrNode::TrailingExpression("b".into())));
    }

    #[test]
    fn test_lower_conditional_branches_are_flattened() {
        let ir = lower_str("if (c) { var t = f(a); var x = t; } else var x = b;").unwrap();
        match &ir.body[0] {
            IrNode::Conditional(cond) => {
                assert_eq!(*cond.test, IrNode::Identifier("c".into()));
                assert_eq!(cond.consequent.len(), 2);
                assert_eq!(cond.alternate.as_ref().map(Vec::len), Some(1));
                assert_eq!(cond.output(), Some("x"));
            }
            other => panic!("Expected conditional, got {:?}", other),
        }
    }

    #[test]
    fn test_lower_literal_and_array_initializers() {
        let ir = lower_str("var p = 0.25; var w = [0.2, 0.8]; var q = p;").unwrap();
        assert!(matches!(
            &ir.body[0],
            IrNode::Assignment(Assignment { init: Initializer::Literal(Literal::Number(n)), .. }) if *n == 0.25
        ));
        assert!(matches!(
            &ir.body[1],
            IrNode::Assignment(Assignment { init: Initializer::Array(items), .. }) if items.len() == 2
        ));
        assert!(matches!(
            &ir.body[2],
            IrNode::Assignment(Assignment { init: Initializer::Alias(src), .. }) if src == "p"
        ));
    }

    #[test]
    fn test_declaration_without_initializer_is_unsupported() {
        let err = lower_str("var a;").unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedNode { ref kind } if kind.contains("without an initializer")));
    }

    #[test]
    fn test_member_call_is_unsupported() {
        let err = lower_str("var a = Math.max(b, c);").unwrap_err();
        assert!(err.to_string().contains("call through member expression `Math.max`"));
    }

    #[test]
    fn test_unassigned_primitive_call_is_unsupported() {
        let err = lower_str("flip(0.5);").unwrap_err();
        assert!(err.to_string().contains("whose result is not assigned"));
    }

    #[test]
    fn test_evidence_on_expression_is_unsupported() {
        let err = lower_str("condition(and(a, b));").unwrap_err();
        assert!(err.to_string().contains("as argument of `condition`"));
    }

    #[test]
    fn test_non_identifier_test_is_unsupported() {
        let err = lower_str("if (true) { var x = a; } else { var x = b; }").unwrap_err();
        assert!(err.to_string().contains("literal `true` as conditional test"));
    }

    #[test]
    fn test_nested_call_argument_is_unsupported() {
        let err = lower_str("var a = flip(); var b = and(a, ghost(a)); b").unwrap_err();
        assert_eq!(
            err,
            TranslateError::unsupported("call expression `ghost(a)` as primitive argument")
        );
    }

    #[test]
    fn test_expression_inside_argument_array_is_unsupported() {
        let err = lower_str("var d = categorical([0.5, Math.PI]);").unwrap_err();
        assert!(err.to_string().contains("member expression `Math.PI` as primitive argument"));
    }

    #[test]
    fn test_dispatch_metadata_is_the_only_free_expression() {
        let err = lower_str("var x = random('wrapped_gaussian',[mu(0), 1, JSON.parse('null')]);").unwrap_err();
        assert!(err.to_string().contains("call expression `mu(0)` as primitive argument"));

        let ir = lower_str("var x = random('wrapped_flip',[0.5, null]);").unwrap();
        let IrNode::Assignment(Assignment { init: Initializer::Call(call), .. }) = &ir.body[0] else {
            panic!("Expected call assignment, got {:?}", ir.body[0]);
        };
        assert_eq!(
            call.args[1],
            Argument::Array(vec![Argument::number(0.5), Argument::Literal(Literal::Null)])
        );
    }
}
