//! Abstract Syntax Tree definitions for trace programs.
//!
//! The tree mirrors the JavaScript subset the tracer emits. `Display` on [`Expr`] re-generates source text; the
//! translator uses it for sub-expressions it passes through verbatim (e.g. ERP metadata).

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is an ordered sequence of top-level statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var name = init;`
    Var(VarDecl),
    /// `if (test) stmt else stmt`
    If(IfStmt),
    /// `{ stmt* }`
    Block(Vec<Spanned<Statement>>),
    /// `expr;`
    Expr(Spanned<Expr>),
}

impl Statement {
    /// Short human-readable name of the statement form (used in diagnostics).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Var(_) => "variable declaration",
            Statement::If(_) => "if statement",
            Statement::Block(_) => "block",
            Statement::Expr(_) => "expression statement",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Spanned<Ident>,
    pub init: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub test: Spanned<Expr>,
    pub consequent: Box<Spanned<Statement>>,
    pub alternate: Option<Box<Spanned<Statement>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Bool(bool),
    Str(String),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Literal(Literal),
    Array(Vec<Spanned<Expr>>),
    Call(CallExpr),
    Member(MemberExpr),
    /// Unary minus applied to a non-literal operand (`-x`).
    Neg(Box<Spanned<Expr>>),
}

impl Expr {
    /// Short human-readable name of the expression form (used in diagnostics).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Ident(_) => "identifier",
            Expr::Literal(_) => "literal",
            Expr::Array(_) => "array expression",
            Expr::Call(_) => "call expression",
            Expr::Member(_) => "member expression",
            Expr::Neg(_) => "unary expression",
        }
    }

    /// The callee name when this is a call to a plain identifier (`foo(..)`).
    pub fn simple_callee(&self) -> Option<&str> {
        match self {
            Expr::Call(call) => match &call.callee.node {
                Expr::Ident(name) => Some(name.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Spanned<Expr>>,
    pub args: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Spanned<Expr>>,
    pub property: Ident,
}

/// Render a number the way JavaScript prints it for the values the tracer emits (`1`, `0.5`, `-2.25`).
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn write_single_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("\\'")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("'")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Str(s) => write_single_quoted(f, s),
            Literal::Null => f.write_str("null"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(name) => f.write_str(name),
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.node)?;
                }
                f.write_str("]")
            }
            Expr::Call(call) => {
                write!(f, "{}(", call.callee.node)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg.node)?;
                }
                f.write_str(")")
            }
            Expr::Member(member) => write!(f, "{}.{}", member.object.node, member.property),
            Expr::Neg(inner) => write!(f, "-{}", inner.node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp<T>(node: T) -> Spanned<T> {
        Spanned::new(node, Span::default())
    }

    #[test]
    fn test_format_number_matches_javascript_spelling() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.25), "2.25");
    }

    #[test]
    fn test_regenerate_metadata_call() {
        let expr = Expr::Call(CallExpr {
            callee: Box::new(sp(Expr::Member(MemberExpr {
                object: Box::new(sp(Expr::Ident("JSON".into()))),
                property: "parse".into(),
            }))),
            args: vec![sp(Expr::Literal(Literal::Str("null".into())))],
        });
        assert_eq!(expr.to_string(), "JSON.parse('null')");
    }

    #[test]
    fn test_regenerate_nested_array() {
        let expr = Expr::Array(vec![
            sp(Expr::Literal(Literal::Number(0.5))),
            sp(Expr::Array(vec![sp(Expr::Ident("ab0".into()))])),
            sp(Expr::Literal(Literal::Str("it's".into()))),
        ]);
        assert_eq!(expr.to_string(), "[0.5, [ab0], 'it\\'s']");
    }

    #[test]
    fn test_simple_callee() {
        let call = Expr::Call(CallExpr {
            callee: Box::new(sp(Expr::Ident("flip".into()))),
            args: vec![],
        });
        assert_eq!(call.simple_callee(), Some("flip"));
        assert_eq!(Expr::Ident("flip".into()).simple_callee(), None);
    }
}
