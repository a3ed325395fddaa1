//! Structured Java statement model
//!
//! The translator never concatenates Java text by hand. It builds [`JavaStmt`] values and the single `Display`
//! implementation below renders them, so list separators are produced in exactly one place: items are joined with
//! `", "`, and an empty input list contributes nothing (not even the comma that would precede it).

use std::fmt;

use tracefg_core::lang::variables::{self, VariableKindId};
use tracefg_syntax::ast::format_number;

/// Primitive Java types used for literal declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaType {
    Double,
    Boolean,
    String,
    DoubleArray,
}

impl JavaType {
    pub fn as_str(self) -> &'static str {
        match self {
            JavaType::Double => "double",
            JavaType::Boolean => "boolean",
            JavaType::String => "String",
            JavaType::DoubleArray => "double[]",
        }
    }
}

/// A Java expression in argument position.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaExpr {
    Ident(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    Str(String),
    /// `new <elem_ty>[] {a, b}`
    Array { elem_ty: &'static str, items: Vec<JavaExpr> },
    /// Pre-rendered text passed through verbatim.
    Raw(String),
}

impl JavaExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        JavaExpr::Ident(name.into())
    }

    pub fn double_array(values: impl IntoIterator<Item = f64>) -> Self {
        JavaExpr::Array {
            elem_ty: "double",
            items: values.into_iter().map(JavaExpr::Number).collect(),
        }
    }

    /// `DiscreteDomain.range(lo, hi)`
    pub fn discrete_range(lo: i64, hi: i64) -> Self {
        JavaExpr::Raw(format!("DiscreteDomain.range({}, {})", lo, hi))
    }
}

/// One emitted Java statement.
#[derive(Debug, Clone, PartialEq)]
pub enum JavaStmt {
    /// `Bit ab0 = new Bit();`
    Declare {
        kind: VariableKindId,
        name: String,
        args: Vec<JavaExpr>,
    },
    /// `myGraph.addFactor(new And(), ab2, ab0, ab1);`
    AddFactor {
        graph: String,
        constructor: String,
        constructor_args: Vec<JavaExpr>,
        output: String,
        inputs: Vec<JavaExpr>,
    },
    /// `ab0.setFixedValue(1);`
    FixValue { variable: String, value: JavaExpr },
    /// `double p = 0.5;`
    LiteralDecl { ty: JavaType, name: String, value: JavaExpr },
    /// `myGraph.getSolver().setNumIterations(10000);`
    SetIterations { graph: String, iterations: u32 },
    /// `myGraph.solve();`
    Solve { graph: String },
    /// `double[] belief = ab3.getBelief();`
    ExtractBelief {
        binding: String,
        variable: String,
        continuous: bool,
    },
    /// `System.out.println(Arrays.toString(belief));`
    PrintBelief { binding: String, continuous: bool },
}

impl JavaStmt {
    /// Variables this statement reads (factor inputs, fixed variables, queried variable).
    pub fn referenced_variables(&self) -> Vec<&str> {
        match self {
            JavaStmt::AddFactor { output, inputs, .. } => {
                let mut names = vec![output.as_str()];
                for input in inputs {
                    if let JavaExpr::Ident(name) = input {
                        names.push(name.as_str());
                    }
                }
                names
            }
            JavaStmt::FixValue { variable, .. } | JavaStmt::ExtractBelief { variable, .. } => vec![variable.as_str()],
            JavaStmt::LiteralDecl {
                value: JavaExpr::Ident(name),
                ..
            } => vec![name.as_str()],
            _ => Vec::new(),
        }
    }

    /// Name this statement declares, if any.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            JavaStmt::Declare { name, .. } | JavaStmt::LiteralDecl { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[JavaExpr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_java_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

fn write_double(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("Double.NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 {
            "Double.POSITIVE_INFINITY"
        } else {
            "Double.NEGATIVE_INFINITY"
        })
    } else {
        f.write_str(&format_number(value))
    }
}

impl fmt::Display for JavaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaExpr::Ident(name) => f.write_str(name),
            JavaExpr::Number(n) => write_double(f, *n),
            JavaExpr::Int(n) => write!(f, "{}", n),
            JavaExpr::Bool(b) => write!(f, "{}", b),
            JavaExpr::Str(s) => write_java_string(f, s),
            JavaExpr::Array { elem_ty, items } => {
                write!(f, "new {}[] {{", elem_ty)?;
                write_list(f, items)?;
                f.write_str("}")
            }
            JavaExpr::Raw(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for JavaStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaStmt::Declare { kind, name, args } => {
                let ty = variables::as_str(*kind);
                write!(f, "{} {} = new {}(", ty, name, ty)?;
                write_list(f, args)?;
                f.write_str(");")
            }
            JavaStmt::AddFactor {
                graph,
                constructor,
                constructor_args,
                output,
                inputs,
            } => {
                write!(f, "{}.addFactor(new {}(", graph, constructor)?;
                write_list(f, constructor_args)?;
                write!(f, "), {}", output)?;
                if !inputs.is_empty() {
                    f.write_str(", ")?;
                    write_list(f, inputs)?;
                }
                f.write_str(");")
            }
            JavaStmt::FixValue { variable, value } => write!(f, "{}.setFixedValue({});", variable, value),
            JavaStmt::LiteralDecl { ty, name, value } => write!(f, "{} {} = {};", ty.as_str(), name, value),
            JavaStmt::SetIterations { graph, iterations } => {
                write!(f, "{}.getSolver().setNumIterations({});", graph, iterations)
            }
            JavaStmt::Solve { graph } => write!(f, "{}.solve();", graph),
            JavaStmt::ExtractBelief {
                binding,
                variable,
                continuous,
            } => {
                let ty = if *continuous { "Object" } else { "double[]" };
                write!(f, "{} {} = {}.getBelief();", ty, binding, variable)
            }
            JavaStmt::PrintBelief { binding, continuous } => {
                if *continuous {
                    write!(f, "System.out.println({});", binding)
                } else {
                    write!(f, "System.out.println(Arrays.toString({}));", binding)
                }
            }
        }
    }
}
