//! Builtin descriptor producers.
//!
//! Every builtin primitive shares one producer type, [`BuiltinProducer`], which looks the primitive up in
//! `tracefg_core::lang::primitives` (target variable kind, factor constructor, arity) and wires its arguments.
//!
//! Wiring rules:
//!
//! - Deterministic primitives: every argument is a factor input, in call order (constants are passed inline).
//! - ERPs: parameters go to the factor constructor when they are all constants, otherwise they are factor inputs.
//!   Parameterisations are converted where Dimple's differ from the tracer's (standard deviation → precision,
//!   scale → rate, exponential → `Gamma(1, rate)`).
//! - Discrete-valued ERPs also declare the variable's domain.

use tracefg_core::lang::factors::{self, FactorId};
use tracefg_core::lang::primitives::{self, PrimitiveId};

use super::descriptor::FactorDescriptor;
use super::registry::DescriptorProducer;
use super::target::JavaExpr;
use crate::ir::Argument;

/// Smallest upper bound of a truncated Poisson domain.
const POISSON_MIN_UPPER: f64 = 20.0;
/// Domain upper bound when the Poisson rate is not a constant.
const POISSON_DEFAULT_UPPER: i64 = 100;
/// Default success probability of `flip()`.
const FLIP_DEFAULT_P: f64 = 0.5;

/// Producer for one builtin primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinProducer {
    id: PrimitiveId,
}

impl BuiltinProducer {
    pub fn new(id: PrimitiveId) -> Self {
        Self { id }
    }
}

impl DescriptorProducer for BuiltinProducer {
    fn populate(&self, d: &mut FactorDescriptor) {
        let info = primitives::info_for(self.id);
        if !info.arity.accepts(d.args.len()) {
            d.refuse(format!("expected {}, found {}", info.arity.describe(), d.args.len()));
            return;
        }

        d.target_type = Some(info.output);
        d.constructor = Some(factors::as_str(info.factor).to_string());

        match self.id {
            PrimitiveId::Flip => flip(d),
            PrimitiveId::Gaussian => gaussian(d),
            PrimitiveId::Beta => {
                let values = d.rendered_args.clone();
                let constant = d.args.iter().all(Argument::is_constant);
                parameters(d, values, constant);
            }
            PrimitiveId::Gamma => gamma(d),
            PrimitiveId::Exponential => exponential(d),
            PrimitiveId::Poisson => poisson(d),
            PrimitiveId::Binomial => binomial(d),
            PrimitiveId::Discrete => categorical(d),
            PrimitiveId::Dirichlet => dirichlet(d),
            PrimitiveId::Minus if d.args.len() == 1 => {
                d.constructor = Some(factors::as_str(FactorId::Negate).to_string());
                d.input_variables = d.rendered_args.clone();
            }
            _ => d.input_variables = d.rendered_args.clone(),
        }
    }
}

/// Constructor arguments when every parameter is constant, factor inputs otherwise.
fn parameters(d: &mut FactorDescriptor, values: Vec<JavaExpr>, constant: bool) {
    if constant {
        d.constructor_args = values;
    } else {
        d.input_variables = values;
    }
}

/// A strictly positive number literal, or a refusal reason.
fn positive_literal(arg: &Argument, what: &str) -> Result<f64, String> {
    match arg.as_number() {
        Some(v) if v > 0.0 && v.is_finite() => Ok(v),
        Some(v) => Err(format!("{} must be positive, found {}", what, v)),
        None => Err(format!("{} must be a number literal", what)),
    }
}

/// A literal array of numbers with at least one element.
fn number_array(arg: &Argument) -> Option<Vec<f64>> {
    match arg {
        Argument::Array(items) if !items.is_empty() => items.iter().map(Argument::as_number).collect(),
        _ => None,
    }
}

fn flip(d: &mut FactorDescriptor) {
    match d.args.first() {
        None => d.constructor_args = vec![JavaExpr::Number(FLIP_DEFAULT_P)],
        Some(p) => {
            let constant = p.is_constant();
            let values = d.rendered_args.clone();
            parameters(d, values, constant);
        }
    }
}

/// `gaussian(mean, sd)` → `Normal(mean, 1/sd²)`
fn gaussian(d: &mut FactorDescriptor) {
    let sd = match positive_literal(&d.args[1], "standard deviation") {
        Ok(sd) => sd,
        Err(reason) => return d.refuse(format!("{} (Normal is parameterised by precision)", reason)),
    };
    let values = vec![d.rendered_args[0].clone(), JavaExpr::Number(1.0 / (sd * sd))];
    let constant = d.args[0].is_constant();
    parameters(d, values, constant);
}

/// `gamma(shape, scale)` → `Gamma(shape, 1/scale)`
fn gamma(d: &mut FactorDescriptor) {
    let scale = match positive_literal(&d.args[1], "scale") {
        Ok(scale) => scale,
        Err(reason) => return d.refuse(format!("{} (Gamma is parameterised by rate)", reason)),
    };
    let values = vec![d.rendered_args[0].clone(), JavaExpr::Number(1.0 / scale)];
    let constant = d.args[0].is_constant();
    parameters(d, values, constant);
}

/// `exponential(rate)` → `Gamma(1, rate)`
fn exponential(d: &mut FactorDescriptor) {
    let values = vec![JavaExpr::Number(1.0), d.rendered_args[0].clone()];
    let constant = d.args[0].is_constant();
    parameters(d, values, constant);
}

fn poisson(d: &mut FactorDescriptor) {
    let upper = match d.args[0].as_number() {
        Some(lambda) if lambda > 0.0 && lambda.is_finite() => poisson_upper(lambda),
        Some(lambda) => return d.refuse(format!("rate must be positive, found {}", lambda)),
        None => POISSON_DEFAULT_UPPER,
    };
    d.variable_args = vec![JavaExpr::discrete_range(0, upper)];
    let values = d.rendered_args.clone();
    let constant = d.args[0].is_constant();
    parameters(d, values, constant);
}

/// Upper bound of the truncated domain: ten standard deviations above the mean.
fn poisson_upper(lambda: f64) -> i64 {
    (lambda + 10.0 * lambda.sqrt()).ceil().max(POISSON_MIN_UPPER) as i64
}

/// `binomial(n, p)` → `Binomial(n)` with `p` as input over domain `0..=n`
fn binomial(d: &mut FactorDescriptor) {
    let n = match d.args[0].as_number() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n.is_finite() => n as i64,
        _ => return d.refuse("trial count must be a non-negative integer literal"),
    };
    d.constructor_args = vec![JavaExpr::Int(n)];
    d.input_variables = vec![d.rendered_args[1].clone()];
    d.variable_args = vec![JavaExpr::discrete_range(0, n)];
}

/// `discrete(weights)` → `Categorical(weights)` over domain `0..len`
fn categorical(d: &mut FactorDescriptor) {
    let Some(weights) = number_array(&d.args[0]) else {
        return d.refuse("weight vector must be a non-empty literal array of numbers");
    };
    d.variable_args = vec![JavaExpr::discrete_range(0, weights.len() as i64 - 1)];
    d.constructor_args = vec![JavaExpr::double_array(weights)];
}

/// `dirichlet(alpha)` → `Dirichlet(alpha)` over a `RealJoint` of matching dimension
fn dirichlet(d: &mut FactorDescriptor) {
    let Some(alpha) = number_array(&d.args[0]) else {
        return d.refuse("concentration vector must be a non-empty literal array of numbers");
    };
    d.variable_args = vec![JavaExpr::Int(alpha.len() as i64)];
    d.constructor_args = vec![JavaExpr::double_array(alpha)];
}
