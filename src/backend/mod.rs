//! Translator Backend
//!
//! This module turns IR programs into Java statements that build and query a Dimple factor graph.
//!
//! The pipeline is:
//! 1. IR from `crate::ir` → [`Translator`] (symbol table, conditionals, queries)
//! 2. Primitive calls → [`DescriptorBuilder`] → [`PrimitiveRegistry`] producer → declaration + factor
//! 3. Structured [`JavaStmt`] values → [`JavaEmitter`] → Java text
//!
//! ## Module Organization
//!
//! - `translate.rs` - IR walk and entry point
//! - `registry.rs` - Primitive name → descriptor producer table
//! - `producers.rs` - Builtin producers (argument wiring and parameter conversions)
//! - `descriptor.rs` - Factor descriptors, dispatcher unwrapping, argument rendering
//! - `evidence.rs` - `condition` / `factor` encoding
//! - `target.rs` - Java statement model and its single formatter
//! - `java_emitter.rs` - Line buffer and runnable harness
//! - `errors.rs` - Translation errors

pub mod descriptor;
pub mod errors;
pub mod evidence;
pub mod java_emitter;
pub mod producers;
pub mod registry;
pub mod target;
pub mod translate;

pub use descriptor::{DescriptorBuilder, FactorDescriptor, ResolvedFactor};
pub use errors::TranslateError;
pub use java_emitter::JavaEmitter;
pub use registry::{DescriptorProducer, PrimitiveRegistry};
pub use target::{JavaExpr, JavaStmt, JavaType};
pub use translate::Translator;
