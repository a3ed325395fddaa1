//! Provide the canonical vocabulary shared by the tracefg front-end and the factor-graph translator.
//!
//! This crate is intentionally small and dependency-free. It contains the registry tables that both:
//! - the syntax crate uses to recognise reserved words and punctuation of the tracer's surface syntax, and
//! - the translator uses to map source primitives onto Dimple variable kinds and factor constructors.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no translator-specific types.
//! - Descriptor producers (the code that wires arguments into factors) live in the translator; this crate only says
//!   *which* factor and variable kind a primitive maps to.

pub mod lang;
