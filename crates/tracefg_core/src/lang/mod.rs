//! tracefg vocabulary registries.
//!
//! This module is the “front door” for vocabulary: reserved words and punctuation of the trace syntax, evidence
//! statements, source primitives, Dimple factor constructors and Dimple variable kinds.
//!
//! The design goal is to avoid stringly-typed checks scattered across the translator. Callers work with **stable IDs**
//! (e.g. `PrimitiveId`, `FactorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs,
//!   code generation).
//!
//! ## Examples
//! ```rust
//! use tracefg_core::lang::primitives::{self, PrimitiveId};
//! use tracefg_core::lang::factors::{self, FactorId};
//!
//! assert_eq!(primitives::from_str("flip"), Some(PrimitiveId::Flip));
//! assert_eq!(primitives::info_for(PrimitiveId::Flip).factor, FactorId::Bernoulli);
//! assert_eq!(factors::as_str(FactorId::Bernoulli), "Bernoulli");
//! ```
//!
//! ## See also
//! - `cargo run -p tracefg_core --bin generate_primitive_reference` to generate Markdown reference tables.

pub mod conventions;
pub mod evidence;
pub mod factors;
pub mod keywords;
pub mod primitives;
pub mod punctuation;
pub mod registry;
pub mod variables;
