//! Primitive registry
//!
//! Maps a primitive name to the [`DescriptorProducer`] that encodes it. Builtins from
//! `tracefg_core::lang::primitives` are registered eagerly under their canonical spelling and every alias.
//!
//! Names the tracer decorates are resolved lazily by convention: `wrapped_flip` misses, `flip` hits, and the result is
//! cached under `wrapped_flip` so the next lookup is a single read.
//!
//! ## Examples
//!
//! ```rust
//! use tracefg::backend::registry::PrimitiveRegistry;
//!
//! let registry = PrimitiveRegistry::with_builtins();
//! assert!(registry.resolve("wrapped_flip").is_ok());
//! assert!(registry.resolve("wrapped_uniform").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracefg_core::lang::{conventions, primitives};

use super::descriptor::FactorDescriptor;
use super::errors::TranslateError;
use super::producers::BuiltinProducer;

/// Fills in a [`FactorDescriptor`] for one primitive.
///
/// Producers must be pure: everything they need is in the descriptor (`args`, `rendered_args`), and everything they
/// decide goes back into it (`target_type`, `constructor`, argument wiring, or `unsupported`).
pub trait DescriptorProducer: Send + Sync {
    fn populate(&self, descriptor: &mut FactorDescriptor);
}

impl<F> DescriptorProducer for F
where
    F: Fn(&mut FactorDescriptor) + Send + Sync,
{
    fn populate(&self, descriptor: &mut FactorDescriptor) {
        self(descriptor)
    }
}

/// Name → producer table with a convention-resolution cache.
pub struct PrimitiveRegistry {
    producers: HashMap<String, Arc<dyn DescriptorProducer>>,
    /// Names resolved through the `wrapped_` convention
    resolved: RwLock<HashMap<String, Arc<dyn DescriptorProducer>>>,
}

impl PrimitiveRegistry {
    /// A registry with no producers at all.
    pub fn empty() -> Self {
        Self {
            producers: HashMap::new(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding every builtin primitive.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for info in primitives::PRIMITIVES {
            let producer: Arc<dyn DescriptorProducer> = Arc::new(BuiltinProducer::new(info.item.id));
            registry
                .producers
                .insert(info.item.canonical.to_string(), Arc::clone(&producer));
            for alias in info.item.aliases {
                registry.producers.insert((*alias).to_string(), Arc::clone(&producer));
            }
        }
        registry
    }

    /// Register (or replace) the producer for `name`.
    pub fn register(&mut self, name: impl Into<String>, producer: impl DescriptorProducer + 'static) {
        let name = name.into();
        tracing::debug!(primitive = %name, "registering descriptor producer");
        self.resolved
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.producers.insert(name, Arc::new(producer));
    }

    /// `true` if `name` resolves (directly or by convention).
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Directly registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.producers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve `name` to its producer.
    ///
    /// ## Errors
    /// - `UnknownPrimitive` naming `name` itself when neither `name` nor its convention-stripped form is registered.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn DescriptorProducer>, TranslateError> {
        if let Some(producer) = self.producers.get(name) {
            return Ok(Arc::clone(producer));
        }

        if let Some(producer) = self.read_cache().get(name) {
            return Ok(Arc::clone(producer));
        }

        let producer = conventions::strip_wrapped_prefix(name)
            .and_then(|stripped| self.producers.get(stripped))
            .ok_or_else(|| TranslateError::UnknownPrimitive { name: name.to_string() })?;

        let mut cache = self.resolved.write().unwrap_or_else(PoisonError::into_inner);
        let cached = cache.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(primitive = name, "cached convention resolution");
            Arc::clone(producer)
        });
        Ok(Arc::clone(cached))
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<dyn DescriptorProducer>>> {
        self.resolved.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn cached_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_cache().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for PrimitiveRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for PrimitiveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveRegistry")
            .field("producers", &self.producers.len())
            .field("resolved", &self.read_cache().len())
            .finish()
    }
}
