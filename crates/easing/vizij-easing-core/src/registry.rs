use std::collections::HashMap;
use std::fmt;

use crate::error::{EasingError, Result};
use crate::kind::Easing;

/// Boxed easing callable stored in the registry.
pub type BoxedEasing = Box<dyn Fn(f64) -> Result<f64> + Send + Sync>;

/// Registry for looking up easing functions by name
pub struct EasingRegistry {
    functions: HashMap<String, BoxedEasing>,
}

impl EasingRegistry {
    /// Create a registry holding every built-in curve under [`Easing::name`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_functions();
        registry
    }

    /// Create a registry with nothing registered.
    #[inline]
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    fn register_builtin_functions(&mut self) {
        for easing in Easing::all() {
            self.register(easing.name(), move |n| easing.apply(n));
        }
    }

    /// Register a function, replacing any previous entry with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(f64) -> Result<f64> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.functions.contains_key(&name) {
            log::debug!("easing registry: replacing '{}'", name);
        }
        self.functions.insert(name, Box::new(function));
    }

    /// Get an easing function by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&(dyn Fn(f64) -> Result<f64> + Send + Sync)> {
        self.functions.get(name).map(|f| f.as_ref())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Evaluate the named function at progress `n`.
    pub fn evaluate(&self, name: &str, n: f64) -> Result<f64> {
        match self.get(name) {
            Some(function) => function(n),
            None => {
                log::trace!("easing registry: no entry for '{}'", name);
                Err(EasingError::UnknownEasing {
                    name: name.to_string(),
                })
            }
        }
    }
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EasingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasingRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
