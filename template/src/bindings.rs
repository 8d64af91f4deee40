//! Variable bindings supplied to a compilation request.

use shapeql_term::Term;
use std::collections::HashMap;

/// A read-only map from binding key to term, supplied once per
/// compilation request.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    map: HashMap<String, Term>,
}

impl Bindings {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to a term, replacing any previous binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Term>) {
        self.map.insert(key.into(), value.into());
    }

    /// Look up a binding.
    pub fn get(&self, key: &str) -> Option<&Term> {
        self.map.get(key)
    }

    /// Returns true if the key is bound.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Into<String>, V: Into<Term>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (key, value) in iter {
            bindings.set(key, value);
        }
        bindings
    }
}
