//! The process-wide constraint component registry.

use crate::ConstraintComponent;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

static GLOBAL: Lazy<ConstraintRegistry> = Lazy::new(ConstraintRegistry::new);

/// Mapping from constraint-kind IRI to component handler.
///
/// The process-wide instance (`global`) lives for the lifetime of the
/// process and is never torn down. Built-in components are registered
/// exactly once through the compiler's initialize-once guard; `register`
/// itself is safe to call concurrently.
pub struct ConstraintRegistry {
    components: RwLock<HashMap<&'static str, Arc<dyn ConstraintComponent>>>,
}

impl ConstraintRegistry {
    /// Create an empty registry (tests, embedders). Production code uses
    /// the process-wide `global()` instance.
    pub fn new() -> Self {
        Self {
            components: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ConstraintRegistry {
        &GLOBAL
    }

    /// Register a component under its constraint-kind IRI, replacing any
    /// previous handler for that kind.
    pub fn register(&self, component: Arc<dyn ConstraintComponent>) {
        let mut components = self.components.write().expect("registry lock poisoned");
        components.insert(component.kind(), component);
    }

    /// Look up the handler for a constraint kind.
    pub fn lookup(&self, kind: &str) -> Option<Arc<dyn ConstraintComponent>> {
        let components = self.components.read().expect("registry lock poisoned");
        components.get(kind).cloned()
    }

    /// Snapshot of all registered handlers, for the lowering engine.
    pub fn components(&self) -> Vec<Arc<dyn ConstraintComponent>> {
        let components = self.components.read().expect("registry lock poisoned");
        components.values().cloned().collect()
    }

    /// Number of registered constraint kinds.
    pub fn len(&self) -> usize {
        let components = self.components.read().expect("registry lock poisoned");
        components.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConstraintRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConstraintRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let components = self.components.read().expect("registry lock poisoned");
        f.debug_struct("ConstraintRegistry")
            .field("kinds", &components.keys().collect::<Vec<_>>())
            .finish()
    }
}
