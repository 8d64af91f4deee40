//! The constraint component contract.

use crate::{CompileConfig, ConstraintResult};
use shapeql_term::{Dataset, Term};

/// Per-clause context supplied by the lowering engine when a fragment is
/// emitted: the focus variable, the value variable it joins to, and the
/// serialized property path between them.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Focus node variable (e.g. `?this`).
    pub focus: String,
    /// Value/target variable (e.g. `?value`).
    pub value: String,
    /// Property path in SPARQL syntax (e.g. `<http://schema.org/name>`).
    pub path: String,
}

impl EmitContext {
    pub fn new(
        focus: impl Into<String>,
        value: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            focus: focus.into(),
            value: value.into(),
            path: path.into(),
        }
    }
}

/// One clause of a recognized constraint, ready to emit its query fragment.
pub trait ConstraintEmitter: Send + Sync {
    /// Emit the SPARQL fragment for this clause.
    fn emit(&self, ctx: &EmitContext) -> ConstraintResult<String>;
}

/// A pluggable constraint kind: recognizes shape fragments and yields one
/// emitter per matching clause.
pub trait ConstraintComponent: Send + Sync {
    /// The constraint-kind IRI this component is registered under.
    fn kind(&self) -> &'static str;

    /// Whether this shape node declares the constraint this component
    /// handles.
    fn recognize(&self, dataset: &Dataset, node: &Term) -> bool;

    /// Yield one emitter per clause declared on the shape node. A node the
    /// component does not recognize yields zero emitters; that is not an
    /// error. Configuration is read here, at generation time, so a change
    /// takes effect on the next compilation.
    fn generate(
        &self,
        dataset: &Dataset,
        node: &Term,
        config: &CompileConfig,
    ) -> ConstraintResult<Vec<Box<dyn ConstraintEmitter>>>;
}
