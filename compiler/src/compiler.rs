//! The compile entrypoint and one-time component registration.

use crate::{CompileResult, QueryForm, QueryLowering, SparqlLowering};
use shapeql_fulltext::FreeTextConstraint;
use shapeql_registry::{CompileConfig, ConstraintRegistry, PatternConstraint};
use shapeql_template::{resolve, Bindings};
use shapeql_term::Dataset;
use std::sync::{Arc, Once};
use tracing::debug;

static INIT: Once = Once::new();

/// Register the built-in constraint components exactly once.
///
/// Safe to call repeatedly and from concurrent compilation requests:
/// concurrent first callers block until the side effect has run, and it
/// runs once per process regardless of call count.
pub fn ensure_initialized() {
    INIT.call_once(|| {
        let registry = ConstraintRegistry::global();
        registry.register(Arc::new(PatternConstraint));
        registry.register(Arc::new(FreeTextConstraint));
        debug!(kinds = registry.len(), "registered built-in constraint components");
    });
}

/// Compile a shape dataset into SPARQL query text.
///
/// Resolves template and variable placeholders in place, then hands the
/// dataset and the process-wide registry to the reference lowering engine.
/// Configuration is read from the environment per call, never cached.
pub fn compile(dataset: &mut Dataset, bindings: &Bindings, form: QueryForm) -> CompileResult<String> {
    compile_with(dataset, bindings, form, &CompileConfig::from_env(), &SparqlLowering)
}

/// Compile with explicit configuration and lowering engine.
pub fn compile_with(
    dataset: &mut Dataset,
    bindings: &Bindings,
    form: QueryForm,
    config: &CompileConfig,
    engine: &dyn QueryLowering,
) -> CompileResult<String> {
    ensure_initialized();

    resolve(dataset, bindings)?;
    debug!(quads = dataset.len(), "placeholders resolved");

    let query = engine.lower(dataset, ConstraintRegistry::global(), form, config)?;
    Ok(query)
}
