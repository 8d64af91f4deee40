//! The query lowering boundary.
//!
//! Lowering turns a fully-resolved shape dataset plus the constraint
//! component registry into query text. The boundary is a trait so callers
//! can supply their own engine; [`SparqlLowering`] is the reference
//! implementation covering construct and delete query forms.

use shapeql_registry::{CompileConfig, ConfigurationError, ConstraintRegistry, EmitContext};
use shapeql_term::{vocab, Dataset, Term};
use thiserror::Error;
use tracing::debug;

/// The query form to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryForm {
    /// `CONSTRUCT { ... } WHERE { ... }`
    Construct,
    /// `DELETE { ... } WHERE { ... }`
    Delete,
}

/// Errors raised while lowering a shape to query text.
#[derive(Debug, Error)]
pub enum LowerError {
    /// A property shape without a `sh:path`.
    #[error("property shape {node} has no sh:path")]
    MissingPath { node: String },

    /// A constraint component failed.
    #[error(transparent)]
    Constraint(#[from] ConfigurationError),
}

/// A query lowering engine.
pub trait QueryLowering {
    /// Produce query text for the resolved shape dataset, consulting the
    /// registry for constraint fragments.
    fn lower(
        &self,
        dataset: &Dataset,
        registry: &ConstraintRegistry,
        form: QueryForm,
        config: &CompileConfig,
    ) -> Result<String, LowerError>;
}

/// Reference SPARQL lowering.
///
/// Walks the `sh:property` shapes, emits one triple pattern per property
/// path, and splices in fragments from every registered component that
/// recognizes a property shape. Components may re-state the join triple;
/// duplicated patterns are legal SPARQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct SparqlLowering;

impl SparqlLowering {
    fn property_shapes(dataset: &Dataset) -> Vec<Term> {
        dataset
            .quads_matching(None, Some(&Term::iri(vocab::sh::PROPERTY)), None, None)
            .into_iter()
            .map(|quad| quad.object)
            .collect()
    }
}

impl QueryLowering for SparqlLowering {
    fn lower(
        &self,
        dataset: &Dataset,
        registry: &ConstraintRegistry,
        form: QueryForm,
        config: &CompileConfig,
    ) -> Result<String, LowerError> {
        let focus = "?this";
        let mut patterns = Vec::new();
        let mut fragments = Vec::new();

        let shapes = Self::property_shapes(dataset);
        debug!(properties = shapes.len(), ?form, "lowering shape");

        for (index, shape) in shapes.iter().enumerate() {
            let path = dataset
                .object_of(shape, &Term::iri(vocab::sh::PATH))
                .ok_or_else(|| LowerError::MissingPath {
                    node: shape.to_string(),
                })?;
            let value = format!("?v{}", index);
            let path = path.to_string();

            patterns.push(format!("{} {} {} .", focus, path, value));

            let ctx = EmitContext::new(focus, value.as_str(), path.as_str());
            for component in registry.components() {
                if !component.recognize(dataset, shape) {
                    continue;
                }
                for emitter in component.generate(dataset, shape, config)? {
                    fragments.push(emitter.emit(&ctx)?);
                }
            }
        }

        if patterns.is_empty() {
            patterns.push(format!("{} ?p ?o .", focus));
        }

        let template = patterns.join("\n");
        let mut body = patterns.join("\n");
        for fragment in &fragments {
            body.push('\n');
            body.push_str(fragment);
        }

        let keyword = match form {
            QueryForm::Construct => "CONSTRUCT",
            QueryForm::Delete => "DELETE",
        };
        Ok(format!("{} {{\n{}\n}} WHERE {{\n{}\n}}", keyword, template, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeql_registry::{ConstraintComponent, PatternConstraint};
    use std::sync::Arc;

    fn shape_with_property(path: &str) -> (Dataset, Term) {
        let mut dataset = Dataset::new();
        let prop = Term::blank("p0");
        dataset.insert_triple(
            Term::iri("http://example.org/shape"),
            Term::iri(vocab::sh::PROPERTY),
            prop.clone(),
        );
        dataset.insert_triple(prop.clone(), Term::iri(vocab::sh::PATH), Term::iri(path));
        (dataset, prop)
    }

    #[test]
    fn test_construct_form() {
        let (dataset, _) = shape_with_property("http://schema.org/name");
        let query = SparqlLowering
            .lower(&dataset, &ConstraintRegistry::new(), QueryForm::Construct, &CompileConfig::default())
            .unwrap();
        assert!(query.starts_with("CONSTRUCT {"));
        assert!(query.contains("?this <http://schema.org/name> ?v0 ."));
        assert!(query.contains("} WHERE {"));
    }

    #[test]
    fn test_delete_form() {
        let (dataset, _) = shape_with_property("http://schema.org/name");
        let query = SparqlLowering
            .lower(&dataset, &ConstraintRegistry::new(), QueryForm::Delete, &CompileConfig::default())
            .unwrap();
        assert!(query.starts_with("DELETE {"));
    }

    #[test]
    fn test_empty_shape_lowers_to_bare_pattern() {
        let query = SparqlLowering
            .lower(&Dataset::new(), &ConstraintRegistry::new(), QueryForm::Construct, &CompileConfig::default())
            .unwrap();
        assert!(query.contains("?this ?p ?o ."));
    }

    #[test]
    fn test_missing_path_errors() {
        let mut dataset = Dataset::new();
        dataset.insert_triple(
            Term::iri("http://example.org/shape"),
            Term::iri(vocab::sh::PROPERTY),
            Term::blank("p0"),
        );
        let err = SparqlLowering
            .lower(&dataset, &ConstraintRegistry::new(), QueryForm::Construct, &CompileConfig::default())
            .unwrap_err();
        assert!(matches!(err, LowerError::MissingPath { .. }));
    }

    #[test]
    fn test_constraint_fragments_are_spliced_in() {
        let (mut dataset, prop) = shape_with_property("http://schema.org/name");
        dataset.insert_triple(prop, Term::iri(vocab::sh::PATTERN), Term::literal("^foo"));

        let registry = ConstraintRegistry::new();
        registry.register(Arc::new(PatternConstraint));
        let query = SparqlLowering
            .lower(&dataset, &registry, QueryForm::Construct, &CompileConfig::default())
            .unwrap();
        assert!(query.contains("FILTER (REGEX(?v0, \"^foo\"))"));
        // The template never carries filters.
        let template = query.split("WHERE").next().unwrap();
        assert!(!template.contains("FILTER"));
    }

    #[test]
    fn test_unrecognized_constraint_yields_nothing() {
        let (dataset, _) = shape_with_property("http://schema.org/name");
        let registry = ConstraintRegistry::new();
        registry.register(Arc::new(PatternConstraint));
        assert!(!PatternConstraint.recognize(&dataset, &Term::blank("p0")));

        let query = SparqlLowering
            .lower(&dataset, &registry, QueryForm::Construct, &CompileConfig::default())
            .unwrap();
        assert!(!query.contains("FILTER"));
    }
}
