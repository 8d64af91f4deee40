//! The `sh:pattern` constraint component.
//!
//! Lowers a regular-expression value constraint into a plain `FILTER`
//! clause. Also serves as the portable fallback for the full-text
//! component when no vendor-specific backend is configured.

use crate::{CompileConfig, ConstraintComponent, ConstraintEmitter, ConstraintResult, EmitContext};
use shapeql_term::{vocab, Dataset, Term};

/// Recognizes shape nodes carrying a literal `sh:pattern`.
#[derive(Debug, Clone, Copy)]
pub struct PatternConstraint;

impl ConstraintComponent for PatternConstraint {
    fn kind(&self) -> &'static str {
        vocab::sh::PATTERN_CONSTRAINT_COMPONENT
    }

    fn recognize(&self, dataset: &Dataset, node: &Term) -> bool {
        dataset
            .object_of(node, &Term::iri(vocab::sh::PATTERN))
            .map_or(false, |object| object.is_literal())
    }

    fn generate(
        &self,
        dataset: &Dataset,
        node: &Term,
        _config: &CompileConfig,
    ) -> ConstraintResult<Vec<Box<dyn ConstraintEmitter>>> {
        let mut emitters: Vec<Box<dyn ConstraintEmitter>> = Vec::new();
        for object in dataset.objects_of(node, &Term::iri(vocab::sh::PATTERN)) {
            if let Some(pattern) = object.as_literal() {
                emitters.push(Box::new(PatternEmitter::new(pattern.value.clone())));
            }
        }
        Ok(emitters)
    }
}

/// Emits a `REGEX` filter on the value variable.
#[derive(Debug, Clone)]
pub struct PatternEmitter {
    pattern: String,
}

impl PatternEmitter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl ConstraintEmitter for PatternEmitter {
    fn emit(&self, ctx: &EmitContext) -> ConstraintResult<String> {
        Ok(format!("FILTER (REGEX({}, \"{}\"))", ctx.value, self.pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_with_pattern(pattern: &str) -> (Dataset, Term) {
        let mut dataset = Dataset::new();
        let node = Term::blank("prop0");
        dataset.insert_triple(
            node.clone(),
            Term::iri(vocab::sh::PATTERN),
            Term::literal(pattern),
        );
        (dataset, node)
    }

    #[test]
    fn test_recognize_literal_pattern() {
        let (dataset, node) = shape_with_pattern("^foo");
        assert!(PatternConstraint.recognize(&dataset, &node));
        assert!(!PatternConstraint.recognize(&dataset, &Term::blank("other")));
    }

    #[test]
    fn test_recognize_rejects_non_literal() {
        let mut dataset = Dataset::new();
        let node = Term::blank("prop0");
        dataset.insert_triple(
            node.clone(),
            Term::iri(vocab::sh::PATTERN),
            Term::iri("http://example.org/not-a-literal"),
        );
        assert!(!PatternConstraint.recognize(&dataset, &node));
    }

    #[test]
    fn test_generate_one_emitter_per_pattern() {
        let (mut dataset, node) = shape_with_pattern("^foo");
        dataset.insert_triple(
            node.clone(),
            Term::iri(vocab::sh::PATTERN),
            Term::literal("bar$"),
        );
        let emitters = PatternConstraint
            .generate(&dataset, &node, &CompileConfig::default())
            .unwrap();
        assert_eq!(emitters.len(), 2);
    }

    #[test]
    fn test_generate_yields_nothing_without_match() {
        let dataset = Dataset::new();
        let emitters = PatternConstraint
            .generate(&dataset, &Term::blank("none"), &CompileConfig::default())
            .unwrap();
        assert!(emitters.is_empty());
    }

    #[test]
    fn test_emit_regex_filter() {
        let ctx = EmitContext::new("?this", "?value", "<http://schema.org/name>");
        let fragment = PatternEmitter::new("^foo").emit(&ctx).unwrap();
        assert_eq!(fragment, "FILTER (REGEX(?value, \"^foo\"))");
    }
}
