//! The free-text search constraint component.

use crate::Vendor;
use shapeql_registry::{
    CompileConfig, ConfigurationError, ConstraintComponent, ConstraintEmitter, ConstraintResult,
    EmitContext, PatternEmitter,
};
use shapeql_term::{vocab, Dataset, Term};
use tracing::debug;

/// Recognizes shape nodes declaring a `hydra:freetextQuery` constraint and
/// lowers each query clause into backend-specific syntax.
#[derive(Debug, Clone, Copy)]
pub struct FreeTextConstraint;

impl ConstraintComponent for FreeTextConstraint {
    fn kind(&self) -> &'static str {
        vocab::ext::FREE_TEXT_SEARCH_CONSTRAINT_COMPONENT
    }

    /// True iff the node has exactly one object via `hydra:freetextQuery`
    /// (single-pointer semantics; a multi-valued or absent edge does not
    /// match).
    fn recognize(&self, dataset: &Dataset, node: &Term) -> bool {
        dataset
            .objects_of(node, &Term::iri(vocab::hydra::FREETEXT_QUERY))
            .len()
            == 1
    }

    fn generate(
        &self,
        dataset: &Dataset,
        node: &Term,
        config: &CompileConfig,
    ) -> ConstraintResult<Vec<Box<dyn ConstraintEmitter>>> {
        let mut emitters: Vec<Box<dyn ConstraintEmitter>> = Vec::new();

        for object in dataset.objects_of(node, &Term::iri(vocab::hydra::FREETEXT_QUERY)) {
            let Some(pattern) = object.as_literal() else {
                continue;
            };

            // The backend is selected per clause at generation time, so a
            // configuration change takes effect on the next compilation.
            match Vendor::from_config(config) {
                Some(vendor) => {
                    debug!(?vendor, pattern = %pattern.value, "generating full-text clause");
                    emitters.push(Box::new(FullTextEmitter::new(vendor, pattern.value.clone())));
                }
                None => {
                    debug!(pattern = %pattern.value, "no store engine configured, using pattern fallback");
                    emitters.push(Box::new(PatternEmitter::new(format!("^{}", pattern.value))));
                }
            }
        }

        Ok(emitters)
    }
}

/// One full-text clause bound to a specific backend.
#[derive(Debug, Clone)]
pub struct FullTextEmitter {
    vendor: Vendor,
    pattern: String,
}

impl FullTextEmitter {
    pub fn new(vendor: Vendor, pattern: impl Into<String>) -> Self {
        Self {
            vendor,
            pattern: pattern.into(),
        }
    }

    /// Stardog: query the search service with the wildcard-suffixed
    /// pattern, bind matches to the value variable, then join back to the
    /// focus node through the property path.
    fn emit_stardog(&self, ctx: &EmitContext) -> String {
        format!(
            "SERVICE <{text_match}> {{\n  [] <{query}> \"\"\"{pattern}*\"\"\" ;\n     <{result}> {value} .\n}}\n{focus} {path} {value} .",
            text_match = vocab::stardog::TEXT_MATCH,
            query = vocab::stardog::QUERY,
            result = vocab::stardog::RESULT,
            pattern = self.pattern,
            value = ctx.value,
            focus = ctx.focus,
            path = ctx.path,
        )
    }

    /// Fuseki: call the text index function, then re-join exactly through
    /// the property path and filter case-insensitively on the prefix. The
    /// second filtering compensates for the index's looser matching.
    fn emit_fuseki(&self, ctx: &EmitContext) -> String {
        format!(
            "{focus} <{text_query}> ({path} \"\"\"{pattern}*\"\"\") .\n{focus} {path} {value} .\nFILTER (REGEX({value}, \"^{pattern}\", \"i\"))",
            text_query = vocab::jena::TEXT_QUERY,
            pattern = self.pattern,
            focus = ctx.focus,
            path = ctx.path,
            value = ctx.value,
        )
    }
}

impl ConstraintEmitter for FullTextEmitter {
    fn emit(&self, ctx: &EmitContext) -> ConstraintResult<String> {
        match &self.vendor {
            Vendor::Stardog => Ok(self.emit_stardog(ctx)),
            Vendor::Fuseki => Ok(self.emit_fuseki(ctx)),
            Vendor::Unknown(vendor) => Err(ConfigurationError::unsupported_vendor(vendor)),
        }
    }
}
