//! In-place resolution of template and variable placeholders.

use crate::{eval_template, Bindings, TemplateError, TemplateResult};
use shapeql_term::{vocab, Dataset, Term};
use tracing::debug;

/// Resolve every template and variable placeholder in the dataset,
/// mutating it in place.
///
/// The two passes operate on disjoint placeholder sets and are
/// order-independent; both complete before the dataset is handed to the
/// lowering engine. Rewrites commit placeholder by placeholder: if a later
/// placeholder fails, earlier rewrites stay applied.
pub fn resolve(dataset: &mut Dataset, bindings: &Bindings) -> TemplateResult<()> {
    resolve_templates(dataset, bindings)?;
    resolve_variables(dataset, bindings)
}

/// Rewrite `s2q:template` placeholders into interpolated literals.
fn resolve_templates(dataset: &mut Dataset, bindings: &Bindings) -> TemplateResult<()> {
    let template_pred = Term::iri(vocab::s2q::TEMPLATE);

    for node in dataset.subjects_with_predicate(&template_pred) {
        let target = dataset
            .object_of(&node, &template_pred)
            .ok_or_else(|| TemplateError::missing_target(node.to_string()))?;
        let template = target
            .as_literal()
            .ok_or_else(|| TemplateError::missing_target(node.to_string()))?;

        let value = eval_template(&template.value, bindings)?;
        let resolved = Term::from(template.like(value));
        debug!(node = %node, resolved = %resolved, "resolved template placeholder");

        rewrite_references(dataset, &node, Some(resolved));
        dataset.remove_subject(&node);
    }

    Ok(())
}

/// Rewrite `s2q:variable` placeholders into bound terms, falling back to
/// `sh:defaultValue`. When neither exists the referencing quads are
/// dropped outright: an unbound variable omits the filter rather than
/// leaving a dangling object.
fn resolve_variables(dataset: &mut Dataset, bindings: &Bindings) -> TemplateResult<()> {
    let variable_pred = Term::iri(vocab::s2q::VARIABLE);
    let default_pred = Term::iri(vocab::sh::DEFAULT_VALUE);

    for node in dataset.subjects_with_predicate(&variable_pred) {
        let target = dataset
            .object_of(&node, &variable_pred)
            .ok_or_else(|| TemplateError::missing_target(node.to_string()))?;
        let name = target
            .as_literal()
            .ok_or_else(|| TemplateError::missing_target(node.to_string()))?;

        let value = bindings
            .get(&name.value)
            .cloned()
            .or_else(|| dataset.object_of(&node, &default_pred));
        debug!(node = %node, variable = %name.value, bound = value.is_some(), "resolved variable placeholder");

        rewrite_references(dataset, &node, value);
        dataset.remove_subject(&node);
    }

    Ok(())
}

/// Replace every quad whose object is `node` with one pointing at `value`,
/// or delete it when no value exists. Matches are snapshotted before the
/// dataset is mutated.
fn rewrite_references(dataset: &mut Dataset, node: &Term, value: Option<Term>) {
    for quad in dataset.quads_matching(None, None, Some(node), None) {
        dataset.remove(&quad);
        if let Some(value) = &value {
            dataset.insert(quad.with_object(value.clone()));
        }
    }
}
