//! `${name}` interpolation against a binding map.

use crate::{Bindings, TemplateError, TemplateResult};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid pattern"));

/// Evaluate an interpolation template against bindings.
///
/// Every `${name}` expression is replaced with the lexical value of the
/// bound term. A `${...}` that does not scan as a well-formed expression
/// (unterminated, or not a plain identifier) is malformed; a well-formed
/// expression with no binding is unbound. Both abort resolution.
pub fn eval_template(text: &str, bindings: &Bindings) -> TemplateResult<String> {
    let mut resolved = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(text) {
        let whole = caps.get(0).expect("match");
        let name = &caps[1];

        let term = bindings
            .get(name)
            .ok_or_else(|| TemplateError::unbound_expression(name))?;

        let gap = &text[last..whole.start()];
        if gap.contains("${") {
            return Err(TemplateError::malformed(
                text,
                "unterminated or invalid ${...} expression",
            ));
        }
        resolved.push_str(gap);
        resolved.push_str(term.lexical_value());
        last = whole.end();
    }

    // An expression opener outside any well-formed placeholder did not
    // scan (unterminated, or not a plain identifier).
    let tail = &text[last..];
    if tail.contains("${") {
        return Err(TemplateError::malformed(
            text,
            "unterminated or invalid ${...} expression",
        ));
    }
    resolved.push_str(tail);

    Ok(resolved)
}
