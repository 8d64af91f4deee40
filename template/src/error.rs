//! Template resolution error types.

use thiserror::Error;

/// Errors that can occur during template resolution.
///
/// Resolution commits its rewrites placeholder by placeholder: an error
/// aborts the current compilation but does not roll back placeholders that
/// were already rewritten.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Interpolation text with broken `${...}` syntax.
    #[error("malformed template '{text}': {message}")]
    Malformed { text: String, message: String },

    /// Interpolation references a name with no binding.
    #[error("unbound template expression '${{{name}}}'")]
    UnboundExpression { name: String },

    /// A placeholder node exists but its descriptive object is missing
    /// or is not a literal.
    #[error("placeholder target not found on node {node}")]
    MissingTarget { node: String },
}

impl TemplateError {
    pub fn malformed(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            text: text.into(),
            message: message.into(),
        }
    }

    pub fn unbound_expression(name: impl Into<String>) -> Self {
        Self::UnboundExpression { name: name.into() }
    }

    pub fn missing_target(node: impl Into<String>) -> Self {
        Self::MissingTarget { node: node.into() }
    }
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
