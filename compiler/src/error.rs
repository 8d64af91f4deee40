//! Compilation error types.

use crate::LowerError;
use shapeql_template::TemplateError;
use thiserror::Error;

/// Errors that can occur during compilation.
///
/// All error kinds propagate synchronously to the caller; nothing is
/// retried internally and no partial query text accompanies an error.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Placeholder resolution failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Query lowering failed (including constraint component failures
    /// such as an unsupported vendor).
    #[error(transparent)]
    Lower(#[from] LowerError),
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
