//! Constraint component error types.

use thiserror::Error;

/// Errors raised by constraint components.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configured store backend is not among the known vendors.
    #[error("unsupported vendor '{vendor}'")]
    UnsupportedVendor { vendor: String },
}

impl ConfigurationError {
    pub fn unsupported_vendor(vendor: impl Into<String>) -> Self {
        Self::UnsupportedVendor {
            vendor: vendor.into(),
        }
    }
}

/// Result type for constraint component operations.
pub type ConstraintResult<T> = Result<T, ConfigurationError>;
