//! Compilation configuration.

/// Environment variable selecting the full-text store backend.
pub const STORE_ENGINE_VAR: &str = "SHAPEQL_STORE_ENGINE";

/// Configuration consumed during one compilation request.
///
/// Built fresh per request (`from_env`) rather than cached, so a
/// configuration change takes effect on the next compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileConfig {
    /// The configured full-text backend engine, if any
    /// (e.g. "stardog", "fuseki").
    pub store_engine: Option<String>,
}

impl CompileConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            store_engine: std::env::var(STORE_ENGINE_VAR).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Configuration with an explicit store engine.
    pub fn with_store_engine(engine: impl Into<String>) -> Self {
        Self {
            store_engine: Some(engine.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_engine() {
        assert!(CompileConfig::default().store_engine.is_none());
    }

    #[test]
    fn test_with_store_engine() {
        let config = CompileConfig::with_store_engine("stardog");
        assert_eq!(config.store_engine.as_deref(), Some("stardog"));
    }
}
