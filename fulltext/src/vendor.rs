//! Store backend selection.

use shapeql_registry::CompileConfig;

/// A configured full-text store backend.
///
/// `Unknown` carries a configured engine name that matches no known
/// backend; selection succeeds (the configuration is read at generation
/// time) and the error surfaces when the clause is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vendor {
    /// Stardog's full-text search service.
    Stardog,
    /// Apache Jena Fuseki's text index function.
    Fuseki,
    /// A configured engine this compiler does not support.
    Unknown(String),
}

impl Vendor {
    /// The configured backend, or `None` when no engine is set (the
    /// caller falls back to the portable pattern filter).
    pub fn from_config(config: &CompileConfig) -> Option<Vendor> {
        config.store_engine.as_deref().map(|engine| match engine {
            "stardog" => Vendor::Stardog,
            "fuseki" => Vendor::Fuseki,
            other => Vendor::Unknown(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vendors() {
        assert_eq!(
            Vendor::from_config(&CompileConfig::with_store_engine("stardog")),
            Some(Vendor::Stardog)
        );
        assert_eq!(
            Vendor::from_config(&CompileConfig::with_store_engine("fuseki")),
            Some(Vendor::Fuseki)
        );
    }

    #[test]
    fn test_unset_engine() {
        assert_eq!(Vendor::from_config(&CompileConfig::default()), None);
    }

    #[test]
    fn test_unknown_engine_carries_name() {
        assert_eq!(
            Vendor::from_config(&CompileConfig::with_store_engine("virtuoso")),
            Some(Vendor::Unknown("virtuoso".to_string()))
        );
    }
}
