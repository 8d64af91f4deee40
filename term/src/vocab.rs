//! Vocabulary constants for the namespaces the compiler understands.

/// SHACL core vocabulary.
pub mod sh {
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";
    pub const PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
    pub const DEFAULT_VALUE: &str = "http://www.w3.org/ns/shacl#defaultValue";
    pub const PATTERN_CONSTRAINT_COMPONENT: &str =
        "http://www.w3.org/ns/shacl#PatternConstraintComponent";
}

/// Shape-to-query placeholder vocabulary (template/variable annotations).
pub mod s2q {
    pub const NS: &str = "https://hypermedia.app/shape-to-query#";

    pub const TEMPLATE: &str = "https://hypermedia.app/shape-to-query#template";
    pub const VARIABLE: &str = "https://hypermedia.app/shape-to-query#variable";
}

/// Hydra core vocabulary (free-text query predicate).
pub mod hydra {
    pub const NS: &str = "http://www.w3.org/ns/hydra/core#";

    pub const FREETEXT_QUERY: &str = "http://www.w3.org/ns/hydra/core#freetextQuery";
}

/// shapeql extension vocabulary (constraint kinds this compiler adds).
pub mod ext {
    pub const NS: &str = "https://shapeql.dev/vocab#";

    pub const FREE_TEXT_SEARCH_CONSTRAINT_COMPONENT: &str =
        "https://shapeql.dev/vocab#FreeTextSearchConstraintComponent";
}

/// Stardog full-text search service vocabulary.
pub mod stardog {
    pub const NS: &str = "tag:stardog:api:search:";

    pub const TEXT_MATCH: &str = "tag:stardog:api:search:textMatch";
    pub const QUERY: &str = "tag:stardog:api:search:query";
    pub const RESULT: &str = "tag:stardog:api:search:result";
}

/// Apache Jena text index vocabulary.
pub mod jena {
    pub const TEXT_QUERY: &str = "http://jena.apache.org/text#query";
}
