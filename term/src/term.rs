//! RDF term types for shape graphs.
//!
//! A term is one of: a named node (IRI), a blank node, a literal with an
//! optional language tag or datatype, or the default-graph marker. Terms
//! are compared structurally and render in SPARQL/N-Quads syntax.

use std::fmt;

/// A literal value with optional language tag or datatype IRI.
///
/// Per RDF, a literal carries at most one of the two: a language tag
/// implies `rdf:langString` and wins over an explicit datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical value.
    pub value: String,
    /// Language tag (e.g. "en"), if any.
    pub language: Option<String>,
    /// Datatype IRI, if any.
    pub datatype: Option<String>,
}

impl Literal {
    /// Create a plain string literal.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Create a language-tagged literal.
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// Create a datatyped literal.
    pub fn with_datatype(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Create a literal with the same language/datatype as another,
    /// but a new lexical value.
    pub fn like(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: self.language.clone(),
            datatype: self.datatype.clone(),
        }
    }
}

/// A node in a shape or resource graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A named node (IRI).
    Iri(String),
    /// A blank node with a local label (without the `_:` prefix).
    Blank(String),
    /// A literal value.
    Literal(Literal),
    /// The default-graph marker (valid only in the graph position of a quad).
    DefaultGraph,
}

impl Term {
    /// Create a named node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Create a blank node.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Create a plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::new(value))
    }

    /// Create a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal(Literal::with_language(value, language))
    }

    /// Create a datatyped literal.
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal::with_datatype(value, datatype))
    }

    /// Returns true if this is a named node.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Returns true if this is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    /// Returns true if this is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Get the IRI if this is a named node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Get the literal if this is a literal term.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The lexical value of this term: the IRI, blank label, or literal
    /// value. Used when a term is substituted into an interpolation
    /// template. The default-graph marker has no lexical value.
    pub fn lexical_value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::Blank(label) => label,
            Term::Literal(lit) => &lit.value,
            Term::DefaultGraph => "",
        }
    }
}

fn escape_literal(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Blank(label) => write!(f, "_:{}", label),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", escape_literal(&lit.value))?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{}", lang)
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{}>", dt)
                } else {
                    Ok(())
                }
            }
            Term::DefaultGraph => Ok(()),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_constructors() {
        assert!(Term::iri("http://example.org/a").is_iri());
        assert!(Term::blank("b0").is_blank());
        assert!(Term::literal("hello").is_literal());
        assert!(!Term::literal("hello").is_iri());
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::iri("http://example.org/a").to_string(), "<http://example.org/a>");
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
        assert_eq!(Term::literal("hi").to_string(), "\"hi\"");
        assert_eq!(Term::lang_literal("hi", "en").to_string(), "\"hi\"@en");
        assert_eq!(
            Term::typed_literal("5", "http://www.w3.org/2001/XMLSchema#integer").to_string(),
            "\"5\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_literal_escaping() {
        assert_eq!(Term::literal("a \"b\"").to_string(), "\"a \\\"b\\\"\"");
    }

    #[test]
    fn test_literal_like_preserves_tags() {
        let template = Literal::with_language("Hello ${name}", "en");
        let resolved = template.like("Hello World");
        assert_eq!(resolved.value, "Hello World");
        assert_eq!(resolved.language.as_deref(), Some("en"));
        assert_eq!(resolved.datatype, None);
    }

    #[test]
    fn test_lexical_value() {
        assert_eq!(Term::iri("http://example.org/a").lexical_value(), "http://example.org/a");
        assert_eq!(Term::literal("x").lexical_value(), "x");
    }
}
