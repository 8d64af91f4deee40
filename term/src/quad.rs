//! Quads: (subject, predicate, object, graph) facts.

use crate::Term;
use std::fmt;

/// A single (subject, predicate, object, graph) fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub graph: Term,
}

impl Quad {
    /// Create a quad in the default graph.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: Term::DefaultGraph,
        }
    }

    /// Create a quad in a named graph.
    pub fn in_graph(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// A copy of this quad with the object replaced (same subject,
    /// predicate and graph).
    pub fn with_object(&self, object: Term) -> Self {
        Self {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object,
            graph: self.graph.clone(),
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if self.graph != Term::DefaultGraph {
            write!(f, " {}", self.graph)?;
        }
        write!(f, " .")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_default_graph() {
        let q = Quad::new(Term::iri("s"), Term::iri("p"), Term::literal("o"));
        assert_eq!(q.graph, Term::DefaultGraph);
    }

    #[test]
    fn test_with_object() {
        let q = Quad::in_graph(
            Term::iri("s"),
            Term::iri("p"),
            Term::blank("placeholder"),
            Term::iri("g"),
        );
        let rewritten = q.with_object(Term::literal("resolved"));
        assert_eq!(rewritten.subject, q.subject);
        assert_eq!(rewritten.predicate, q.predicate);
        assert_eq!(rewritten.graph, q.graph);
        assert_eq!(rewritten.object, Term::literal("resolved"));
    }

    #[test]
    fn test_display() {
        let q = Quad::new(Term::iri("s"), Term::iri("p"), Term::literal("o"));
        assert_eq!(q.to_string(), "<s> <p> \"o\" .");
    }
}
