//! Mutable quad dataset with snapshot-based matching.
//!
//! The dataset is an unordered set of quads (duplicate inserts are no-ops).
//! All matching methods return owned snapshots rather than borrowing
//! iterators: callers routinely remove and insert quads while walking a
//! match set, so matches are collected first and the live storage is only
//! touched afterwards.

use crate::{Quad, Term};

/// An in-memory set of quads.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    quads: Vec<Quad>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of quads in the dataset.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the dataset holds no quads.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Insert a quad. Returns false if an equal quad was already present.
    pub fn insert(&mut self, quad: Quad) -> bool {
        if self.quads.contains(&quad) {
            return false;
        }
        self.quads.push(quad);
        true
    }

    /// Insert a quad by components, in the default graph.
    pub fn insert_triple(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.insert(Quad::new(subject, predicate, object))
    }

    /// Remove a quad. Returns true if it was present.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        if let Some(pos) = self.quads.iter().position(|q| q == quad) {
            self.quads.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove every quad with the given subject. Returns the number removed.
    pub fn remove_subject(&mut self, subject: &Term) -> usize {
        let before = self.quads.len();
        self.quads.retain(|q| &q.subject != subject);
        before - self.quads.len()
    }

    /// Returns true if an equal quad is present.
    pub fn contains(&self, quad: &Quad) -> bool {
        self.quads.contains(quad)
    }

    /// Iterate over all quads.
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// All quads matching the given components (`None` is a wildcard),
    /// returned as an owned snapshot safe to hold across mutations.
    pub fn quads_matching(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Vec<Quad> {
        self.quads
            .iter()
            .filter(|q| {
                subject.map_or(true, |s| &q.subject == s)
                    && predicate.map_or(true, |p| &q.predicate == p)
                    && object.map_or(true, |o| &q.object == o)
                    && graph.map_or(true, |g| &q.graph == g)
            })
            .cloned()
            .collect()
    }

    /// Distinct subjects carrying the given predicate, as an owned snapshot.
    pub fn subjects_with_predicate(&self, predicate: &Term) -> Vec<Term> {
        let mut subjects = Vec::new();
        for quad in &self.quads {
            if &quad.predicate == predicate && !subjects.contains(&quad.subject) {
                subjects.push(quad.subject.clone());
            }
        }
        subjects
    }

    /// The first object reachable from `subject` via `predicate`, if any.
    pub fn object_of(&self, subject: &Term, predicate: &Term) -> Option<Term> {
        self.quads
            .iter()
            .find(|q| &q.subject == subject && &q.predicate == predicate)
            .map(|q| q.object.clone())
    }

    /// All objects reachable from `subject` via `predicate`.
    pub fn objects_of(&self, subject: &Term, predicate: &Term) -> Vec<Term> {
        self.quads
            .iter()
            .filter(|q| &q.subject == subject && &q.predicate == predicate)
            .map(|q| q.object.clone())
            .collect()
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for quad in iter {
            dataset.insert(quad);
        }
        dataset
    }
}

impl Extend<Quad> for Dataset {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.insert(quad);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(s: &str, p: &str, o: &str) -> Quad {
        Quad::new(Term::iri(s), Term::iri(p), Term::literal(o))
    }

    #[test]
    fn test_insert_is_set_like() {
        let mut ds = Dataset::new();
        assert!(ds.insert(quad("s", "p", "o")));
        assert!(!ds.insert(quad("s", "p", "o")));
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut ds = Dataset::new();
        ds.insert(quad("s", "p", "o"));
        assert!(ds.remove(&quad("s", "p", "o")));
        assert!(!ds.remove(&quad("s", "p", "o")));
        assert!(ds.is_empty());
    }

    #[test]
    fn test_remove_subject() {
        let mut ds = Dataset::new();
        ds.insert(quad("a", "p", "1"));
        ds.insert(quad("a", "q", "2"));
        ds.insert(quad("b", "p", "3"));
        assert_eq!(ds.remove_subject(&Term::iri("a")), 2);
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_quads_matching_wildcards() {
        let mut ds = Dataset::new();
        ds.insert(quad("a", "p", "1"));
        ds.insert(quad("b", "p", "1"));
        ds.insert(quad("b", "q", "2"));

        assert_eq!(ds.quads_matching(None, None, None, None).len(), 3);
        assert_eq!(
            ds.quads_matching(None, Some(&Term::iri("p")), None, None).len(),
            2
        );
        assert_eq!(
            ds.quads_matching(None, None, Some(&Term::literal("1")), None).len(),
            2
        );
        assert_eq!(
            ds.quads_matching(Some(&Term::iri("b")), None, None, None).len(),
            2
        );
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut ds = Dataset::new();
        ds.insert(quad("a", "p", "1"));
        ds.insert(quad("b", "p", "1"));

        // The match set stays valid while the dataset is rewritten.
        let matches = ds.quads_matching(None, None, Some(&Term::literal("1")), None);
        for m in &matches {
            ds.remove(m);
            ds.insert(m.with_object(Term::literal("2")));
        }
        assert_eq!(ds.len(), 2);
        assert!(ds.contains(&quad("a", "p", "2")));
        assert!(ds.contains(&quad("b", "p", "2")));
    }

    #[test]
    fn test_subjects_with_predicate_distinct() {
        let mut ds = Dataset::new();
        ds.insert(quad("a", "p", "1"));
        ds.insert(quad("a", "p", "2"));
        ds.insert(quad("b", "p", "3"));
        assert_eq!(ds.subjects_with_predicate(&Term::iri("p")).len(), 2);
    }

    #[test]
    fn test_object_lookups() {
        let mut ds = Dataset::new();
        ds.insert(quad("a", "p", "1"));
        ds.insert(quad("a", "p", "2"));
        assert_eq!(ds.object_of(&Term::iri("a"), &Term::iri("p")), Some(Term::literal("1")));
        assert_eq!(ds.object_of(&Term::iri("a"), &Term::iri("q")), None);
        assert_eq!(ds.objects_of(&Term::iri("a"), &Term::iri("p")).len(), 2);
    }
}
