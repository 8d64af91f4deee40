//! shapeql Term Model
//!
//! This crate provides the foundational graph types used throughout the
//! shapeql compiler:
//! - RDF terms (IRIs, blank nodes, literals, the default-graph marker)
//! - Quads (subject, predicate, object, graph)
//! - A mutable quad `Dataset` with snapshot-based matching
//! - Vocabulary constants for the namespaces the compiler understands

mod dataset;
mod quad;
mod term;
pub mod vocab;

pub use dataset::*;
pub use quad::*;
pub use term::*;
