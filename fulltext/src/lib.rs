//! shapeql Free-Text Search Constraint Component
//!
//! Full-text search is not expressible in portable SPARQL: every store
//! exposes its own index syntax. This crate isolates that divergence inside
//! one constraint component. Shapes declare the constraint through
//! `hydra:freetextQuery`; the component lowers each query clause into the
//! syntax of the configured backend (Stardog's search service, Fuseki's
//! `text:query` function) or into a portable prefix-regex filter when no
//! backend is configured. Adding a backend means adding one case here, with
//! no changes to the resolver or registry.

mod component;
mod vendor;

pub use component::{FreeTextConstraint, FullTextEmitter};
pub use vendor::Vendor;
