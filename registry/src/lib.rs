//! shapeql Constraint Component Registry
//!
//! A constraint component translates one kind of shape constraint into a
//! SPARQL query fragment. Components are registered process-wide, keyed by
//! their constraint-kind IRI, and looked up by the lowering engine. New
//! constraint kinds are added by registering a new implementation, never by
//! branching inside the resolver or engine.

mod component;
mod config;
mod error;
mod pattern;
mod registry;

pub use component::{ConstraintComponent, ConstraintEmitter, EmitContext};
pub use config::CompileConfig;
pub use error::{ConfigurationError, ConstraintResult};
pub use pattern::{PatternConstraint, PatternEmitter};
pub use registry::ConstraintRegistry;
