//! shapeql Compiler
//!
//! Transform a shape dataset plus variable bindings into SPARQL query text.
//!
//! Responsibilities:
//! - One-time registration of built-in constraint components
//! - Template and variable placeholder resolution (via shapeql-template)
//! - Handing the resolved dataset and the component registry to the
//!   query lowering engine
//!
//! The lowering engine is a collaborator behind the [`QueryLowering`]
//! trait; [`SparqlLowering`] is the reference implementation.

mod compiler;
mod error;
mod lower;

pub use compiler::{compile, compile_with, ensure_initialized};
pub use error::{CompileError, CompileResult};
pub use lower::{LowerError, QueryForm, QueryLowering, SparqlLowering};
