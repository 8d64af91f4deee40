//! shapeql Template Resolver
//!
//! Rewrites `s2q:template` and `s2q:variable` placeholder nodes embedded in
//! a shape dataset into concrete terms, using a caller-supplied binding map.
//!
//! Responsibilities:
//! - Evaluate `${name}` interpolation templates against bindings
//! - Replace every quad referencing a placeholder with the resolved term
//! - Drop quads referencing a variable placeholder with no effective value
//! - Remove placeholder description quads once resolved

mod bindings;
mod error;
mod interpolate;
mod resolver;

pub use bindings::Bindings;
pub use error::{TemplateError, TemplateResult};
pub use interpolate::eval_template;
pub use resolver::resolve;
