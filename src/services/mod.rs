//! Business logic for working with catalog records.
//!
//! Services that need the catalog use the `FromContext` derive macro for
//! dependency injection; the free functions are pure.

mod authoring;
mod validation;

pub use authoring::{examples, generate_slug, AuthoringService, AUTHORING_GUIDE, DEFAULT_ROLE};
pub use validation::{validate_project, ValidationReport};
