//! Domain models for the project catalog.

mod category;
mod draft;
mod project;
pub mod serde_helpers;
mod status;

pub use category::Category;
pub use draft::ProjectDraft;
pub use project::Project;
pub use status::Status;
