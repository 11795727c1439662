//! Dependency injection infrastructure.
//!
//! Compile-time injection built on the `FromRef` trait and the derive macros
//! from `di-macros`:
//!
//! - `#[derive(Context)]` on the composition root makes each field
//!   extractable via `FromRef`.
//! - `#[derive(FromContext)]` on a service resolves each of its fields from
//!   the root.
//!
//! ```ignore
//! #[derive(Context, Clone)]
//! pub struct Context {
//!     pub catalog: AppCatalog,
//!     pub config: AppConfig,
//! }
//!
//! #[derive(FromContext, Clone)]
//! pub struct AuthoringService {
//!     catalog: AppCatalog, // resolved via FromRef<Context>
//! }
//!
//! let service = AuthoringService::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

// Re-export derive macros
pub use di_macros::{Context, FromContext};
