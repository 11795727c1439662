//! Compile-time dependency injection macros for Folio.
//!
//! - `#[derive(Context)]` marks the composition root: every field becomes
//!   extractable from it.
//! - `#[derive(FromContext)]` builds a service by extracting each of its
//!   fields from the root.
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! expose the trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Derive macro for the composition root.
///
/// Emits `impl crate::FromRef<Root> for FieldType` for every named field,
/// cloning the field out of the root. Field types must be `Clone` and
/// distinct from one another.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub catalog: Arc<Catalog>,
///     pub config: Arc<Config>,
/// }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derive macro for services resolved from the composition root.
///
/// Emits `impl crate::FromRef<Context> for Service` that resolves each field
/// through its own `FromRef<Context>` impl. The root type defaults to
/// `Context` and can be changed with `#[from_context(Context = "Other")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct AuthoringService {
///     catalog: Arc<Catalog>,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
