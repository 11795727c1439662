//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;

/// Shared, read-only catalog handle.
pub type AppCatalog = Arc<Catalog>;

/// Shared configuration handle.
pub type AppConfig = Arc<Config>;

/// Root application context for dependency injection.
///
/// The Context holds all shared dependencies and uses `#[derive(Context)]`
/// to generate `FromRef` implementations for each field, so services can
/// be resolved from it at compile time.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// The catalog every query and authoring helper works against.
    pub catalog: AppCatalog,
    /// Application configuration.
    pub config: AppConfig,
}

impl Context {
    /// Creates a new context with the given dependencies.
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }

    /// Opens the catalog named by `config` and wraps both in a context.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = config.catalog.open()?;
        Ok(Self::new(catalog, config))
    }
}
