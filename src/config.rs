//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/folio/config.toml` (XDG) or platform config dir
//! 2. Project config: `.folio.toml`
//! 3. Environment variables: `FOLIO_*`
//!
//! ```toml
//! [catalog]
//! path = "data/projects.json"
//! ```
//!
//! Every key has a default, so no file is required. Without `catalog.path`
//! the records compiled into the binary are served.

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::AppError;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the catalog records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding an array of project records.
    /// Relative paths resolve against the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Builds the configured catalog: the file when one is set, otherwise
    /// the built-in records.
    pub fn open(&self) -> Result<Catalog, AppError> {
        match &self.path {
            Some(path) => Catalog::load_json(path),
            None => {
                tracing::debug!("No catalog path configured, using built-in records");
                Catalog::builtin()
            }
        }
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The layered provider chain behind [`Config::load`].
    pub fn figment() -> Figment {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(Self::user_config_path()))
            // Layer 2: Project config
            .merge(Toml::file(".folio.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("FOLIO_").split("_"))
    }

    /// User config path: ~/.config/folio/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("folio").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("folio").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Points the user config lookup at the jail so a real
    /// `~/.config/folio/config.toml` cannot leak in.
    fn isolate_home(jail: &mut Jail) {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
    }

    #[test]
    fn test_defaults_without_any_source() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            assert!(config.catalog.path.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_sets_catalog_path() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file(
                ".folio.toml",
                r#"
                [catalog]
                path = "data/projects.json"
                "#,
            )?;
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(
                config.catalog.path,
                Some(PathBuf::from("data/projects.json"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file(".folio.toml", "[catalog]\npath = \"from-file.json\"\n")?;
            jail.set_env("FOLIO_CATALOG_PATH", "from-env.json");
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.catalog.path, Some(PathBuf::from("from-env.json")));
            Ok(())
        });
    }

    #[test]
    fn test_user_file_is_read_from_home() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            std::fs::create_dir_all(jail.directory().join(".config/folio"))
                .map_err(|e| e.to_string())?;
            jail.create_file(".config/folio/config.toml", "[catalog]\npath = \"user.json\"\n")?;
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.catalog.path, Some(PathBuf::from("user.json")));
            Ok(())
        });
    }

    #[test]
    fn test_open_without_path_uses_builtin() {
        let catalog = CatalogConfig::default().open().unwrap();
        assert_eq!(catalog, Catalog::builtin().unwrap());
    }
}
