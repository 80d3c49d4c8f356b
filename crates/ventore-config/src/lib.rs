//! # ventore-config
//!
//! Layered configuration loading for Ventore using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VENTORE_*` prefix, `__` as separator)
//! 2. Project-level `.ventore/config.toml`
//! 3. User-level `~/.config/ventore/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VENTORE_CACHE__REVALIDATE_SECS` -> `cache.revalidate_secs`,
//! `VENTORE_SOURCES__MASTER__URL` -> `sources.master.url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ventore_config::VentoreConfig;
//!
//! let config = VentoreConfig::load_with_dotenv().expect("config");
//! println!("master sheet: {}", config.sources.master.url);
//! ```

mod cache;
mod error;
mod headers;
mod http;
mod sources;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use headers::{
    CapTableHeaders, ComplianceHeaders, HeaderMap, MasterHeaders, PROJECT_PLACEHOLDER,
    expand_for_project,
};
pub use http::HttpConfig;
pub use sources::{SourceConfig, SourcesConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VentoreConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub headers: HeaderMap,
}

impl VentoreConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a provider fails to parse or a value is
    /// out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".ventore/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VENTORE_").split("__"))
    }

    /// Reject values that would make every build fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, source) in self.sources.iter() {
            if source.url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("sources.{kind}.url"),
                    reason: "must not be empty".into(),
                });
            }
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ventore").join("config.toml"))
    }
}
