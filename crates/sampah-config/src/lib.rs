//! # sampah-config
//!
//! Layered configuration loading for sampah using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SAMPAH_*` prefix, `__` as separator)
//! 2. Project-level `.sampah/config.toml`
//! 3. User-level `~/.config/sampah/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SAMPAH_API__BASE_URL` -> `api.base_url`,
//! `SAMPAH_BANK_SAMPAH__WHATSAPP_NUMBER` -> `bank_sampah.whatsapp_number`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sampah_config::SampahConfig;
//!
//! let config = SampahConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod auth;
mod bank_sampah;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use bank_sampah::BankSampahConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding project-local sampah state.
pub const PROJECT_DIR: &str = ".sampah";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SampahConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub bank_sampah: BankSampahConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SampahConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SAMPAH_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.bank_sampah.validate()?;
        self.general.validate()?;
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sampah").join("config.toml"))
    }
}
