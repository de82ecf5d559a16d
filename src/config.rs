//! Configurator settings: slot names, catalog source, locale and the
//! running-total transition length.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```
//! use build_pricer::ConfiguratorConfig;
//!
//! let config = ConfiguratorConfig::from_json_str(r#"{"locale": "es"}"#).unwrap();
//! assert_eq!(config.locale, "es");
//! assert_eq!(config.selections_key, "pricing_selections_v2");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::persistence::{StorageKeys, SELECTIONS_KEY, SUMMARY_KEY};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfiguratorConfig {
    /// Durable slot holding the selections.
    pub selections_key: String,
    /// Session slot holding the contact-page handoff.
    pub summary_key: String,
    /// JSON catalog file; the embedded standard catalog when absent.
    pub catalog_path: Option<PathBuf>,
    pub locale: String,
    /// Length of the running-total transition, in milliseconds.
    pub total_transition_ms: u64,
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            selections_key: SELECTIONS_KEY.to_string(),
            summary_key: SUMMARY_KEY.to_string(),
            catalog_path: None,
            locale: "en".to_string(),
            total_transition_ms: 600,
        }
    }
}

impl ConfiguratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.selections_key = keys.selections;
        self.summary_key = keys.summary;
        self
    }

    pub fn with_total_transition(mut self, duration: Duration) -> Self {
        self.total_transition_ms = duration.as_millis() as u64;
        self
    }

    pub fn total_transition(&self) -> Duration {
        Duration::from_millis(self.total_transition_ms)
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys {
            selections: self.selections_key.clone(),
            summary: self.summary_key.clone(),
        }
    }

    /// The embedded catalog, or the validated contents of `catalog_path`.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::standard());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Catalog::from_json_str(&contents)?)
    }
}
