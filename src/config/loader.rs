use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::LauncherConfig;
use crate::identity::LauncherIdentity;

/// Name of the config file shared by every launcher flavour.
pub const SHARED_CONFIG_NAME: &str = "esxx";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LauncherConfig {
    /// Returns the config files consulted for `identity`, lowest precedence first.
    ///
    /// `<dir>etc/<base_name>.toml` unless the launcher is itself named `esxx`,
    /// then `<dir>etc/esxx.toml`, which has the last word.
    pub fn config_paths(identity: &LauncherIdentity) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if identity.base_name() != SHARED_CONFIG_NAME {
            paths.push(PathBuf::from(
                identity.install_path(&format!("etc/{}.toml", identity.base_name())),
            ));
        }
        paths.push(PathBuf::from(
            identity.install_path(&format!("etc/{SHARED_CONFIG_NAME}.toml")),
        ));
        paths
    }

    /// Loads and merges every config file for `identity`.
    ///
    /// Missing files are skipped silently. Unreadable or malformed files are
    /// logged and skipped; loading never fails.
    pub fn load(identity: &LauncherIdentity) -> Self {
        Self::config_paths(identity)
            .iter()
            .fold(LauncherConfig::default(), |acc, path| {
                match Self::load_from(path) {
                    Ok(Some(config)) => {
                        tracing::debug!("Loaded launcher config from {}", path.display());
                        acc.merge(config)
                    }
                    Ok(None) => acc,
                    Err(e) => {
                        tracing::warn!("Ignoring launcher config: {}", e);
                        acc
                    }
                }
            })
    }

    /// Loads a single config file. `Ok(None)` if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: LauncherConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Some(config))
    }
}
