//! Config file holding saved connection options.
//!
//! ```json
//! {
//!   "appConfig": {
//!     "connectionStrings": [
//!       { "server": "db01", "database": "master", "integratedSecurity": true }
//!     ]
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SpeakerError};
use crate::options::ConnectionOptions;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Root of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Application section.
    #[serde(default)]
    pub app_config: AppConfig,
}

/// The `appConfig` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Saved connections. Only the first one is used.
    #[serde(default)]
    pub connection_strings: Vec<ConnectionOptions>,
}

impl ConfigFile {
    /// Creates a config file holding a single connection.
    #[must_use]
    pub fn from_options(options: &ConnectionOptions) -> Self {
        Self {
            app_config: AppConfig {
                connection_strings: vec![options.clone()],
            },
        }
    }

    /// Returns the saved connection options, or defaults if none are saved.
    #[must_use]
    pub fn options(&self) -> ConnectionOptions {
        self.app_config
            .connection_strings
            .first()
            .cloned()
            .unwrap_or_default()
    }

    /// Loads a config file.
    ///
    /// A missing file is not an error and yields `Ok(None)`.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = absolute(path.as_ref());

        if !path.exists() {
            info!(path = %path.display(), "No config file found");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        let config =
            serde_json::from_str(&contents).map_err(|source| SpeakerError::Config {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "Loaded config file");

        Ok(Some(config))
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the config to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = absolute(path.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_json()? + "\n")?;
        info!(path = %path.display(), "Saved config file");
        Ok(())
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
