use crate::cycle::LOGOUT_PATH;
use crate::error::ConfigError;
use schedula_client::ClientOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/schedula/config.json";

/// Settings read from the JSON config file. Every field is optional on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheduler installation to talk to, e.g. `https://scheduler.example.edu`
    pub base_url: Option<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub logout_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: Some(10),
            user_agent: None,
            logout_path: LOGOUT_PATH.to_string(),
        }
    }
}

impl Config {
    /// Expand a leading `~` in a user-supplied path
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).as_ref())
    }

    /// Read the config at `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn client_options(&self) -> ClientOptions {
        let defaults = ClientOptions::default();
        ClientOptions {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
