//! User-wide tool settings.
//!
//! Optional TOML file read from `$COMPSYNC_CONFIG` or
//! `<config dir>/compsync/config.toml`. A missing file yields defaults.
//!
//! ```toml
//! timeout_secs = 120
//! user_agent = "my-team-sync/1.0"
//!
//! [registries]
//! react = "https://registry.internal.example.com"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::Framework;
use crate::constants::{DEFAULT_OPERATION_TIMEOUT, DEFAULT_USER_AGENT};

const fn default_timeout_secs() -> u64 {
    DEFAULT_OPERATION_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Upper bound for one CLI operation, enforced by the orchestration layer.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// Registry domain overrides keyed by framework key (`react`, `solid-ui`, ...).
    #[serde(default)]
    pub registries: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            registries: HashMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// `$COMPSYNC_CONFIG`, falling back to the platform config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Self::default_path_from(std::env::var("COMPSYNC_CONFIG").ok())
    }

    /// Settings location for a given `$COMPSYNC_CONFIG` value.
    #[must_use]
    pub fn default_path_from(env_value: Option<String>) -> Option<PathBuf> {
        match env_value {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("compsync").join("config.toml")),
        }
    }

    /// Registry domain for a framework, without trailing slash.
    #[must_use]
    pub fn registry_domain(&self, framework: Framework) -> String {
        self.registries
            .get(framework.key())
            .map(String::as_str)
            .unwrap_or(framework.default_domain())
            .trim_end_matches('/')
            .to_string()
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
