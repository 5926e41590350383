//! File-based configuration.
//!
//! Configuration is loaded from TOML with the following resolution order:
//! 1. an explicit path (e.g. `--config <path>`)
//! 2. `~/.pantry/config.toml` (user)
//! 3. `/etc/pantry/config.toml` (system)
//!
//! When no file exists the built-in defaults are used. Every field is
//! optional:
//!
//! ```toml
//! [upstream]
//! base_url = "https://www.themealdb.com/api/json/v1/1"
//! max_candidates = 5
//!
//! [fetch]
//! max_attempts = 3
//! request_delay_ms = 1000
//! backoff_step_ms = 1000
//! max_concurrent = 2
//! cache_ttl_secs = 300
//! timeout_secs = 30
//!
//! [state]
//! path = "/home/me/.local/share/pantry/state.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::fetch::{FetchClient, FetchConfig};
use crate::mealdb::{DEFAULT_BASE_URL, DEFAULT_MAX_CANDIDATES, MealDbClient};
use crate::store::StateStore;
use crate::{PantryError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub fetch: FetchSection,
    #[serde(default)]
    pub state: StateConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// API base URL (default: TheMealDB free tier).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Candidates looked up in detail per ingredient (default: 5).
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

/// Pacing, retry and cache settings. Unset fields keep [`FetchConfig`]
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchSection {
    #[serde(default)]
    pub max_attempts: Option<u32>,
    #[serde(default)]
    pub request_delay_ms: Option<u64>,
    #[serde(default)]
    pub backoff_step_ms: Option<u64>,
    #[serde(default)]
    pub max_concurrent: Option<usize>,
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl FetchSection {
    /// Overlay the configured values on the defaults.
    pub fn to_fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        if let Some(n) = self.max_attempts {
            config = config.max_attempts(n);
        }
        if let Some(ms) = self.request_delay_ms {
            config = config.request_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.backoff_step_ms {
            config = config.backoff_step(Duration::from_millis(ms));
        }
        if let Some(n) = self.max_concurrent {
            config = config.max_concurrent(n);
        }
        if let Some(secs) = self.cache_ttl_secs {
            config = config.cache_ttl(Duration::from_secs(secs));
        }
        if let Some(secs) = self.timeout_secs {
            config = config.timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Local state settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateConfig {
    /// State file path (default: platform data dir).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations, falling back to
    /// defaults when no file exists.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PantryError::Configuration(format!("failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            PantryError::Configuration(format!("failed to parse config file {path:?}: {e}"))
        })
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PantryError::Configuration(e.to_string()))
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(PantryError::Configuration(format!(
                "config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".pantry").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        let system_config = PathBuf::from("/etc/pantry/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Fetch settings with defaults applied.
    pub fn fetch_config(&self) -> FetchConfig {
        self.fetch.to_fetch_config()
    }

    /// Build a MealDB client from this configuration.
    pub fn build_client(&self) -> Result<MealDbClient> {
        let fetch = FetchClient::new(self.fetch_config())?;
        Ok(MealDbClient::with_base_url(fetch, &self.upstream.base_url)
            .max_candidates(self.upstream.max_candidates))
    }

    /// The local state store at the configured or default location.
    pub fn state_store(&self) -> StateStore {
        match &self.state.path {
            Some(path) => StateStore::new(path),
            None => StateStore::default_location(),
        }
    }
}
