//! Application-level configuration loading, including the leaderboard policy knobs.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "COPLAYLIST_BACK_CONFIG_PATH";
/// Environment variable that overrides the configured admin password.
const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";

/// Password accepted when neither the config file nor the environment set one.
const DEFAULT_ADMIN_PASSWORD: &str = "bread";
/// Default freshness window for the cached streaming-account token.
const DEFAULT_ADMIN_TOKEN_TTL_SECS: u64 = 30;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    admin_password: String,
    increment_on_duplicate_add: bool,
    admin_token_ttl: Duration,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let mut config = match read_config_file(&path) {
            Some(raw) => {
                info!(path = %path.display(), "loaded configuration");
                raw.into()
            }
            None => Self::default(),
        };

        if let Ok(password) = env::var(ADMIN_PASSWORD_ENV) {
            if !password.is_empty() {
                config.admin_password = password;
            }
        }

        config
    }

    /// Password checked by the admin verify endpoint.
    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    /// Whether adding a track already on the leaderboard counts as one more
    /// vote for it (the alternative treats the duplicate add as a no-op).
    pub fn increment_on_duplicate_add(&self) -> bool {
        self.increment_on_duplicate_add
    }

    /// Freshness window for the cached streaming-account token.
    pub fn admin_token_ttl(&self) -> Duration {
        self.admin_token_ttl
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            increment_on_duplicate_add: true,
            admin_token_ttl: Duration::from_secs(DEFAULT_ADMIN_TOKEN_TTL_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    admin_password: Option<String>,
    #[serde(default)]
    increment_on_duplicate_add: Option<bool>,
    #[serde(default)]
    admin_token_ttl_secs: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            admin_password: raw.admin_password.unwrap_or(defaults.admin_password),
            increment_on_duplicate_add: raw
                .increment_on_duplicate_add
                .unwrap_or(defaults.increment_on_duplicate_add),
            admin_token_ttl: raw
                .admin_token_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.admin_token_ttl),
        }
    }
}

/// Read and parse the config file, logging why the defaults apply when it
/// cannot be used.
fn read_config_file(path: &Path) -> Option<RawConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no config file; using built-in defaults");
            return None;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable config; using defaults");
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unparsable config; using defaults");
            None
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
