//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `GREENLENS_*` environment
//! variables. The reasoning-service credential (`OPENAI_API_KEY`) has no
//! default and is validated at load time.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GREENLENS_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reasoning service model name. Default: `gpt-4`.
    pub model: String,

    /// Directory of `.txt` reference reports. When unset, the built-in
    /// reference corpus is used.
    pub corpus_dir: Option<PathBuf>,

    /// Ceiling on one reasoning-service round trip, in seconds.
    /// Default: `60`.
    pub reasoning_timeout_secs: u64,
}

/// Default reasoning model, matching the service's chat completion API.
pub const DEFAULT_MODEL: &str = "gpt-4";

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            corpus_dir: None,
            reasoning_timeout_secs: 60,
        }
    }
}

impl Config {
    const ENV_MODEL: &'static str = "GREENLENS_MODEL";
    const ENV_CORPUS_DIR: &'static str = "GREENLENS_CORPUS_DIR";
    const ENV_REASONING_TIMEOUT_SECS: &'static str = "GREENLENS_REASONING_TIMEOUT_SECS";
    const ENV_API_KEY: &'static str = "OPENAI_API_KEY";

    /// Loads configuration from environment variables (falling back to
    /// defaults) and verifies the service credential is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        if !Self::api_key_present() {
            return Err(ConfigError::MissingApiKey {
                var: Self::ENV_API_KEY,
            });
        }

        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let corpus_dir = Self::parse_optional_path_from_env(Self::ENV_CORPUS_DIR);
        let reasoning_timeout_secs = Self::parse_u64_from_env(
            Self::ENV_REASONING_TIMEOUT_SECS,
            defaults.reasoning_timeout_secs,
        )?;

        Ok(Self {
            model,
            corpus_dir,
            reasoning_timeout_secs,
        })
    }

    /// Validates paths (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.corpus_dir {
            if !path.exists() {
                return Err(ConfigError::CorpusDirNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::CorpusDirNotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    pub fn reasoning_timeout(&self) -> Duration {
        Duration::from_secs(self.reasoning_timeout_secs)
    }

    fn api_key_present() -> bool {
        env::var(Self::ENV_API_KEY)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::InvalidNumber {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
