use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "pulse.toml";

/// What to render when live data cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Render a synthetic sample dataset instead
    Fallback,

    /// Report the failure and exit with a non-zero status
    Error,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Slug of the GitHub enterprise to summarize
    #[serde(default = "default_enterprise")]
    pub enterprise: String,

    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Value of the `X-GitHub-Api-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Maximum duration of a single API request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// What to do when live data cannot be fetched
    #[serde(default = "default_on_fetch_error")]
    pub on_fetch_error: FetchErrorPolicy,
}

fn default_enterprise() -> String {
    "octodemo".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_api_version() -> String {
    "2022-11-28".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_on_fetch_error() -> FetchErrorPolicy {
    FetchErrorPolicy::Fallback
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `pulse.toml` in `base_dir` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading copilot-pulse configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading copilot-pulse configuration file '{path}'")),
            }
        };

        log::debug!("Loading configuration from '{final_path}'");

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is empty or malformed
    pub fn validate(&self) -> Result<()> {
        if self.enterprise.is_empty() {
            return Err(app_err!("enterprise must not be empty"));
        }

        if !self.enterprise.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(app_err!(
                "enterprise must be an enterprise slug (letters, digits, '-' and '_'), got '{}'",
                self.enterprise
            ));
        }

        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(app_err!("api_base_url must be an http(s) URL, got '{}'", self.api_base_url));
        }

        if self.api_version.trim().is_empty() {
            return Err(app_err!("api_version must not be empty"));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
